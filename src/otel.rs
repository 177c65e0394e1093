use anyhow::Context;
use opentelemetry::{KeyValue, global};
use opentelemetry_otlp::{MetricExporter, SpanExporter};
use opentelemetry_sdk::{
    Resource,
    metrics::SdkMeterProvider,
    trace::{Sampler, SdkTracerProvider},
};

use crate::config::Config;

pub const SERVICE_NAME: &str = "product-service";

pub struct Providers {
    pub tracer: SdkTracerProvider,
    pub meter: SdkMeterProvider,
}

fn resource(config: &Config) -> Resource {
    Resource::builder()
        .with_service_name(SERVICE_NAME)
        .with_attributes([
            KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
            KeyValue::new("deployment.environment", config.environment.clone()),
        ])
        .build()
}

/// Root spans are sampled at `ratio`; child spans follow their parent.
fn sampler(ratio: f64) -> Sampler {
    if ratio >= 1.0 {
        Sampler::ParentBased(Box::new(Sampler::AlwaysOn))
    } else {
        Sampler::ParentBased(Box::new(Sampler::TraceIdRatioBased(ratio)))
    }
}

/// Builds OTLP/gRPC exporters for spans and metrics and installs both
/// providers globally. The collector endpoint comes from the standard
/// `OTEL_EXPORTER_OTLP_*` variables.
pub fn init_providers(config: &Config) -> anyhow::Result<Providers> {
    let resource = resource(config);

    let span_exporter = SpanExporter::builder()
        .with_tonic()
        .build()
        .context("Failed to create OTLP span exporter")?;

    let tracer = SdkTracerProvider::builder()
        .with_batch_exporter(span_exporter)
        .with_sampler(sampler(config.trace_sample_ratio))
        .with_resource(resource.clone())
        .build();

    let metric_exporter = MetricExporter::builder()
        .with_tonic()
        .build()
        .context("Failed to create OTLP metric exporter")?;

    let meter = SdkMeterProvider::builder()
        .with_periodic_exporter(metric_exporter)
        .with_resource(resource)
        .build();

    global::set_tracer_provider(tracer.clone());
    global::set_meter_provider(meter.clone());

    Ok(Providers { tracer, meter })
}

impl Providers {
    /// Flushes pending spans and metrics.
    pub fn shutdown(self) {
        if let Err(e) = self.tracer.shutdown() {
            tracing::warn!(error = %e, "Failed to shut down tracer provider");
        }
        if let Err(e) = self.meter.shutdown() {
            tracing::warn!(error = %e, "Failed to shut down meter provider");
        }
    }
}
