use std::{env, net::SocketAddr};

use anyhow::{Context, ensure};
use axum::http::HeaderValue;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_ENVIRONMENT: &str = "development";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Postgres URL. `None` runs the service on the in-memory repository.
    pub database_url: Option<String>,
    pub bind_addr: SocketAddr,
    /// Origin allowed to call the API from a browser. `None` allows any origin.
    pub cors_allowed_origin: Option<HeaderValue>,
    /// Reported as the `deployment.environment` resource attribute.
    pub environment: String,
    /// Fraction of root traces sampled, in `0.0..=1.0`.
    pub trace_sample_ratio: f64,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").filter(|url| !url.is_empty());

        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_addr
            .parse()
            .with_context(|| format!("BIND_ADDR '{bind_addr}' is not a socket address"))?;

        let cors_allowed_origin = lookup("CORS_ALLOWED_ORIGIN")
            .filter(|origin| !origin.is_empty())
            .map(|origin| {
                HeaderValue::from_str(&origin)
                    .with_context(|| format!("CORS_ALLOWED_ORIGIN '{origin}' is not a valid header value"))
            })
            .transpose()?;

        let environment = lookup("APP_ENV").unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        let trace_sample_ratio = match lookup("TRACE_SAMPLE_RATIO") {
            Some(ratio) => ratio
                .parse::<f64>()
                .with_context(|| format!("TRACE_SAMPLE_RATIO '{ratio}' is not a number"))?,
            None => 1.0,
        };
        ensure!(
            (0.0..=1.0).contains(&trace_sample_ratio),
            "TRACE_SAMPLE_RATIO must be between 0.0 and 1.0, got {trace_sample_ratio}"
        );

        Ok(Self {
            database_url,
            bind_addr,
            cors_allowed_origin,
            environment,
            trace_sample_ratio,
        })
    }
}
