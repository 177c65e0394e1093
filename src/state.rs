use std::sync::Arc;

use opentelemetry::{
    global,
    metrics::{Counter, Meter},
};

use crate::otel::SERVICE_NAME;
use crate::service::ProductService;

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ProductService>,
    pub products_created_counter: Counter<u64>,
}

impl AppState {
    /// Instruments are taken from the global meter provider, so install
    /// the real provider before calling this.
    pub fn new(service: ProductService) -> Self {
        Self::with_meter(service, &global::meter(SERVICE_NAME))
    }

    pub fn with_meter(service: ProductService, meter: &Meter) -> Self {
        let products_created_counter = meter
            .u64_counter("products_created")
            .with_description("Number of products created")
            .build();

        Self {
            service: Arc::new(service),
            products_created_counter,
        }
    }
}
