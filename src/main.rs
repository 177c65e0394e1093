use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use product_service::{
    config::Config,
    db, otel,
    repository::{InMemoryProductRepository, PgProductRepository, ProductRepository},
    routes,
    service::ProductService,
    shutdown::shutdown_signal,
    state::AppState,
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env()?;

    let providers = otel::init_providers(&config)?;
    telemetry::init_subscriber(&providers.tracer);

    let repository: Arc<dyn ProductRepository> = match &config.database_url {
        Some(url) => {
            let pool = db::create_pool(url).await?;
            tracing::info!("Connected to database and migrations applied");
            Arc::new(PgProductRepository::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set, products are kept in memory");
            Arc::new(InMemoryProductRepository::new())
        }
    };

    if config.cors_allowed_origin.is_none() {
        tracing::warn!("CORS_ALLOWED_ORIGIN not set, accepting requests from any origin");
    }

    let service = ProductService::new(repository);
    let app = routes::create_router(
        AppState::new(service),
        routes::cors_layer(config.cors_allowed_origin.clone()),
    );

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    tracing::info!("Listening on {}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    providers.shutdown();
    Ok(())
}
