use anyhow::Result;
use pesa_relay::{
    config::Config,
    handlers::{router, AppState},
    services::{InMemoryStore, PaystackClient},
};
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    tracing::info!("Starting pesa-relay v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Environment: {:?}", config.environment);
    tracing::info!("Public base URL: {}", config.base_url);

    // Initialize services
    let store = Arc::new(InMemoryStore::new());
    let paystack = Arc::new(PaystackClient::new(
        &config.paystack_base_url,
        &config.paystack_secret_key,
    )?);

    let state = AppState {
        store,
        paystack,
        webhook_secret: config.paystack_secret_key.clone(),
    };

    // Build router; permissive CORS so browser clients can call the relay
    // directly.
    let app = router(state)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::default().include_headers(true)),
        )
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Relay listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to listen for ctrl+c");
    tracing::info!("Shutting down gracefully...");
}
