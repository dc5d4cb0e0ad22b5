//! order-intake: customer order intake service
//!
//! Long-running HTTP service that:
//! - Accepts order submissions and numbers them per business day
//! - Lets staff list orders and update their status
//! - Serves the shared-secret guarded store open/closed toggle

use std::time::Duration;

use http::{HeaderValue, Method, header::CONTENT_TYPE};
use order_intake::{AppState, Config, auth::API_KEY_HEADER, create_router, error::BoxError};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{AllowOrigin, CorsLayer};

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    // Load .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "order_intake=info,tower_http=info".into()),
        )
        .init();

    let config = Config::from_env()?;

    tracing::info!(
        "Starting order-intake (env: {}, order timezone: {})",
        config.environment,
        config.order_timezone
    );

    let state = AppState::new(&config).await?;
    tracing::info!(datastore = state.store_kind, "Datastore ready");

    let app = create_router(state).layer(cors_layer(&config)?);

    let http_addr = format!("0.0.0.0:{}", config.http_port);
    let listener = TcpListener::bind(&http_addr).await?;
    tracing::info!("order-intake HTTP listening on {http_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("order-intake stopped");
    Ok(())
}

fn cors_layer(config: &Config) -> Result<CorsLayer, BoxError> {
    let origin = match &config.cors_allow_origin {
        Some(origin) => AllowOrigin::exact(HeaderValue::from_str(origin)?),
        None => AllowOrigin::any(),
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE, http::HeaderName::from_static(API_KEY_HEADER)])
        .max_age(Duration::from_secs(60 * 60)))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
