//! HMS Web
//!
//! Server build: renders the app and serves the client bundle.
//! Web build: hydrates the app in the browser.

#[cfg(feature = "server")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::{routing::get, Router};
    use hms_web::{api, app::App, config};
    use std::net::SocketAddr;
    use tower_http::{compression::CompressionLayer, trace::TraceLayer};
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    // Initialize logging
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hms_web=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    tracing::info!("Starting HMS Web");

    // Load configuration
    let config = config::load_config()?;
    tracing::info!(?config, "Configuration loaded");
    api::configure_api_url(&config.api_url);

    let app = Router::new()
        .route("/healthz", get(|| async { "ok" }))
        .merge(dioxus::server::router(App))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(not(feature = "server"))]
fn main() {
    dioxus::launch(hms_web::app::App);
}
