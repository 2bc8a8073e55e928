use std::net::SocketAddr;
use std::sync::Arc;

use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use oiltracker_api::auth::{AppState, AppStateInner};
use oiltracker_store::{DEFAULT_WINDOW_DAYS, Store};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "oiltracker=debug,oiltracker_api=debug,oiltracker_store=debug,tower_http=debug".into()
            }),
        )
        .init();

    // Config
    let host = std::env::var("OILTRACKER_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("OILTRACKER_PORT")
        .unwrap_or_else(|_| "8000".into())
        .parse()?;
    let static_dir = std::env::var("OILTRACKER_STATIC_DIR").unwrap_or_else(|_| "static".into());
    let window_days: u32 = match std::env::var("OILTRACKER_MARKET_DAYS") {
        Ok(v) => v.parse()?,
        Err(_) => DEFAULT_WINDOW_DAYS,
    };

    // Prices are generated once here and kept for the process lifetime
    let store = Store::open(window_days)?;
    let state: AppState = Arc::new(AppStateInner { store });

    let app = oiltracker_api::router(state)
        .nest_service("/static", ServeDir::new(&static_dir).append_index_html_on_directories(true))
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("OilTracker listening on {}", addr);
    info!("Serving frontend from {} under /static", static_dir);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = tokio::signal::ctrl_c();
    #[cfg(unix)]
    {
        let mut sigterm =
            match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
                Ok(s) => s,
                Err(e) => {
                    tracing::warn!("SIGTERM handler unavailable: {}", e);
                    ctrl_c.await.ok();
                    info!("Received Ctrl+C, shutting down...");
                    return;
                }
            };
        tokio::select! {
            _ = ctrl_c => info!("Received Ctrl+C, shutting down..."),
            _ = sigterm.recv() => info!("Received SIGTERM, shutting down..."),
        }
    }
    #[cfg(not(unix))]
    {
        ctrl_c.await.ok();
        info!("Received Ctrl+C, shutting down...");
    }
}
