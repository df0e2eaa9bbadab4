use almanac::{
    AlmanacState, OrganizerStore, almanac_router, browser, config::Config,
    utils::logging::init_tracing,
};
use mimalloc::MiMalloc;
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tracing::{info, warn};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = Config::load()?;

    init_tracing(&cfg.basic.loglevel);

    info!(
        listen_addr = %cfg.basic.listen_addr,
        listen_port = cfg.basic.listen_port,
        loglevel = %cfg.basic.loglevel,
        open_browser = cfg.basic.open_browser,
        "Configuration loaded"
    );

    let store = Arc::new(OrganizerStore::new());
    let app = almanac_router(AlmanacState::new(store));

    let listener = TcpListener::bind(cfg.listen_socket()).await?;
    let addr = listener.local_addr()?;
    info!("HTTP server listening on {}", addr);

    if cfg.basic.open_browser {
        match browser::ui_url(addr) {
            Ok(url) => {
                if let Err(e) = browser::open_in_browser(&url) {
                    warn!(url = %url, error = %e, "Failed to open browser; open the URL manually.");
                } else {
                    info!(url = %url, "Opened UI in the default browser.");
                }
            }
            Err(e) => warn!(error = %e, "Could not build UI URL."),
        }
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server has shut down gracefully.");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
