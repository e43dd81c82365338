use std::process::ExitCode;
use std::sync::Arc;

use tokio::net::TcpListener;
use tokio::sync::watch;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use todo_lists::adapters::{
    app_router, HtmlRenderer, InMemorySessionStore, SessionCookie, SessionSweeper, TodoAppState,
};
use todo_lists::config::AppConfig;
use todo_lists::ports::SessionStore;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    init_tracing(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server exited with error");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if config.is_production() {
        registry.with(fmt::layer().json()).init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

async fn run(config: AppConfig) -> std::io::Result<()> {
    let addr = config
        .server
        .socket_addr()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()))?;

    let store: Arc<dyn SessionStore> =
        Arc::new(InMemorySessionStore::new(config.session.idle_timeout_secs));
    let state = TodoAppState::new(store.clone(), Arc::new(HtmlRenderer::new()));
    let cookie = SessionCookie::new(config.session.cookie_name.clone(), config.is_production());
    let app = app_router(state, cookie, config.server.request_timeout());

    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper = SessionSweeper::new(store, config.session.sweep_interval());
    let sweeper_task = tokio::spawn(async move { sweeper.run(shutdown_rx).await });

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(
        %addr,
        environment = ?config.server.environment,
        "Todo Lists listening"
    );

    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    // The receiver may already be gone if the sweeper task panicked.
    let _ = shutdown_tx.send(true);
    if let Err(e) = sweeper_task.await {
        tracing::error!(error = %e, "Session sweeper task failed");
    }

    tracing::info!("Server stopped");
    served
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
