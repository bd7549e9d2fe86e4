use std::sync::Arc;

use clap::Parser;
use tokio::net::TcpListener;

use folio::cli::Cli;
use folio::logger::Logger;
use folio::{router, AppState, BlogStore, Config, FolioError, TemplateComponent};

#[tokio::main]
async fn main() -> Result<(), FolioError> {
    let cli = Cli::parse();
    if let Err(e) = Logger::init() {
        eprintln!("Logger already initialized: {}", e);
    }

    let config = Config::from_cli(&cli);
    let store = match &config.data_path {
        Some(path) => BlogStore::load(path)?,
        None => BlogStore::bundled()?,
    };

    let templates = TemplateComponent::load(&config.static_dir)?;

    if cli.check {
        log::info!("Dataset OK: {} posts", store.len());
        return Ok(());
    }

    if !config.static_dir.is_dir() {
        log::warn!("Static directory {:?} not found; assets and the shell template will be missing", config.static_dir);
    }

    let addr = config.bind_addr();
    let state = AppState { store: Arc::new(store), config: Arc::new(config), templates: Arc::new(templates) };
    let app = router(state);

    let listener = TcpListener::bind(&addr).await?;
    log::info!("Blog listening on http://{}", addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        log::info!("Shutting down");
    }
}
