//! Serve command handler

use super::{open_store, runtime, CommandResult};
use course_catalog::api::{build_router, AppState, ServerSettings};
use course_catalog::config::Config;
use course_catalog::core::service::CourseService;
use course_catalog::{info, warn};

/// Run the HTTP server until Ctrl-C
pub fn run(config: &Config) -> CommandResult<()> {
    runtime()?.block_on(serve(config))
}

async fn serve(config: &Config) -> CommandResult<()> {
    let store = open_store(config).await?;
    let settings = ServerSettings::from_config(config);
    let address = settings.bind_address();
    let base_path = settings.base_path.clone();

    let app = build_router(AppState::new(CourseService::new(store), settings));
    let listener = tokio::net::TcpListener::bind(&address).await?;
    let local = listener.local_addr()?;

    println!("✓ Listening on http://{local}");
    info!("API mounted at '{base_path}', dashboard at /courses");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
}
