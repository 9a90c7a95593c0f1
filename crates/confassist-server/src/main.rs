use std::path::PathBuf;

use confassist_core::tracing::init_tracing;
use confassist_core::AssistConfig;
use confassist_server::{router, AppState};
use confassist_service::AssistRuntime;

/// Usage: `confassist-server [ROOT]`. `ROOT` holds `confassist.toml` and
/// defaults to the working directory.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let root = match std::env::args_os().nth(1) {
        Some(arg) => PathBuf::from(arg),
        None => std::env::current_dir()?,
    };
    let config = AssistConfig::load(&root)?;
    init_tracing(config.service.effective_json_logs());

    let addr = config.service.effective_bind_addr().to_string();
    let runtime = AssistRuntime::open(config, &root)?;
    let app = router(AppState::new(runtime));

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "confassist server listening");
    axum::serve(listener, app).await?;

    Ok(())
}
