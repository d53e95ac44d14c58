use chatkit_session_server::app;
use chatkit_session_server::models::{AppConfig, AppState};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    if config.api_key.is_none() || config.workflow_id.is_none() {
        warn!("OPENAI_API_KEY or WORKFLOW_ID not set; /api/chat will report a configuration error");
    }

    let app = app(AppState { config });

    info!("listening on http://{}", "0.0.0.0:10000");

    let listener = tokio::net::TcpListener::bind("0.0.0.0:10000").await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
