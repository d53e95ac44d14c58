use crate::models::AppState;
use crate::models::app_config::AppConfig;
use crate::models::session::{ErrorResponse, SessionRequest, SessionResponse};
use axum::{
    extract::State,
    http::{Method, StatusCode},
    response::{IntoResponse, Json},
};
use thiserror::Error;
use tracing::{error, info, warn};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Server configuration error: Missing Environment Variables")]
    MissingConfig,
    #[error("ChatKit API failed with status {status}: {body}")]
    Upstream { status: StatusCode, body: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

impl IntoResponse for SessionError {
    fn into_response(self) -> axum::response::Response {
        let status = match self {
            SessionError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            SessionError::MissingConfig
            | SessionError::Upstream { .. }
            | SessionError::Transport(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse {
            error: self.to_string(),
        });

        (status, body).into_response()
    }
}

/// Creates a ChatKit session on behalf of the anonymous widget and relays the
/// short-lived client secret. Only the method is inspected; the request body
/// is ignored.
pub async fn session_handler(
    method: Method,
    State(app_state): State<AppState>,
) -> Result<Json<SessionResponse>, SessionError> {
    if method != Method::POST {
        warn!("Rejected {} request to the session endpoint", method);
        return Err(SessionError::MethodNotAllowed);
    }

    create_session(&app_state.config).await.map(Json)
}

async fn create_session(config: &AppConfig) -> Result<SessionResponse, SessionError> {
    let (api_key, workflow_id) = match (&config.api_key, &config.workflow_id) {
        (Some(api_key), Some(workflow_id)) => (api_key, workflow_id),
        _ => {
            error!("Missing OPENAI_API_KEY or WORKFLOW_ID environment variable");
            return Err(SessionError::MissingConfig);
        }
    };

    info!("Creating ChatKit session via OpenAI API...");

    let client = reqwest::Client::new();

    let response = client
        .post(&config.sessions_url)
        .bearer_auth(api_key)
        .header("OpenAI-Beta", "chatkit_beta=v1")
        .json(&SessionRequest::anonymous(workflow_id))
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error body".to_string());
        error!("ChatKit API error (HTTP {}): {}", status, body);
        return Err(SessionError::Upstream { status, body });
    }

    let session = response.json::<SessionResponse>().await?;

    info!("Session created successfully");
    Ok(session)
}
