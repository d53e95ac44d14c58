use serde::{Deserialize, Serialize};

/// Body sent to the provider's session-creation endpoint.
#[derive(Debug, Serialize)]
pub struct SessionRequest {
    pub workflow: Workflow,
    pub user: String,
}

#[derive(Debug, Serialize)]
pub struct Workflow {
    pub id: String,
}

impl SessionRequest {
    /// The widget is anonymous; the provider requires a user field anyway.
    pub fn anonymous(workflow_id: &str) -> Self {
        Self {
            workflow: Workflow {
                id: workflow_id.to_string(),
            },
            user: "anonymous-user".to_string(),
        }
    }
}

/// Provider response and broker response share this shape; the secret is
/// opaque and relayed unmodified.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionResponse {
    pub client_secret: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
