use async_trait::async_trait;
use mockall::automock;
use thiserror::Error;
use tracing::error;

use crate::models::session::SessionResponse;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to get session: {status} {body}")]
    Endpoint { status: u16, body: String },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
}

/// Where the credential-fetch callback gets its secrets from. Production uses
/// [`SessionEndpoint`]; tests substitute a mock.
#[automock]
#[async_trait]
pub trait ClientSecretSource: Send + Sync {
    async fn client_secret(&self) -> Result<String, FetchError>;
}

/// HTTP client for the backend session endpoint.
pub struct SessionEndpoint {
    client: reqwest::Client,
    url: String,
}

impl SessionEndpoint {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl ClientSecretSource for SessionEndpoint {
    async fn client_secret(&self) -> Result<String, FetchError> {
        let response = self.client.post(&self.url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            error!("Backend error ({}): {}", status, body);
            return Err(FetchError::Endpoint { status, body });
        }

        let session = response.json::<SessionResponse>().await?;
        Ok(session.client_secret)
    }
}
