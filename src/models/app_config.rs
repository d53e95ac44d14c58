pub const DEFAULT_SESSIONS_URL: &str = "https://api.openai.com/v1/chatkit/sessions";

#[derive(Clone)]
pub struct AppConfig {
    pub api_key: Option<String>,
    pub workflow_id: Option<String>,
    pub sessions_url: String,
}

impl AppConfig {
    /// Reads the provider credentials from the environment. A missing value is
    /// not a startup failure; the session handler rejects that invocation
    /// instead, so the server still comes up and reports the problem per
    /// request.
    pub fn from_env() -> Self {
        use dotenvy::dotenv;
        use std::env;

        dotenv().ok();

        Self {
            api_key: env::var("OPENAI_API_KEY").ok(),
            workflow_id: env::var("WORKFLOW_ID").ok(),
            sessions_url: DEFAULT_SESSIONS_URL.to_string(),
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
}
