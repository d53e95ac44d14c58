pub mod app_config;
pub mod session;

pub use app_config::{AppConfig, AppState};
