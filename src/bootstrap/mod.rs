//! Widget-side bootstrap.
//!
//! The ChatKit script is loaded externally and upgrades the container element
//! on its own schedule. This module polls for that upgrade with a bounded
//! retry loop, then installs a credential-fetch callback that asks the
//! session endpoint for a fresh client secret each time the widget needs one.

mod secret_source;
#[cfg(test)]
mod tests;

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use mockall::automock;
use tracing::{error, info};

pub use secret_source::{ClientSecretSource, FetchError, SessionEndpoint};

pub const POLL_INTERVAL: Duration = Duration::from_millis(100);
pub const MAX_ATTEMPTS: u32 = 50;

pub type SecretFuture = Pin<Box<dyn Future<Output = Result<String, FetchError>> + Send>>;

/// Credential-fetch callback handed to the widget. The widget invokes it at
/// times and frequencies outside this system's control; each invocation makes
/// exactly one request to the session endpoint and carries no other state.
pub type GetClientSecret = Arc<dyn Fn() -> SecretFuture + Send + Sync>;

pub struct WidgetOptions {
    pub get_client_secret: GetClientSecret,
}

impl WidgetOptions {
    fn from_source(source: Arc<dyn ClientSecretSource>) -> Self {
        Self {
            get_client_secret: Arc::new(move || {
                let source = Arc::clone(&source);
                Box::pin(async move { source.client_secret().await })
            }),
        }
    }
}

/// The container element as the bootstrap sees it. The external script owns
/// the upgrade; this side only observes it and installs options afterwards.
#[automock]
pub trait WidgetContainer: Send + Sync {
    /// Whether the external script has replaced the placeholder with the
    /// interactive widget exposing its configuration hook.
    fn is_upgraded(&self) -> bool;

    /// Installs the widget options. Called at most once, only after
    /// `is_upgraded` first returns true.
    fn set_options(&self, options: WidgetOptions);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootstrapState {
    WaitingForContainer,
    PollingForUpgrade,
    Configured,
    TimedOut,
}

/// Polls the container until the external script upgrades it, then wires the
/// credential-fetch callback. Returns the state in which the machine halted:
/// [`BootstrapState::WaitingForContainer`] when the element was never found,
/// [`BootstrapState::Configured`] on success, [`BootstrapState::TimedOut`]
/// once the attempt ceiling is reached. There is no retry past the ceiling
/// and no cancellation once polling starts.
pub async fn run<C: WidgetContainer>(
    container: Option<&C>,
    source: Arc<dyn ClientSecretSource>,
) -> BootstrapState {
    let Some(container) = container else {
        error!("ChatKit container not found");
        return BootstrapState::WaitingForContainer;
    };

    let mut state = BootstrapState::PollingForUpgrade;
    let mut attempts = 0u32;

    while state == BootstrapState::PollingForUpgrade {
        attempts += 1;
        info!("Checking for ChatKit widget (attempt {attempts})");

        if container.is_upgraded() {
            container.set_options(WidgetOptions::from_source(Arc::clone(&source)));
            info!("ChatKit widget configured");
            state = BootstrapState::Configured;
        } else if attempts >= MAX_ATTEMPTS {
            error!("ChatKit initialization timed out");
            state = BootstrapState::TimedOut;
        } else {
            tokio::time::sleep(POLL_INTERVAL).await;
        }
    }

    state
}
