//! Dispatcher backed by the operating system's handler registry.

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::dispatch::EventDispatcher;
use crate::domain::wire::OutboundEvent;
use crate::error::DispatchError;

/// Environment variable carrying the referrer metadata to broadcast handlers.
const REFERRER_ENV: &str = "LINK_REFERRER";

/// Dispatches outbound events through the platform's handler mechanism.
///
/// - [`OutboundEvent::View`] runs the system opener with the constructed URI,
///   so the OS routes it to whatever application is registered for the
///   target scheme.
/// - [`OutboundEvent::Broadcast`] runs the configured broadcast handler
///   command with the action name and payload URI as arguments and the
///   referrer in the `LINK_REFERRER` environment variable. With no handler
///   configured the event has no possible recipient.
///
/// Every failure mode here means the same thing to the caller: the event
/// could not be handed to a registered handler.
pub struct SystemDispatcher {
    opener: String,
    broadcast_handler: Option<String>,
}

impl SystemDispatcher {
    /// Creates a dispatcher with the given opener and broadcast handler.
    ///
    /// `opener` falls back to the platform default (`xdg-open` on Linux,
    /// `open` on macOS, `explorer` on Windows) when `None`.
    pub fn new(opener: Option<String>, broadcast_handler: Option<String>) -> Self {
        Self {
            opener: opener.unwrap_or_else(|| Self::default_opener().to_string()),
            broadcast_handler,
        }
    }

    fn default_opener() -> &'static str {
        if cfg!(target_os = "macos") {
            "open"
        } else if cfg!(target_os = "windows") {
            "explorer"
        } else {
            "xdg-open"
        }
    }

    async fn run_handler(&self, command: &mut Command) -> Result<(), DispatchError> {
        let status = command
            .status()
            .await
            .map_err(|e| DispatchError::NoHandlerAvailable(e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            // xdg-open and friends exit non-zero when no application is
            // registered for the scheme.
            Err(DispatchError::NoHandlerAvailable(format!(
                "handler exited with {}",
                status
            )))
        }
    }
}

#[async_trait]
impl EventDispatcher for SystemDispatcher {
    async fn dispatch(&self, event: &OutboundEvent) -> Result<(), DispatchError> {
        match event {
            OutboundEvent::View { uri } => {
                debug!(opener = %self.opener, uri = %uri, "dispatching view event");
                self.run_handler(Command::new(&self.opener).arg(uri)).await
            }
            OutboundEvent::Broadcast {
                action,
                data,
                referrer,
            } => {
                let handler = self.broadcast_handler.as_deref().ok_or_else(|| {
                    DispatchError::NoHandlerAvailable(format!(
                        "no handler registered for action '{}'",
                        action
                    ))
                })?;

                debug!(handler = %handler, action = %action, "dispatching broadcast event");
                self.run_handler(
                    Command::new(handler)
                        .arg(action)
                        .arg(data)
                        .env(REFERRER_ENV, referrer),
                )
                .await
            }
        }
    }
}
