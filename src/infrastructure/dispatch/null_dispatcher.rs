//! Dispatcher that accepts and drops every event.

use async_trait::async_trait;
use tracing::info;

use crate::domain::dispatch::EventDispatcher;
use crate::domain::wire::OutboundEvent;
use crate::error::DispatchError;

/// No-op dispatcher backing dry-run mode.
///
/// Logs the event that would have been dispatched and reports success.
#[derive(Debug, Default)]
pub struct NullDispatcher;

impl NullDispatcher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EventDispatcher for NullDispatcher {
    async fn dispatch(&self, event: &OutboundEvent) -> Result<(), DispatchError> {
        info!(outbound = %event.describe(), "dry run, event not dispatched");
        Ok(())
    }
}
