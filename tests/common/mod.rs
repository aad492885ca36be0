#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use link_forwarder::domain::dispatch::EventDispatcher;
use link_forwarder::domain::wire::OutboundEvent;
use link_forwarder::error::DispatchError;

/// Dispatcher that records every event it receives and reports success.
#[derive(Default)]
pub struct RecordingDispatcher {
    events: Mutex<Vec<OutboundEvent>>,
}

impl RecordingDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<OutboundEvent> {
        self.events.lock().unwrap().clone()
    }
}

#[async_trait]
impl EventDispatcher for RecordingDispatcher {
    async fn dispatch(&self, event: &OutboundEvent) -> Result<(), DispatchError> {
        self.events.lock().unwrap().push(event.clone());
        Ok(())
    }
}

/// Dispatcher with no registered recipient: every dispatch fails.
pub struct NoHandlerDispatcher;

#[async_trait]
impl EventDispatcher for NoHandlerDispatcher {
    async fn dispatch(&self, event: &OutboundEvent) -> Result<(), DispatchError> {
        Err(DispatchError::NoHandlerAvailable(format!(
            "nothing registered to receive: {}",
            event.describe()
        )))
    }
}
