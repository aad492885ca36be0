//! Dispatcher trait for handing outbound events to the operating system.

use crate::domain::wire::OutboundEvent;
use crate::error::DispatchError;
use async_trait::async_trait;

/// Interface to the OS-level event dispatch mechanism.
///
/// A dispatcher makes exactly one delivery attempt per call. There is no
/// retry, no queueing, and no delivery confirmation beyond the result:
/// dispatch either hands the event to a registered handler or fails with
/// [`DispatchError::NoHandlerAvailable`].
///
/// # Implementations
///
/// - [`crate::infrastructure::dispatch::SystemDispatcher`] - real OS dispatch
/// - [`crate::infrastructure::dispatch::NullDispatcher`] - drops every event
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait EventDispatcher: Send + Sync {
    /// Attempts to deliver one outbound event.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::NoHandlerAvailable`] if nothing on the system
    /// is registered to receive the event.
    async fn dispatch(&self, event: &OutboundEvent) -> Result<(), DispatchError>;
}
