//! Error types for outbound event dispatch.

/// Errors that can occur when dispatching an outbound event.
///
/// Exactly one failure is anticipated: nothing on the system is registered
/// to receive the constructed event. All dispatch-time failures (handler
/// binary missing, opener exiting non-zero, no broadcast handler configured)
/// collapse into this variant, carrying the textual description that ends up
/// in the log. The failure is recovered locally by the caller and never
/// propagates past the forwarding sequence.
#[derive(Debug, thiserror::Error)]
pub enum DispatchError {
    #[error("no handler available for outbound event: {0}")]
    NoHandlerAvailable(String),
}
