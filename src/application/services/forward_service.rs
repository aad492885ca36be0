//! Link forwarding service.

use std::sync::Arc;

use tracing::{debug, error};

use crate::domain::dispatch::EventDispatcher;
use crate::domain::link_event::LinkEvent;
use crate::domain::wire::WireTarget;

/// Result of one forwarding sequence.
///
/// Informational only. Both outcomes are terminal: the caller is expected to
/// exit the process after `forward` returns, whichever variant it gets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The outbound event was handed to a registered handler.
    Delivered,
    /// No handler was registered for the outbound event. Already logged.
    Undeliverable,
}

/// Service that translates one inbound link event into one outbound event
/// and dispatches it.
///
/// The sequence is strictly linear: construct, dispatch, log on failure.
/// There is no retry state and no queueing; each invocation is independent.
pub struct ForwardService<D: EventDispatcher> {
    dispatcher: Arc<D>,
    target: WireTarget,
}

impl<D: EventDispatcher> ForwardService<D> {
    /// Creates a new forwarding service.
    pub fn new(dispatcher: Arc<D>, target: WireTarget) -> Self {
        Self { dispatcher, target }
    }

    /// Forwards one link event to the sibling application.
    ///
    /// This never fails: the single anticipated dispatch failure, no
    /// registered handler, is logged at error level with its description and
    /// swallowed. No value beyond the informational outcome reaches the
    /// caller, and nothing is retried.
    ///
    /// # Post-condition
    ///
    /// The caller must terminate its execution context after this returns,
    /// regardless of the outcome. The forwarder is not resident and not
    /// reusable.
    pub async fn forward(&self, event: &LinkEvent) -> DispatchOutcome {
        let outbound = self.target.build_outbound(event);
        debug!(
            source_uri = %event.source_uri,
            origin_package = %event.origin_package,
            outbound = %outbound.describe(),
            "forwarding link event"
        );

        match self.dispatcher.dispatch(&outbound).await {
            Ok(()) => DispatchOutcome::Delivered,
            Err(e) => {
                error!("{}", e);
                DispatchOutcome::Undeliverable
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dispatch::MockEventDispatcher;
    use crate::domain::wire::{OutboundEvent, WireFormat, WireTarget};
    use crate::error::DispatchError;

    fn test_target(format: WireFormat) -> WireTarget {
        WireTarget {
            format,
            ..WireTarget::default()
        }
    }

    #[tokio::test]
    async fn test_forward_dispatches_rewritten_uri() {
        let mut mock_dispatcher = MockEventDispatcher::new();

        mock_dispatcher
            .expect_dispatch()
            .withf(|event| {
                *event
                    == OutboundEvent::View {
                        uri: "tachiyomi://deeplink/com.example.app?url=https://example.com/manga/42"
                            .to_string(),
                    }
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = ForwardService::new(
            Arc::new(mock_dispatcher),
            test_target(WireFormat::UrlQuery),
        );

        let event = LinkEvent::new("https://example.com/manga/42", "com.example.app");
        let outcome = service.forward(&event).await;

        assert_eq!(outcome, DispatchOutcome::Delivered);
    }

    #[tokio::test]
    async fn test_forward_dispatches_broadcast() {
        let mut mock_dispatcher = MockEventDispatcher::new();

        mock_dispatcher
            .expect_dispatch()
            .withf(|event| {
                matches!(
                    event,
                    OutboundEvent::Broadcast { action, data, referrer }
                        if action == "tachiyomi.action.HANDLE_LINK"
                            && data == "https://example.com/manga/42"
                            && referrer == "com.example.app"
                )
            })
            .times(1)
            .returning(|_| Ok(()));

        let service = ForwardService::new(
            Arc::new(mock_dispatcher),
            test_target(WireFormat::Broadcast),
        );

        let event = LinkEvent::new("https://example.com/manga/42", "com.example.app");
        let outcome = service.forward(&event).await;

        assert_eq!(outcome, DispatchOutcome::Delivered);
    }

    #[tokio::test]
    async fn test_forward_swallows_missing_handler() {
        let mut mock_dispatcher = MockEventDispatcher::new();

        mock_dispatcher.expect_dispatch().times(1).returning(|_| {
            Err(DispatchError::NoHandlerAvailable(
                "no application registered for scheme 'tachiyomi'".to_string(),
            ))
        });

        let service = ForwardService::new(
            Arc::new(mock_dispatcher),
            test_target(WireFormat::Broadcast),
        );

        // Must complete normally so the caller still reaches its exit.
        let event = LinkEvent::new("https://example.com/manga/42", "com.example.app");
        let outcome = service.forward(&event).await;

        assert_eq!(outcome, DispatchOutcome::Undeliverable);
    }

    #[tokio::test]
    async fn test_forward_makes_exactly_one_attempt() {
        let mut mock_dispatcher = MockEventDispatcher::new();

        // No retry on failure.
        mock_dispatcher
            .expect_dispatch()
            .times(1)
            .returning(|_| Err(DispatchError::NoHandlerAvailable("gone".to_string())));

        let service = ForwardService::new(
            Arc::new(mock_dispatcher),
            test_target(WireFormat::DataQuery),
        );

        let event = LinkEvent::new("https://example.com/manga/42", "com.example.app");
        service.forward(&event).await;
    }
}
