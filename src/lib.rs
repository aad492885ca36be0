//! # Link Forwarder
//!
//! A short-lived deep-link forwarding shim. The binary is registered with the
//! operating system as the handler for a URI scheme; when a link is activated
//! it re-emits the link as an outbound event addressed to a sibling
//! application and then exits.
//!
//! ## Architecture
//!
//! The crate keeps the runtime boundary thin and the core pure:
//!
//! - **Domain Layer** ([`domain`]) - The link event, the outbound wire
//!   formats, and the dispatcher trait
//! - **Application Layer** ([`application`]) - The forwarding sequence:
//!   construct, dispatch, log on failure
//! - **Infrastructure Layer** ([`infrastructure`]) - Dispatchers backed by
//!   the OS opener and the registered broadcast handler
//!
//! ## Contract
//!
//! One invocation handles exactly one link event. The process always
//! terminates after a single dispatch attempt, whether or not a handler for
//! the outbound event exists. The only anticipated failure, no registered
//! handler, is logged and otherwise ignored.
//!
//! ## Quick Start
//!
//! ```bash
//! # Forward a link using the structured broadcast format (default)
//! link-forwarder "https://example.com/manga/42" --package com.example.app
//!
//! # Use the legacy URI-rewrite format instead
//! WIRE_FORMAT=url-query link-forwarder "https://example.com/manga/42"
//! ```
//!
//! ## Configuration
//!
//! Configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::DispatchError;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{DispatchOutcome, ForwardService};
    pub use crate::domain::dispatch::EventDispatcher;
    pub use crate::domain::link_event::LinkEvent;
    pub use crate::domain::wire::{OutboundEvent, WireFormat, WireTarget};
    pub use crate::error::DispatchError;
}
