//! Runtime boundary adapter for the link forwarder.
//!
//! The operating system invokes this binary with the activated link as its
//! argument (the `Exec=link-forwarder %u` pattern of URL-scheme handler
//! registrations). Everything ambient, the origin package identifier and the
//! addressing configuration, is resolved here and passed to the core
//! explicitly, keeping the forwarding sequence pure and testable.
//!
//! # Usage
//!
//! ```bash
//! # Forward a link with the configured wire format
//! link-forwarder "https://example.com/manga/42" --package com.example.app
//!
//! # Override the wire format for one invocation
//! link-forwarder "https://example.com/manga/42" --format url-query
//!
//! # Show what would be dispatched without dispatching it
//! link-forwarder "https://example.com/manga/42" --dry-run
//! ```
//!
//! # Exit Behavior
//!
//! The process always exits immediately after one dispatch attempt, with
//! status 0, whether or not a handler received the event. Only precondition
//! failures before dispatch (invalid configuration, bad arguments) exit
//! non-zero.

use link_forwarder::application::services::ForwardService;
use link_forwarder::config::{self, Config};
use link_forwarder::domain::link_event::LinkEvent;
use link_forwarder::domain::wire::WireFormat;
use link_forwarder::infrastructure::dispatch::{NullDispatcher, SystemDispatcher};

use clap::Parser;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

/// Deep-link forwarding shim.
#[derive(Parser)]
#[command(name = "link-forwarder")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// The link to forward, passed through verbatim
    uri: String,

    /// Identifier of the application instance forwarding the link
    /// (falls back to ORIGIN_PACKAGE, then to the crate name)
    #[arg(short, long)]
    package: Option<String>,

    /// Wire format override: url-query, data-query, or broadcast
    #[arg(short, long)]
    format: Option<WireFormat>,

    /// Log the outbound event instead of dispatching it
    #[arg(long)]
    dry_run: bool,
}

fn init_tracing(config: &Config) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env()?;
    if let Some(format) = cli.format {
        config.wire_format = format;
    }

    init_tracing(&config);
    config.print_summary();

    let origin_package = cli
        .package
        .or_else(|| config.origin_package.clone())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());

    // The URI is opaque: relayed as received, never parsed or validated.
    let event = LinkEvent::new(cli.uri, origin_package);

    let outcome = if cli.dry_run {
        ForwardService::new(Arc::new(NullDispatcher::new()), config.wire_target())
            .forward(&event)
            .await
    } else {
        let dispatcher =
            SystemDispatcher::new(config.opener.clone(), config.broadcast_handler.clone());
        ForwardService::new(Arc::new(dispatcher), config.wire_target())
            .forward(&event)
            .await
    };

    tracing::debug!(?outcome, "forwarding finished");

    // One activation, one dispatch attempt. The process never stays resident
    // and exits 0 whether or not the event found a handler.
    std::process::exit(0);
}
