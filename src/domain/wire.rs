//! Outbound wire formats and event construction.
//!
//! Three wire formats have existed historically and were never reconciled;
//! downstream consumers exist for each. The format is therefore an explicit
//! configuration choice rather than a hardcoded constant, with the structured
//! broadcast format as the default.

use std::fmt;
use std::str::FromStr;

use crate::domain::link_event::LinkEvent;

/// Suffix appended to the action namespace for broadcast events.
const HANDLE_LINK_ACTION: &str = "action.HANDLE_LINK";

/// The wire format used to pass the link to the sibling application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WireFormat {
    /// Rewrite into `{scheme}://{host}/{package}?url={uri}`.
    UrlQuery,
    /// Rewrite into `{scheme}://{host}/{package}?data={uri}`.
    DataQuery,
    /// Named action with the source URI as payload and the origin package as
    /// referrer metadata. The most structured of the three formats, and the
    /// default.
    #[default]
    Broadcast,
}

impl FromStr for WireFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "url-query" | "url" => Ok(Self::UrlQuery),
            "data-query" | "data" => Ok(Self::DataQuery),
            "broadcast" => Ok(Self::Broadcast),
            other => Err(format!(
                "unknown wire format '{}' (expected 'url-query', 'data-query', or 'broadcast')",
                other
            )),
        }
    }
}

impl fmt::Display for WireFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::UrlQuery => "url-query",
            Self::DataQuery => "data-query",
            Self::Broadcast => "broadcast",
        };
        f.write_str(name)
    }
}

/// An outbound event addressed to the sibling application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundEvent {
    /// A generic "view this resource" activation addressed by URI.
    View { uri: String },
    /// A custom-named event carrying the source URI verbatim plus referrer
    /// metadata identifying the forwarding application.
    Broadcast {
        action: String,
        data: String,
        referrer: String,
    },
}

impl OutboundEvent {
    /// Short description of the event for log lines.
    pub fn describe(&self) -> String {
        match self {
            Self::View { uri } => format!("view {}", uri),
            Self::Broadcast { action, .. } => format!("broadcast {}", action),
        }
    }
}

/// Addressing parameters for outbound event construction.
///
/// Pure: [`WireTarget::build_outbound`] performs no I/O and the same inputs
/// always produce the same event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireTarget {
    pub format: WireFormat,
    /// URI scheme the sibling application is registered for.
    pub scheme: String,
    /// Host segment of the rewritten URI.
    pub host: String,
    /// Namespace prefix for the broadcast action name.
    pub action_namespace: String,
    /// When true, the source URI is form-urlencoded before being embedded in
    /// a query parameter. Off by default: the historical formats interpolate
    /// the URI unescaped, and downstream consumers that split the query
    /// naively depend on receiving it byte-for-byte.
    pub encode_query: bool,
}

impl Default for WireTarget {
    fn default() -> Self {
        Self {
            format: WireFormat::default(),
            scheme: "tachiyomi".to_string(),
            host: "deeplink".to_string(),
            action_namespace: "tachiyomi".to_string(),
            encode_query: false,
        }
    }
}

impl WireTarget {
    /// Constructs the outbound event for one link activation.
    ///
    /// The source URI is never parsed. For the URI-rewrite formats it is
    /// embedded as-is (or form-urlencoded when `encode_query` is set); for
    /// the broadcast format it is carried verbatim as the payload.
    pub fn build_outbound(&self, event: &LinkEvent) -> OutboundEvent {
        match self.format {
            WireFormat::UrlQuery => OutboundEvent::View {
                uri: self.rewrite(event, "url"),
            },
            WireFormat::DataQuery => OutboundEvent::View {
                uri: self.rewrite(event, "data"),
            },
            WireFormat::Broadcast => OutboundEvent::Broadcast {
                action: format!("{}.{}", self.action_namespace, HANDLE_LINK_ACTION),
                data: event.source_uri.clone(),
                referrer: event.origin_package.clone(),
            },
        }
    }

    fn rewrite(&self, event: &LinkEvent, key: &str) -> String {
        let value: String = if self.encode_query {
            url::form_urlencoded::byte_serialize(event.source_uri.as_bytes()).collect()
        } else {
            event.source_uri.clone()
        };

        format!(
            "{}://{}/{}?{}={}",
            self.scheme, self.host, event.origin_package, key, value
        )
    }
}
