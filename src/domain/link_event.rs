//! The inbound link activation.

/// One deep-link activation delivered by the operating system.
///
/// `source_uri` is opaque: it is carried as an unparsed string and relayed
/// byte-for-byte. This type deliberately does not use [`url::Url`], because
/// the forwarder's contract is to never parse, validate, or normalize the
/// inbound link.
///
/// A `LinkEvent` is transient. It is constructed at the runtime boundary,
/// consumed by exactly one forwarding sequence, and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkEvent {
    /// The link the operating system delivered to this handler, verbatim.
    pub source_uri: String,
    /// Stable identifier of the application instance running this handler.
    pub origin_package: String,
}

impl LinkEvent {
    /// Creates a new link event.
    pub fn new(source_uri: impl Into<String>, origin_package: impl Into<String>) -> Self {
        Self {
            source_uri: source_uri.into(),
            origin_package: origin_package.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_uri_is_kept_verbatim() {
        // Embedded query metacharacters and invalid percent escapes must
        // survive untouched.
        let raw = "https://example.com/read?id=1&chapter=2#p%ZZ";
        let event = LinkEvent::new(raw, "com.example.app");

        assert_eq!(event.source_uri, raw);
        assert_eq!(event.origin_package, "com.example.app");
    }
}
