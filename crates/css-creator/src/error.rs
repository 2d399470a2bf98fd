//! Error types for stylesheet management.

/// Result type alias for stylesheet operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by a style host.
///
/// The manager itself never produces errors of its own; everything here
/// originates in a [`StyleHost`](crate::host::StyleHost) or
/// [`RuleSheet`](crate::host::RuleSheet) and is returned to the caller as is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A host API call failed.
    #[error("Host call '{operation}' failed: {message}")]
    Host {
        operation: &'static str,
        message: String,
    },

    /// No document is available in the current environment.
    #[error("No document available")]
    NoDocument,

    /// The document has no head element.
    #[error("Document has no <head> element")]
    MissingHead,

    /// The style element has no associated stylesheet (it is not attached).
    #[error("Style element has no stylesheet")]
    NoSheet,

    /// The element handle does not belong to this document.
    #[error("Unknown element: {0}")]
    UnknownElement(String),

    /// The rule text is not a single well-formed style rule.
    #[error("Invalid rule '{rule}': {message}")]
    InvalidRule { rule: String, message: String },

    /// A rule index is out of range for the sheet.
    #[error("Index {index} is out of range for a sheet of {len} rules")]
    IndexSize { index: usize, len: usize },
}

impl Error {
    /// Create a host error.
    pub fn host(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Host {
            operation,
            message: message.into(),
        }
    }

    /// Create an invalid rule error.
    pub fn invalid_rule(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRule {
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Create an index error.
    pub fn index_size(index: usize, len: usize) -> Self {
        Self::IndexSize { index, len }
    }
}
