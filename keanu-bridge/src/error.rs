//! Error types for the bridge.

use thiserror::Error;

/// A failure raised by the engine while running a forwarded call.
///
/// The bridge never inspects or translates these; they reach the caller
/// exactly as the engine reported them.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{exception}: {message}")]
pub struct RemoteError {
    /// Engine-side exception type, e.g. `java.lang.IllegalArgumentException`
    pub exception: String,
    /// Engine-side message
    pub message: String,
}

impl RemoteError {
    pub fn new(exception: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            exception: exception.into(),
            message: message.into(),
        }
    }
}

/// Main error type for bridge operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BridgeError {
    /// A collection-like argument was neither a host list nor a wrapped remote collection
    #[error("Expected {expected}. Was given {got}")]
    TypeMismatch { expected: String, got: String },

    /// Attribute is not declared locally and its spelling is not the normalised one
    #[error("{}", unknown_attribute_message(.name, .suggestion.as_deref()))]
    UnknownAttribute {
        name: String,
        suggestion: Option<String>,
    },

    /// The local surface refuses this variant of an operation
    #[error("{0}")]
    UnsupportedOperation(String),

    /// Flat data and reported shape disagree
    #[error("Shape mismatch: shape holds {expected} elements, data has {got}")]
    ShapeMismatch { expected: usize, got: usize },

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Error raised by the engine during a forwarded call
    #[error(transparent)]
    Remote(#[from] RemoteError),
}

/// Result type alias for bridge operations.
pub type Result<T> = std::result::Result<T, BridgeError>;

fn unknown_attribute_message(name: &str, suggestion: Option<&str>) -> String {
    match suggestion {
        Some(suggestion) => format!("Unknown attribute \"{}\". Did you mean \"{}\"?", name, suggestion),
        None => format!("Unknown attribute \"{}\"", name),
    }
}

impl BridgeError {
    pub(crate) fn type_mismatch(expected: impl Into<String>, got: impl Into<String>) -> Self {
        BridgeError::TypeMismatch {
            expected: expected.into(),
            got: got.into(),
        }
    }

    /// Check whether the failure came from the engine rather than the bridge
    pub fn is_remote(&self) -> bool {
        matches!(self, BridgeError::Remote(_))
    }

    /// Suggested local name carried by an [`BridgeError::UnknownAttribute`]
    pub fn suggestion(&self) -> Option<&str> {
        match self {
            BridgeError::UnknownAttribute { suggestion, .. } => suggestion.as_deref(),
            _ => None,
        }
    }
}
