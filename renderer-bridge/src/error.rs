//! Error types for renderer-bridge

use renderer_api::ApiError;
use thiserror::Error;

/// Result type for renderer-bridge operations
pub type Result<T> = std::result::Result<T, BindingError>;

/// Errors that can occur while driving a bound renderer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingError {
    /// No transport session has been attached to the binding
    #[error("Client not initialized")]
    ClientNotInitialized,

    /// The binding has not received a device description yet
    #[error("Device {0} is not bound to an accessory")]
    NotBound(String),

    /// Error reported by the action client, passed through unchanged
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A response or event field held a value that could not be interpreted
    #[error("Invalid value '{value}' for {field}")]
    Parse { field: &'static str, value: String },

    /// An action response lacked an expected output argument
    #[error("Response is missing {0}")]
    MissingField(&'static str),

    /// Subscribing to the event channel failed
    #[error("Subscription to {service} failed: {source}")]
    Subscription {
        service: renderer_api::Service,
        #[source]
        source: ApiError,
    },
}

impl BindingError {
    pub(crate) fn parse(field: &'static str, value: impl Into<String>) -> Self {
        Self::Parse {
            field,
            value: value.into(),
        }
    }
}
