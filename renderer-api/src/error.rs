use thiserror::Error;

/// Errors reported by an `ActionClient`
///
/// These describe failures of the transport session with a device. The bridge
/// never interprets them: they are handed back to whoever issued the call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Network communication error
    ///
    /// Connection timeouts, refused connections, or the device being
    /// unreachable.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// UPnP error response returned by the device
    ///
    /// The device understood the request but rejected it, e.g. error 501
    /// (Action Failed) or 402 (Invalid Args).
    #[error("UPnP fault {code}: {description}")]
    Fault { code: u16, description: String },

    /// Response could not be decoded by the client
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Subscription operation failed
    ///
    /// Covers SUBSCRIBE and UNSUBSCRIBE failures as well as sessions the
    /// device has already invalidated.
    #[error("Subscription error: {0}")]
    SubscriptionError(String),
}

impl ApiError {
    /// Create a fault error from a UPnP error code and description
    pub fn fault(code: u16, description: impl Into<String>) -> Self {
        Self::Fault {
            code,
            description: description.into(),
        }
    }
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;
