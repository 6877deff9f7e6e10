//! Shared error type across invoke crates.

use thiserror::Error;

/// Stable error codes surfaced to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Envelope handed over without its payload sub-record.
    MissingPayload,
    /// Invalid input / malformed config.
    BadRequest,
    /// Payload too large.
    PayloadTooLarge,
    /// Unsupported config or protocol version.
    UnsupportedVersion,
    /// Internal error.
    Internal,
}

impl ErrorCode {
    /// String representation used in logs and responses.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::MissingPayload => "MISSING_PAYLOAD",
            ErrorCode::BadRequest => "BAD_REQUEST",
            ErrorCode::PayloadTooLarge => "PAYLOAD_TOO_LARGE",
            ErrorCode::UnsupportedVersion => "UNSUPPORTED_VERSION",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, InvokeError>;

/// Unified error type used by core and bridge.
#[derive(Debug, Error)]
pub enum InvokeError {
    #[error("message field is missing")]
    MissingPayload,
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("payload too large: {size} bytes (max {max})")]
    PayloadTooLarge { size: usize, max: usize },
    #[error("unsupported version")]
    UnsupportedVersion,
    #[error("internal: {0}")]
    Internal(String),
}

impl InvokeError {
    /// Map the error to its stable code.
    pub fn code(&self) -> ErrorCode {
        match self {
            InvokeError::MissingPayload => ErrorCode::MissingPayload,
            InvokeError::BadRequest(_) => ErrorCode::BadRequest,
            InvokeError::PayloadTooLarge { .. } => ErrorCode::PayloadTooLarge,
            InvokeError::UnsupportedVersion => ErrorCode::UnsupportedVersion,
            InvokeError::Internal(_) => ErrorCode::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(InvokeError::MissingPayload.code().as_str(), "MISSING_PAYLOAD");
        let e = InvokeError::PayloadTooLarge { size: 10, max: 4 };
        assert_eq!(e.code(), ErrorCode::PayloadTooLarge);
        assert_eq!(e.to_string(), "payload too large: 10 bytes (max 4)");
    }
}
