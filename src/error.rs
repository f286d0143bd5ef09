//! Error types for frame decoding

use serde::Serialize;
use thiserror::Error;

/// Result type alias for decode operations
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors raised while decoding a captured frame.
///
/// Every variant is recoverable per frame: a failed sub-decode is carried in
/// the assembled report and the caller moves on to the next frame. Nothing
/// here aborts a capture pipeline.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
pub enum DecodeError {
    /// Frame shorter than a required fixed region
    #[error("frame too short: need {required} bytes, have {actual}")]
    TooShort {
        /// Bytes the fixed region requires
        required: usize,
        /// Bytes actually present
        actual: usize,
    },

    /// A tagged element declares a length extending past the captured buffer
    #[error("element at offset {offset} extends past the end of the frame")]
    Truncated {
        /// Byte offset of the offending element header
        offset: usize,
    },

    /// Structurally present but internally inconsistent data
    #[error("malformed element: {0}")]
    Malformed(String),
}

impl DecodeError {
    /// Create a `TooShort` error
    pub fn too_short(required: usize, actual: usize) -> Self {
        Self::TooShort { required, actual }
    }

    /// Create a `Malformed` error
    pub fn malformed(msg: impl Into<String>) -> Self {
        Self::Malformed(msg.into())
    }

    /// Check if this error reports a frame below a fixed-size floor
    pub fn is_too_short(&self) -> bool {
        matches!(self, Self::TooShort { .. })
    }
}

/// Outcome of one sub-decode within a frame report.
///
/// A failed sub-decode never discards the rest of the frame; the error is
/// kept here so reports state which fields failed and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Decoded<T> {
    /// The field decoded cleanly
    Ok(T),
    /// The field could not be decoded from the bytes in range
    Failed(DecodeError),
}

impl<T> Decoded<T> {
    /// Get the decoded value, if any
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// Get the decode error, if any
    pub fn error(&self) -> Option<&DecodeError> {
        match self {
            Self::Ok(_) => None,
            Self::Failed(err) => Some(err),
        }
    }

    /// Check if this sub-decode failed
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

impl<T> From<Result<T>> for Decoded<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => Self::Ok(value),
            Err(err) => Self::Failed(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DecodeError::too_short(24, 10);
        assert_eq!(err.to_string(), "frame too short: need 24 bytes, have 10");
        assert!(err.is_too_short());

        let err = DecodeError::Truncated { offset: 36 };
        assert!(err.to_string().contains("offset 36"));
    }

    #[test]
    fn test_decoded_accessors() {
        let ok: Decoded<u8> = Ok(7).into();
        assert_eq!(ok.value(), Some(&7));
        assert!(!ok.is_failed());

        let failed: Decoded<u8> = Err(DecodeError::too_short(4, 1)).into();
        assert!(failed.is_failed());
        assert!(failed.error().unwrap().is_too_short());
    }
}
