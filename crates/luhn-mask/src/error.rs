//! Error types for luhn-mask.
//!
//! This module defines all error types used throughout the library.
//! Invalid configuration is reported at construction time and never later;
//! the only runtime failure the masking core itself can raise is a buffer
//! overflow, when the retained unresolved region fills the configured
//! working buffers. I/O errors from collaborators pass through unchanged.

use thiserror::Error;

/// The main error type for luhn-mask operations.
#[derive(Debug, Error)]
pub enum MaskError {
    /// Invalid configuration.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// The retained unresolved region filled the working buffers.
    ///
    /// Raised when an unbroken run of digits and separators grows to the
    /// full buffer capacity, leaving no room to read further input. The
    /// stream cannot make progress; retrying requires a larger
    /// `buffer_capacity`.
    #[error("buffer overflow: unresolved data filled the {capacity}-byte working buffer")]
    BufferOverflow {
        /// The configured buffer capacity that was exhausted.
        capacity: usize,
    },

    /// An I/O error from the input source or output sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for luhn-mask operations.
pub type Result<T> = std::result::Result<T, MaskError>;

impl MaskError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a buffer overflow error.
    #[must_use]
    pub const fn buffer_overflow(capacity: usize) -> Self {
        Self::BufferOverflow { capacity }
    }

    /// Check if this is a buffer overflow error.
    #[must_use]
    pub const fn is_overflow(&self) -> bool {
        matches!(self, Self::BufferOverflow { .. })
    }

    /// Check if this is a configuration error.
    #[must_use]
    pub const fn is_config(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}

/// Lets the `std::io` adapters surface masking failures through plain I/O
/// interfaces. An `Io` variant unwraps to its original error; anything else
/// is boxed as [`std::io::ErrorKind::Other`].
impl From<MaskError> for std::io::Error {
    fn from(err: MaskError) -> Self {
        match err {
            MaskError::Io(io) => io,
            other => Self::other(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = MaskError::config("min_digits must not exceed max_digits");
        let msg = err.to_string();
        assert!(msg.contains("configuration error"));
        assert!(msg.contains("min_digits"));
    }

    #[test]
    fn buffer_overflow_display() {
        let err = MaskError::buffer_overflow(32 * 1024);
        let msg = err.to_string();
        assert!(msg.contains("buffer overflow"));
        assert!(msg.contains("32768"));
    }

    #[test]
    fn io_error_conversion() {
        let err: MaskError = std::io::Error::other("sink closed").into();
        assert!(matches!(err, MaskError::Io(_)));
        assert!(err.to_string().contains("sink closed"));
    }

    #[test]
    fn error_predicates() {
        assert!(MaskError::buffer_overflow(64).is_overflow());
        assert!(!MaskError::buffer_overflow(64).is_config());
        assert!(MaskError::config("bad").is_config());
        assert!(!MaskError::config("bad").is_overflow());
    }

    #[test]
    fn into_io_error_round_trip() {
        let original = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let back: std::io::Error = MaskError::from(original).into();
        assert_eq!(back.kind(), std::io::ErrorKind::BrokenPipe);

        let wrapped: std::io::Error = MaskError::buffer_overflow(64).into();
        assert_eq!(wrapped.kind(), std::io::ErrorKind::Other);
        assert!(wrapped.to_string().contains("buffer overflow"));
    }
}
