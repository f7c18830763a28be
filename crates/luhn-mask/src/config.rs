//! Configuration for the masking engine.
//!
//! This module defines [`MaskConfig`], the validated set of options shared
//! by the scanner and the stream driver: the digit-run length range, the
//! working-buffer capacity, and the redaction byte.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{MaskError, Result};

/// Default minimum digit-run length eligible for masking.
pub const DEFAULT_MIN_DIGITS: usize = 14;

/// Default maximum digit-run length considered per anchor.
pub const DEFAULT_MAX_DIGITS: usize = 16;

/// Default working-buffer capacity (32 KiB).
pub const DEFAULT_BUFFER_CAPACITY: usize = 32 * 1024;

/// Default redaction byte.
pub const DEFAULT_MASK_BYTE: u8 = b'X';

/// Configuration for masking operations.
///
/// `min_digits` and `max_digits` bound which digit-run lengths are eligible
/// for Luhn validation. `buffer_capacity` bounds memory for streaming use
/// and sets the fatal-overflow threshold: it must exceed `max_digits`, and
/// should leave generous headroom for separator bytes interleaved with
/// digits, since an unresolved digits-and-separators run longer than the
/// buffer aborts the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskConfig {
    /// Shortest digit-run length that can be masked.
    pub min_digits: usize,

    /// Longest digit-run length considered when extending a candidate.
    pub max_digits: usize,

    /// Capacity of the raw and masked working buffers, in bytes.
    pub buffer_capacity: usize,

    /// Byte substituted for each digit of a confirmed run.
    pub mask_byte: u8,
}

impl Default for MaskConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl MaskConfig {
    /// Create a configuration with the default options.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_digits: DEFAULT_MIN_DIGITS,
            max_digits: DEFAULT_MAX_DIGITS,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            mask_byte: DEFAULT_MASK_BYTE,
        }
    }

    /// Set the minimum digit-run length.
    #[must_use]
    pub const fn min_digits(mut self, count: usize) -> Self {
        self.min_digits = count;
        self
    }

    /// Set the maximum digit-run length.
    #[must_use]
    pub const fn max_digits(mut self, count: usize) -> Self {
        self.max_digits = count;
        self
    }

    /// Set the working-buffer capacity in bytes.
    #[must_use]
    pub const fn buffer_capacity(mut self, bytes: usize) -> Self {
        self.buffer_capacity = bytes;
        self
    }

    /// Set the redaction byte.
    #[must_use]
    pub const fn mask_byte(mut self, byte: u8) -> Self {
        self.mask_byte = byte;
        self
    }

    /// Validate the configuration.
    ///
    /// Returns a [`MaskError::Config`] describing the first violated
    /// constraint, if any.
    pub fn validate(&self) -> Result<()> {
        if self.min_digits == 0 {
            return Err(MaskError::config("min_digits must be positive"));
        }
        if self.min_digits > self.max_digits {
            return Err(MaskError::config(format!(
                "min_digits ({}) must not exceed max_digits ({})",
                self.min_digits, self.max_digits
            )));
        }
        if self.buffer_capacity <= self.max_digits {
            return Err(MaskError::config(format!(
                "buffer_capacity ({}) must exceed max_digits ({})",
                self.buffer_capacity, self.max_digits
            )));
        }
        if self.mask_byte.is_ascii_digit() {
            return Err(MaskError::config(
                "mask_byte must not be an ASCII digit",
            ));
        }
        Ok(())
    }

    /// Parse a configuration from TOML text and validate it.
    ///
    /// Omitted keys take their default values.
    pub fn from_toml(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text).map_err(|e| MaskError::config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a TOML file and validate it.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = MaskConfig::default();
        assert_eq!(config.min_digits, DEFAULT_MIN_DIGITS);
        assert_eq!(config.max_digits, DEFAULT_MAX_DIGITS);
        assert_eq!(config.buffer_capacity, DEFAULT_BUFFER_CAPACITY);
        assert_eq!(config.mask_byte, b'X');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_builder() {
        let config = MaskConfig::new()
            .min_digits(12)
            .max_digits(19)
            .buffer_capacity(64 * 1024)
            .mask_byte(b'*');

        assert_eq!(config.min_digits, 12);
        assert_eq!(config.max_digits, 19);
        assert_eq!(config.buffer_capacity, 64 * 1024);
        assert_eq!(config.mask_byte, b'*');
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_min_digits_rejected() {
        let err = MaskConfig::new().min_digits(0).validate().unwrap_err();
        assert!(err.is_config());
        assert!(err.to_string().contains("positive"));
    }

    #[test]
    fn inverted_bounds_rejected() {
        let config = MaskConfig::new().min_digits(17).max_digits(16);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("must not exceed"));
    }

    #[test]
    fn undersized_buffer_rejected() {
        let config = MaskConfig::new().buffer_capacity(16);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("buffer_capacity"));
    }

    #[test]
    fn digit_mask_byte_rejected() {
        let err = MaskConfig::new().mask_byte(b'7').validate().unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn from_toml_partial() {
        let config = MaskConfig::from_toml("min_digits = 13\n").unwrap();
        assert_eq!(config.min_digits, 13);
        assert_eq!(config.max_digits, DEFAULT_MAX_DIGITS);
    }

    #[test]
    fn from_toml_invalid_bounds() {
        let err = MaskConfig::from_toml("min_digits = 20\n").unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn from_toml_syntax_error() {
        let err = MaskConfig::from_toml("min_digits = = 3\n").unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn toml_round_trip() {
        let config = MaskConfig::new().min_digits(15).mask_byte(b'#');
        let text = toml::to_string(&config).unwrap();
        assert_eq!(MaskConfig::from_toml(&text).unwrap(), config);
    }
}
