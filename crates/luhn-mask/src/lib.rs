//! luhn-mask: Streaming credit-card number masking
//!
//! This crate replaces the digits of Luhn-valid card-like sequences with a
//! redaction byte while leaving every other byte untouched. Digit runs may
//! be interleaved with spaces and hyphens; a run qualifies when its length
//! falls inside the configured range and its Luhn checksum holds. The
//! engine works on unbounded streams with fixed memory and never emits an
//! unmasked digit that later input could prove part of a card number, even
//! when the number straddles chunk boundaries.
//!
//! # Features
//!
//! - **Whole-buffer helpers** with [`mask_str`] and [`mask_bytes`]
//! - **Chunk-by-chunk streaming** with [`StreamMasker`]
//! - **`std::io` adapters** via [`mask_stream`] and [`MaskWriter`]
//! - **Validated configuration** of run lengths, buffer capacity, and the
//!   redaction byte through [`MaskConfig`]
//!
//! # Example
//!
//! ```rust
//! use luhn_mask::mask_str;
//!
//! let masked = mask_str("order 4111-1111-1111-1111 confirmed");
//! assert_eq!(masked, "order XXXX-XXXX-XXXX-XXXX confirmed");
//! ```

pub mod config;
pub mod error;
pub mod scanner;
pub mod stream;

pub use config::{
    DEFAULT_BUFFER_CAPACITY, DEFAULT_MASK_BYTE, DEFAULT_MAX_DIGITS, DEFAULT_MIN_DIGITS, MaskConfig,
};
pub use error::{MaskError, Result};
pub use scanner::LuhnScanner;
pub use stream::{MaskWriter, StreamMasker, mask_stream};

/// Mask card-like digit runs in a byte buffer with the default
/// configuration.
///
/// This is the whole-buffer convenience form: the complete input is
/// available, so nothing needs to be retained for future chunks. For
/// streams, use [`StreamMasker`] or the `std::io` adapters.
#[must_use]
pub fn mask_bytes(data: &[u8]) -> Vec<u8> {
    let mut masked = data.to_vec();
    LuhnScanner::default().scan(data, &mut masked);
    masked
}

/// Mask card-like digit runs in a string with the default configuration.
///
/// Only ASCII digits are ever replaced, so the output remains valid UTF-8.
#[must_use]
pub fn mask_str(text: &str) -> String {
    let masked = mask_bytes(text.as_bytes());
    String::from_utf8(masked)
        .unwrap_or_else(|err| String::from_utf8_lossy(err.as_bytes()).into_owned())
}
