//! Backward Luhn scanning over byte buffers.
//!
//! This module implements the detection core: a right-to-left pass that
//! finds digit runs (optionally interleaved with spaces and hyphens),
//! validates them with the Luhn checksum at every eligible length, and
//! replaces the digits of confirmed runs with the redaction byte.
//!
//! Scanning works on two views of the same region: a *raw* buffer that is
//! never modified and a *masked* buffer that receives redactions. Every
//! candidate is classified against the raw bytes, so overlapping runs are
//! judged on the original digits even after an earlier candidate has
//! already been masked.
//!
//! Besides masking, the scan reports a *safe offset*: the boundary below
//! which no byte can be reclassified by input that has not arrived yet.
//! Streaming callers flush up to that boundary and retain the rest; see
//! [`StreamMasker`](crate::stream::StreamMasker).
//!
//! # Example
//!
//! ```rust
//! use luhn_mask::LuhnScanner;
//!
//! let scanner = LuhnScanner::default();
//! let raw = b"paid with 4111-1111-1111-1111 today".to_vec();
//! let mut masked = raw.clone();
//!
//! let safe = scanner.scan(&raw, &mut masked);
//! assert_eq!(masked, b"paid with XXXX-XXXX-XXXX-XXXX today");
//! // the trailing letters prove the region final, so all of it may flush
//! assert_eq!(safe, raw.len());
//! ```

use crate::config::{DEFAULT_MASK_BYTE, DEFAULT_MAX_DIGITS, DEFAULT_MIN_DIGITS, MaskConfig};
use crate::error::Result;

/// Luhn contribution of each digit value at even positions: the digit
/// doubled, with the tens carried into the ones place.
const DOUBLED_DIGIT_SUMS: [u32; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Contribution of a digit at `position` (1-based from the rightmost digit
/// of a run) to the run's Luhn sum. Odd positions contribute the digit
/// value; even positions the doubled-with-carry value.
///
/// The caller guarantees `digit` is an ASCII digit.
const fn luhn_weight(position: usize, digit: u8) -> u32 {
    let value = (digit - b'0') as u32;
    if position % 2 == 0 {
        DOUBLED_DIGIT_SUMS[value as usize]
    } else {
        value
    }
}

/// Bytes allowed between the digits of a single candidate run.
const fn is_separator(byte: u8) -> bool {
    matches!(byte, b' ' | b'-')
}

/// Backward scanner that masks Luhn-valid digit runs in a buffer.
///
/// The scanner holds only its configured bounds and redaction byte; each
/// [`scan`](Self::scan) is a complete, self-contained pass. Streaming
/// state (retained suffixes, buffer shifting) lives in
/// [`StreamMasker`](crate::stream::StreamMasker).
#[derive(Debug, Clone, Copy)]
pub struct LuhnScanner {
    min_digits: usize,
    max_digits: usize,
    mask_byte: u8,
}

impl Default for LuhnScanner {
    /// A scanner with the default configuration.
    fn default() -> Self {
        Self {
            min_digits: DEFAULT_MIN_DIGITS,
            max_digits: DEFAULT_MAX_DIGITS,
            mask_byte: DEFAULT_MASK_BYTE,
        }
    }
}

impl LuhnScanner {
    /// Create a scanner from a validated configuration.
    ///
    /// Returns a [`MaskError::Config`](crate::MaskError::Config) when the
    /// configuration is invalid.
    pub fn new(config: MaskConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            min_digits: config.min_digits,
            max_digits: config.max_digits,
            mask_byte: config.mask_byte,
        })
    }

    /// Scan a region, masking confirmed runs, and report the safe offset.
    ///
    /// `raw` is the region to classify; `masked` is the redaction target
    /// and must be at least as long as `raw`. Digits of confirmed runs are
    /// overwritten in `masked` with the redaction byte; no other byte of
    /// `masked` is touched, so the caller keeps `masked` byte-identical to
    /// `raw` wherever new data is appended.
    ///
    /// The returned safe offset is the boundary below which no byte can be
    /// reclassified by data arriving after this region: the offset just
    /// past the rightmost byte that is neither a digit nor a separator, or
    /// `raw.len()` when the region contains no digit at all, or `0` when
    /// the region is all digits and separators (any prefix could still
    /// combine with future input). It is always within `0..=raw.len()`.
    pub fn scan(&self, raw: &[u8], masked: &mut [u8]) -> usize {
        let masked = &mut masked[..raw.len()];
        let mut saw_digit = false;
        // 0 doubles as "unset": a recorded offset is always just past a
        // stop byte and therefore nonzero
        let mut safe_offset = 0;

        for anchor in (0..raw.len()).rev() {
            if raw[anchor].is_ascii_digit() {
                saw_digit = true;
                let mut digits_considered = 1;
                let mut luhn_sum = luhn_weight(1, raw[anchor]);
                let mut start_mark = anchor + 1;
                let mut mark = anchor;

                while mark > 0 && digits_considered < self.max_digits {
                    mark -= 1;
                    let byte = raw[mark];
                    if byte.is_ascii_digit() {
                        digits_considered += 1;
                        luhn_sum += luhn_weight(digits_considered, byte);
                    } else if !is_separator(byte) {
                        if safe_offset == 0 {
                            safe_offset = mark + 1;
                        }
                        break;
                    }
                    // a valid prefix never ends the walk: a longer valid
                    // run may still start further left
                    if digits_considered >= self.min_digits && luhn_sum % 10 == 0 {
                        start_mark = mark;
                    }
                }

                // no-op when no qualifying prefix was found
                for offset in start_mark..=anchor {
                    if raw[offset].is_ascii_digit() {
                        masked[offset] = self.mask_byte;
                    }
                }
            } else if safe_offset == 0 && !is_separator(raw[anchor]) {
                safe_offset = anchor + 1;
            }
        }

        if saw_digit { safe_offset } else { raw.len() }
    }
}
