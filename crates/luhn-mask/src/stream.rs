//! Streaming drivers over the backward scan.
//!
//! A [`StreamMasker`] owns a pair of fixed-capacity working buffers and
//! carries unresolved data between chunks: each chunk is appended after the
//! retained suffix, the combined region is scanned, everything left of the
//! safe offset is emitted, and the rest shifts down to wait for more input.
//! Output is byte-for-byte identical to a single scan over the whole
//! concatenated stream, regardless of how the input was chunked.
//!
//! Two `std::io` adapters wrap the engine: [`mask_stream`] pulls a reader
//! to EOF and writes masked output to a writer, and [`MaskWriter`] is a
//! push-style [`Write`] sink.
//!
//! # Example
//!
//! ```rust
//! # fn main() -> luhn_mask::Result<()> {
//! use luhn_mask::{MaskConfig, StreamMasker};
//!
//! let mut masker = StreamMasker::new(MaskConfig::default())?;
//! let mut out = Vec::new();
//! // the card number straddles the chunk boundary
//! out.extend_from_slice(&masker.process(b"card 4111-1111-")?);
//! out.extend_from_slice(&masker.process(b"1111-1111 ok\n")?);
//! out.extend_from_slice(&masker.finish());
//! assert_eq!(out, b"card XXXX-XXXX-XXXX-XXXX ok\n");
//! # Ok(())
//! # }
//! ```

use std::fmt;
use std::io::{self, Read, Write};

use bytes::{Bytes, BytesMut};

use crate::config::MaskConfig;
use crate::error::{MaskError, Result};
use crate::scanner::LuhnScanner;

/// Streaming masking engine with bounded memory.
///
/// Holds a raw and a masked working buffer of `buffer_capacity` bytes each
/// plus the length of the retained unresolved suffix. Memory never grows
/// with stream length; a stream whose unresolved data outgrows the buffers
/// fails with [`MaskError::BufferOverflow`], after which the masker must
/// not be fed further (construct a new one, with a larger capacity, to
/// retry).
///
/// [`finish`](Self::finish) emits the retained tail at end of input and
/// resets the engine, so one masker can serve consecutive streams.
pub struct StreamMasker {
    scanner: LuhnScanner,
    raw: Box<[u8]>,
    masked: Box<[u8]>,
    pad: usize,
}

impl StreamMasker {
    /// Create a masker from a configuration.
    ///
    /// Returns a [`MaskError::Config`] when the configuration is invalid.
    pub fn new(config: MaskConfig) -> Result<Self> {
        let scanner = LuhnScanner::new(config)?;
        Ok(Self {
            scanner,
            raw: vec![0; config.buffer_capacity].into_boxed_slice(),
            masked: vec![0; config.buffer_capacity].into_boxed_slice(),
            pad: 0,
        })
    }

    /// The configured working-buffer capacity in bytes.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.raw.len()
    }

    /// Bytes currently retained as unresolved.
    #[must_use]
    pub const fn pending(&self) -> usize {
        self.pad
    }

    /// Feed a chunk and return the masked bytes that became final.
    ///
    /// The chunk may be any size; internally it is consumed in slices that
    /// fit the free buffer space. The returned bytes are safe to emit
    /// downstream; data that might still be reclassified by future input
    /// stays buffered until a later `process` call or [`finish`] releases
    /// it.
    ///
    /// A [`MaskError::BufferOverflow`] means the unresolved region filled
    /// the working buffers. The failed call yields none of its own output,
    /// including bytes already masked from earlier slices of an oversized
    /// chunk; output returned by previous calls is unaffected. To salvage
    /// every final byte up to the failure point, feed slices no larger than
    /// the free space, as [`mask_stream`] does.
    pub fn process(&mut self, chunk: &[u8]) -> Result<Bytes> {
        let mut out = BytesMut::new();
        let mut rest = chunk;
        while !rest.is_empty() {
            let free = self.capacity() - self.pad;
            if free == 0 {
                // only reachable by feeding a masker that already
                // overflowed; report it again rather than spinning
                return Err(MaskError::buffer_overflow(self.capacity()));
            }
            let (piece, remainder) = rest.split_at(free.min(rest.len()));
            rest = remainder;

            let end = self.pad + piece.len();
            self.raw[self.pad..end].copy_from_slice(piece);
            let safe = self.scan_region(end);
            out.extend_from_slice(&self.masked[..safe]);
            self.carry(safe, end)?;
        }
        Ok(out.freeze())
    }

    /// Emit the retained tail and reset the engine.
    ///
    /// At end of input nothing can reclassify the retained region, so it is
    /// released as-is, redactions included. The masker is ready for a new
    /// stream afterwards.
    pub fn finish(&mut self) -> Bytes {
        let tail = Bytes::copy_from_slice(&self.masked[..self.pad]);
        self.pad = 0;
        tail
    }

    /// Mirror newly appended raw bytes into the masked buffer and scan the
    /// combined region `[0, end)`. Earlier redactions in the retained
    /// prefix are kept, not recomputed.
    fn scan_region(&mut self, end: usize) -> usize {
        self.masked[self.pad..end].copy_from_slice(&self.raw[self.pad..end]);
        self.scanner.scan(&self.raw[..end], &mut self.masked[..end])
    }

    /// Shift the unresolved suffix `[safe, end)` of both buffers down to
    /// offset 0 and fail if it leaves no room to make progress.
    fn carry(&mut self, safe: usize, end: usize) -> Result<()> {
        self.pad = end - safe;
        if self.pad == self.capacity() {
            tracing::error!(
                capacity = self.capacity(),
                "unresolved data filled the working buffer"
            );
            return Err(MaskError::buffer_overflow(self.capacity()));
        }
        if safe > 0 {
            self.raw.copy_within(safe..end, 0);
            self.masked.copy_within(safe..end, 0);
        }
        Ok(())
    }
}

impl fmt::Debug for StreamMasker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamMasker")
            .field("capacity", &self.capacity())
            .field("pending", &self.pad)
            .finish_non_exhaustive()
    }
}

/// Mask everything from `reader` into `writer`.
///
/// Reads directly into the raw working buffer, scans, and writes each
/// safely final masked region as it becomes available; the retained tail is
/// written once the reader reports EOF. Returns the total number of bytes
/// written, which equals the number of bytes read. I/O errors from either
/// side are propagated unchanged; the writer is not flushed.
pub fn mask_stream<R, W>(reader: &mut R, writer: &mut W, config: MaskConfig) -> Result<u64>
where
    R: Read,
    W: Write,
{
    let mut masker = StreamMasker::new(config)?;
    let mut written: u64 = 0;

    loop {
        let length = reader.read(&mut masker.raw[masker.pad..])?;
        if length == 0 {
            break;
        }
        let end = masker.pad + length;
        let safe = masker.scan_region(end);
        if safe > 0 {
            writer.write_all(&masker.masked[..safe])?;
            written += safe as u64;
        }
        masker.carry(safe, end)?;
    }

    if masker.pad > 0 {
        writer.write_all(&masker.masked[..masker.pad])?;
        written += masker.pad as u64;
        masker.pad = 0;
    }
    Ok(written)
}

/// Push-style masking sink around any [`Write`].
///
/// Bytes written through the adapter pass through a [`StreamMasker`]; only
/// safely final masked output reaches the inner writer. [`flush`](Write::flush)
/// flushes the inner writer without releasing retained data, since it may
/// still be reclassified. Call [`finish`](Self::finish) at end of stream to
/// emit the retained tail; dropping the adapter without finishing discards
/// that tail.
///
/// # Example
///
/// ```rust
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use std::io::Write;
///
/// use luhn_mask::{MaskConfig, MaskWriter};
///
/// let mut writer = MaskWriter::new(Vec::new(), MaskConfig::default())?;
/// writer.write_all(b"5661395993")?;
/// writer.write_all(b"2537\n")?;
/// let out = writer.finish()?;
/// assert_eq!(out, b"XXXXXXXXXXXXXX\n");
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct MaskWriter<W: Write> {
    masker: StreamMasker,
    inner: W,
}

impl<W: Write> MaskWriter<W> {
    /// Create a masking writer around `inner`.
    pub fn new(inner: W, config: MaskConfig) -> Result<Self> {
        Ok(Self {
            masker: StreamMasker::new(config)?,
            inner,
        })
    }

    /// Reference to the inner writer.
    #[must_use]
    pub const fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Mutable reference to the inner writer.
    pub const fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Emit the retained tail, flush, and return the inner writer.
    pub fn finish(mut self) -> Result<W> {
        let tail = self.masker.finish();
        if !tail.is_empty() {
            self.inner.write_all(&tail)?;
        }
        self.inner.flush()?;
        Ok(self.inner)
    }
}

impl<W: Write> Write for MaskWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let out = self.masker.process(buf)?;
        self.inner.write_all(&out)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
