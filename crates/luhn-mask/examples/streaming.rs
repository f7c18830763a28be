//! Streaming masking example.
//!
//! This example demonstrates feeding a card number split across chunk
//! boundaries and the `std::io` adapters.
//!
//! Run with: `cargo run --example streaming`

use std::io::{Cursor, Write};

use luhn_mask::{MaskConfig, MaskWriter, StreamMasker, mask_stream};

fn main() -> luhn_mask::Result<()> {
    println!("luhn-mask Streaming Example");
    println!("===========================\n");

    // Example 1: Chunk-by-chunk processing
    println!("1. Card number split across chunks...");

    let mut masker = StreamMasker::new(MaskConfig::default())?;
    let chunks: [&[u8]; 3] = [b"charge 4111-1", b"111-1111", b"-1111 done\n"];

    for chunk in chunks {
        let out = masker.process(chunk)?;
        println!(
            "   fed {:2} bytes, emitted {:2}, retained {:2}",
            chunk.len(),
            out.len(),
            masker.pending()
        );
    }
    let tail = masker.finish();
    println!("   finish emitted {} bytes", tail.len());

    // Example 2: Reader-to-writer pipe
    println!("\n2. Reader to writer...");

    let input = b"balance check for 56613959932537, card ok\n";
    let mut reader = Cursor::new(&input[..]);
    let mut sink = Vec::new();
    let written = mask_stream(&mut reader, &mut sink, MaskConfig::default())?;
    println!("   {} bytes: {}", written, String::from_utf8_lossy(&sink));

    // Example 3: Write-side adapter
    println!("\n3. Masking writer...");

    let mut writer = MaskWriter::new(Vec::new(), MaskConfig::default())?;
    writer.write_all(b"log: card=4111111111111111 status=ok\n")?;
    let out = writer.finish()?;
    println!("   {}", String::from_utf8_lossy(&out));

    println!("\nStreaming examples completed successfully!");
    Ok(())
}
