//! Basic masking example.
//!
//! This example demonstrates the whole-buffer helpers and configuration.
//!
//! Run with: `cargo run --example basic`

use luhn_mask::{LuhnScanner, MaskConfig, mask_str};

fn main() -> luhn_mask::Result<()> {
    println!("luhn-mask Basic Example");
    println!("=======================\n");

    // Example 1: Quick masking
    println!("1. Quick masking...");

    let texts = [
        "Hello, world!",
        "Card: 4111-1111-1111-1111",
        "Amex: 378282246310005",
        "Order #1234 shipped",
        "Invalid: 1111111111111111",
    ];

    for text in texts {
        println!("   '{}' -> '{}'", text, mask_str(text));
    }

    // Example 2: Custom mask byte
    println!("\n2. Custom mask byte...");

    let config = MaskConfig::new().mask_byte(b'*');
    let scanner = LuhnScanner::new(config)?;

    let raw = b"payment 4111111111111111 accepted".to_vec();
    let mut masked = raw.clone();
    scanner.scan(&raw, &mut masked);
    println!("   {}", String::from_utf8_lossy(&masked));

    // Example 3: Narrower run-length range
    println!("\n3. Accept only 16-digit runs...");

    let config = MaskConfig::new().min_digits(16).max_digits(16);
    let scanner = LuhnScanner::new(config)?;

    let raw = b"short 56613959932537 long 4111111111111111".to_vec();
    let mut masked = raw.clone();
    scanner.scan(&raw, &mut masked);
    // the 14-digit number stays, the 16-digit one masks
    println!("   {}", String::from_utf8_lossy(&masked));

    println!("\nBasic examples completed successfully!");
    Ok(())
}
