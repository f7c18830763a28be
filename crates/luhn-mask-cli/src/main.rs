//! Command-line filter that masks credit-card numbers in a byte stream.
//!
//! Reads standard input, writes the masked stream to standard output, and
//! keeps logging on standard error. Configuration layers in order, later
//! sources winning: built-in defaults, a TOML file, environment variables,
//! then flags.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use luhn_mask::{MaskConfig, MaskError, mask_stream};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "luhn-mask", version)]
#[command(about = "Mask credit-card numbers in a byte stream, stdin to stdout")]
struct Cli {
    /// Shortest digit-run length that can be masked
    #[arg(long, env = "LUHN_MASK_MIN_DIGITS", value_name = "COUNT")]
    min_digits: Option<usize>,

    /// Longest digit-run length considered for one candidate
    #[arg(long, env = "LUHN_MASK_MAX_DIGITS", value_name = "COUNT")]
    max_digits: Option<usize>,

    /// Working-buffer capacity in bytes
    #[arg(long, env = "LUHN_MASK_BUFFER_CAPACITY", value_name = "BYTES")]
    buffer_capacity: Option<usize>,

    /// Replacement character for masked digits
    #[arg(long, env = "LUHN_MASK_CHAR", value_name = "CHAR")]
    mask_char: Option<char>,

    /// Read configuration from a TOML file
    #[arg(long, env = "LUHN_MASK_CONFIG", value_name = "PATH")]
    config: Option<PathBuf>,
}

impl Cli {
    /// Resolve the layered configuration.
    fn resolve_config(&self) -> luhn_mask::Result<MaskConfig> {
        let mut config = match &self.config {
            Some(path) => MaskConfig::from_toml_file(path)?,
            None => MaskConfig::default(),
        };
        if let Some(count) = self.min_digits {
            config = config.min_digits(count);
        }
        if let Some(count) = self.max_digits {
            config = config.max_digits(count);
        }
        if let Some(bytes) = self.buffer_capacity {
            config = config.buffer_capacity(bytes);
        }
        if let Some(mask) = self.mask_char {
            if !mask.is_ascii() {
                return Err(MaskError::config(format!(
                    "mask character {mask:?} must be ASCII"
                )));
            }
            config = config.mask_byte(mask as u8);
        }
        config.validate()?;
        Ok(config)
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match cli.resolve_config() {
        Ok(config) => config,
        Err(err) => {
            tracing::error!(%err, "invalid configuration");
            return ExitCode::from(2);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = stdin.lock();
    let mut writer = io::BufWriter::new(stdout.lock());

    let result = mask_stream(&mut reader, &mut writer, config).and_then(|written| {
        writer.flush()?;
        Ok(written)
    });

    match result {
        Ok(written) => {
            tracing::debug!(written, "stream complete");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(%err, "masking failed");
            ExitCode::FAILURE
        }
    }
}
