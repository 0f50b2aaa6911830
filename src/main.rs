//! OpenCrypt - symmetric encryption from the command line.

use std::fs::OpenOptions;
use std::sync::Mutex;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use opencrypt::cli::output;
use opencrypt::cli::{execute, Cli};
use opencrypt::core::config::Config;
use opencrypt::core::constants;
use opencrypt::error::{CipherError, ConfigError, Error, ValidationError};

fn main() {
    let cli = Cli::parse();

    let result = Config::load(cli.config.as_deref()).and_then(|config| {
        init_tracing(cli.verbose, &config)?;

        info!("operation started");
        let result = execute(cli.command, &config);
        info!("operation complete");
        result
    });

    if let Err(e) = result {
        tracing::info!(error = %e, "operation failed");

        // Format error with suggestion if available
        let suggestion = match &e {
            Error::Cipher(CipherError::UnsupportedStandard(_)) => {
                Some("supported standards: aes")
            }
            Error::Cipher(CipherError::UnsupportedKeySize { .. }) => {
                Some("AES key sizes are 128, 192 and 256 bits")
            }
            Error::Cipher(CipherError::InvalidCiphertext(_)) => {
                Some("check that key, IV and cipher type match the ones used to encrypt")
            }
            Error::Validation(ValidationError::MissingValue(_)) => {
                Some("pass it as an argument, or drop --no-input to be asked")
            }
            Error::Config(ConfigError::Parse(_)) | Error::Config(ConfigError::InvalidCipher(_)) => {
                Some("fix or remove the config file")
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

/// Stderr logging filtered by `OPENCRYPT_LOG` or `--verbose`, plus an
/// optional file sink from the `[log]` config section.
fn init_tracing(verbose: bool, config: &Config) -> opencrypt::error::Result<()> {
    let filter = EnvFilter::try_from_env(constants::LOG_ENV).unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("opencrypt=debug")
        } else {
            EnvFilter::new("opencrypt=warn")
        }
    });

    let stderr_layer = fmt::layer()
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .with_filter(filter);

    let file_layer = match &config.log.file {
        Some(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(ConfigError::LogFile)?;
            let level = config
                .log
                .level
                .as_deref()
                .unwrap_or(constants::DEFAULT_FILE_LOG_LEVEL);
            let filter = EnvFilter::try_new(format!("opencrypt={}", level))
                .unwrap_or_else(|_| EnvFilter::new("opencrypt=info"));
            Some(
                fmt::layer()
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .with_filter(filter),
            )
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    Ok(())
}
