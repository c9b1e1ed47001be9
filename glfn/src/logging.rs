use std::io;

use tracing_subscriber::{fmt, EnvFilter};

/// Sends log records to stderr, keeping stdout free for `print`.
///
/// `RUST_LOG` wins over the verbosity flag when it is set.
pub fn init(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    if let Err(e) = fmt().with_env_filter(filter).with_target(false).with_writer(io::stderr).try_init() {
        eprintln!("failed to initialize logging: {}", e);
    }
}
