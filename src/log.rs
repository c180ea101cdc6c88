// src/log.rs
use tracing_subscriber::{ fmt, EnvFilter };

/// `RUST_LOG` wins; otherwise `-v` count picks warn/info/debug for this crate.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{}={level}", env!("CARGO_CRATE_NAME"))));

    // stderr keeps stdout for progress lines
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
