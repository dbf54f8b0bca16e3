use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=msdscript=debug` or `RUST_LOG=msdscript=trace`.
/// Logs go to stderr so that program output on stdout is unaffected.
pub fn init() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{EnvFilter, fmt, prelude::*};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry().with(fmt::layer().with_writer(std::io::stderr)
                                                            .with_target(true)
                                                            .with_level(true))
                                          .with(filter)
                                          .init();
        }
    });
}
