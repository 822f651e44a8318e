//! Structured logging setup.
//!
//! - [`init_logging`]: one-time subscriber setup with `RUST_LOG` support
//! - [`init_logging_with`]: same, with an explicit fallback directive

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "cypher_ogm=info";

/// Initialize structured logging with `RUST_LOG` environment variable support.
///
/// Defaults to `cypher_ogm=info` when `RUST_LOG` is not set. Call once at
/// program startup; later calls are ignored.
pub fn init_logging() {
    init_logging_with(DEFAULT_FILTER);
}

/// Initialize logging, falling back to `default_filter` when `RUST_LOG` is
/// unset or unparsable.
///
/// Logs go to stderr so generated Cypher on stdout stays pipeable.
pub fn init_logging_with(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // try_init so double-init in tests doesn't panic
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}
