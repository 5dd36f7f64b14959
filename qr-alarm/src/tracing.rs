//! Logging setup shared by the library and its binaries.

use tracing_subscriber::{EnvFilter, fmt};

/// Glob-import this in modules that log.
pub mod prelude {
    #[allow(unused_imports)]
    pub use ::tracing::{debug, error, info, trace, warn};
}

const DEFAULT_FILTER: &str = "info";

/// Install a stderr subscriber filtered by `RUST_LOG`.
///
/// Falls back to `info` when `RUST_LOG` is unset or unparsable. Output goes
/// to stderr so that command output on stdout stays machine-readable.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A second init (e.g. from tests) is harmless; keep the first subscriber.
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
