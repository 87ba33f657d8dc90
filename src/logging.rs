//! Logging setup
//!
//! Events go to stderr so command output on stdout stays pipeable.
//!
//! # Environment
//! - `PLM_LOG`: filter directives, e.g. `PLM_LOG=plm=debug`
//! - `RUST_LOG`: used when `PLM_LOG` is unset
//!
//! Without either, the level is `warn` (`debug` with `--verbose`).

use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_env("PLM_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));

    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(verbose)
        .try_init();
}

/// Subscriber for tests; output is captured by the test harness
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
