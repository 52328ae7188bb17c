//! Logging utilities
//!
//! Thin wrapper over the `log` facade. Library code only emits through the
//! re-exported macros; wiring up a backend is left to the binary, which can
//! call [`init`] to get an `env_logger` configured from `RUST_LOG`.

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system
///
/// Reads the filter from `RUST_LOG`, defaulting to `info` when unset.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
