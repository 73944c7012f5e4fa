//! Tracing subscriber setup.
//!
//! Diagnostics are only written in debug mode (see
//! [`is_debug_mode`](crate::libs::messages::macros::is_debug_mode)). The
//! filter comes from `RUST_LOG`; with only `NIPPO_DEBUG` set it defaults to
//! `nippo=debug`.

use crate::libs::messages::macros::is_debug_mode;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

const DEBUG_FILTER: &str = "nippo=debug";
const DEFAULT_FILTER: &str = "warn";

/// Installs the global subscriber. Calling it twice is harmless.
pub fn init() {
    let default_filter = if is_debug_mode() { DEBUG_FILTER } else { DEFAULT_FILTER };
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    let _ = tracing::subscriber::set_global_default(subscriber);
}
