//! Output macros for application messages.
//!
//! The macros print a [`Message`](super::Message) either as plain console
//! text or, in debug mode, through `tracing`, so the same call site serves
//! both a quiet CLI and a verbose troubleshooting run.
//!
//! ## Debug Mode Detection
//!
//! Debug mode is on when `NIPPO_DEBUG` or `RUST_LOG` is set. The check runs
//! once and is cached.
//!
//! ## Output Routing
//!
//! | Macro | Normal mode | Debug mode |
//! |---|---|---|
//! | `msg_print!` | `println!` | `tracing::info!` |
//! | `msg_success!` | `println!` with ✅ | `tracing::info!` |
//! | `msg_info!` | `println!` with ℹ️ | `tracing::info!` |
//! | `msg_warning!` | `eprintln!` with ⚠️ | `tracing::warn!` |
//! | `msg_debug!` | nothing | `tracing::debug!` |
//!
//! `msg_error_anyhow!` and `msg_bail_anyhow!` build `anyhow` errors instead of
//! printing.
//!
//! ## Usage Examples
//!
//! ```rust
//! use nippo::libs::messages::Message;
//! use nippo::{msg_info, msg_success};
//!
//! msg_success!(Message::ConfigSaved);
//! msg_info!(Message::ReportPath("/tmp/20240115.md".to_string()), true);
//! ```

use std::sync::OnceLock;

static DEBUG_MODE: OnceLock<bool> = OnceLock::new();

/// Whether `NIPPO_DEBUG` or `RUST_LOG` is set. Cached after the first call.
#[doc(hidden)]
pub fn is_debug_mode() -> bool {
    *DEBUG_MODE.get_or_init(|| std::env::var("NIPPO_DEBUG").is_ok() || std::env::var("RUST_LOG").is_ok())
}

/// Prints a message as is.
///
/// Pass `true` as a second argument to surround it with blank lines.
#[macro_export]
macro_rules! msg_print {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("{}", $msg);
        } else {
            println!("{}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n{}\n", $msg);
        } else {
            println!("\n{}\n", $msg);
        }
    };
}

/// Prints a success message with ✅ prefix.
#[macro_export]
macro_rules! msg_success {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("✅ {}", $msg);
        } else {
            println!("✅ {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\n✅ {}\n", $msg);
        } else {
            println!("\n✅ {}\n", $msg);
        }
    };
}

/// Prints an informational message with ℹ️ prefix.
#[macro_export]
macro_rules! msg_info {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("ℹ️  {}", $msg);
        } else {
            println!("ℹ️  {}", $msg);
        }
    };
    ($msg:expr, true) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::info!("\nℹ️  {}\n", $msg);
        } else {
            println!("\nℹ️  {}\n", $msg);
        }
    };
}

/// Prints a warning with ⚠️ prefix to stderr.
#[macro_export]
macro_rules! msg_warning {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::warn!("⚠️  {}", $msg);
        } else {
            eprintln!("⚠️  {}", $msg);
        }
    };
}

/// Debug-only message with 🔍 prefix; silent in normal mode.
#[macro_export]
macro_rules! msg_debug {
    ($msg:expr) => {
        if $crate::libs::messages::macros::is_debug_mode() {
            tracing::debug!("🔍 {}", $msg);
        }
    };
}

/// Creates an `anyhow::Error` from a message with ❌ prefix.
#[macro_export]
macro_rules! msg_error_anyhow {
    ($msg:expr) => {
        anyhow::anyhow!("❌ {}", $msg)
    };
}

/// Returns early with an `anyhow::Error` built from a message.
#[macro_export]
macro_rules! msg_bail_anyhow {
    ($msg:expr) => {
        anyhow::bail!("❌ {}", $msg)
    };
}
