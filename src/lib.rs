//! # Nippo - daily work reports with calendar meetings
//!
//! A command-line utility that keeps one Markdown report per day and merges
//! the day's calendar meetings into it.
//!
//! ## Features
//!
//! - **Daily Reports**: template-based report files, timestamped entries
//! - **Meetings Section**: calendar events rendered as a report section,
//!   replaced in place on every update
//! - **Day Summary**: event count, total meeting time, all-day events
//! - **Calendar Source**: Google Apps Script web app, pasted or fetched
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nippo::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
