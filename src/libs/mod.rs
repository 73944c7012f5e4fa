//! Core library modules for nippo.
//!
//! ## Features
//!
//! - **Calendar Rendering**: date/time helpers, event records, report text
//! - **Daily Reports**: report files, entries and section updates
//! - **Infrastructure**: configuration, data storage, messaging, logging
//! - **User Interface**: console tables
//!
//! ## Usage
//!
//! ```rust
//! use nippo::libs::event::CalendarEvent;
//! use nippo::libs::formatter::render_event_line;
//!
//! let event = CalendarEvent::new("Standup", "2024-01-15T09:00:00+09:00", "2024-01-15T09:15:00+09:00");
//! assert_eq!(render_event_line(&event, &chrono_tz::Asia::Tokyo), "- 09:00-09:15: Standup");
//! ```

pub mod config;
pub mod data_storage;
pub mod datetime;
pub mod event;
pub mod formatter;
pub mod logging;
pub mod messages;
pub mod report;
pub mod view;
