//! Clients for external calendar sources.
//!
//! Only the Google Apps Script web app is supported. Acquisition stops at a
//! list of [`CalendarEvent`](crate::libs::event::CalendarEvent)s; everything
//! after that is local formatting.

pub mod gas;

pub use gas::{GasClient, GasConfig};
