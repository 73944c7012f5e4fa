//! Display implementation for application messages.
//!
//! All user-facing text is defined here, in one match, so that wording stays
//! consistent and every new [`Message`] variant needs an explicit decision.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === REPORT MESSAGES ===
            Message::ReportCreated(file_name) => format!("Daily report created: {}", file_name),
            Message::ReportAlreadyExists(date) => format!("Daily report for {} already exists.", date),
            Message::ReportPath(path) => format!("Report: {}", path),
            Message::EntryAdded(time) => format!("Entry added to daily report at {}", time),
            Message::EntryEmpty => "Entry text is empty, nothing added.".to_string(),
            Message::MeetingsInserted(path) => format!("Meetings section updated in {}", path),

            // === CALENDAR MESSAGES ===
            Message::CalendarNotConfigured => {
                "Google Apps Script URL is not configured. Run \"nippo init\" and select Google Apps Script first.".to_string()
            }
            Message::CalendarOpenUrl(url) => format!("Open this URL in your browser and sign in if asked:\n{}", url),
            Message::CalendarPasteInstructions => {
                "After authentication the browser shows JSON data. Copy the entire response and paste it below.".to_string()
            }
            Message::CalendarEventsLoaded(count, date) => format!("Loaded {} event(s) for {}", count, date),
            Message::CalendarFetchFailed(error) => format!("Failed to get calendar events: {}", error),
            Message::UnknownTimeZone(name) => format!("Unknown time zone '{}', falling back to the host time zone", name),
            Message::MeetingsByTimeOfDay => "Meetings by time of day:".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "Configuration file not found".to_string(),
            Message::ConfigModuleReport => "Daily report settings".to_string(),
            Message::ConfigModuleCalendar => "Calendar settings".to_string(),
            Message::ConfigModuleGas => "Google Apps Script settings".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select nodes to configure".to_string(),
            Message::PromptReportsDirectory => "Enter the reports directory".to_string(),
            Message::PromptTimeFormat => "Select the entry time format".to_string(),
            Message::PromptTemplateHeader => "Enter the report header ({{date}} is replaced)".to_string(),
            Message::PromptTemplateSections => "Enter report sections separated by '|'".to_string(),
            Message::PromptTimeZone => "Enter the display time zone (IANA name)".to_string(),
            Message::PromptIncludeAllDayEvents => "Include all-day events?".to_string(),
            Message::PromptIncludeLocation => "Include event locations?".to_string(),
            Message::PromptIncludeAttendeeCount => "Include attendee counts?".to_string(),
            Message::PromptGasUrl => "Enter your Google Apps Script Web App URL".to_string(),
            Message::PromptGasTimeout => "Enter the request timeout (seconds)".to_string(),
            Message::PromptEntry => "What would you like to add to today's report?".to_string(),
            Message::PromptPasteJson => "Paste the complete JSON response".to_string(),

            // === GENERAL MESSAGES ===
            Message::InputRequired => "Input is required".to_string(),
            Message::FailedToResolveDataDirectory => "Failed to resolve the application data directory".to_string(),
        };
        write!(f, "{}", text)
    }
}
