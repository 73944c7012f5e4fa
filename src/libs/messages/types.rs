/// Every user-facing message of the application.
///
/// Text lives in the `Display` implementation (see `display.rs`); call sites
/// only pick a variant and pass its parameters.
#[derive(Debug, Clone)]
pub enum Message {
    // === REPORT MESSAGES ===
    ReportCreated(String),       // file name
    ReportAlreadyExists(String), // date
    ReportPath(String),          // path
    EntryAdded(String),          // time
    EntryEmpty,
    MeetingsInserted(String), // path

    // === CALENDAR MESSAGES ===
    CalendarNotConfigured,
    CalendarOpenUrl(String), // request url
    CalendarPasteInstructions,
    CalendarEventsLoaded(usize, String), // count, date
    CalendarFetchFailed(String),         // error
    UnknownTimeZone(String),             // name
    MeetingsByTimeOfDay,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleReport,
    ConfigModuleCalendar,
    ConfigModuleGas,

    // === PROMPTS ===
    PromptSelectModules,
    PromptReportsDirectory,
    PromptTimeFormat,
    PromptTemplateHeader,
    PromptTemplateSections,
    PromptTimeZone,
    PromptIncludeAllDayEvents,
    PromptIncludeLocation,
    PromptIncludeAttendeeCount,
    PromptGasUrl,
    PromptGasTimeout,
    PromptEntry,
    PromptPasteJson,

    // === GENERAL MESSAGES ===
    InputRequired,
    FailedToResolveDataDirectory,
}
