//! Configuration management for nippo.
//!
//! Settings are kept as pretty-printed JSON in `config.json` inside the
//! platform application-data directory. Every section is optional; a missing
//! section means "use the defaults", so a fresh install works without any
//! setup.
//!
//! ## Configuration Structure
//!
//! - **report**: where daily reports live, the entry time format and the
//!   template for new reports
//! - **calendar**: display time zone and which event details reach the report
//! - **gas**: the Google Apps Script web app that supplies calendar events
//!
//! ## File Location
//!
//! - **Windows**: `%LOCALAPPDATA%\nippo\nippo\config.json`
//! - **macOS**: `~/Library/Application Support/nippo/nippo/config.json`
//! - **Linux**: `~/.local/share/nippo/nippo/config.json`
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use nippo::libs::config::Config;
//!
//! let config = Config::read()?;
//! let tz = config.calendar_or_default().display_zone();
//! let directory = config.report_or_default().reports_directory();
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::{resolve_user_path, DataStorage};
use crate::api::gas::GasConfig;
use crate::libs::datetime::{display_zone, resolve_display_time_zone};
use crate::libs::event::CalendarEvent;
use crate::libs::messages::Message;
use crate::{msg_print, msg_warning};
use anyhow::Result;
use chrono_tz::Tz;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A configurable section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Key used to route the selection
    pub key: String,
    /// Name shown in the wizard
    pub name: String,
}

/// Clock format of timestamps written in front of report entries.
#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum TimeFormat {
    #[default]
    #[serde(rename = "24h")]
    H24,
    #[serde(rename = "12h")]
    H12,
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TimeFormat::H24 => write!(f, "24h"),
            TimeFormat::H12 => write!(f, "12h"),
        }
    }
}

/// Skeleton of a newly created daily report.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReportTemplate {
    /// First line of the report; `{{date}}` becomes `YYYY-MM-DD`.
    pub header: String,
    /// Section headings written below the header, separated by blank lines.
    pub sections: Vec<String>,
}

impl Default for ReportTemplate {
    fn default() -> Self {
        ReportTemplate {
            header: "# Daily Report - {{date}}".to_string(),
            sections: vec!["## 本日の作業".to_string(), "## 課題・所感".to_string(), "## 明日の予定".to_string()],
        }
    }
}

/// Daily report file settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReportConfig {
    /// Directory holding one `YYYYMMDD.md` file per day.
    ///
    /// `~/` is expanded and relative paths are taken from the home directory.
    #[serde(default = "default_reports_directory")]
    pub directory: String,

    #[serde(default)]
    pub time_format: TimeFormat,

    #[serde(default)]
    pub template: ReportTemplate,
}

fn default_reports_directory() -> String {
    "~/DailyReports".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            directory: default_reports_directory(),
            time_format: TimeFormat::default(),
            template: ReportTemplate::default(),
        }
    }
}

impl ReportConfig {
    pub fn reports_directory(&self) -> PathBuf {
        resolve_user_path(&self.directory)
    }
}

/// Calendar rendering settings.
///
/// The include flags filter events before they are formatted; the formatter
/// itself always renders whatever it is given.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct CalendarConfig {
    /// IANA name of the zone used to display event times.
    #[serde(default = "resolve_display_time_zone")]
    pub time_zone: String,

    #[serde(default = "enabled")]
    pub include_all_day_events: bool,

    #[serde(default = "enabled")]
    pub include_location: bool,

    #[serde(default = "enabled")]
    pub include_attendee_count: bool,
}

fn enabled() -> bool {
    true
}

impl Default for CalendarConfig {
    fn default() -> Self {
        CalendarConfig {
            time_zone: resolve_display_time_zone(),
            include_all_day_events: true,
            include_location: true,
            include_attendee_count: true,
        }
    }
}

impl CalendarConfig {
    /// The configured zone, or the host zone when the name is unknown.
    pub fn display_zone(&self) -> Tz {
        display_zone(&self.time_zone).unwrap_or_else(|_| {
            msg_warning!(Message::UnknownTimeZone(self.time_zone.clone()));
            display_zone(&resolve_display_time_zone()).unwrap_or(chrono_tz::Asia::Tokyo)
        })
    }

    /// Applies the include flags to a batch of events.
    ///
    /// Excluded all-day events are dropped; excluded locations and attendee
    /// counts are blanked so the formatter leaves them out.
    pub fn apply(&self, events: Vec<CalendarEvent>) -> Vec<CalendarEvent> {
        events
            .into_iter()
            .filter(|event| self.include_all_day_events || !event.is_all_day)
            .map(|mut event| {
                if !self.include_location {
                    event.location.clear();
                }
                if !self.include_attendee_count {
                    event.attendees = 0;
                }
                event
            })
            .collect()
    }

    fn init(config: &Option<CalendarConfig>) -> Result<Self> {
        let default = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleCalendar);

        Ok(CalendarConfig {
            time_zone: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTimeZone.to_string())
                .default(default.time_zone)
                .validate_with(|input: &String| display_zone(input).map(|_| ()).map_err(|e| e.to_string()))
                .interact_text()?
                .trim()
                .to_string(),
            include_all_day_events: Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptIncludeAllDayEvents.to_string())
                .default(default.include_all_day_events)
                .interact()?,
            include_location: Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptIncludeLocation.to_string())
                .default(default.include_location)
                .interact()?,
            include_attendee_count: Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptIncludeAttendeeCount.to_string())
                .default(default.include_attendee_count)
                .interact()?,
        })
    }
}

impl ReportConfig {
    fn init(config: &Option<ReportConfig>) -> Result<Self> {
        let default = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleReport);

        let formats = [TimeFormat::H24, TimeFormat::H12];
        let selected_format = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTimeFormat.to_string())
            .items(&formats)
            .default(formats.iter().position(|f| *f == default.time_format).unwrap_or(0))
            .interact()?;

        let directory: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptReportsDirectory.to_string())
            .default(default.directory)
            .interact_text()?;

        let header: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTemplateHeader.to_string())
            .default(default.template.header)
            .interact_text()?;

        let sections: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTemplateSections.to_string())
            .default(default.template.sections.join("|"))
            .interact_text()?;

        Ok(ReportConfig {
            directory: directory.trim().to_string(),
            time_format: formats[selected_format],
            template: ReportTemplate {
                header,
                sections: sections.split('|').map(str::trim).filter(|s| !s.is_empty()).map(String::from).collect(),
            },
        })
    }
}

/// Root of the configuration file.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report: Option<ReportConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<CalendarConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<GasConfig>,
}

impl Config {
    /// Loads the configuration, or the defaults when no file exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Writes the configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` if there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    pub fn report_or_default(&self) -> ReportConfig {
        self.report.clone().unwrap_or_default()
    }

    pub fn calendar_or_default(&self) -> CalendarConfig {
        self.calendar.clone().unwrap_or_default()
    }

    /// Interactive setup wizard.
    ///
    /// Starts from the current configuration, lets the user pick which
    /// sections to edit and prompts for each with the current values
    /// pre-filled.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "report".to_string(),
                name: "Daily report".to_string(),
            },
            ConfigModule {
                key: "calendar".to_string(),
                name: "Calendar".to_string(),
            },
            GasConfig::module(),
        ];

        let selected = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&modules.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected {
            match modules[selection].key.as_str() {
                "report" => config.report = Some(ReportConfig::init(&config.report)?),
                "calendar" => config.calendar = Some(CalendarConfig::init(&config.calendar)?),
                "gas" => config.gas = Some(GasConfig::init(&config.gas)?),
                _ => {}
            }
        }

        Ok(config)
    }
}

