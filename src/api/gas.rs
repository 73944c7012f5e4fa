//! Google Apps Script calendar source.
//!
//! The day's events come from a user-deployed Apps Script web app that reads
//! the user's Google Calendar and answers with a JSON envelope:
//!
//! ```json
//! { "success": true, "date": "2024-01-15", "events": [ { "title": "Standup", ... } ] }
//! { "success": false, "error": "Calendar not found" }
//! ```
//!
//! Most deployments require a Google login, so the envelope is normally
//! obtained by opening [`GasClient::request_url`] in a browser and pasting the
//! response. Deployments that allow anonymous access can be fetched directly
//! with [`GasClient::fetch`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use nippo::api::gas::{parse_response, GasClient, GasConfig};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let config = GasConfig::new("https://script.google.com/macros/s/AKfy/exec");
//! let client = GasClient::new(&config)?;
//! let today = chrono::Local::now().date_naive();
//! let events = parse_response(&client.fetch(today).await?)?.into_events()?;
//! # Ok(())
//! # }
//! ```

use crate::libs::config::ConfigModule;
use crate::libs::datetime::date_key;
use crate::libs::event::CalendarEvent;
use crate::libs::messages::Message;
use crate::msg_print;
use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{Client, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

pub const SCRIPT_URL_PREFIX: &str = "https://script.google.com/macros/s/";
pub const SCRIPT_URL_SUFFIX: &str = "/exec";

/// Seconds to wait for a direct fetch when the configuration does not say.
pub const DEFAULT_TIMEOUT: u64 = 10;

#[derive(Error, Debug)]
pub enum GasError {
    #[error("URL is required")]
    MissingUrl,

    #[error("URL must be a valid Google Apps Script Web App URL starting with https://script.google.com/macros/s/")]
    InvalidPrefix,

    #[error("URL must end with /exec")]
    InvalidSuffix,

    #[error("Invalid Google Apps Script URL format")]
    InvalidScriptId,

    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid response format - missing \"success\" field")]
    MissingSuccess,

    #[error("{0}")]
    Rejected(String),

    #[error("Request timeout: Google Apps Script took too long to respond ({0}s)")]
    Timeout(u64),

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type GasResult<T> = Result<T, GasError>;

/// Checks that `url` is an Apps Script web app endpoint:
/// `https://script.google.com/macros/s/{script id}/exec`.
pub fn validate_url(url: &str) -> GasResult<()> {
    extract_script_id(url).map(|_| ())
}

/// The script id part of a web app URL.
pub fn extract_script_id(url: &str) -> GasResult<&str> {
    let url = url.trim();
    if url.is_empty() {
        return Err(GasError::MissingUrl);
    }

    let rest = url.strip_prefix(SCRIPT_URL_PREFIX).ok_or(GasError::InvalidPrefix)?;
    let script_id = rest.strip_suffix(SCRIPT_URL_SUFFIX).ok_or(GasError::InvalidSuffix)?;

    let valid = !script_id.is_empty() && script_id.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if !valid {
        return Err(GasError::InvalidScriptId);
    }

    Ok(script_id)
}

/// Response envelope returned by the web app.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarResponse {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<CalendarEvent>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CalendarResponse {
    /// Events of a successful response; a missing array means no events.
    pub fn into_events(self) -> GasResult<Vec<CalendarEvent>> {
        if !self.success {
            return Err(GasError::Rejected(
                self.error.unwrap_or_else(|| "Unknown error from Google Apps Script".to_string()),
            ));
        }
        Ok(self.events.unwrap_or_default())
    }
}

/// Parses a pasted or fetched envelope.
///
/// Rejects text that is not JSON and objects without a `success` key.
pub fn parse_response(json: &str) -> GasResult<CalendarResponse> {
    let value: serde_json::Value = serde_json::from_str(json.trim())?;
    if value.get("success").is_none() {
        return Err(GasError::MissingSuccess);
    }
    Ok(serde_json::from_value(value)?)
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GasConfig {
    /// Deployed web app URL, ending in `/exec`.
    pub web_app_url: String,

    /// Direct fetch timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

fn default_timeout() -> u64 {
    DEFAULT_TIMEOUT
}

impl GasConfig {
    pub fn new(web_app_url: &str) -> Self {
        Self {
            web_app_url: web_app_url.trim().to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "gas".to_string(),
            name: "Google Apps Script".to_string(),
        }
    }

    pub fn init(config: &Option<GasConfig>) -> anyhow::Result<Self> {
        let config = config.clone().unwrap_or(Self::new(""));

        msg_print!(Message::ConfigModuleGas);

        Ok(Self {
            web_app_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptGasUrl.to_string())
                .default(config.web_app_url)
                .validate_with(|input: &String| validate_url(input).map_err(|e| e.to_string()))
                .interact_text()?
                .trim()
                .to_string(),
            timeout: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptGasTimeout.to_string())
                .default(config.timeout)
                .interact_text()?,
        })
    }
}

/// Client for a configured web app.
#[derive(Debug)]
pub struct GasClient {
    client: Client,
    config: GasConfig,
}

impl GasClient {
    pub fn new(config: &GasConfig) -> GasResult<Self> {
        validate_url(&config.web_app_url)?;
        Ok(Self {
            client: Client::new(),
            config: config.clone(),
        })
    }

    /// `{web_app_url}?date=YYYY-MM-DD`.
    pub fn request_url(&self, date: NaiveDate) -> GasResult<Url> {
        Url::parse_with_params(&self.config.web_app_url, &[("date", date_key(date))]).map_err(|_| GasError::InvalidScriptId)
    }

    /// Downloads the raw envelope for `date`.
    pub async fn fetch(&self, date: NaiveDate) -> GasResult<String> {
        let url = self.request_url(date)?;
        debug!(%url, "fetching calendar events");

        let response = self
            .client
            .get(url)
            .timeout(Duration::from_secs(self.config.timeout))
            .send()
            .await
            .map_err(|e| if e.is_timeout() { GasError::Timeout(self.config.timeout) } else { GasError::Http(e) })?;

        Ok(response.error_for_status()?.text().await?)
    }
}
