//! Renders the day's calendar meetings and optionally writes them into the
//! daily report.
//!
//! The calendar response is read from `--file`, fetched directly with
//! `--fetch`, or pasted interactively after opening the request URL in a
//! browser.

use crate::{
    api::gas::{parse_response, GasClient, GasConfig},
    libs::{
        config::Config,
        datetime::date_key,
        event::CalendarEvent,
        formatter::{bucket_by_time_of_day, render_day_summary, render_event_detail, render_report_section},
        messages::Message,
        report::DailyReport,
        view::View,
    },
    msg_bail_anyhow, msg_debug, msg_error_anyhow, msg_info, msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate, TimeZone};
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};
use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};

#[derive(Debug, Args)]
pub struct MeetingsArgs {
    /// Read the calendar response from a JSON file
    #[arg(short, long, conflicts_with = "fetch")]
    file: Option<PathBuf>,

    /// Request the calendar response directly from the web app
    #[arg(long)]
    fetch: bool,

    /// Day to render (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,

    /// Write the meetings section into the daily report
    #[arg(short, long)]
    insert: bool,

    /// Print a one-sentence summary of the day
    #[arg(short, long)]
    summary: bool,

    /// Print a detail block for every event
    #[arg(long)]
    detail: bool,

    /// Print events grouped by time of day
    #[arg(short, long)]
    table: bool,
}

pub async fn cmd(meetings_args: MeetingsArgs) -> Result<()> {
    let config = Config::read()?;
    let calendar = config.calendar_or_default();
    let tz = calendar.display_zone();
    let date = meetings_args.date.unwrap_or_else(|| Local::now().date_naive());

    let json = match &meetings_args.file {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let Some(gas_config) = &config.gas else {
                msg_bail_anyhow!(Message::CalendarNotConfigured);
            };
            if meetings_args.fetch {
                fetch(gas_config, date).await?
            } else {
                paste(gas_config, date)?
            }
        }
    };

    let events = parse_response(&json)?.into_events()?;
    msg_debug!(Message::CalendarEventsLoaded(events.len(), date_key(date)));
    let events: Vec<CalendarEvent> = calendar.apply(events);

    let output = MeetingsOutput {
        summary: meetings_args.summary,
        detail: meetings_args.detail,
        table: meetings_args.table,
    };
    write_meetings(&mut io::stdout().lock(), &events, &tz, output)?;

    if meetings_args.insert {
        let report_config = config.report_or_default();
        let report = DailyReport::for_date(&report_config, date);
        report.create(&report_config.template)?;
        report.upsert_meetings(&render_report_section(&events, &tz))?;
        msg_success!(Message::MeetingsInserted(report.path.display().to_string()));
    }

    Ok(())
}

/// Optional views printed after the meetings section.
#[derive(Debug, Default, Clone, Copy)]
pub struct MeetingsOutput {
    pub summary: bool,
    pub detail: bool,
    pub table: bool,
}

/// Writes the rendered meetings to `out`.
///
/// This is the command's product and goes to stdout whatever the debug mode;
/// status lines keep using the message macros.
pub fn write_meetings<W: Write, Tz: TimeZone>(out: &mut W, events: &[CalendarEvent], tz: &Tz, output: MeetingsOutput) -> io::Result<()> {
    write!(out, "{}", render_report_section(events, tz))?;

    if output.summary {
        writeln!(out, "{}", render_day_summary(events, tz))?;
    }

    if output.detail {
        for event in events.iter().filter(|event| event.has_title()) {
            writeln!(out, "\n{}\n", render_event_detail(event, tz))?;
        }
    }

    if output.table {
        writeln!(out, "{}", Message::MeetingsByTimeOfDay)?;
        View::time_of_day_table(&bucket_by_time_of_day(events, tz), tz).print(out)?;
    }

    Ok(())
}

async fn fetch(gas_config: &GasConfig, date: NaiveDate) -> Result<String> {
    GasClient::new(gas_config)?
        .fetch(date)
        .await
        .map_err(|e| msg_error_anyhow!(Message::CalendarFetchFailed(e.to_string())))
}

fn paste(gas_config: &GasConfig, date: NaiveDate) -> Result<String> {
    let url = GasClient::new(gas_config)?.request_url(date)?;
    msg_info!(Message::CalendarOpenUrl(url.to_string()), true);
    msg_info!(Message::CalendarPasteInstructions);

    let json = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPasteJson.to_string())
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().is_empty() {
                return Err(Message::InputRequired.to_string());
            }
            parse_response(input).map(|_| ()).map_err(|e| e.to_string())
        })
        .interact_text()?;

    Ok(json)
}
