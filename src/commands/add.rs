//! Appends a timestamped entry to today's report.

use crate::{
    libs::{
        config::Config,
        messages::Message,
        report::{format_entry_time, DailyReport},
    },
    msg_bail_anyhow, msg_success,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Entry text; prompted for when omitted
    text: Option<String>,
}

pub fn cmd(add_args: AddArgs) -> Result<()> {
    let text = match add_args.text {
        Some(text) => text,
        None => Input::<String>::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptEntry.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    let text = text.trim();
    if text.is_empty() {
        msg_bail_anyhow!(Message::EntryEmpty);
    }

    let report_config = Config::read()?.report_or_default();
    let now = Local::now();
    let report = DailyReport::for_date(&report_config, now.date_naive());
    report.create(&report_config.template)?;

    let time = format_entry_time(now.time(), report_config.time_format);
    report.append_entry(&time, text)?;

    msg_success!(Message::EntryAdded(time));
    Ok(())
}
