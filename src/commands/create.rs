//! Creates the daily report file from the configured template.

use crate::{
    libs::{config::Config, datetime::date_key, messages::Message, report::DailyReport},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Debug, Args)]
pub struct CreateArgs {
    /// Report date (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<NaiveDate>,
}

pub fn cmd(create_args: CreateArgs) -> Result<()> {
    let report_config = Config::read()?.report_or_default();
    let date = create_args.date.unwrap_or_else(|| Local::now().date_naive());
    let report = DailyReport::for_date(&report_config, date);

    if report.create(&report_config.template)? {
        let file_name = report.path.file_name().map(|name| name.to_string_lossy().to_string()).unwrap_or_default();
        msg_success!(Message::ReportCreated(file_name));
    } else {
        msg_info!(Message::ReportAlreadyExists(date_key(date)));
    }

    msg_print!(Message::ReportPath(report.path.display().to_string()));
    Ok(())
}
