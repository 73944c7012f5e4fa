//! Daily report documents.
//!
//! One Markdown file per day, named `YYYYMMDD.md`, created from the
//! configured template. Entries are appended as timestamped list items, and
//! the meetings section produced by the [formatter](crate::libs::formatter)
//! is inserted or replaced in place.
//!
//! ## Sections
//!
//! A section starts at a line equal to its `## ` header (trailing whitespace
//! ignored) and runs until the next line starting with `## `, or to the end
//! of the document. Everything outside the section is left exactly as it was.

use crate::libs::config::{ReportConfig, ReportTemplate, TimeFormat};
use crate::libs::datetime::date_key;
use crate::libs::formatter::MEETINGS_HEADER;
use anyhow::Result;
use chrono::{Datelike, NaiveDate, NaiveTime};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::debug;

const SECTION_PREFIX: &str = "## ";
const TITLE_PREFIX: &str = "# ";

/// `YYYYMMDD.md`.
pub fn report_file_name(date: NaiveDate) -> String {
    format!("{:04}{:02}{:02}.md", date.year(), date.month(), date.day())
}

/// Initial content of a report dated `date`.
pub fn render_template(template: &ReportTemplate, date: NaiveDate) -> String {
    let header = template.header.replace("{{date}}", &date_key(date));
    format!("{}\n\n{}\n", header, template.sections.join("\n\n"))
}

/// Clock time shown in front of an entry: `14:05` or `02:05 PM`.
pub fn format_entry_time(time: NaiveTime, format: TimeFormat) -> String {
    match format {
        TimeFormat::H24 => time.format("%H:%M").to_string(),
        TimeFormat::H12 => time.format("%I:%M %p").to_string(),
    }
}

/// A report entry line, including its newline.
pub fn render_entry(time: &str, text: &str) -> String {
    format!("- {} {}\n", time, text)
}

fn line_content(line: &str) -> &str {
    line.trim_end_matches(['\n', '\r'])
}

/// Replaces the section headed `header` with `block`, or inserts `block` when
/// the document has no such section.
///
/// A new section goes right after the document title and the blank line that
/// follows it, or at the very top when there is no `# ` title.
pub fn upsert_section(document: &str, header: &str, block: &str) -> String {
    let lines = document.split_inclusive('\n').collect::<Vec<_>>();

    if let Some(start) = lines.iter().position(|line| line_content(line).trim_end() == header) {
        let end = lines[start + 1..]
            .iter()
            .position(|line| line.starts_with(SECTION_PREFIX))
            .map(|offset| start + 1 + offset)
            .unwrap_or(lines.len());

        return [lines[..start].concat(), block.to_string(), lines[end..].concat()].concat();
    }

    let insert_at = match lines.iter().position(|line| line.starts_with(TITLE_PREFIX)) {
        Some(title) => match lines.get(title + 1) {
            Some(next) if line_content(next).trim().is_empty() => title + 2,
            _ => title + 1,
        },
        None => 0,
    };

    let mut head = lines[..insert_at].concat();
    if !head.is_empty() {
        if !head.ends_with('\n') {
            head.push('\n');
        }
        if !head.ends_with("\n\n") {
            head.push('\n');
        }
    }

    [head, block.to_string(), lines[insert_at..].concat()].concat()
}

/// The report file for one day.
#[derive(Debug, Clone)]
pub struct DailyReport {
    pub date: NaiveDate,
    pub path: PathBuf,
}

impl DailyReport {
    pub fn new(directory: &Path, date: NaiveDate) -> Self {
        DailyReport {
            date,
            path: directory.join(report_file_name(date)),
        }
    }

    pub fn for_date(config: &ReportConfig, date: NaiveDate) -> Self {
        Self::new(&config.reports_directory(), date)
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Writes the template unless the file already exists.
    ///
    /// Returns `true` when a new file was created.
    pub fn create(&self, template: &ReportTemplate) -> Result<bool> {
        if self.exists() {
            return Ok(false);
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        fs::write(&self.path, render_template(template, self.date))?;
        debug!(path = %self.path.display(), "daily report created");
        Ok(true)
    }

    pub fn read(&self) -> Result<String> {
        Ok(fs::read_to_string(&self.path)?)
    }

    /// Appends `- {time} {text}` to the report.
    pub fn append_entry(&self, time: &str, text: &str) -> Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(&self.path)?;
        file.write_all(render_entry(time, text).as_bytes())?;
        Ok(())
    }

    /// Puts a rendered meetings section into the report, replacing any
    /// previous one.
    pub fn upsert_meetings(&self, section: &str) -> Result<()> {
        let document = self.read()?;
        fs::write(&self.path, upsert_section(&document, MEETINGS_HEADER, section))?;
        Ok(())
    }
}
