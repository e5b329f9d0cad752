/// Report rendering for the ds-check binary
///
/// Supports two formats:
/// - Text: numbered `file:line` entries with editor hyperlinks and a snippet
/// - JSON: the whole report as one document, for CI tooling
use crate::check::CheckReport;
use crate::record::MatchRecord;
use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable, with clickable links where the terminal supports them
    #[default]
    Text,

    /// Single JSON document
    Json,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    success: bool,
    errors: usize,
    files: usize,
    files_scanned: usize,
    records: &'a [MatchRecord],
}

pub struct OutputWriter<W: Write> {
    format: OutputFormat,
    writer: W,
    hyperlinks: bool,
}

impl<W: Write> OutputWriter<W> {
    pub fn new(format: OutputFormat, writer: W) -> Self {
        Self {
            format,
            writer,
            hyperlinks: false,
        }
    }

    /// Wrap entries in OSC 8 hyperlinks pointing at the editor link
    pub fn with_hyperlinks(mut self, enabled: bool) -> Self {
        self.hyperlinks = enabled;
        self
    }

    pub fn write_report(&mut self, report: &CheckReport) -> Result<()> {
        match self.format {
            OutputFormat::Text => self.write_text(report)?,
            OutputFormat::Json => {
                let doc = JsonReport {
                    success: report.is_success(),
                    errors: report.error_count(),
                    files: report.file_count(),
                    files_scanned: report.files_scanned,
                    records: &report.records,
                };
                writeln!(self.writer, "{}", serde_json::to_string_pretty(&doc)?)?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }

    fn write_text(&mut self, report: &CheckReport) -> Result<()> {
        writeln!(self.writer)?;

        for (index, record) in report.records.iter().enumerate() {
            let location = format!("{}:{}", record.file, record.line);
            let entry = if self.hyperlinks {
                format!("\x1b]8;;{}\x1b\\{}\x1b]8;;\x1b\\", record.link, location)
            } else {
                location
            };
            writeln!(self.writer, " {}. {}", index + 1, entry)?;
            self.write_snippet(record)?;
            writeln!(self.writer)?;
        }

        if report.is_success() {
            if !report.short_circuited {
                writeln!(self.writer, "  No ds() found.")?;
            }
            writeln!(self.writer, "  ✓ SUCCESS")?;
        } else {
            writeln!(self.writer, "  [ERROR] {}", report.summary())?;
        }
        Ok(())
    }

    fn write_snippet(&mut self, record: &MatchRecord) -> Result<()> {
        let lines: Vec<&str> = record.snippet.lines().collect();
        let width = (record.snippet_start + lines.len()).to_string().len();

        for (offset, text) in lines.iter().enumerate() {
            let number = record.snippet_start + offset;
            let marker = if number == record.line { ">" } else { " " };
            writeln!(self.writer, "   {} {:>width$} | {}", marker, number, text, width = width)?;
        }
        Ok(())
    }
}
