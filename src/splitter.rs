//! Whitespace-delimited text to CSV.
//!
//! Each non-blank input line becomes one CSV record whose fields are the
//! line's whitespace-separated tokens. Fields are never quoted and no
//! header row is written.

use std::io;
use std::iter;
use std::path::Path;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use tracing::info;

use crate::error::Result;
use crate::output::{read_source, write_output};

/// Counts from one text-to-CSV run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitReport {
    pub lines_read: usize,
    pub records_written: usize,
}

/// Split one line into fields, or `None` if the line is blank.
pub fn split_line(line: &str) -> Option<Vec<String>> {
    let fields: Vec<String> = line.split_whitespace().map(str::to_string).collect();
    if fields.is_empty() { None } else { Some(fields) }
}

/// Split every non-blank line of `text`, preserving line order.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn split_text(text: &str) -> Vec<Vec<String>> {
    lines(text).filter_map(split_line).collect()
}

fn lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let (line, next) = match rest.find(['\n', '\r']) {
            Some(i) => {
                let end = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                (&rest[..i], &rest[i + end..])
            }
            None => (rest, ""),
        };
        rest = next;
        Some(line)
    })
}

/// Render field lists as unquoted, newline-terminated CSV.
pub fn render_csv(records: &[Vec<String>]) -> Result<String> {
    let mut bytes = Vec::new();
    {
        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .quote_style(QuoteStyle::Never)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(&mut bytes);

        for record in records {
            writer.write_record(record)?;
        }
        writer.flush().map_err(csv::Error::from)?;
    }
    let rendered = String::from_utf8(bytes)
        .map_err(|e| csv::Error::from(io::Error::new(io::ErrorKind::InvalidData, e)))?;
    Ok(rendered)
}

/// Convert the text file at `input` into a CSV file at `output`.
///
/// The whole output is built in memory and written once at the end.
pub fn convert_file(input: &Path, output: &Path) -> Result<SplitReport> {
    let text = read_source(input)?;
    let records = split_text(&text);
    let rendered = render_csv(&records)?;
    write_output(output, &rendered)?;

    let report = SplitReport {
        lines_read: lines(&text).count(),
        records_written: records.len(),
    };
    info!(
        lines = report.lines_read,
        records = report.records_written,
        output = %output.display(),
        "converted text to CSV"
    );
    Ok(report)
}
