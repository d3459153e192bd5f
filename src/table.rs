//! The CSV dialect shared by the NPC and map tables.
//!
//! Comma-delimited with a header row. Spaces at the start of a field are
//! skipped, quoted text is kept exactly as written, and rows may differ in
//! length. Blank rows after the header are recorded rather than silently
//! dropped, so callers can reject them.

use std::io;

use csv::{ReaderBuilder, Trim};

use crate::error::Result;

/// A table read fully into memory, ready for parsing.
pub(crate) struct Table {
    text: String,
    blank_lines: Vec<u64>,
}

impl Table {
    pub(crate) fn read<R: io::Read>(mut rdr: R) -> Result<Self> {
        let mut raw = String::new();
        rdr.read_to_string(&mut raw).map_err(csv::Error::from)?;
        Ok(Self::parse(&raw))
    }

    fn parse(raw: &str) -> Self {
        let mut text = String::with_capacity(raw.len());
        let mut blank_lines = Vec::new();
        let mut line = 1;
        let mut in_quotes = false;
        let mut field_start = true;
        let mut line_empty = true;
        let mut seen_content = false;

        let mut chars = raw.chars().peekable();
        while let Some(c) = chars.next() {
            if c == '\n' {
                if !in_quotes && line_empty && seen_content {
                    blank_lines.push(line);
                }
                line += 1;
            }

            if in_quotes {
                text.push(c);
                if c == '"' {
                    if chars.peek() == Some(&'"') {
                        text.push('"');
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                }
                continue;
            }

            match c {
                '\n' => {
                    field_start = true;
                    line_empty = true;
                }
                '\r' => field_start = true,
                ' ' if field_start => continue,
                '"' if field_start => {
                    in_quotes = true;
                    field_start = false;
                    line_empty = false;
                }
                ',' => {
                    field_start = true;
                    line_empty = false;
                }
                _ => {
                    field_start = false;
                    line_empty = false;
                }
            }
            if !line_empty {
                seen_content = true;
            }
            text.push(c);
        }

        Self { text, blank_lines }
    }

    /// Line number of the first blank row after the header, if any.
    pub(crate) fn first_blank_line(&self) -> Option<u64> {
        self.blank_lines.first().copied()
    }

    pub(crate) fn reader(&self) -> csv::Reader<&[u8]> {
        ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::None)
            .from_reader(self.text.as_bytes())
    }
}
