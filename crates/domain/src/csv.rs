//! Comma separated tables: quoted fields, `""` escapes, embedded newlines.

use filekit_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

const DELIMITER: char = ',';
const QUOTE: char = '"';

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Parse `content`. With `header_first` the first record becomes the header row.
    pub fn parse(content: &str, header_first: bool) -> DomainResult<Self> {
        let mut records = parse_records(content.strip_prefix('\u{feff}').unwrap_or(content))?;
        let headers = if header_first && !records.is_empty() { records.remove(0) } else { Vec::new() };
        Ok(Self { headers, rows: records })
    }

    /// Number of data rows, headers excluded.
    pub fn total(&self) -> usize {
        self.rows.len()
    }

    /// All data cells, row-major.
    pub fn cells(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().flatten().map(String::as_str)
    }

    pub fn render(&self, line_terminator: &str) -> String {
        let mut out = String::new();
        if !self.headers.is_empty() {
            push_record(&mut out, &self.headers, line_terminator);
        }
        for row in &self.rows {
            push_record(&mut out, row, line_terminator);
        }
        out
    }
}

fn push_record(out: &mut String, fields: &[String], line_terminator: &str) {
    for (idx, field) in fields.iter().enumerate() {
        if idx > 0 {
            out.push(DELIMITER);
        }
        if field.contains([DELIMITER, QUOTE, '\n', '\r']) {
            out.push(QUOTE);
            out.push_str(&field.replace(QUOTE, "\"\""));
            out.push(QUOTE);
        } else {
            out.push_str(field);
        }
    }
    out.push_str(line_terminator);
}

fn parse_records(content: &str) -> DomainResult<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut record: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut line = 1usize;
    let mut quote_line = 0usize;
    let mut chars = content.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            match c {
                QUOTE if chars.peek() == Some(&QUOTE) => {
                    chars.next();
                    field.push(QUOTE);
                }
                QUOTE => in_quotes = false,
                '\n' => {
                    line += 1;
                    field.push(c);
                }
                _ => field.push(c),
            }
            continue;
        }
        match c {
            QUOTE if field.is_empty() => {
                in_quotes = true;
                quote_line = line;
            }
            DELIMITER => record.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' | '\r' => {
                line += 1;
                finish_record(&mut records, &mut record, &mut field);
            }
            _ => field.push(c),
        }
    }

    if in_quotes {
        return Err(DomainError::MalformedCsv { line: quote_line, details: "unterminated quoted field".into() });
    }
    finish_record(&mut records, &mut record, &mut field);
    Ok(records)
}

fn finish_record(records: &mut Vec<Vec<String>>, record: &mut Vec<String>, field: &mut String) {
    if record.is_empty() && field.is_empty() {
        // blank line
        return;
    }
    record.push(std::mem::take(field));
    records.push(std::mem::take(record));
}
