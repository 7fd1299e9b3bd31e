//! INI documents with typed values.
//!
//! Values are addressed by `(section, key)`; both compare ASCII case-insensitively.
//! Arrays are stored either on one line as `Key=(a,b,c)` or as repeated
//! `+Key=value` lines. Comments and unknown lines are preserved on rewrite.

use std::fmt;

use filekit_shared_kernel::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScalarType {
    String,
    Integer,
    Float,
    Bool,
}

/// Explicit type tag supplied by the caller when reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    Scalar(ScalarType),
    Array(ScalarType),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scalar {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigValue {
    Scalar(Scalar),
    Array(Vec<Scalar>),
}

impl Scalar {
    pub fn parse(raw: &str, ty: ScalarType) -> Option<Self> {
        let raw = raw.trim();
        match ty {
            ScalarType::String => Some(Self::String(unquote(raw).unwrap_or_else(|| raw.to_string()))),
            ScalarType::Integer => raw.parse().ok().map(Self::Integer),
            ScalarType::Float => raw.parse().ok().map(Self::Float),
            ScalarType::Bool => match raw.to_ascii_lowercase().as_str() {
                "true" | "yes" | "on" | "1" => Some(Self::Bool(true)),
                "false" | "no" | "off" | "0" => Some(Self::Bool(false)),
                _ => None,
            },
        }
    }

    pub fn scalar_type(&self) -> ScalarType {
        match self {
            Self::String(_) => ScalarType::String,
            Self::Integer(_) => ScalarType::Integer,
            Self::Float(_) => ScalarType::Float,
            Self::Bool(_) => ScalarType::Bool,
        }
    }

    fn render_quoted(&self) -> String {
        match self {
            Self::String(s) => quote(s),
            other => other.to_string(),
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<i64> for Scalar {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '"' || c == '\\' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

fn unquote(raw: &str) -> Option<String> {
    let inner = raw.strip_prefix('"')?.strip_suffix('"')?;
    let mut out = String::with_capacity(inner.len());
    let mut chars = inner.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            out.push(chars.next().unwrap_or('\\'));
        } else {
            out.push(c);
        }
    }
    Some(out)
}

/// Split the body of `(a,"b,c",d)` on commas outside quotes.
fn split_single_line(raw: &str) -> Vec<&str> {
    let body = raw.trim();
    let body = body.strip_prefix('(').and_then(|b| b.strip_suffix(')')).unwrap_or(body);
    if body.trim().is_empty() {
        return Vec::new();
    }
    let mut parts = Vec::new();
    let mut start = 0;
    let mut in_quotes = false;
    let mut escaped = false;
    for (idx, c) in body.char_indices() {
        match c {
            _ if escaped => escaped = false,
            '\\' if in_quotes => escaped = true,
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                parts.push(&body[start..idx]);
                start = idx + 1;
            }
            _ => {}
        }
    }
    parts.push(&body[start..]);
    parts
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Line {
    Entry { append: bool, key: String, value: String },
    Raw(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Section {
    name: String,
    header: String,
    lines: Vec<Line>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniDocument {
    preamble: Vec<String>,
    sections: Vec<Section>,
}

impl IniDocument {
    pub fn parse(text: &str) -> Self {
        let mut doc = Self::default();
        for raw in text.lines() {
            let trimmed = raw.trim();
            if let Some(name) = trimmed.strip_prefix('[').and_then(|t| t.strip_suffix(']')) {
                doc.sections.push(Section { name: name.trim().to_string(), header: raw.to_string(), lines: Vec::new() });
                continue;
            }
            let line = parse_line(raw);
            match doc.sections.last_mut() {
                Some(section) => section.lines.push(line),
                None => doc.preamble.push(raw.to_string()),
            }
        }
        doc
    }

    pub fn render(&self, line_terminator: &str) -> String {
        let mut out = String::new();
        for raw in &self.preamble {
            out.push_str(raw);
            out.push_str(line_terminator);
        }
        for section in &self.sections {
            out.push_str(&section.header);
            out.push_str(line_terminator);
            for line in &section.lines {
                match line {
                    Line::Entry { append, key, value } => {
                        if *append {
                            out.push('+');
                        }
                        out.push_str(key);
                        out.push('=');
                        out.push_str(value);
                    }
                    Line::Raw(raw) => out.push_str(raw),
                }
                out.push_str(line_terminator);
            }
        }
        out
    }

    pub fn has_section(&self, section: &str) -> bool {
        self.section(section).is_some()
    }

    /// Raw values recorded for `key`, in file order.
    pub fn raw_values(&self, section: &str, key: &str) -> Vec<&str> {
        self.section(section)
            .map(|s| {
                s.lines
                    .iter()
                    .filter_map(|line| match line {
                        Line::Entry { key: k, value, .. } if k.eq_ignore_ascii_case(key) => Some(value.as_str()),
                        _ => None,
                    })
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Read a typed value. `Ok(None)` when the key is absent.
    pub fn read(
        &self,
        section: &str,
        key: &str,
        ty: ValueType,
        single_line_array: bool,
    ) -> DomainResult<Option<ConfigValue>> {
        let raws = self.raw_values(section, key);
        let Some(&last) = raws.last() else {
            return Ok(None);
        };
        let mismatch = |expected: String, raw: &str| DomainError::ConfigValueMismatch {
            section: section.to_string(),
            key: key.to_string(),
            expected,
            raw: raw.to_string(),
        };
        match ty {
            ValueType::Scalar(scalar) => Scalar::parse(last, scalar)
                .map(|v| Some(ConfigValue::Scalar(v)))
                .ok_or_else(|| mismatch(format!("{scalar:?}"), last)),
            ValueType::Array(scalar) => {
                let items: Vec<&str> = if single_line_array { split_single_line(last) } else { raws };
                items
                    .into_iter()
                    .map(|raw| Scalar::parse(raw, scalar).ok_or_else(|| mismatch(format!("array of {scalar:?}"), raw)))
                    .collect::<DomainResult<Vec<_>>>()
                    .map(|values| Some(ConfigValue::Array(values)))
            }
        }
    }

    /// Replace every entry for `key` with `value`, creating the section when absent.
    pub fn write(&mut self, section: &str, key: &str, value: &ConfigValue, single_line_array: bool) {
        let new_lines: Vec<Line> = match value {
            ConfigValue::Scalar(scalar) => {
                vec![Line::Entry { append: false, key: key.to_string(), value: scalar.to_string() }]
            }
            ConfigValue::Array(items) if single_line_array => {
                let body: Vec<String> = items.iter().map(Scalar::render_quoted).collect();
                vec![Line::Entry { append: false, key: key.to_string(), value: format!("({})", body.join(",")) }]
            }
            ConfigValue::Array(items) => items
                .iter()
                .map(|item| Line::Entry { append: true, key: key.to_string(), value: item.to_string() })
                .collect(),
        };

        let idx = match self.sections.iter().position(|s| s.name.eq_ignore_ascii_case(section)) {
            Some(idx) => idx,
            None => {
                self.sections.push(Section {
                    name: section.to_string(),
                    header: format!("[{section}]"),
                    lines: Vec::new(),
                });
                self.sections.len() - 1
            }
        };
        let lines = &mut self.sections[idx].lines;
        let insert_at = lines
            .iter()
            .position(|line| matches!(line, Line::Entry { key: k, .. } if k.eq_ignore_ascii_case(key)))
            .unwrap_or_else(|| last_entry_end(lines));
        lines.retain(|line| !matches!(line, Line::Entry { key: k, .. } if k.eq_ignore_ascii_case(key)));
        let insert_at = insert_at.min(lines.len());
        lines.splice(insert_at..insert_at, new_lines);
    }

    /// Drop every entry for `key`. Returns whether anything was removed.
    pub fn remove(&mut self, section: &str, key: &str) -> bool {
        let Some(section) = self.sections.iter_mut().find(|s| s.name.eq_ignore_ascii_case(section)) else {
            return false;
        };
        let before = section.lines.len();
        section.lines.retain(|line| !matches!(line, Line::Entry { key: k, .. } if k.eq_ignore_ascii_case(key)));
        section.lines.len() != before
    }

    fn section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name.eq_ignore_ascii_case(name))
    }
}

/// Position after the last non-blank line, so new keys land before trailing blank lines.
fn last_entry_end(lines: &[Line]) -> usize {
    lines
        .iter()
        .rposition(|line| !matches!(line, Line::Raw(raw) if raw.trim().is_empty()))
        .map_or(0, |idx| idx + 1)
}

fn parse_line(raw: &str) -> Line {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.starts_with(';') || trimmed.starts_with('#') {
        return Line::Raw(raw.to_string());
    }
    let Some((key, value)) = trimmed.split_once('=') else {
        return Line::Raw(raw.to_string());
    };
    let (append, key) = match key.strip_prefix('+') {
        Some(rest) => (true, rest),
        None => (false, key),
    };
    let key = key.trim();
    if key.is_empty() {
        return Line::Raw(raw.to_string());
    }
    Line::Entry { append, key: key.to_string(), value: value.trim().to_string() }
}
