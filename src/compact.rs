//! Compact schedule codec.
//!
//! Compact schedules persist as raw directive lines:
//!
//! ```text
//! Through: 12/31
//! For: Weekdays SummerDesignDay
//! Until: 08:00, 0.0
//! Until: 18:00, 1.0
//! Until: 24:00, 0.0
//! For: AllOtherDays
//! Until: 24:00, 0.0
//! ```
//!
//! [`parse_compact`] turns those lines into [`Row`]s for editing and
//! [`serialize_compact`] writes edited rows back. Both are total: an
//! unrecognized directive becomes [`Row::Unknown`] and is carried through.
//!
//! The pair is not a strict inverse on arbitrary text. An `Unknown` row
//! re-serializes as `Unknown: {value}` rather than its original spelling, and
//! a bare-hour `Until` time (`17`) comes back as `17:00`.
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::OnceLock;

mod lint;

pub use lint::{lint_compact, parse_until_minutes, CompactLintIssue};

/// One structured compact-schedule directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Row {
    Through { value: String },
    For { value: String },
    Interpolate { value: String },
    Until { time: String, value: String },
    Unknown { value: String },
}

impl Row {
    pub fn through(value: &str) -> Self {
        Row::Through {
            value: value.to_string(),
        }
    }

    pub fn for_days(value: &str) -> Self {
        Row::For {
            value: value.to_string(),
        }
    }

    pub fn interpolate(value: &str) -> Self {
        Row::Interpolate {
            value: value.to_string(),
        }
    }

    pub fn until(time: &str, value: &str) -> Self {
        Row::Until {
            time: time.to_string(),
            value: value.to_string(),
        }
    }

    pub fn unknown(value: &str) -> Self {
        Row::Unknown {
            value: value.to_string(),
        }
    }

    /// Directive keyword as written in the line format.
    pub fn label(&self) -> &'static str {
        match self {
            Row::Through { .. } => "Through",
            Row::For { .. } => "For",
            Row::Interpolate { .. } => "Interpolate",
            Row::Until { .. } => "Until",
            Row::Unknown { .. } => "Unknown",
        }
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Row::Until { time, value } => write!(f, "Until: {time}, {value}"),
            Row::Through { value }
            | Row::For { value }
            | Row::Interpolate { value }
            | Row::Unknown { value } => write!(f, "{}: {value}", self.label()),
        }
    }
}

/// Rows returned for a schedule with no lines yet: the whole year, every day,
/// value 0 until midnight.
pub fn default_rows() -> Vec<Row> {
    vec![
        Row::through("12/31"),
        Row::for_days("AllDays"),
        Row::until("24:00", "0"),
    ]
}

fn directive_regex() -> &'static Regex {
    static DIRECTIVE: OnceLock<Regex> = OnceLock::new();
    DIRECTIVE.get_or_init(|| {
        Regex::new(r"(?is)^(through|for|interpolate|until):(.*)$")
            .expect("regex for compact directives")
    })
}

/// Parse raw compact lines into rows.
///
/// Blank lines are dropped. When nothing is left the [`default_rows`]
/// scaffold is returned instead of an empty list.
pub fn parse_compact<S: AsRef<str>>(lines: &[S]) -> Vec<Row> {
    let rows: Vec<Row> = lines
        .iter()
        .map(|line| line.as_ref().trim())
        .filter(|line| !line.is_empty())
        .map(parse_line)
        .collect();
    if rows.is_empty() {
        return default_rows();
    }
    rows
}

fn parse_line(line: &str) -> Row {
    let Some(caps) = directive_regex().captures(line) else {
        return Row::unknown(line);
    };
    let keyword = caps
        .get(1)
        .map(|m| m.as_str().to_ascii_lowercase())
        .unwrap_or_default();
    let rest = caps.get(2).map(|m| m.as_str().trim()).unwrap_or_default();
    match keyword.as_str() {
        "through" => Row::through(rest),
        "for" => Row::for_days(rest),
        "interpolate" => Row::interpolate(rest),
        "until" => match rest.split_once(',') {
            Some((time, value)) => Row::until(time.trim(), value.trim()),
            None => Row::until(rest, ""),
        },
        _ => Row::unknown(line),
    }
}

/// Normalize an `Until` time: a bare hour `N` becomes `N:00`.
pub fn normalize_until_time(time: &str) -> String {
    let trimmed = time.trim();
    if !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit()) {
        return format!("{trimmed}:00");
    }
    trimmed.to_string()
}

/// Serialize rows back to compact lines, preserving row order.
///
/// `Until` rows with an empty time and other rows with an empty value are
/// omitted.
pub fn serialize_compact(rows: &[Row]) -> Vec<String> {
    let mut lines = Vec::with_capacity(rows.len());
    for row in rows {
        match row {
            Row::Until { time, value } => {
                let time = normalize_until_time(time);
                if time.is_empty() {
                    continue;
                }
                lines.push(format!("Until: {time}, {}", value.trim()));
            }
            Row::Through { value }
            | Row::For { value }
            | Row::Interpolate { value }
            | Row::Unknown { value } => {
                let value = value.trim();
                if value.is_empty() {
                    continue;
                }
                lines.push(format!("{}: {value}", row.label()));
            }
        }
    }
    lines
}

#[cfg(test)]
#[path = "compact_tests.rs"]
mod tests;
