//! Structural checks for compact schedule rows.
//!
//! The codec accepts anything; lint reports what the simulation engine would
//! reject: fields out of sequence, day blocks that stop short of midnight, and
//! a year that does not end on 12/31.
use super::Row;
use serde::{Deserialize, Serialize};

const MINUTES_PER_DAY: u32 = 24 * 60;

/// One structural problem, anchored to a 0-based row index when it has one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactLintIssue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row: Option<usize>,
    pub message: String,
}

impl CompactLintIssue {
    fn at(row: usize, message: String) -> Self {
        Self {
            row: Some(row),
            message,
        }
    }

    fn general(message: &str) -> Self {
        Self {
            row: None,
            message: message.to_string(),
        }
    }
}

/// Parse an `Until` time (`H:MM`, `HH:MM` or a bare hour) into minutes.
///
/// Valid range is `00:00..=24:00`.
pub fn parse_until_minutes(time: &str) -> Option<u32> {
    let normalized = super::normalize_until_time(time);
    let (hours, minutes) = normalized.split_once(':')?;
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return None;
    }
    let hours: u32 = hours.parse().ok()?;
    let minutes: u32 = minutes.parse().ok()?;
    if minutes >= 60 {
        return None;
    }
    let total = hours * 60 + minutes;
    (total <= MINUTES_PER_DAY).then_some(total)
}

struct DayBlock {
    start_row: usize,
    last_until: Option<u32>,
}

/// Report structural problems in `rows`. Empty when the rows are usable.
pub fn lint_compact(rows: &[Row]) -> Vec<CompactLintIssue> {
    let mut issues = Vec::new();
    if rows.is_empty() {
        issues.push(CompactLintIssue::general("schedule has no rows"));
        return issues;
    }
    if !matches!(rows[0], Row::Through { .. }) {
        issues.push(CompactLintIssue::at(
            0,
            format!("row 1 is {}, expected Through", rows[0].label()),
        ));
    }

    let mut block: Option<DayBlock> = None;
    let mut awaiting_for: Option<usize> = None;
    let mut last_through: Option<(usize, &str)> = None;

    for (idx, row) in rows.iter().enumerate() {
        if !matches!(row, Row::For { .. }) {
            if let Some(through_idx) = awaiting_for.take() {
                issues.push(CompactLintIssue::at(
                    through_idx,
                    format!("Through at row {} is not followed by For", through_idx + 1),
                ));
            }
        }
        match row {
            Row::Through { value } => {
                close_block(block.take(), &mut issues);
                awaiting_for = Some(idx);
                last_through = Some((idx, value.as_str()));
            }
            Row::For { .. } => {
                close_block(block.take(), &mut issues);
                awaiting_for = None;
                block = Some(DayBlock {
                    start_row: idx,
                    last_until: None,
                });
            }
            Row::Interpolate { .. } => {
                if block.is_none() {
                    issues.push(CompactLintIssue::at(
                        idx,
                        format!("Interpolate at row {} is outside a For block", idx + 1),
                    ));
                }
            }
            Row::Until { time, .. } => {
                let Some(current) = block.as_mut() else {
                    issues.push(CompactLintIssue::at(
                        idx,
                        format!("Until at row {} is outside a For block", idx + 1),
                    ));
                    continue;
                };
                match parse_until_minutes(time) {
                    None => issues.push(CompactLintIssue::at(
                        idx,
                        format!("Until at row {} has invalid time {time:?}", idx + 1),
                    )),
                    Some(minutes) => {
                        if current.last_until.is_some_and(|last| minutes <= last) {
                            issues.push(CompactLintIssue::at(
                                idx,
                                format!("Until at row {} does not advance the time", idx + 1),
                            ));
                        }
                        current.last_until = Some(minutes);
                    }
                }
            }
            Row::Unknown { value } => {
                issues.push(CompactLintIssue::at(
                    idx,
                    format!("row {} is not a recognized directive: {value}", idx + 1),
                ));
            }
        }
    }

    if let Some(through_idx) = awaiting_for {
        issues.push(CompactLintIssue::at(
            through_idx,
            format!("Through at row {} is not followed by For", through_idx + 1),
        ));
    }
    close_block(block, &mut issues);
    match last_through {
        Some((idx, value)) if value.trim() != "12/31" => issues.push(CompactLintIssue::at(
            idx,
            format!("last Through is {:?}, expected \"12/31\"", value.trim()),
        )),
        Some(_) => {}
        None => issues.push(CompactLintIssue::general("schedule has no Through row")),
    }
    issues
}

fn close_block(block: Option<DayBlock>, issues: &mut Vec<CompactLintIssue>) {
    let Some(block) = block else {
        return;
    };
    match block.last_until {
        None => issues.push(CompactLintIssue::at(
            block.start_row,
            format!("For at row {} has no Until", block.start_row + 1),
        )),
        Some(minutes) if minutes != MINUTES_PER_DAY => issues.push(CompactLintIssue::at(
            block.start_row,
            format!("For at row {} does not end at 24:00", block.start_row + 1),
        )),
        Some(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compact::{default_rows, parse_compact};

    #[test]
    fn scaffold_is_clean() {
        assert!(lint_compact(&default_rows()).is_empty());
    }

    #[test]
    fn multi_period_schedule_is_clean() {
        let rows = parse_compact(&[
            "Through: 6/30",
            "For: AllDays",
            "Until: 12, 0",
            "Until: 24:00, 1",
            "Through: 12/31",
            "For: Weekdays",
            "Interpolate: Average",
            "Until: 24:00, 0.5",
            "For: AllOtherDays",
            "Until: 24:00, 0",
        ]);
        assert_eq!(lint_compact(&rows), Vec::new());
    }

    #[test]
    fn parses_until_times() {
        assert_eq!(parse_until_minutes("8:30"), Some(510));
        assert_eq!(parse_until_minutes("24:00"), Some(1440));
        assert_eq!(parse_until_minutes("17"), Some(1020));
        assert_eq!(parse_until_minutes("24:30"), None);
        assert_eq!(parse_until_minutes("7:5"), None);
        assert_eq!(parse_until_minutes("noon"), None);
        assert_eq!(parse_until_minutes(""), None);
    }

    #[test]
    fn reports_block_that_stops_before_midnight() {
        let rows = parse_compact(&["Through: 12/31", "For: AllDays", "Until: 18:00, 1"]);
        let issues = lint_compact(&rows);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].row, Some(1));
        assert!(issues[0].message.contains("does not end at 24:00"));
    }

    #[test]
    fn reports_sequence_problems() {
        let rows = parse_compact(&[
            "For: AllDays",
            "Until: 24:00, 1",
            "Through: 11/30",
            "Until: 12:00, 1",
            "Garbage",
        ]);
        let messages: Vec<String> = lint_compact(&rows)
            .into_iter()
            .map(|issue| issue.message)
            .collect();
        assert_eq!(
            messages,
            vec![
                "row 1 is For, expected Through".to_string(),
                "Through at row 3 is not followed by For".to_string(),
                "Until at row 4 is outside a For block".to_string(),
                "row 5 is not a recognized directive: Garbage".to_string(),
                "last Through is \"11/30\", expected \"12/31\"".to_string(),
            ]
        );
    }

    #[test]
    fn reports_non_increasing_until() {
        let rows = parse_compact(&[
            "Through: 12/31",
            "For: AllDays",
            "Until: 12:00, 1",
            "Until: 08:00, 0",
            "Until: 24:00, 0",
        ]);
        let issues = lint_compact(&rows);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].row, Some(3));
    }
}
