use super::index::{duplicate_names, FlaggedNames, MissingRefs, NameIndex};
use super::types::{Issue, IssueCategory};
use crate::compact::{lint_compact, parse_compact};
use crate::document::{ConfigurationDocument, ScheduleKind};
use crate::util::non_blank;

const HOURS_PER_DAY: usize = 24;

#[derive(Debug, Default)]
pub(super) struct ScheduleFindings {
    pub(super) missing_schedules: Vec<String>,
    pub(super) missing_setpoints: Vec<String>,
    pub(super) incomplete_setpoints: Vec<String>,
    pub(super) duplicate_schedules: Vec<String>,
    pub(super) invalid_schedules: Vec<String>,
}

pub(super) fn check_schedules(doc: &ConfigurationDocument) -> (ScheduleFindings, Vec<Issue>) {
    let mut issues = Vec::new();

    let missing = missing_schedule_refs(doc);
    issues.extend(
        missing
            .messages("schedule")
            .into_iter()
            .map(|message| Issue::warning(IssueCategory::Schedules, message)),
    );

    let setpoints = NameIndex::from_names(doc.thermostat_setpoints.iter().map(|s| s.name.as_str()));
    let mut missing_setpoints = MissingRefs::default();
    for reference in doc.setpoint_references() {
        if !setpoints.contains(reference.target) {
            missing_setpoints.record(reference.target, reference.referrer.to_string());
        }
    }
    issues.extend(
        missing_setpoints
            .messages("thermostat setpoint")
            .into_iter()
            .map(|message| Issue::warning(IssueCategory::Schedules, message)),
    );

    let mut incomplete = FlaggedNames::default();
    for setpoint in &doc.thermostat_setpoints {
        for (field, value) in setpoint.required_schedules() {
            if non_blank(value).is_none() {
                incomplete.flag(&setpoint.name);
                issues.push(Issue::warning(
                    IssueCategory::Schedules,
                    format!(
                        "thermostat setpoint '{}' ({}) is missing {field}",
                        setpoint.name.trim(),
                        setpoint.setpoint_type
                    ),
                ));
            }
        }
    }

    let entries = doc.schedules.entries();
    let mut duplicates = FlaggedNames::default();
    for kind in ScheduleKind::ALL {
        let names = entries
            .iter()
            .filter(|entry| entry.kind == kind)
            .map(|entry| entry.name);
        for name in duplicate_names(names) {
            duplicates.flag(&name);
            issues.push(Issue::warning(
                IssueCategory::Schedules,
                format!("{kind} schedule name '{name}' is defined more than once"),
            ));
        }
    }

    let mut invalid = FlaggedNames::default();
    for (name, problem) in schedule_problems(doc) {
        invalid.flag(name);
        issues.push(Issue::warning(
            IssueCategory::Schedules,
            format!("schedule '{}' {problem}", name.trim()),
        ));
    }

    let findings = ScheduleFindings {
        missing_schedules: missing.names(),
        missing_setpoints: missing_setpoints.names(),
        incomplete_setpoints: incomplete.into_names(),
        duplicate_schedules: duplicates.into_names(),
        invalid_schedules: invalid.into_names(),
    };
    (findings, issues)
}

/// Schedule references that name no schedule of any kind.
fn missing_schedule_refs(doc: &ConfigurationDocument) -> MissingRefs {
    let defined = NameIndex::from_names(doc.schedules.entries().iter().map(|entry| entry.name));
    let mut missing = MissingRefs::default();
    for reference in doc.schedule_references() {
        if !defined.contains(reference.target) {
            missing.record(reference.target, reference.referrer.to_string());
        }
    }
    missing
}

fn schedule_problems(doc: &ConfigurationDocument) -> Vec<(&str, String)> {
    let schedules = &doc.schedules;
    let mut problems = Vec::new();

    for limits in &schedules.type_limits {
        if let (Some(lower), Some(upper)) = (limits.lower_limit, limits.upper_limit) {
            if lower > upper {
                problems.push((
                    limits.name.as_str(),
                    format!("has lower_limit {lower} above upper_limit {upper}"),
                ));
            }
        }
    }
    for schedule in &schedules.day_hourly {
        if schedule.values.len() != HOURS_PER_DAY {
            problems.push((
                schedule.name.as_str(),
                format!(
                    "has {} hourly values, expected {HOURS_PER_DAY}",
                    schedule.values.len()
                ),
            ));
        } else if schedule.values.iter().any(|value| !value.is_finite()) {
            problems.push((
                schedule.name.as_str(),
                "has non-finite hourly values".to_string(),
            ));
        }
    }
    for schedule in &schedules.compact {
        let rows = parse_compact(&schedule.lines);
        for lint in lint_compact(&rows) {
            problems.push((schedule.name.as_str(), lint.message));
        }
    }
    for schedule in &schedules.constant {
        if !schedule.value.is_finite() {
            problems.push((schedule.name.as_str(), "has a non-finite value".to_string()));
        }
    }
    for schedule in &schedules.file {
        if schedule.file_name.trim().is_empty() {
            problems.push((schedule.name.as_str(), "has no file_name".to_string()));
        }
        if schedule.column_number == 0 {
            problems.push((schedule.name.as_str(), "has column_number 0".to_string()));
        }
        let minutes = schedule.minutes_per_item;
        if minutes == 0 || 60 % minutes != 0 {
            problems.push((
                schedule.name.as_str(),
                format!("has minutes_per_item {minutes}, which must divide 60"),
            ));
        }
    }
    for schedule in &schedules.file_shading {
        if schedule.file_name.trim().is_empty() {
            problems.push((schedule.name.as_str(), "has no file_name".to_string()));
        }
    }
    problems
}
