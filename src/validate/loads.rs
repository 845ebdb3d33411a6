use super::index::{FlaggedNames, NameIndex};
use super::types::{Issue, IssueCategory};
use crate::document::{CalculationMethod, ConfigurationDocument, GainEntry, Zone};

const FRACTION_TOLERANCE: f64 = 1e-9;

/// Gain entries whose method lacks its magnitude, that have no schedule,
/// whose zone is unknown, or whose split fractions exceed the whole gain.
pub(super) fn check_loads(doc: &ConfigurationDocument, zones: &[Zone]) -> (Vec<String>, Vec<Issue>) {
    let zone_names = NameIndex::from_names(zones.iter().map(|zone| zone.name.as_str()));
    let mut inconsistent = FlaggedNames::default();
    let mut issues = Vec::new();
    for gain in doc.internal_gains.entries() {
        for problem in gain_problems(&gain, &zone_names) {
            inconsistent.flag(gain.name);
            issues.push(Issue::warning(
                IssueCategory::Loads,
                format!("{} '{}' {problem}", gain.family, gain.name.trim()),
            ));
        }
    }
    (inconsistent.into_names(), issues)
}

fn gain_problems(gain: &GainEntry<'_>, zone_names: &NameIndex) -> Vec<String> {
    let mut problems = Vec::new();
    match CalculationMethod::parse(gain.family, gain.method) {
        None => problems.push(format!(
            "has unknown calculation method '{}'",
            gain.method.trim()
        )),
        Some(method) => {
            let field = method.magnitude_field();
            match gain.magnitude(field) {
                None => problems.push(format!(
                    "uses method '{}' but {field} is missing",
                    gain.method.trim()
                )),
                Some(value) if !value.is_finite() => {
                    problems.push(format!("has non-finite {field}"))
                }
                Some(value) if value < 0.0 => {
                    problems.push(format!("has negative {field} {value}"))
                }
                Some(_) => {}
            }
        }
    }

    if gain.schedule_name.trim().is_empty() {
        problems.push("has no schedule_name".to_string());
    }

    if !zone_names.contains(gain.zone_name) {
        problems.push(format!(
            "references zone '{}' which is not in the geometry",
            gain.zone_name.trim()
        ));
    }

    let mut total = 0.0;
    for (field, value) in &gain.split_fractions {
        let Some(value) = value else {
            continue;
        };
        if !value.is_finite() || !(0.0..=1.0).contains(value) {
            problems.push(format!("has {field} {value} outside [0, 1]"));
        } else {
            total += value;
        }
    }
    if total > 1.0 + FRACTION_TOLERANCE {
        problems.push(format!("has split fractions summing to {total} (> 1)"));
    }
    problems
}
