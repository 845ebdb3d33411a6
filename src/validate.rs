//! Cross-referential validation of a configuration document.
//!
//! Validation never fails: every dangling name or non-physical value becomes a
//! finding in [`Diagnostics`], with a flattened [`Issue`] list for display.
//!
//! ## Pipeline summary
//! - **Constructions**: `defaults.*_construction` must name a construction.
//! - **Materials**: every construction layer must name a user or builtin material.
//! - **Schedules**: type limits, gains, setpoints, thermostat mappings and
//!   ideal-loads availability must name an existing schedule of any kind.
//! - **Loads**: a gain's method must have its magnitude, and its zone must exist.
//! - **Zones**: per-zone settings must name a zone from the geometry.
//!
//! ## Example walkthrough
//! A construction whose only layer is not a known material:
//! ```text
//! constructions: [{ name: "Wall1", layers: ["Glass_Unknown"] }]
//! -> materials.missing_materials = ["Glass_Unknown"]
//! -> error: material 'Glass_Unknown' is not defined (referenced by construction 'Wall1' (layer 1))
//! ```
//!
//! Names match trimmed and ASCII case-insensitively. Missing constructions
//! and materials are errors; every other finding is a warning.
use crate::document::{ConfigurationDocument, Zone};

mod envelope;
mod index;
mod loads;
mod schedules;
mod types;
mod zone_refs;

pub use types::{
    ConstructionFindings, Diagnostics, GeometrySummary, GeometryTotals, Issue, IssueCategory,
    MaterialFindings, ScheduleLoadFindings, Severity, ZoneReferenceFindings, ZoneSummary,
};

/// Validate `doc` against itself and the geometry `zones`.
pub fn validate(doc: &ConfigurationDocument, zones: &[Zone]) -> Diagnostics {
    let geometry = summarize_geometry(zones);
    let (constructions, construction_issues) = envelope::check_constructions(doc);
    let (materials, material_issues) = envelope::check_materials(doc);
    let (schedule_findings, schedule_issues) = schedules::check_schedules(doc);
    let (inconsistent_loads, load_issues) = loads::check_loads(doc, zones);
    let (unknown_zone_references, zone_issues) = zone_refs::check_zone_references(doc, zones);

    let mut issues = Vec::new();
    issues.extend(construction_issues);
    issues.extend(material_issues);
    issues.extend(schedule_issues);
    issues.extend(load_issues);
    issues.extend(zone_issues);

    let diagnostics = Diagnostics {
        geometry,
        constructions,
        materials,
        schedules_and_loads: ScheduleLoadFindings {
            missing_schedules: schedule_findings.missing_schedules,
            inconsistent_loads,
            missing_setpoints: schedule_findings.missing_setpoints,
            incomplete_setpoints: schedule_findings.incomplete_setpoints,
            duplicate_schedules: schedule_findings.duplicate_schedules,
            invalid_schedules: schedule_findings.invalid_schedules,
        },
        zones: ZoneReferenceFindings {
            unknown_zone_references,
        },
        issues,
    };
    tracing::debug!(
        zones = diagnostics.geometry.totals.zones,
        errors = diagnostics.error_count(),
        warnings = diagnostics.warning_count(),
        "validated configuration document"
    );
    diagnostics
}

fn summarize_geometry(zones: &[Zone]) -> GeometrySummary {
    let summaries: Vec<ZoneSummary> = zones
        .iter()
        .map(|zone| ZoneSummary {
            name: zone.name.clone(),
            surface_count: zone.surface_count,
            window_count: zone.window_count,
        })
        .collect();
    let totals = GeometryTotals {
        zones: summaries.len(),
        surfaces: summaries.iter().map(|zone| zone.surface_count).sum(),
        windows: summaries.iter().map(|zone| zone.window_count).sum(),
    };
    GeometrySummary {
        zones: summaries,
        totals,
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
