//! Diagnostics schema produced by [`super::validate`].
use serde::{Deserialize, Serialize};
use std::fmt;

/// Structured result of cross-referential validation.
///
/// Identical inputs serialize to identical bytes; every list keeps document
/// order and nothing is keyed by a hash map.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    pub geometry: GeometrySummary,
    pub constructions: ConstructionFindings,
    pub materials: MaterialFindings,
    pub schedules_and_loads: ScheduleLoadFindings,
    #[serde(default)]
    pub zones: ZoneReferenceFindings,
    pub issues: Vec<Issue>,
}

impl Diagnostics {
    /// Missing constructions or materials: the conditions that block
    /// generating engine input.
    pub fn has_blocking_envelope_findings(&self) -> bool {
        !self.constructions.missing_constructions.is_empty()
            || !self.materials.missing_materials.is_empty()
    }

    /// Missing schedules or setpoints, or inconsistent loads.
    pub fn has_schedule_load_warnings(&self) -> bool {
        let findings = &self.schedules_and_loads;
        !findings.missing_schedules.is_empty()
            || !findings.missing_setpoints.is_empty()
            || !findings.inconsistent_loads.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Error)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Warning)
            .count()
    }
}

/// Passthrough summary of the zone list; never judged here.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeometrySummary {
    pub zones: Vec<ZoneSummary>,
    pub totals: GeometryTotals,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ZoneSummary {
    pub name: String,
    pub surface_count: usize,
    pub window_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GeometryTotals {
    pub zones: usize,
    #[serde(default)]
    pub surfaces: usize,
    #[serde(default)]
    pub windows: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ConstructionFindings {
    pub missing_constructions: Vec<String>,
    #[serde(default)]
    pub empty_constructions: Vec<String>,
    #[serde(default)]
    pub duplicate_constructions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MaterialFindings {
    pub missing_materials: Vec<String>,
    #[serde(default)]
    pub duplicate_materials: Vec<String>,
    #[serde(default)]
    pub invalid_materials: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScheduleLoadFindings {
    pub missing_schedules: Vec<String>,
    pub inconsistent_loads: Vec<String>,
    #[serde(default)]
    pub missing_setpoints: Vec<String>,
    #[serde(default)]
    pub incomplete_setpoints: Vec<String>,
    #[serde(default)]
    pub duplicate_schedules: Vec<String>,
    #[serde(default)]
    pub invalid_schedules: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ZoneReferenceFindings {
    pub unknown_zone_references: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Warning,
    Error,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Finding category; issues are emitted in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCategory {
    Constructions,
    Materials,
    Schedules,
    Loads,
    Zones,
}

impl IssueCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCategory::Constructions => "constructions",
            IssueCategory::Materials => "materials",
            IssueCategory::Schedules => "schedules",
            IssueCategory::Loads => "loads",
            IssueCategory::Zones => "zones",
        }
    }
}

impl fmt::Display for IssueCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Human-readable finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub severity: Severity,
    pub category: IssueCategory,
    pub message: String,
}

impl Issue {
    pub fn error(category: IssueCategory, message: String) -> Self {
        Self {
            severity: Severity::Error,
            category,
            message,
        }
    }

    pub fn warning(category: IssueCategory, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            category,
            message,
        }
    }
}
