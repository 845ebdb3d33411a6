use serde::{Deserialize, Serialize};
use std::fmt;

/// All schedules in the document, one list per kind.
///
/// Names are unique within a kind. A name shared across kinds is accepted and
/// resolves as a single schedule name for reference checks.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScheduleSet {
    #[serde(default)]
    pub type_limits: Vec<ScheduleTypeLimits>,
    #[serde(default)]
    pub day_hourly: Vec<DayHourlySchedule>,
    #[serde(default)]
    pub compact: Vec<CompactSchedule>,
    #[serde(default)]
    pub constant: Vec<ConstantSchedule>,
    #[serde(default)]
    pub file: Vec<FileSchedule>,
    #[serde(default)]
    pub file_shading: Vec<FileShadingSchedule>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleKind {
    TypeLimits,
    DayHourly,
    Compact,
    Constant,
    File,
    FileShading,
}

impl ScheduleKind {
    pub const ALL: [ScheduleKind; 6] = [
        ScheduleKind::TypeLimits,
        ScheduleKind::DayHourly,
        ScheduleKind::Compact,
        ScheduleKind::Constant,
        ScheduleKind::File,
        ScheduleKind::FileShading,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleKind::TypeLimits => "type_limits",
            ScheduleKind::DayHourly => "day_hourly",
            ScheduleKind::Compact => "compact",
            ScheduleKind::Constant => "constant",
            ScheduleKind::File => "file",
            ScheduleKind::FileShading => "file_shading",
        }
    }
}

impl fmt::Display for ScheduleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ScheduleTypeLimits {
    pub name: String,
    #[serde(default)]
    pub lower_limit: Option<f64>,
    #[serde(default)]
    pub upper_limit: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub numeric_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DayHourlySchedule {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_limits: Option<String>,
    /// One value per hour, 24 entries.
    #[serde(default)]
    pub values: Vec<f64>,
}

/// Compact schedule persisted as raw directive lines.
///
/// The structured row view lives in [`crate::compact`] and is derived on demand.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CompactSchedule {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_limits: Option<String>,
    #[serde(default)]
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ConstantSchedule {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_limits: Option<String>,
    #[serde(default)]
    pub value: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FileSchedule {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_limits: Option<String>,
    #[serde(default)]
    pub file_name: String,
    #[serde(default = "default_column_number")]
    pub column_number: u32,
    #[serde(default)]
    pub rows_to_skip: u32,
    #[serde(default = "default_hours_of_data")]
    pub hours_of_data: u32,
    #[serde(default = "default_column_separator")]
    pub column_separator: String,
    #[serde(default)]
    pub interpolate: bool,
    #[serde(default = "default_minutes_per_item")]
    pub minutes_per_item: u32,
    #[serde(default = "default_adjust_dst")]
    pub adjust_dst: bool,
}

fn default_column_number() -> u32 {
    1
}

fn default_hours_of_data() -> u32 {
    8760
}

fn default_column_separator() -> String {
    "Comma".to_string()
}

fn default_minutes_per_item() -> u32 {
    60
}

fn default_adjust_dst() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FileShadingSchedule {
    pub name: String,
    #[serde(default)]
    pub file_name: String,
}

/// Borrowed view of one schedule entry regardless of kind.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleRef<'a> {
    pub kind: ScheduleKind,
    pub name: &'a str,
    pub type_limits: Option<&'a str>,
}

impl ScheduleSet {
    /// Every schedule in kind order, then document order within a kind.
    pub fn entries(&self) -> Vec<ScheduleRef<'_>> {
        let mut entries = Vec::new();
        for limits in &self.type_limits {
            entries.push(ScheduleRef {
                kind: ScheduleKind::TypeLimits,
                name: &limits.name,
                type_limits: None,
            });
        }
        for schedule in &self.day_hourly {
            entries.push(ScheduleRef {
                kind: ScheduleKind::DayHourly,
                name: &schedule.name,
                type_limits: schedule.type_limits.as_deref(),
            });
        }
        for schedule in &self.compact {
            entries.push(ScheduleRef {
                kind: ScheduleKind::Compact,
                name: &schedule.name,
                type_limits: schedule.type_limits.as_deref(),
            });
        }
        for schedule in &self.constant {
            entries.push(ScheduleRef {
                kind: ScheduleKind::Constant,
                name: &schedule.name,
                type_limits: schedule.type_limits.as_deref(),
            });
        }
        for schedule in &self.file {
            entries.push(ScheduleRef {
                kind: ScheduleKind::File,
                name: &schedule.name,
                type_limits: schedule.type_limits.as_deref(),
            });
        }
        for schedule in &self.file_shading {
            entries.push(ScheduleRef {
                kind: ScheduleKind::FileShading,
                name: &schedule.name,
                type_limits: None,
            });
        }
        entries
    }
}
