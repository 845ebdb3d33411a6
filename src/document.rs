//! Configuration document model.
//!
//! The document is the aggregated, named simulation input: materials,
//! constructions, schedules, thermostats, ideal loads, sizing, internal gains,
//! shading, defaults and the weather/location settings. The core only reads
//! it; every edit happens through the host.
//!
//! Cross-references between sections are plain names. A dangling name is a
//! validation finding reported by [`crate::validate`], never a load error.
use serde::{Deserialize, Serialize};
use std::fmt;

mod gains;
mod load;
mod materials;
mod references;
mod schedules;
mod sizing;
mod thermostats;

pub use gains::{
    CalculationMethod, EquipmentGain, GainEntry, GainFamily, InternalGains, LightsGain,
    PeopleGain,
};
pub use load::{document_from_value, load_document, LoadedDocument, SECTION_NAMES};
pub use materials::{
    AirGapMaterial, Construction, GasMaterial, GlazingMaterial, Material, MaterialKind,
    NoMassMaterial, OpaqueMaterial, SimpleGlazingMaterial, BUILTIN_MATERIALS,
};
pub use references::{NamedReference, Referrer};
pub use schedules::{
    CompactSchedule, ConstantSchedule, DayHourlySchedule, FileSchedule, FileShadingSchedule,
    ScheduleKind, ScheduleRef, ScheduleSet, ScheduleTypeLimits,
};
pub use sizing::{PlantSizingEntry, SizingConfig, SystemSizingEntry, ZoneSizingOverride};
pub use thermostats::{
    IdealLoadsConfig, IdealLoadsSettings, SetpointType, ThermostatSetpoint,
    ZoneThermostatMapping, GLOBAL_ZONE,
};

/// Current schema version for configuration documents.
pub const DOCUMENT_SCHEMA_VERSION: u32 = 1;

/// Root aggregate of the simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationDocument {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    #[serde(default)]
    pub materials: Vec<Material>,
    #[serde(default)]
    pub constructions: Vec<Construction>,
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub schedules: ScheduleSet,
    #[serde(default)]
    pub thermostat_setpoints: Vec<ThermostatSetpoint>,
    #[serde(default)]
    pub zone_thermostats: Vec<ZoneThermostatMapping>,
    #[serde(default)]
    pub ideal_loads: IdealLoadsConfig,
    #[serde(default)]
    pub sizing: SizingConfig,
    #[serde(default)]
    pub internal_gains: InternalGains,
    #[serde(default)]
    pub shading: ShadingSettings,
    #[serde(default)]
    pub simulation: SimulationSettings,
}

fn default_schema_version() -> u32 {
    DOCUMENT_SCHEMA_VERSION
}

impl Default for ConfigurationDocument {
    fn default() -> Self {
        Self {
            schema_version: DOCUMENT_SCHEMA_VERSION,
            materials: Vec::new(),
            constructions: Vec::new(),
            defaults: Defaults::default(),
            schedules: ScheduleSet::default(),
            thermostat_setpoints: Vec::new(),
            zone_thermostats: Vec::new(),
            ideal_loads: IdealLoadsConfig::default(),
            sizing: SizingConfig::default(),
            internal_gains: InternalGains::default(),
            shading: ShadingSettings::default(),
            simulation: SimulationSettings::default(),
        }
    }
}

impl ConfigurationDocument {
    /// True when the user defined any construction or material.
    pub fn has_envelope_definitions(&self) -> bool {
        !self.constructions.is_empty() || !self.materials.is_empty()
    }
}

/// Default constructions applied to surfaces without an explicit assignment.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Defaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wall_construction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roof_construction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_construction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub window_construction: Option<String>,
}

impl Defaults {
    /// Construction references as (field, name) in fixed field order.
    pub fn construction_references(&self) -> Vec<(&'static str, &str)> {
        [
            ("wall_construction", self.wall_construction.as_deref()),
            ("roof_construction", self.roof_construction.as_deref()),
            ("floor_construction", self.floor_construction.as_deref()),
            ("window_construction", self.window_construction.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
        .collect()
    }
}

/// Shadow calculation settings.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShadingSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculation_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calculation_update_frequency: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_figures: Option<u32>,
}

/// Weather file and site location used by the run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weather_file: Option<String>,
    #[serde(default)]
    pub location: LocationSettings,
}

impl SimulationSettings {
    /// Configured weather file path, if non-blank.
    pub fn weather_file(&self) -> Option<&str> {
        crate::util::non_blank(self.weather_file.as_deref())
    }
}

/// Where the site location comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LocationSource {
    #[default]
    #[serde(alias = "FromWeatherFile", alias = "EPW")]
    WeatherFile,
    Custom,
}

impl fmt::Display for LocationSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocationSource::WeatherFile => f.write_str("WeatherFile"),
            LocationSource::Custom => f.write_str("Custom"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LocationSettings {
    #[serde(default)]
    pub source: LocationSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Hours from UTC.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_zone: Option<f64>,
    /// Metres above sea level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
}

impl LocationSettings {
    /// Problems with a custom location, empty when usable.
    ///
    /// Only meaningful for [`LocationSource::Custom`]; a weather-file location
    /// is read from the file itself.
    pub fn custom_location_problems(&self) -> Vec<String> {
        let mut problems = Vec::new();
        if crate::util::non_blank(self.name.as_deref()).is_none() {
            problems.push("name is missing".to_string());
        }
        check_range(&mut problems, "latitude", self.latitude, -90.0, 90.0);
        check_range(&mut problems, "longitude", self.longitude, -180.0, 180.0);
        check_range(&mut problems, "time_zone", self.time_zone, -12.0, 14.0);
        match self.elevation {
            Some(value) if value.is_finite() => {}
            Some(_) => problems.push("elevation is not a finite number".to_string()),
            None => problems.push("elevation is missing".to_string()),
        }
        problems
    }
}

fn check_range(problems: &mut Vec<String>, field: &str, value: Option<f64>, min: f64, max: f64) {
    match value {
        Some(value) if value.is_finite() && (min..=max).contains(&value) => {}
        Some(value) => problems.push(format!("{field} {value} outside [{min}, {max}]")),
        None => problems.push(format!("{field} is missing")),
    }
}

/// Zone summary from the external geometry model. Read-only input.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub floor_area: Option<f64>,
    #[serde(default)]
    pub surface_count: usize,
    #[serde(default)]
    pub window_count: usize,
}

impl Zone {
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom_location() -> LocationSettings {
        LocationSettings {
            source: LocationSource::Custom,
            name: Some("Denver".to_string()),
            latitude: Some(39.74),
            longitude: Some(-104.99),
            time_zone: Some(-7.0),
            elevation: Some(1609.0),
        }
    }

    #[test]
    fn custom_location_accepts_valid_site() {
        assert!(custom_location().custom_location_problems().is_empty());
    }

    #[test]
    fn custom_location_reports_each_bad_field() {
        let location = LocationSettings {
            name: Some("  ".to_string()),
            latitude: Some(91.0),
            time_zone: Some(15.0),
            elevation: Some(f64::NAN),
            longitude: None,
            ..custom_location()
        };
        let problems = location.custom_location_problems();
        assert_eq!(problems.len(), 5, "{problems:?}");
        assert!(problems[0].contains("name"));
        assert!(problems[1].contains("latitude"));
        assert!(problems[2].contains("longitude is missing"));
    }

    #[test]
    fn time_zone_bounds_are_inclusive() {
        let location = LocationSettings {
            time_zone: Some(14.0),
            ..custom_location()
        };
        assert!(location.custom_location_problems().is_empty());
        let location = LocationSettings {
            time_zone: Some(-12.0),
            ..custom_location()
        };
        assert!(location.custom_location_problems().is_empty());
    }

    #[test]
    fn location_source_accepts_aliases() {
        for spelling in ["\"WeatherFile\"", "\"FromWeatherFile\"", "\"EPW\""] {
            let source: LocationSource = serde_json::from_str(spelling).expect("parse source");
            assert_eq!(source, LocationSource::WeatherFile);
        }
    }

    #[test]
    fn defaults_list_only_set_constructions() {
        let defaults = Defaults {
            window_construction: Some("Glazing_Double".to_string()),
            wall_construction: Some("Ext_Wall".to_string()),
            ..Default::default()
        };
        assert_eq!(
            defaults.construction_references(),
            vec![
                ("wall_construction", "Ext_Wall"),
                ("window_construction", "Glazing_Double")
            ]
        );
    }
}
