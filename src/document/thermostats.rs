use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Pseudo-zone name whose thermostat mapping applies to unmapped zones.
pub const GLOBAL_ZONE: &str = "GLOBAL";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetpointType {
    SingleHeating,
    SingleCooling,
    SingleHeatingOrCooling,
    DualSetpoint,
}

impl SetpointType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SetpointType::SingleHeating => "SingleHeating",
            SetpointType::SingleCooling => "SingleCooling",
            SetpointType::SingleHeatingOrCooling => "SingleHeatingOrCooling",
            SetpointType::DualSetpoint => "DualSetpoint",
        }
    }
}

impl fmt::Display for SetpointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermostatSetpoint {
    pub name: String,
    #[serde(rename = "type")]
    pub setpoint_type: SetpointType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heating_schedule_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooling_schedule_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_schedule_name: Option<String>,
}

impl ThermostatSetpoint {
    /// Schedule fields the declared type needs, paired with their values.
    pub fn required_schedules(&self) -> Vec<(&'static str, Option<&str>)> {
        match self.setpoint_type {
            SetpointType::SingleHeating => {
                vec![("heating_schedule_name", self.heating_schedule_name.as_deref())]
            }
            SetpointType::SingleCooling => {
                vec![("cooling_schedule_name", self.cooling_schedule_name.as_deref())]
            }
            SetpointType::SingleHeatingOrCooling => {
                vec![("single_schedule_name", self.single_schedule_name.as_deref())]
            }
            SetpointType::DualSetpoint => vec![
                ("heating_schedule_name", self.heating_schedule_name.as_deref()),
                ("cooling_schedule_name", self.cooling_schedule_name.as_deref()),
            ],
        }
    }

    /// Every schedule name the setpoint carries, set or not required.
    pub fn schedule_references(&self) -> Vec<(&'static str, &str)> {
        [
            ("heating_schedule_name", self.heating_schedule_name.as_deref()),
            ("cooling_schedule_name", self.cooling_schedule_name.as_deref()),
            ("single_schedule_name", self.single_schedule_name.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
        .collect()
    }
}

/// Thermostat assignment for one zone (or the `GLOBAL` fallback).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ZoneThermostatMapping {
    pub zone_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub control_type_schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_heating_setpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_cooling_setpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_heat_cool_setpoint: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dual_setpoint: Option<String>,
}

impl ZoneThermostatMapping {
    pub fn is_global(&self) -> bool {
        self.zone_name.trim().eq_ignore_ascii_case(GLOBAL_ZONE)
    }

    /// ThermostatSetpoint references carried by the mapping.
    pub fn setpoint_references(&self) -> Vec<(&'static str, &str)> {
        [
            (
                "single_heating_setpoint",
                self.single_heating_setpoint.as_deref(),
            ),
            (
                "single_cooling_setpoint",
                self.single_cooling_setpoint.as_deref(),
            ),
            (
                "single_heat_cool_setpoint",
                self.single_heat_cool_setpoint.as_deref(),
            ),
            ("dual_setpoint", self.dual_setpoint.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|value| (field, value)))
        .collect()
    }
}

/// Ideal-loads air system settings. Unset fields inherit.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IdealLoadsSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub availability_schedule: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heating_limit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooling_limit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_heating_supply_air_temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_cooling_supply_air_temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_heating_capacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_total_cooling_capacity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outdoor_air_method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outdoor_air_flow_per_person: Option<f64>,
}

impl IdealLoadsSettings {
    pub fn is_empty(&self) -> bool {
        *self == IdealLoadsSettings::default()
    }

    /// Overlay `overrides` on top of `self`, field by field.
    pub fn merged_with(&self, overrides: &IdealLoadsSettings) -> IdealLoadsSettings {
        IdealLoadsSettings {
            availability_schedule: overrides
                .availability_schedule
                .clone()
                .or_else(|| self.availability_schedule.clone()),
            heating_limit: overrides
                .heating_limit
                .clone()
                .or_else(|| self.heating_limit.clone()),
            cooling_limit: overrides
                .cooling_limit
                .clone()
                .or_else(|| self.cooling_limit.clone()),
            max_heating_supply_air_temperature: overrides
                .max_heating_supply_air_temperature
                .or(self.max_heating_supply_air_temperature),
            min_cooling_supply_air_temperature: overrides
                .min_cooling_supply_air_temperature
                .or(self.min_cooling_supply_air_temperature),
            max_heating_capacity: overrides
                .max_heating_capacity
                .or(self.max_heating_capacity),
            max_total_cooling_capacity: overrides
                .max_total_cooling_capacity
                .or(self.max_total_cooling_capacity),
            outdoor_air_method: overrides
                .outdoor_air_method
                .clone()
                .or_else(|| self.outdoor_air_method.clone()),
            outdoor_air_flow_per_person: overrides
                .outdoor_air_flow_per_person
                .or(self.outdoor_air_flow_per_person),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IdealLoadsConfig {
    #[serde(default)]
    pub global: IdealLoadsSettings,
    #[serde(default)]
    pub per_zone: BTreeMap<String, IdealLoadsSettings>,
}

impl IdealLoadsConfig {
    /// Settings in force for `zone_name` after per-zone overrides.
    pub fn effective_for(&self, zone_name: &str) -> IdealLoadsSettings {
        match self.per_zone.get(zone_name) {
            Some(overrides) => self.global.merged_with(overrides),
            None => self.global.clone(),
        }
    }

    /// True when the global block or any per-zone entry exists.
    pub fn has_any_setting(&self) -> bool {
        !self.global.is_empty() || !self.per_zone.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_zone_overrides_only_set_fields() {
        let mut config = IdealLoadsConfig {
            global: IdealLoadsSettings {
                availability_schedule: Some("Always_On".to_string()),
                max_heating_supply_air_temperature: Some(50.0),
                ..Default::default()
            },
            per_zone: BTreeMap::new(),
        };
        config.per_zone.insert(
            "Zone_1".to_string(),
            IdealLoadsSettings {
                max_heating_supply_air_temperature: Some(40.0),
                ..Default::default()
            },
        );

        let effective = config.effective_for("Zone_1");
        assert_eq!(effective.availability_schedule.as_deref(), Some("Always_On"));
        assert_eq!(effective.max_heating_supply_air_temperature, Some(40.0));

        let fallback = config.effective_for("Zone_2");
        assert_eq!(fallback.max_heating_supply_air_temperature, Some(50.0));
    }

    #[test]
    fn empty_per_zone_entry_counts_as_setting() {
        let mut config = IdealLoadsConfig::default();
        assert!(!config.has_any_setting());
        config
            .per_zone
            .insert("Zone_1".to_string(), IdealLoadsSettings::default());
        assert!(config.has_any_setting());
    }

    #[test]
    fn dual_setpoint_requires_both_schedules() {
        let setpoint = ThermostatSetpoint {
            name: "Dual".to_string(),
            setpoint_type: SetpointType::DualSetpoint,
            heating_schedule_name: Some("Heat".to_string()),
            cooling_schedule_name: None,
            single_schedule_name: None,
        };
        let required = setpoint.required_schedules();
        assert_eq!(required.len(), 2);
        assert_eq!(required[1], ("cooling_schedule_name", None));
    }

    #[test]
    fn global_mapping_is_case_insensitive() {
        let mapping = ZoneThermostatMapping {
            zone_name: " global ".to_string(),
            ..Default::default()
        };
        assert!(mapping.is_global());
    }
}
