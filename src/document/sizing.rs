use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// HVAC sizing overrides. Anything absent here uses engine-side defaults.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SizingConfig {
    #[serde(default)]
    pub zones: BTreeMap<String, ZoneSizingOverride>,
    #[serde(default)]
    pub systems: Vec<SystemSizingEntry>,
    #[serde(default)]
    pub plants: Vec<PlantSizingEntry>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ZoneSizingOverride {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooling_supply_air_temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heating_supply_air_temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooling_supply_air_humidity_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heating_supply_air_humidity_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub heating_sizing_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooling_sizing_factor: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SystemSizingEntry {
    pub air_loop_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_of_load_to_size_on: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub central_cooling_design_supply_air_temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub central_heating_design_supply_air_temperature: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PlantSizingEntry {
    pub plant_loop_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_loop_exit_temperature: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub loop_design_temperature_difference: Option<f64>,
}
