//! Readiness checklist for running a simulation.
//!
//! [`evaluate`] turns validation diagnostics, the document and the host's
//! runtime capabilities into seven fixed steps. Each step is decided on its
//! own; the engine never folds step statuses into one project-wide verdict.
use crate::document::ConfigurationDocument;
use crate::validate::Diagnostics;
use serde::{Deserialize, Serialize};
use std::fmt;

mod evaluate;

/// What the host can do right now, beyond the document itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RuntimeCapabilities {
    /// Whether the external simulation engine can be launched.
    pub can_execute: bool,
    /// Zone count reported by a live geometry model, when one is attached.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub live_zone_count: Option<usize>,
}

/// Stable identifiers for the readiness steps, in checklist order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepId {
    Geometry,
    ConstructionsMaterials,
    SchedulesLoads,
    ThermostatsIdealLoads,
    WeatherLocation,
    GenerationReadiness,
    RunReadiness,
}

impl StepId {
    pub const ALL: [StepId; 7] = [
        StepId::Geometry,
        StepId::ConstructionsMaterials,
        StepId::SchedulesLoads,
        StepId::ThermostatsIdealLoads,
        StepId::WeatherLocation,
        StepId::GenerationReadiness,
        StepId::RunReadiness,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StepId::Geometry => "geometry",
            StepId::ConstructionsMaterials => "constructions_materials",
            StepId::SchedulesLoads => "schedules_loads",
            StepId::ThermostatsIdealLoads => "thermostats_ideal_loads",
            StepId::WeatherLocation => "weather_location",
            StepId::GenerationReadiness => "generation_readiness",
            StepId::RunReadiness => "run_readiness",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StepId::Geometry => "Geometry",
            StepId::ConstructionsMaterials => "Constructions & Materials",
            StepId::SchedulesLoads => "Schedules & Zone Loads",
            StepId::ThermostatsIdealLoads => "Thermostats & Ideal Loads",
            StepId::WeatherLocation => "Weather & Location",
            StepId::GenerationReadiness => "Generation readiness",
            StepId::RunReadiness => "Run readiness",
        }
    }
}

impl fmt::Display for StepId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Step outcome. Ordered so that `max` picks the more severe status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Ok,
    Warning,
    Error,
}

impl StepStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StepStatus::Ok => "ok",
            StepStatus::Warning => "warning",
            StepStatus::Error => "error",
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action vocabulary. The host maps each id to a concrete command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ActionId {
    OpenGeometry,
    OpenConstructions,
    OpenMaterials,
    OpenSchedules,
    OpenInternalGains,
    OpenThermostats,
    OpenIdealLoads,
    OpenWeather,
    OpenLocation,
    GenerateIdf,
    RunSimulation,
}

impl ActionId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionId::OpenGeometry => "open-geometry",
            ActionId::OpenConstructions => "open-constructions",
            ActionId::OpenMaterials => "open-materials",
            ActionId::OpenSchedules => "open-schedules",
            ActionId::OpenInternalGains => "open-internal-gains",
            ActionId::OpenThermostats => "open-thermostats",
            ActionId::OpenIdealLoads => "open-ideal-loads",
            ActionId::OpenWeather => "open-weather",
            ActionId::OpenLocation => "open-location",
            ActionId::GenerateIdf => "generate-idf",
            ActionId::RunSimulation => "run-simulation",
        }
    }

    /// Default button label.
    pub fn label(&self) -> &'static str {
        match self {
            ActionId::OpenGeometry => "Open geometry",
            ActionId::OpenConstructions => "Edit constructions",
            ActionId::OpenMaterials => "Edit materials",
            ActionId::OpenSchedules => "Edit schedules",
            ActionId::OpenInternalGains => "Edit internal gains",
            ActionId::OpenThermostats => "Edit thermostats",
            ActionId::OpenIdealLoads => "Edit ideal loads",
            ActionId::OpenWeather => "Choose weather file",
            ActionId::OpenLocation => "Edit location",
            ActionId::GenerateIdf => "Generate IDF",
            ActionId::RunSimulation => "Run simulation",
        }
    }
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessAction {
    pub label: String,
    pub action_id: ActionId,
}

impl From<ActionId> for ReadinessAction {
    fn from(action_id: ActionId) -> Self {
        Self {
            label: action_id.label().to_string(),
            action_id,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadinessStep {
    pub id: StepId,
    pub label: String,
    pub status: StepStatus,
    pub description: String,
    pub actions: Vec<ReadinessAction>,
}

/// Evaluate the seven readiness steps in checklist order.
pub fn evaluate(
    diagnostics: &Diagnostics,
    doc: &ConfigurationDocument,
    capabilities: &RuntimeCapabilities,
) -> Vec<ReadinessStep> {
    evaluate::evaluate_steps(diagnostics, doc, capabilities)
}
