use super::{ActionId, ReadinessAction, ReadinessStep, RuntimeCapabilities, StepId, StepStatus};
use crate::document::ConfigurationDocument;
use crate::util::quoted_list;
use crate::validate::Diagnostics;

mod envelope_step;
mod generation_step;
mod geometry_step;
mod hvac_step;
mod loads_step;
mod run_step;
mod weather_step;

use envelope_step::eval_envelope_step;
use generation_step::eval_generation_step;
use geometry_step::eval_geometry_step;
use hvac_step::eval_hvac_step;
use loads_step::eval_loads_step;
use run_step::eval_run_step;
use weather_step::eval_weather_step;

const NAME_PREVIEW_LIMIT: usize = 5;

struct EvalState<'a> {
    diagnostics: &'a Diagnostics,
    doc: &'a ConfigurationDocument,
    capabilities: &'a RuntimeCapabilities,
}

pub(super) fn evaluate_steps(
    diagnostics: &Diagnostics,
    doc: &ConfigurationDocument,
    capabilities: &RuntimeCapabilities,
) -> Vec<ReadinessStep> {
    let state = EvalState {
        diagnostics,
        doc,
        capabilities,
    };
    let steps: Vec<ReadinessStep> = StepId::ALL
        .iter()
        .map(|id| match id {
            StepId::Geometry => eval_geometry_step(&state),
            StepId::ConstructionsMaterials => eval_envelope_step(&state),
            StepId::SchedulesLoads => eval_loads_step(&state),
            StepId::ThermostatsIdealLoads => eval_hvac_step(&state),
            StepId::WeatherLocation => eval_weather_step(&state),
            StepId::GenerationReadiness => eval_generation_step(&state),
            StepId::RunReadiness => eval_run_step(&state),
        })
        .collect();
    tracing::debug!(
        errors = steps.iter().filter(|s| s.status == StepStatus::Error).count(),
        warnings = steps.iter().filter(|s| s.status == StepStatus::Warning).count(),
        "evaluated readiness steps"
    );
    steps
}

fn build_step(
    id: StepId,
    status: StepStatus,
    description: String,
    actions: &[ActionId],
) -> ReadinessStep {
    ReadinessStep {
        id,
        label: id.label().to_string(),
        status,
        description,
        actions: actions.iter().copied().map(ReadinessAction::from).collect(),
    }
}

/// Names for a message, trimmed to a short preview.
fn preview_names(names: &[String]) -> String {
    let shown = quoted_list(names.iter().take(NAME_PREVIEW_LIMIT).map(String::as_str));
    if names.len() > NAME_PREVIEW_LIMIT {
        return format!("{shown} and {} more", names.len() - NAME_PREVIEW_LIMIT);
    }
    shown
}

/// Why engine input cannot be generated, if it cannot.
fn envelope_blocker(diagnostics: &Diagnostics) -> Option<String> {
    if !diagnostics.has_blocking_envelope_findings() {
        return None;
    }
    let mut parts = Vec::new();
    let missing_constructions = &diagnostics.constructions.missing_constructions;
    if !missing_constructions.is_empty() {
        parts.push(format!(
            "missing constructions: {}",
            preview_names(missing_constructions)
        ));
    }
    let missing_materials = &diagnostics.materials.missing_materials;
    if !missing_materials.is_empty() {
        parts.push(format!(
            "missing materials: {}",
            preview_names(missing_materials)
        ));
    }
    Some(parts.join("; "))
}

/// Schedule and load findings that degrade results without blocking them.
fn load_warning(diagnostics: &Diagnostics) -> Option<String> {
    if !diagnostics.has_schedule_load_warnings() {
        return None;
    }
    let findings = &diagnostics.schedules_and_loads;
    let mut parts = Vec::new();
    if !findings.missing_schedules.is_empty() {
        parts.push(format!(
            "missing schedules: {}",
            preview_names(&findings.missing_schedules)
        ));
    }
    if !findings.missing_setpoints.is_empty() {
        parts.push(format!(
            "missing thermostat setpoints: {}",
            preview_names(&findings.missing_setpoints)
        ));
    }
    if !findings.inconsistent_loads.is_empty() {
        parts.push(format!(
            "inconsistent loads: {}",
            preview_names(&findings.inconsistent_loads)
        ));
    }
    Some(parts.join("; "))
}

fn has_weather_file(doc: &ConfigurationDocument) -> bool {
    doc.simulation.weather_file().is_some()
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
