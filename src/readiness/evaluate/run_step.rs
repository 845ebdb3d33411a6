use super::{build_step, envelope_blocker, has_weather_file, load_warning, EvalState};
use crate::readiness::{ActionId, ReadinessStep, StepId, StepStatus};

pub(super) fn eval_run_step(state: &EvalState) -> ReadinessStep {
    let mut status = StepStatus::Ok;
    let mut reasons = Vec::new();
    let mut actions = Vec::new();

    if !has_weather_file(state.doc) {
        status = status.max(StepStatus::Error);
        reasons.push("no weather file configured".to_string());
        actions.push(ActionId::OpenWeather);
    }
    if let Some(blocker) = envelope_blocker(state.diagnostics) {
        status = status.max(StepStatus::Error);
        reasons.push(blocker);
        actions.push(ActionId::OpenConstructions);
    }
    if !state.capabilities.can_execute {
        status = status.max(StepStatus::Warning);
        reasons.push("the simulation engine cannot be launched from this host".to_string());
    }
    if let Some(warning) = load_warning(state.diagnostics) {
        status = status.max(StepStatus::Warning);
        reasons.push(warning);
        actions.push(ActionId::OpenSchedules);
    }

    let description = match status {
        StepStatus::Ok => "ready to run the simulation".to_string(),
        StepStatus::Warning => format!("simulation can run with caveats: {}", reasons.join("; ")),
        StepStatus::Error => format!("simulation cannot run: {}", reasons.join("; ")),
    };
    if status != StepStatus::Error {
        actions.insert(0, ActionId::RunSimulation);
    }
    build_step(StepId::RunReadiness, status, description, &actions)
}
