use super::{build_step, EvalState};
use crate::readiness::{ActionId, ReadinessStep, StepId, StepStatus};

const ACTIONS: [ActionId; 2] = [ActionId::OpenThermostats, ActionId::OpenIdealLoads];

pub(super) fn eval_hvac_step(state: &EvalState) -> ReadinessStep {
    let doc = state.doc;
    let has_thermostats = !doc.zone_thermostats.is_empty();
    let has_ideal_loads = doc.ideal_loads.has_any_setting();
    let (status, description) = match (has_thermostats, has_ideal_loads) {
        (true, true) => (
            StepStatus::Ok,
            format!(
                "{} thermostat mapping(s) and ideal loads configured",
                doc.zone_thermostats.len()
            ),
        ),
        (false, true) => (
            StepStatus::Warning,
            "no thermostat mapping defined".to_string(),
        ),
        (true, false) => (
            StepStatus::Warning,
            "no ideal loads settings defined".to_string(),
        ),
        (false, false) => (
            StepStatus::Warning,
            "no thermostat mapping or ideal loads settings defined".to_string(),
        ),
    };
    build_step(StepId::ThermostatsIdealLoads, status, description, &ACTIONS)
}
