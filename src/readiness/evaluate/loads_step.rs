use super::{build_step, capitalize, load_warning, EvalState};
use crate::readiness::{ActionId, ReadinessStep, StepId, StepStatus};

const ACTIONS: [ActionId; 2] = [ActionId::OpenSchedules, ActionId::OpenInternalGains];

pub(super) fn eval_loads_step(state: &EvalState) -> ReadinessStep {
    let (status, description) = if let Some(warning) = load_warning(state.diagnostics) {
        (StepStatus::Warning, capitalize(&warning))
    } else {
        let gain_count = state.doc.internal_gains.entries().len();
        if gain_count > 0 {
            (
                StepStatus::Ok,
                format!("{gain_count} internal gain(s) defined"),
            )
        } else {
            (
                StepStatus::Warning,
                "no internal gains defined; zones will have no people, lighting or equipment loads"
                    .to_string(),
            )
        }
    };
    build_step(StepId::SchedulesLoads, status, description, &ACTIONS)
}
