use super::{build_step, envelope_blocker, load_warning, EvalState};
use crate::readiness::{ActionId, ReadinessStep, StepId, StepStatus};

pub(super) fn eval_generation_step(state: &EvalState) -> ReadinessStep {
    let id = StepId::GenerationReadiness;
    if let Some(blocker) = envelope_blocker(state.diagnostics) {
        return build_step(
            id,
            StepStatus::Error,
            format!("IDF generation is blocked by {blocker}"),
            &[ActionId::OpenConstructions, ActionId::OpenMaterials],
        );
    }
    if let Some(warning) = load_warning(state.diagnostics) {
        return build_step(
            id,
            StepStatus::Warning,
            format!("IDF can be generated, but {warning}"),
            &[ActionId::GenerateIdf, ActionId::OpenSchedules],
        );
    }
    build_step(
        id,
        StepStatus::Ok,
        "ready to generate IDF".to_string(),
        &[ActionId::GenerateIdf],
    )
}
