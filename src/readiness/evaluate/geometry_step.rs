use super::{build_step, EvalState};
use crate::readiness::{ActionId, ReadinessStep, StepId, StepStatus};

pub(super) fn eval_geometry_step(state: &EvalState) -> ReadinessStep {
    let zone_count = state.diagnostics.geometry.totals.zones;
    let live_zone_count = state.capabilities.live_zone_count.unwrap_or(0);
    let (status, description) = if zone_count > 0 {
        (StepStatus::Ok, format!("{zone_count} zone(s) in the geometry"))
    } else if live_zone_count > 0 {
        (
            StepStatus::Ok,
            format!("{live_zone_count} zone(s) reported by the live model"),
        )
    } else {
        (
            StepStatus::Warning,
            "no zones found; a single fallback zone will be generated".to_string(),
        )
    };
    build_step(StepId::Geometry, status, description, &[ActionId::OpenGeometry])
}
