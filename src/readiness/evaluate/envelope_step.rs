use super::{build_step, capitalize, envelope_blocker, EvalState};
use crate::readiness::{ActionId, ReadinessStep, StepId, StepStatus};

const ACTIONS: [ActionId; 2] = [ActionId::OpenConstructions, ActionId::OpenMaterials];

pub(super) fn eval_envelope_step(state: &EvalState) -> ReadinessStep {
    let step = |status, description| {
        build_step(StepId::ConstructionsMaterials, status, description, &ACTIONS)
    };
    if let Some(blocker) = envelope_blocker(state.diagnostics) {
        return step(StepStatus::Error, capitalize(&blocker));
    }
    let doc = state.doc;
    if !doc.has_envelope_definitions() {
        return step(
            StepStatus::Warning,
            "no constructions or materials defined; engine defaults will be used".to_string(),
        );
    }
    let mut description = format!(
        "{} construction(s) and {} material(s) defined",
        doc.constructions.len(),
        doc.materials.len()
    );
    let advisories = advisory_count(state);
    if advisories > 0 {
        description.push_str(&format!("; {advisories} advisory finding(s)"));
    }
    step(StepStatus::Ok, description)
}

/// Non-blocking envelope findings, surfaced in the description only.
fn advisory_count(state: &EvalState) -> usize {
    let constructions = &state.diagnostics.constructions;
    let materials = &state.diagnostics.materials;
    constructions.empty_constructions.len()
        + constructions.duplicate_constructions.len()
        + materials.duplicate_materials.len()
        + materials.invalid_materials.len()
}
