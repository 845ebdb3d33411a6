//! Plain-text rendering for CLI output.
//!
//! JSON output serializes the library types directly; these renderers cover
//! the human-readable default.
use crate::host::ReadinessReport;
use crate::validate::Diagnostics;
use std::fmt::Write as _;

/// Render validation findings, one issue per line.
pub fn render_diagnostics(diagnostics: &Diagnostics) -> String {
    let mut out = String::new();
    let totals = &diagnostics.geometry.totals;
    let _ = writeln!(
        out,
        "zones: {} ({} surfaces, {} windows)",
        totals.zones, totals.surfaces, totals.windows
    );
    let _ = writeln!(
        out,
        "findings: {} error(s), {} warning(s)",
        diagnostics.error_count(),
        diagnostics.warning_count()
    );
    if !diagnostics.issues.is_empty() {
        out.push_str("issues:\n");
        for issue in &diagnostics.issues {
            let _ = writeln!(
                out,
                "  - {} [{}]: {}",
                issue.severity, issue.category, issue.message
            );
        }
    }
    out
}

/// Render the readiness checklist followed by the validation findings.
pub fn render_report(report: &ReadinessReport) -> String {
    let mut out = String::from("steps:\n");
    for (idx, step) in report.steps.iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {}: {} ({})",
            idx + 1,
            step.label,
            step.status,
            step.description
        );
        let actions: Vec<&str> = step
            .actions
            .iter()
            .map(|action| action.action_id.as_str())
            .collect();
        let _ = writeln!(out, "     actions: {}", actions.join(", "));
    }
    out.push_str(&render_diagnostics(&report.diagnostics));
    let _ = writeln!(out, "fingerprint: {}", report.fingerprint);
    if !report.warnings.is_empty() {
        let _ = writeln!(out, "warnings: {}", report.warnings.join("; "));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Construction, ConfigurationDocument, Zone};
    use crate::host::build_report;
    use crate::readiness::RuntimeCapabilities;

    #[test]
    fn diagnostics_render_issue_lines() {
        let doc = ConfigurationDocument {
            constructions: vec![Construction::new("Wall1", &["Glass_Unknown"])],
            ..Default::default()
        };
        let text = render_diagnostics(&crate::validate::validate(&doc, &[Zone::named("Zone_1")]));
        assert!(text.starts_with("zones: 1 (0 surfaces, 0 windows)\n"));
        assert!(text.contains("findings: 1 error(s), 0 warning(s)\n"));
        assert!(text.contains(
            "  - error [materials]: material 'Glass_Unknown' is not defined"
        ));
    }

    #[test]
    fn report_lists_all_steps_in_order() {
        let report = build_report(
            &ConfigurationDocument::default(),
            &[],
            &RuntimeCapabilities::default(),
            vec!["zones unavailable".to_string()],
        );
        let text = render_report(&report);
        assert!(text.contains("  1. Geometry: warning"));
        assert!(text.contains("  7. Run readiness: error"));
        assert!(text.contains("     actions: open-geometry\n"));
        assert!(text.ends_with("warnings: zones unavailable\n"));
    }
}
