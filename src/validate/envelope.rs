use super::index::{duplicate_names, FlaggedNames, MissingRefs, NameIndex};
use super::types::{ConstructionFindings, Issue, IssueCategory, MaterialFindings};
use crate::document::{ConfigurationDocument, Material, BUILTIN_MATERIALS};

pub(super) fn check_constructions(doc: &ConfigurationDocument) -> (ConstructionFindings, Vec<Issue>) {
    let defined = NameIndex::from_names(doc.constructions.iter().map(|c| c.name.as_str()));
    let mut missing = MissingRefs::default();
    for reference in doc.construction_references() {
        if !defined.contains(reference.target) {
            missing.record(reference.target, reference.referrer.to_string());
        }
    }

    let mut issues: Vec<Issue> = missing
        .messages("construction")
        .into_iter()
        .map(|message| Issue::error(IssueCategory::Constructions, message))
        .collect();

    let mut empty = FlaggedNames::default();
    for construction in &doc.constructions {
        let has_layer = construction
            .layers
            .iter()
            .any(|layer| !layer.trim().is_empty());
        if !has_layer {
            empty.flag(&construction.name);
            issues.push(Issue::warning(
                IssueCategory::Constructions,
                format!("construction '{}' has no layers", construction.name.trim()),
            ));
        }
    }

    let duplicates = duplicate_names(doc.constructions.iter().map(|c| c.name.as_str()));
    for name in &duplicates {
        issues.push(Issue::warning(
            IssueCategory::Constructions,
            format!("construction name '{name}' is defined more than once"),
        ));
    }

    let findings = ConstructionFindings {
        missing_constructions: missing.names(),
        empty_constructions: empty.into_names(),
        duplicate_constructions: duplicates,
    };
    (findings, issues)
}

pub(super) fn check_materials(doc: &ConfigurationDocument) -> (MaterialFindings, Vec<Issue>) {
    let defined = NameIndex::from_names(
        BUILTIN_MATERIALS
            .iter()
            .copied()
            .chain(doc.materials.iter().map(Material::name)),
    );
    let mut missing = MissingRefs::default();
    for reference in doc.material_references() {
        if !defined.contains(reference.target) {
            missing.record(reference.target, reference.referrer.to_string());
        }
    }

    let mut issues: Vec<Issue> = missing
        .messages("material")
        .into_iter()
        .map(|message| Issue::error(IssueCategory::Materials, message))
        .collect();

    let duplicates = duplicate_names(doc.materials.iter().map(Material::name));
    for name in &duplicates {
        issues.push(Issue::warning(
            IssueCategory::Materials,
            format!("material name '{name}' is defined more than once"),
        ));
    }

    let mut invalid = FlaggedNames::default();
    for material in &doc.materials {
        for problem in material_problems(material) {
            invalid.flag(material.name());
            issues.push(Issue::warning(
                IssueCategory::Materials,
                format!(
                    "material '{}' ({}) {problem}",
                    material.name().trim(),
                    material.kind()
                ),
            ));
        }
    }

    let findings = MaterialFindings {
        missing_materials: missing.names(),
        duplicate_materials: duplicates,
        invalid_materials: invalid.into_names(),
    };
    (findings, issues)
}

fn material_problems(material: &Material) -> Vec<String> {
    let mut problems = Vec::new();
    for (field, value) in material.required_positive_properties() {
        match value {
            None => problems.push(format!("is missing {field}")),
            Some(value) if !value.is_finite() => {
                problems.push(format!("has non-finite {field}"))
            }
            Some(value) if value <= 0.0 => {
                problems.push(format!("has non-positive {field} {value}"))
            }
            Some(_) => {}
        }
    }
    for (field, value) in material.fractional_properties() {
        if let Some(value) = value {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                problems.push(format!("has {field} {value} outside [0, 1]"));
            }
        }
    }
    problems
}
