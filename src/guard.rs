//! Deletion guards.
//!
//! A construction, material or schedule that something still points at must
//! not disappear silently. The host asks here before deleting and shows the
//! referrers when the answer is no.
use crate::document::{ConfigurationDocument, NamedReference, Referrer};
use crate::util::name_key;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Kinds of named objects whose deletion is guarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuardedKind {
    Construction,
    Material,
    Schedule,
}

impl GuardedKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            GuardedKind::Construction => "construction",
            GuardedKind::Material => "material",
            GuardedKind::Schedule => "schedule",
        }
    }
}

impl fmt::Display for GuardedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Refusal to delete an object that is still referenced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("cannot delete {kind} '{name}': referenced by {}", join_referrers(.referrers))]
pub struct DeletionBlocked {
    pub kind: GuardedKind,
    pub name: String,
    pub referrers: Vec<Referrer>,
}

fn join_referrers(referrers: &[Referrer]) -> String {
    referrers
        .iter()
        .map(Referrer::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn referrers_of(references: Vec<NamedReference<'_>>, name: &str) -> Vec<Referrer> {
    let key = name_key(name);
    references
        .into_iter()
        .filter(|reference| name_key(reference.target) == key)
        .map(|reference| reference.referrer)
        .collect()
}

/// Everything that points at the construction `name`.
pub fn construction_referrers(doc: &ConfigurationDocument, name: &str) -> Vec<Referrer> {
    referrers_of(doc.construction_references(), name)
}

/// Every construction layer that uses the material `name`.
pub fn material_referrers(doc: &ConfigurationDocument, name: &str) -> Vec<Referrer> {
    referrers_of(doc.material_references(), name)
}

/// Everything that points at the schedule `name`, of any schedule kind.
pub fn schedule_referrers(doc: &ConfigurationDocument, name: &str) -> Vec<Referrer> {
    referrers_of(doc.schedule_references(), name)
}

fn check_deletion(
    kind: GuardedKind,
    name: &str,
    referrers: Vec<Referrer>,
) -> Result<(), DeletionBlocked> {
    if referrers.is_empty() {
        return Ok(());
    }
    tracing::debug!(%kind, name, count = referrers.len(), "deletion blocked");
    Err(DeletionBlocked {
        kind,
        name: name.trim().to_string(),
        referrers,
    })
}

pub fn check_construction_deletion(
    doc: &ConfigurationDocument,
    name: &str,
) -> Result<(), DeletionBlocked> {
    check_deletion(
        GuardedKind::Construction,
        name,
        construction_referrers(doc, name),
    )
}

pub fn check_material_deletion(
    doc: &ConfigurationDocument,
    name: &str,
) -> Result<(), DeletionBlocked> {
    check_deletion(GuardedKind::Material, name, material_referrers(doc, name))
}

pub fn check_schedule_deletion(
    doc: &ConfigurationDocument,
    name: &str,
) -> Result<(), DeletionBlocked> {
    check_deletion(GuardedKind::Schedule, name, schedule_referrers(doc, name))
}
