use super::index::{MissingRefs, NameIndex};
use super::types::{Issue, IssueCategory};
use crate::document::{ConfigurationDocument, Zone};
use crate::util::non_blank;

/// Zone names used by thermostat mappings, ideal-loads overrides and sizing
/// overrides that are absent from the zone list.
pub(super) fn check_zone_references(
    doc: &ConfigurationDocument,
    zones: &[Zone],
) -> (Vec<String>, Vec<Issue>) {
    let known = NameIndex::from_names(zones.iter().map(|zone| zone.name.as_str()));
    let mut unknown = MissingRefs::default();
    let mut check = |name: &str, source: &str| {
        if let Some(name) = non_blank(Some(name)) {
            if !known.contains(name) {
                unknown.record(name, source.to_string());
            }
        }
    };

    for mapping in doc.zone_thermostats.iter().filter(|m| !m.is_global()) {
        check(mapping.zone_name.as_str(), "zone thermostats");
    }
    for zone in doc.ideal_loads.per_zone.keys() {
        check(zone.as_str(), "ideal loads per-zone settings");
    }
    for zone in doc.sizing.zones.keys() {
        check(zone.as_str(), "zone sizing overrides");
    }

    let issues = unknown
        .entries()
        .map(|(name, referrers)| {
            Issue::warning(
                IssueCategory::Zones,
                format!(
                    "zone '{name}' is not in the geometry (used by {})",
                    referrers.join(", ")
                ),
            )
        })
        .collect();
    (unknown.names(), issues)
}
