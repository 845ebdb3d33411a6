use super::ConfigurationDocument;
use crate::util::non_blank;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The entity field a name reference comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Referrer {
    pub entity: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub owner: String,
    pub field: String,
}

impl Referrer {
    pub fn new(entity: &str, owner: &str, field: &str) -> Self {
        Self {
            entity: entity.to_string(),
            owner: owner.trim().to_string(),
            field: field.to_string(),
        }
    }
}

impl fmt::Display for Referrer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.owner.is_empty() {
            write!(f, "{} ({})", self.entity, self.field)
        } else {
            write!(f, "{} '{}' ({})", self.entity, self.owner, self.field)
        }
    }
}

/// A non-blank name reference and where it comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedReference<'a> {
    /// Referenced name, trimmed.
    pub target: &'a str,
    pub referrer: Referrer,
}

#[derive(Default)]
struct References<'a> {
    items: Vec<NamedReference<'a>>,
}

impl<'a> References<'a> {
    fn push(&mut self, target: Option<&'a str>, entity: &str, owner: &str, field: &str) {
        if let Some(target) = non_blank(target) {
            self.items.push(NamedReference {
                target,
                referrer: Referrer::new(entity, owner, field),
            });
        }
    }
}

impl ConfigurationDocument {
    /// Construction names referenced from defaults.
    pub fn construction_references(&self) -> Vec<NamedReference<'_>> {
        let mut refs = References::default();
        for (field, name) in self.defaults.construction_references() {
            refs.push(Some(name), "defaults", "", field);
        }
        refs.items
    }

    /// Material names referenced from construction layers.
    pub fn material_references(&self) -> Vec<NamedReference<'_>> {
        let mut refs = References::default();
        for construction in &self.constructions {
            for (idx, layer) in construction.layers.iter().enumerate() {
                refs.push(
                    Some(layer.as_str()),
                    "construction",
                    &construction.name,
                    &format!("layer {}", idx + 1),
                );
            }
        }
        refs.items
    }

    /// Schedule names referenced anywhere in the document, in section order:
    /// schedule type limits, internal gains, thermostat setpoints, zone
    /// thermostat control types, then ideal-loads availability.
    pub fn schedule_references(&self) -> Vec<NamedReference<'_>> {
        let mut refs = References::default();
        for entry in self.schedules.entries() {
            refs.push(
                entry.type_limits,
                &format!("{} schedule", entry.kind),
                entry.name,
                "type_limits",
            );
        }
        for gain in self.internal_gains.entries() {
            let entity = gain.family.as_str();
            refs.push(Some(gain.schedule_name), entity, gain.name, "schedule_name");
            for (field, name) in &gain.extra_schedules {
                refs.push(Some(*name), entity, gain.name, field);
            }
        }
        for setpoint in &self.thermostat_setpoints {
            for (field, name) in setpoint.schedule_references() {
                refs.push(Some(name), "thermostat setpoint", &setpoint.name, field);
            }
        }
        for mapping in &self.zone_thermostats {
            refs.push(
                mapping.control_type_schedule.as_deref(),
                "zone thermostat",
                &mapping.zone_name,
                "control_type_schedule",
            );
        }
        refs.push(
            self.ideal_loads.global.availability_schedule.as_deref(),
            "ideal loads",
            "global",
            "availability_schedule",
        );
        for (zone, settings) in &self.ideal_loads.per_zone {
            refs.push(
                settings.availability_schedule.as_deref(),
                "ideal loads zone",
                zone,
                "availability_schedule",
            );
        }
        refs.items
    }

    /// ThermostatSetpoint names referenced from zone thermostat mappings.
    pub fn setpoint_references(&self) -> Vec<NamedReference<'_>> {
        let mut refs = References::default();
        for mapping in &self.zone_thermostats {
            for (field, name) in mapping.setpoint_references() {
                refs.push(Some(name), "zone thermostat", &mapping.zone_name, field);
            }
        }
        refs.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{Construction, Defaults};

    #[test]
    fn referrer_display_omits_empty_owner() {
        assert_eq!(
            Referrer::new("defaults", "", "wall_construction").to_string(),
            "defaults (wall_construction)"
        );
        assert_eq!(
            Referrer::new("construction", " Wall1 ", "layer 2").to_string(),
            "construction 'Wall1' (layer 2)"
        );
    }

    #[test]
    fn blank_references_are_skipped() {
        let doc = ConfigurationDocument {
            constructions: vec![Construction::new("Wall", &["Brick", "  ", "Gypsum_13mm"])],
            defaults: Defaults {
                wall_construction: Some(" ".to_string()),
                roof_construction: Some("Roof ".to_string()),
                ..Default::default()
            },
            ..Default::default()
        };
        let materials: Vec<&str> = doc
            .material_references()
            .iter()
            .map(|reference| reference.target)
            .collect();
        assert_eq!(materials, vec!["Brick", "Gypsum_13mm"]);
        assert_eq!(doc.material_references()[1].referrer.field, "layer 3");

        let constructions = doc.construction_references();
        assert_eq!(constructions.len(), 1);
        assert_eq!(constructions[0].target, "Roof");
    }
}
