use serde::{Deserialize, Serialize};
use std::fmt;

/// Internal heat gains grouped by family, each list in document order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct InternalGains {
    #[serde(default)]
    pub people: Vec<PeopleGain>,
    #[serde(default)]
    pub lights: Vec<LightsGain>,
    #[serde(default)]
    pub electric_equipment: Vec<EquipmentGain>,
    #[serde(default)]
    pub gas_equipment: Vec<EquipmentGain>,
    #[serde(default)]
    pub hot_water_equipment: Vec<EquipmentGain>,
    #[serde(default)]
    pub steam_equipment: Vec<EquipmentGain>,
    #[serde(default)]
    pub other_equipment: Vec<EquipmentGain>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GainFamily {
    People,
    Lights,
    ElectricEquipment,
    GasEquipment,
    HotWaterEquipment,
    SteamEquipment,
    OtherEquipment,
}

impl GainFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            GainFamily::People => "people",
            GainFamily::Lights => "lights",
            GainFamily::ElectricEquipment => "electric_equipment",
            GainFamily::GasEquipment => "gas_equipment",
            GainFamily::HotWaterEquipment => "hot_water_equipment",
            GainFamily::SteamEquipment => "steam_equipment",
            GainFamily::OtherEquipment => "other_equipment",
        }
    }
}

impl fmt::Display for GainFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Design-level calculation methods, parsed from the stored method string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalculationMethod {
    People,
    PeoplePerArea,
    AreaPerPerson,
    LightingLevel,
    EquipmentLevel,
    WattsPerArea,
    WattsPerPerson,
}

impl CalculationMethod {
    /// Parse a method string for `family`. Unknown or mismatched methods
    /// yield `None`.
    pub fn parse(family: GainFamily, raw: &str) -> Option<CalculationMethod> {
        let method = raw.trim().to_ascii_lowercase();
        match family {
            GainFamily::People => match method.as_str() {
                "people" => Some(CalculationMethod::People),
                "people/area" => Some(CalculationMethod::PeoplePerArea),
                "area/person" => Some(CalculationMethod::AreaPerPerson),
                _ => None,
            },
            GainFamily::Lights => match method.as_str() {
                "lightinglevel" => Some(CalculationMethod::LightingLevel),
                "watts/area" => Some(CalculationMethod::WattsPerArea),
                "watts/person" => Some(CalculationMethod::WattsPerPerson),
                _ => None,
            },
            _ => match method.as_str() {
                "equipmentlevel" => Some(CalculationMethod::EquipmentLevel),
                "watts/area" | "power/area" => Some(CalculationMethod::WattsPerArea),
                "watts/person" | "power/person" => Some(CalculationMethod::WattsPerPerson),
                _ => None,
            },
        }
    }

    /// Name of the magnitude field this method reads.
    pub fn magnitude_field(&self) -> &'static str {
        match self {
            CalculationMethod::People => "number_of_people",
            CalculationMethod::PeoplePerArea => "people_per_area",
            CalculationMethod::AreaPerPerson => "area_per_person",
            CalculationMethod::LightingLevel => "lighting_level",
            CalculationMethod::EquipmentLevel => "design_level",
            CalculationMethod::WattsPerArea => "watts_per_area",
            CalculationMethod::WattsPerPerson => "watts_per_person",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PeopleGain {
    pub name: String,
    #[serde(default)]
    pub zone_name: String,
    #[serde(default)]
    pub schedule_name: String,
    #[serde(default)]
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number_of_people: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub people_per_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_per_person: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activity_schedule_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fraction_radiant: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sensible_heat_fraction: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LightsGain {
    pub name: String,
    #[serde(default)]
    pub zone_name: String,
    #[serde(default)]
    pub schedule_name: String,
    #[serde(default)]
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lighting_level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watts_per_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watts_per_person: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub return_air_fraction: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fraction_radiant: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fraction_visible: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct EquipmentGain {
    pub name: String,
    #[serde(default)]
    pub zone_name: String,
    #[serde(default)]
    pub schedule_name: String,
    #[serde(default)]
    pub method: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub design_level: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watts_per_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub watts_per_person: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fraction_latent: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fraction_radiant: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fraction_lost: Option<f64>,
}

/// Borrowed, family-agnostic view of one gain entry.
#[derive(Debug, Clone)]
pub struct GainEntry<'a> {
    pub family: GainFamily,
    pub name: &'a str,
    pub zone_name: &'a str,
    pub schedule_name: &'a str,
    pub method: &'a str,
    /// Extra schedule references beyond `schedule_name` (field, name).
    pub extra_schedules: Vec<(&'static str, &'a str)>,
    magnitudes: Vec<(&'static str, Option<f64>)>,
    /// Fractions of the gain that are split off; their sum must stay <= 1.
    pub split_fractions: Vec<(&'static str, Option<f64>)>,
}

impl GainEntry<'_> {
    /// Value of the magnitude field `field`, if the family carries it.
    pub fn magnitude(&self, field: &str) -> Option<f64> {
        self.magnitudes
            .iter()
            .find(|(name, _)| *name == field)
            .and_then(|(_, value)| *value)
    }
}

impl PeopleGain {
    fn entry(&self) -> GainEntry<'_> {
        let mut extra_schedules = Vec::new();
        if let Some(activity) = self.activity_schedule_name.as_deref() {
            extra_schedules.push(("activity_schedule_name", activity));
        }
        GainEntry {
            family: GainFamily::People,
            name: &self.name,
            zone_name: &self.zone_name,
            schedule_name: &self.schedule_name,
            method: &self.method,
            extra_schedules,
            magnitudes: vec![
                ("number_of_people", self.number_of_people),
                ("people_per_area", self.people_per_area),
                ("area_per_person", self.area_per_person),
            ],
            split_fractions: vec![("fraction_radiant", self.fraction_radiant)],
        }
    }
}

impl LightsGain {
    fn entry(&self) -> GainEntry<'_> {
        GainEntry {
            family: GainFamily::Lights,
            name: &self.name,
            zone_name: &self.zone_name,
            schedule_name: &self.schedule_name,
            method: &self.method,
            extra_schedules: Vec::new(),
            magnitudes: vec![
                ("lighting_level", self.lighting_level),
                ("watts_per_area", self.watts_per_area),
                ("watts_per_person", self.watts_per_person),
            ],
            split_fractions: vec![
                ("return_air_fraction", self.return_air_fraction),
                ("fraction_radiant", self.fraction_radiant),
                ("fraction_visible", self.fraction_visible),
            ],
        }
    }
}

impl EquipmentGain {
    fn entry(&self, family: GainFamily) -> GainEntry<'_> {
        GainEntry {
            family,
            name: &self.name,
            zone_name: &self.zone_name,
            schedule_name: &self.schedule_name,
            method: &self.method,
            extra_schedules: Vec::new(),
            magnitudes: vec![
                ("design_level", self.design_level),
                ("watts_per_area", self.watts_per_area),
                ("watts_per_person", self.watts_per_person),
            ],
            split_fractions: vec![
                ("fraction_latent", self.fraction_latent),
                ("fraction_radiant", self.fraction_radiant),
                ("fraction_lost", self.fraction_lost),
            ],
        }
    }
}

impl InternalGains {
    /// All entries, families in fixed order, document order within a family.
    pub fn entries(&self) -> Vec<GainEntry<'_>> {
        let mut entries: Vec<GainEntry<'_>> = Vec::new();
        entries.extend(self.people.iter().map(PeopleGain::entry));
        entries.extend(self.lights.iter().map(LightsGain::entry));
        let equipment = [
            (GainFamily::ElectricEquipment, &self.electric_equipment),
            (GainFamily::GasEquipment, &self.gas_equipment),
            (GainFamily::HotWaterEquipment, &self.hot_water_equipment),
            (GainFamily::SteamEquipment, &self.steam_equipment),
            (GainFamily::OtherEquipment, &self.other_equipment),
        ];
        for (family, gains) in equipment {
            entries.extend(gains.iter().map(|gain| gain.entry(family)));
        }
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn method_parsing_is_family_specific() {
        assert_eq!(
            CalculationMethod::parse(GainFamily::Lights, "Watts/Area"),
            Some(CalculationMethod::WattsPerArea)
        );
        assert_eq!(
            CalculationMethod::parse(GainFamily::GasEquipment, "Power/Area"),
            Some(CalculationMethod::WattsPerArea)
        );
        assert_eq!(CalculationMethod::parse(GainFamily::People, "Watts/Area"), None);
        assert_eq!(
            CalculationMethod::parse(GainFamily::People, " people/area "),
            Some(CalculationMethod::PeoplePerArea)
        );
    }

    #[test]
    fn entries_follow_family_then_document_order() {
        let gains = InternalGains {
            people: vec![PeopleGain {
                name: "Occupants".to_string(),
                ..Default::default()
            }],
            other_equipment: vec![EquipmentGain {
                name: "Misc".to_string(),
                ..Default::default()
            }],
            electric_equipment: vec![EquipmentGain {
                name: "Plugs".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let names: Vec<&str> = gains.entries().iter().map(|entry| entry.name).collect();
        assert_eq!(names, vec!["Occupants", "Plugs", "Misc"]);
    }

    #[test]
    fn magnitude_lookup_reads_family_fields() {
        let gain = LightsGain {
            name: "Lights".to_string(),
            watts_per_area: Some(8.0),
            ..Default::default()
        };
        let gains = InternalGains {
            lights: vec![gain],
            ..Default::default()
        };
        let entries = gains.entries();
        assert_eq!(entries[0].magnitude("watts_per_area"), Some(8.0));
        assert_eq!(entries[0].magnitude("design_level"), None);
    }
}
