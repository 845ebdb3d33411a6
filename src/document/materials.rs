use serde::{Deserialize, Serialize};
use std::fmt;

/// Material definition keyed by `name`, tagged by `kind`.
///
/// Each kind carries its own closed set of physical properties. Properties are
/// optional on load so a half-edited material still deserializes; the
/// validator reports missing or non-physical values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Material {
    Opaque(OpaqueMaterial),
    NoMass(NoMassMaterial),
    AirGap(AirGapMaterial),
    Glazing(GlazingMaterial),
    Gas(GasMaterial),
    SimpleGlazing(SimpleGlazingMaterial),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OpaqueMaterial {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roughness: Option<String>,
    /// Thickness in m.
    #[serde(default)]
    pub thickness: Option<f64>,
    /// Conductivity in W/(m*K).
    #[serde(default)]
    pub conductivity: Option<f64>,
    /// Density in kg/m^3.
    #[serde(default)]
    pub density: Option<f64>,
    /// Specific heat in J/(kg*K).
    #[serde(default)]
    pub specific_heat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thermal_absorptance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solar_absorptance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_absorptance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NoMassMaterial {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub roughness: Option<String>,
    /// Thermal resistance in m^2*K/W.
    #[serde(default)]
    pub thermal_resistance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AirGapMaterial {
    pub name: String,
    /// Thermal resistance in m^2*K/W.
    #[serde(default)]
    pub thermal_resistance: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlazingMaterial {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub optical_data_type: Option<String>,
    #[serde(default)]
    pub thickness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solar_transmittance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_transmittance: Option<f64>,
    #[serde(default)]
    pub conductivity: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GasMaterial {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_type: Option<String>,
    #[serde(default)]
    pub thickness: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimpleGlazingMaterial {
    pub name: String,
    /// U-factor in W/(m^2*K).
    #[serde(default)]
    pub u_factor: Option<f64>,
    #[serde(default)]
    pub solar_heat_gain_coefficient: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible_transmittance: Option<f64>,
}

/// Stable identifiers for material kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialKind {
    Opaque,
    NoMass,
    AirGap,
    Glazing,
    Gas,
    SimpleGlazing,
}

impl MaterialKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialKind::Opaque => "Opaque",
            MaterialKind::NoMass => "NoMass",
            MaterialKind::AirGap => "AirGap",
            MaterialKind::Glazing => "Glazing",
            MaterialKind::Gas => "Gas",
            MaterialKind::SimpleGlazing => "SimpleGlazing",
        }
    }
}

impl fmt::Display for MaterialKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Material {
    pub fn name(&self) -> &str {
        match self {
            Material::Opaque(m) => &m.name,
            Material::NoMass(m) => &m.name,
            Material::AirGap(m) => &m.name,
            Material::Glazing(m) => &m.name,
            Material::Gas(m) => &m.name,
            Material::SimpleGlazing(m) => &m.name,
        }
    }

    pub fn kind(&self) -> MaterialKind {
        match self {
            Material::Opaque(_) => MaterialKind::Opaque,
            Material::NoMass(_) => MaterialKind::NoMass,
            Material::AirGap(_) => MaterialKind::AirGap,
            Material::Glazing(_) => MaterialKind::Glazing,
            Material::Gas(_) => MaterialKind::Gas,
            Material::SimpleGlazing(_) => MaterialKind::SimpleGlazing,
        }
    }

    /// Properties the engine requires to be finite and strictly positive.
    pub fn required_positive_properties(&self) -> Vec<(&'static str, Option<f64>)> {
        match self {
            Material::Opaque(m) => vec![
                ("thickness", m.thickness),
                ("conductivity", m.conductivity),
                ("density", m.density),
                ("specific_heat", m.specific_heat),
            ],
            Material::NoMass(m) => vec![("thermal_resistance", m.thermal_resistance)],
            Material::AirGap(m) => vec![("thermal_resistance", m.thermal_resistance)],
            Material::Glazing(m) => vec![
                ("thickness", m.thickness),
                ("conductivity", m.conductivity),
            ],
            Material::Gas(m) => vec![("thickness", m.thickness)],
            Material::SimpleGlazing(m) => vec![
                ("u_factor", m.u_factor),
                ("solar_heat_gain_coefficient", m.solar_heat_gain_coefficient),
            ],
        }
    }

    /// Optional fractional properties that must fall in `[0, 1]` when set.
    pub fn fractional_properties(&self) -> Vec<(&'static str, Option<f64>)> {
        match self {
            Material::Opaque(m) => vec![
                ("thermal_absorptance", m.thermal_absorptance),
                ("solar_absorptance", m.solar_absorptance),
                ("visible_absorptance", m.visible_absorptance),
            ],
            Material::Glazing(m) => vec![
                ("solar_transmittance", m.solar_transmittance),
                ("visible_transmittance", m.visible_transmittance),
            ],
            Material::SimpleGlazing(m) => vec![
                ("solar_heat_gain_coefficient", m.solar_heat_gain_coefficient),
                ("visible_transmittance", m.visible_transmittance),
            ],
            Material::NoMass(_) | Material::AirGap(_) | Material::Gas(_) => Vec::new(),
        }
    }
}

/// Ordered stack of material layers, outside to inside.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Construction {
    pub name: String,
    #[serde(default)]
    pub layers: Vec<String>,
}

impl Construction {
    pub fn new(name: &str, layers: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            layers: layers.iter().map(|layer| layer.to_string()).collect(),
        }
    }
}

/// Reference materials that resolve without a user definition.
pub const BUILTIN_MATERIALS: [&str; 5] = [
    "Concrete_200mm",
    "Insulation_100mm",
    "Gypsum_13mm",
    "Glass_Clear_3mm",
    "Air_Gap_13mm",
];
