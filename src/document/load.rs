//! Lenient document loading.
//!
//! A malformed section is replaced by its empty default and reported as a
//! warning so validation can still run over the rest of the document. List
//! sections load entry by entry: one bad entry is skipped, its neighbours
//! are kept.
use super::{
    ConfigurationDocument, InternalGains, ScheduleSet, DOCUMENT_SCHEMA_VERSION,
};
use anyhow::{anyhow, Context, Result};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

/// Top-level section keys understood by the document model.
pub const SECTION_NAMES: [&str; 12] = [
    "schema_version",
    "materials",
    "constructions",
    "defaults",
    "schedules",
    "thermostat_setpoints",
    "zone_thermostats",
    "ideal_loads",
    "sizing",
    "internal_gains",
    "shading",
    "simulation",
];

/// Document plus the warnings produced while loading it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedDocument {
    pub document: ConfigurationDocument,
    pub warnings: Vec<String>,
}

/// Read and leniently parse a document from a JSON file.
///
/// Unreadable files and non-JSON content are errors; section-level problems
/// are warnings.
pub fn load_document(path: &Path) -> Result<LoadedDocument> {
    let bytes = fs::read(path).with_context(|| format!("read document {}", path.display()))?;
    let value: Value = serde_json::from_slice(&bytes)
        .with_context(|| format!("parse document JSON {}", path.display()))?;
    if !value.is_object() {
        return Err(anyhow!(
            "document {} must be a JSON object",
            path.display()
        ));
    }
    Ok(document_from_value(value))
}

/// Build a document from a JSON value, section by section.
pub fn document_from_value(value: Value) -> LoadedDocument {
    let mut warnings = Vec::new();
    let object = match value {
        Value::Object(object) => object,
        Value::Null => Map::new(),
        other => {
            warnings.push(format!(
                "document is a JSON {}, expected an object; using an empty document",
                json_type_name(&other)
            ));
            Map::new()
        }
    };

    for key in object.keys() {
        if !SECTION_NAMES.contains(&key.as_str()) {
            warnings.push(format!("unknown section '{key}' ignored"));
        }
    }

    let schema_version = section(&object, "schema_version", &mut warnings)
        .unwrap_or(DOCUMENT_SCHEMA_VERSION);
    if schema_version != DOCUMENT_SCHEMA_VERSION {
        warnings.push(format!(
            "document schema_version {schema_version} differs from supported {DOCUMENT_SCHEMA_VERSION}"
        ));
    }

    let document = ConfigurationDocument {
        schema_version,
        materials: list(&object, "materials", "materials", &mut warnings),
        constructions: list(&object, "constructions", "constructions", &mut warnings),
        defaults: section_or_default(&object, "defaults", &mut warnings),
        schedules: schedule_set(&object, &mut warnings),
        thermostat_setpoints: list(
            &object,
            "thermostat_setpoints",
            "thermostat_setpoints",
            &mut warnings,
        ),
        zone_thermostats: list(&object, "zone_thermostats", "zone_thermostats", &mut warnings),
        ideal_loads: section_or_default(&object, "ideal_loads", &mut warnings),
        sizing: section_or_default(&object, "sizing", &mut warnings),
        internal_gains: internal_gains(&object, &mut warnings),
        shading: section_or_default(&object, "shading", &mut warnings),
        simulation: section_or_default(&object, "simulation", &mut warnings),
    };
    if !warnings.is_empty() {
        tracing::debug!(count = warnings.len(), "document loaded with warnings");
    }
    LoadedDocument { document, warnings }
}

fn section<T: DeserializeOwned>(
    object: &Map<String, Value>,
    key: &str,
    warnings: &mut Vec<String>,
) -> Option<T> {
    let value = object.get(key)?;
    if value.is_null() {
        return None;
    }
    match serde_json::from_value(value.clone()) {
        Ok(parsed) => Some(parsed),
        Err(err) => {
            warnings.push(format!("section '{key}' is malformed ({err}); treated as empty"));
            None
        }
    }
}

fn section_or_default<T: DeserializeOwned + Default>(
    object: &Map<String, Value>,
    key: &str,
    warnings: &mut Vec<String>,
) -> T {
    section(object, key, warnings).unwrap_or_default()
}

/// Entries of the list at `object[key]`, skipping the ones that do not parse.
fn list<T: DeserializeOwned>(
    object: &Map<String, Value>,
    key: &str,
    path: &str,
    warnings: &mut Vec<String>,
) -> Vec<T> {
    let items = match object.get(key) {
        None | Some(Value::Null) => return Vec::new(),
        Some(Value::Array(items)) => items,
        Some(other) => {
            warnings.push(format!(
                "section '{path}' is a JSON {}, expected a list; treated as empty",
                json_type_name(other)
            ));
            return Vec::new();
        }
    };
    let mut parsed = Vec::with_capacity(items.len());
    for (idx, item) in items.iter().enumerate() {
        match serde_json::from_value(item.clone()) {
            Ok(entry) => parsed.push(entry),
            Err(err) => {
                let label = match item.get("name").and_then(Value::as_str) {
                    Some(name) => format!("{path}[{idx}] '{name}'"),
                    None => format!("{path}[{idx}]"),
                };
                warnings.push(format!("entry {label} is malformed ({err}); skipped"));
            }
        }
    }
    parsed
}

/// Nested object section; anything but an object (or absence) warns.
fn subsection<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    warnings: &mut Vec<String>,
) -> Option<&'a Map<String, Value>> {
    match object.get(key)? {
        Value::Object(inner) => Some(inner),
        Value::Null => None,
        other => {
            warnings.push(format!(
                "section '{key}' is a JSON {}, expected an object; treated as empty",
                json_type_name(other)
            ));
            None
        }
    }
}

fn schedule_set(object: &Map<String, Value>, warnings: &mut Vec<String>) -> ScheduleSet {
    let Some(schedules) = subsection(object, "schedules", warnings) else {
        return ScheduleSet::default();
    };
    ScheduleSet {
        type_limits: list(schedules, "type_limits", "schedules.type_limits", warnings),
        day_hourly: list(schedules, "day_hourly", "schedules.day_hourly", warnings),
        compact: list(schedules, "compact", "schedules.compact", warnings),
        constant: list(schedules, "constant", "schedules.constant", warnings),
        file: list(schedules, "file", "schedules.file", warnings),
        file_shading: list(schedules, "file_shading", "schedules.file_shading", warnings),
    }
}

fn internal_gains(object: &Map<String, Value>, warnings: &mut Vec<String>) -> InternalGains {
    let Some(gains) = subsection(object, "internal_gains", warnings) else {
        return InternalGains::default();
    };
    InternalGains {
        people: list(gains, "people", "internal_gains.people", warnings),
        lights: list(gains, "lights", "internal_gains.lights", warnings),
        electric_equipment: list(
            gains,
            "electric_equipment",
            "internal_gains.electric_equipment",
            warnings,
        ),
        gas_equipment: list(gains, "gas_equipment", "internal_gains.gas_equipment", warnings),
        hot_water_equipment: list(
            gains,
            "hot_water_equipment",
            "internal_gains.hot_water_equipment",
            warnings,
        ),
        steam_equipment: list(
            gains,
            "steam_equipment",
            "internal_gains.steam_equipment",
            warnings,
        ),
        other_equipment: list(
            gains,
            "other_equipment",
            "internal_gains.other_equipment",
            warnings,
        ),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
#[path = "load_tests.rs"]
mod tests;
