//! Shared fixtures for integration tests.
#![allow(dead_code)]

use serde_json::{json, Value};
use sim_readiness::{ConfigurationDocument, Zone};
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Document that passes every readiness step when the engine can execute.
pub fn ready_document_json() -> Value {
    json!({
        "constructions": [
            { "name": "Ext_Wall", "layers": ["Concrete_200mm", "Insulation_100mm", "Gypsum_13mm"] }
        ],
        "materials": [
            {
                "kind": "Opaque",
                "name": "Brick",
                "thickness": 0.1,
                "conductivity": 0.89,
                "density": 1920.0,
                "specific_heat": 790.0
            }
        ],
        "defaults": { "wall_construction": "Ext_Wall" },
        "schedules": {
            "constant": [
                { "name": "Always_On", "value": 1.0 },
                { "name": "Heat_Sch", "value": 20.0 },
                { "name": "Cool_Sch", "value": 24.0 },
                { "name": "Control", "value": 4.0 }
            ]
        },
        "thermostat_setpoints": [
            {
                "name": "Office_Dual",
                "type": "DualSetpoint",
                "heating_schedule_name": "Heat_Sch",
                "cooling_schedule_name": "Cool_Sch"
            }
        ],
        "zone_thermostats": [
            { "zone_name": "GLOBAL", "control_type_schedule": "Control", "dual_setpoint": "Office_Dual" }
        ],
        "ideal_loads": { "global": { "availability_schedule": "Always_On" } },
        "internal_gains": {
            "people": [
                {
                    "name": "Office_People",
                    "zone_name": "Zone_1",
                    "schedule_name": "Always_On",
                    "method": "People",
                    "number_of_people": 10.0
                }
            ]
        },
        "simulation": { "weather_file": "USA_CO_Denver.epw" }
    })
}

pub fn ready_document() -> ConfigurationDocument {
    serde_json::from_value(ready_document_json()).expect("ready document deserializes")
}

/// Single wall construction layered with an undefined material, nothing else.
pub fn unknown_material_document() -> ConfigurationDocument {
    serde_json::from_value(json!({
        "constructions": [{ "name": "Wall1", "layers": ["Glass_Unknown"] }]
    }))
    .expect("document deserializes")
}

pub fn zones(names: &[&str]) -> Vec<Zone> {
    names.iter().map(|&name| Zone::named(name)).collect()
}

pub fn write_json(dir: &Path, file_name: &str, value: &Value) -> PathBuf {
    let path = dir.join(file_name);
    let text = serde_json::to_string_pretty(value).expect("serialize fixture");
    std::fs::write(&path, text).expect("write fixture");
    path
}

/// Run the `simready` binary with `args`, logging kept quiet.
pub fn simready(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_simready"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("run simready")
}

pub fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "simready failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}
