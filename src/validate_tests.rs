use super::*;
use serde_json::json;

fn doc(value: serde_json::Value) -> ConfigurationDocument {
    serde_json::from_value(value).expect("parse document")
}

fn zones(names: &[&str]) -> Vec<Zone> {
    names.iter().map(|name| Zone::named(name)).collect()
}

fn full_day_lines() -> serde_json::Value {
    json!(["Through: 12/31", "For: AllDays", "Until: 24:00, 1"])
}

#[test]
fn unknown_layer_is_missing_material_error() {
    let document = doc(json!({
        "constructions": [{"name": "Wall1", "layers": ["Glass_Unknown"]}]
    }));
    let diagnostics = validate(&document, &zones(&["Zone_1"]));

    assert_eq!(diagnostics.materials.missing_materials, vec!["Glass_Unknown"]);
    assert!(diagnostics.constructions.missing_constructions.is_empty());
    assert_eq!(diagnostics.issues.len(), 1);
    assert_eq!(diagnostics.issues[0].severity, Severity::Error);
    assert_eq!(
        diagnostics.issues[0].message,
        "material 'Glass_Unknown' is not defined (referenced by construction 'Wall1' (layer 1))"
    );
}

#[test]
fn default_window_construction_must_exist() {
    let document = doc(json!({
        "constructions": [{"name": "Ext_Wall", "layers": ["Concrete_200mm"]}],
        "defaults": {"wall_construction": "ext_wall", "window_construction": "X"}
    }));
    let diagnostics = validate(&document, &[]);
    assert_eq!(diagnostics.constructions.missing_constructions, vec!["X"]);
    assert_eq!(diagnostics.issues[0].severity, Severity::Error);
    assert!(diagnostics.issues[0]
        .message
        .contains("defaults (window_construction)"));
}

#[test]
fn builtin_and_user_materials_resolve_case_insensitively() {
    let document = doc(json!({
        "materials": [{
            "kind": "Opaque", "name": "Brick", "thickness": 0.1, "conductivity": 0.9,
            "density": 1900.0, "specific_heat": 800.0
        }],
        "constructions": [{
            "name": "Wall",
            "layers": [" brick ", "INSULATION_100MM", "Gypsum_13mm", ""]
        }]
    }));
    let diagnostics = validate(&document, &[]);
    assert!(diagnostics.materials.missing_materials.is_empty());
    assert!(diagnostics.issues.is_empty(), "{:?}", diagnostics.issues);
}

#[test]
fn missing_material_listed_once_with_every_referrer() {
    let document = doc(json!({
        "constructions": [
            {"name": "Wall1", "layers": ["Mystery", "Gypsum_13mm"]},
            {"name": "Wall2", "layers": ["mystery"]},
            {"name": "Roof", "layers": ["Other"]}
        ]
    }));
    let diagnostics = validate(&document, &[]);
    assert_eq!(
        diagnostics.materials.missing_materials,
        vec!["Mystery", "Other"]
    );
    assert!(diagnostics.issues[0].message.contains("'Wall1' (layer 1)"));
    assert!(diagnostics.issues[0].message.contains("'Wall2' (layer 1)"));
}

#[test]
fn schedule_references_checked_across_sections() {
    let document = doc(json!({
        "schedules": {
            "type_limits": [{"name": "Fraction", "lower_limit": 0.0, "upper_limit": 1.0}],
            "compact": [{"name": "Occupancy", "type_limits": "Fraction", "lines": full_day_lines()}]
        },
        "internal_gains": {
            "people": [{
                "name": "Occupants", "zone_name": "Zone_1", "schedule_name": "Occ_Missing",
                "method": "People", "number_of_people": 10.0,
                "activity_schedule_name": "Activity"
            }]
        },
        "thermostat_setpoints": [{
            "name": "Dual", "type": "DualSetpoint",
            "heating_schedule_name": "Heat_Sch", "cooling_schedule_name": "occupancy"
        }],
        "zone_thermostats": [{
            "zone_name": "Zone_1", "control_type_schedule": "Control", "dual_setpoint": "Dual"
        }],
        "ideal_loads": {"global": {"availability_schedule": "occ_missing"}}
    }));
    let diagnostics = validate(&document, &zones(&["Zone_1"]));
    let findings = &diagnostics.schedules_and_loads;

    assert_eq!(
        findings.missing_schedules,
        vec!["Occ_Missing", "Activity", "Heat_Sch", "Control"]
    );
    assert!(findings.inconsistent_loads.is_empty());
    assert!(findings.missing_setpoints.is_empty());
    assert_eq!(
        diagnostics.issues[0].message,
        "schedule 'Occ_Missing' is not defined (referenced by people 'Occupants' (schedule_name), ideal loads 'global' (availability_schedule))"
    );
    assert!(diagnostics
        .issues
        .iter()
        .all(|issue| issue.severity == Severity::Warning));
}

#[test]
fn schedule_type_limits_must_resolve() {
    let document = doc(json!({
        "schedules": {
            "constant": [{"name": "Always_On", "type_limits": "OnOff", "value": 1.0}]
        }
    }));
    let diagnostics = validate(&document, &[]);
    assert_eq!(diagnostics.schedules_and_loads.missing_schedules, vec!["OnOff"]);
    assert!(diagnostics.issues[0]
        .message
        .contains("constant schedule 'Always_On' (type_limits)"));
}

#[test]
fn blank_references_count_as_unset() {
    let document = doc(json!({
        "defaults": {"roof_construction": "  "},
        "zone_thermostats": [{"zone_name": "Zone_1", "control_type_schedule": ""}],
        "ideal_loads": {"global": {"availability_schedule": " "}}
    }));
    let diagnostics = validate(&document, &zones(&["Zone_1"]));
    assert!(diagnostics.issues.is_empty(), "{:?}", diagnostics.issues);
}

#[test]
fn inconsistent_loads_cover_method_zone_and_fractions() {
    let document = doc(json!({
        "schedules": {"compact": [{"name": "Occupancy", "lines": full_day_lines()}]},
        "internal_gains": {
            "lights": [{
                "name": "L1", "zone_name": "Zone_1", "schedule_name": "Occupancy",
                "method": "Watts/Area"
            }],
            "electric_equipment": [{
                "name": "E1", "zone_name": "Zone_9", "schedule_name": "Occupancy",
                "method": "Power/Area", "watts_per_area": 10.0
            }],
            "gas_equipment": [{
                "name": "G1", "zone_name": "Zone_1", "schedule_name": "Occupancy",
                "method": "Bogus"
            }],
            "other_equipment": [{
                "name": "O1", "zone_name": "zone_1", "schedule_name": "Occupancy",
                "method": "EquipmentLevel", "design_level": 100.0,
                "fraction_latent": 0.6, "fraction_radiant": 0.6
            }]
        }
    }));
    let diagnostics = validate(&document, &zones(&["Zone_1"]));
    assert_eq!(
        diagnostics.schedules_and_loads.inconsistent_loads,
        vec!["L1", "E1", "G1", "O1"]
    );
    let messages: Vec<&str> = diagnostics
        .issues
        .iter()
        .map(|issue| issue.message.as_str())
        .collect();
    assert_eq!(
        messages,
        vec![
            "lights 'L1' uses method 'Watts/Area' but watts_per_area is missing",
            "electric_equipment 'E1' references zone 'Zone_9' which is not in the geometry",
            "gas_equipment 'G1' has unknown calculation method 'Bogus'",
            "other_equipment 'O1' has split fractions summing to 1.2 (> 1)",
        ]
    );
}

#[test]
fn gain_zones_are_checked_even_without_geometry() {
    let document = doc(json!({
        "internal_gains": {
            "people": [{
                "name": "P1", "zone_name": "Zone_1", "method": "People",
                "number_of_people": 4.0
            }]
        }
    }));
    let diagnostics = validate(&document, &[]);
    assert_eq!(diagnostics.schedules_and_loads.inconsistent_loads, vec!["P1"]);
}

#[test]
fn gain_without_schedule_is_inconsistent() {
    let document = doc(json!({
        "internal_gains": {
            "lights": [{
                "name": "L1", "zone_name": "Zone_1", "schedule_name": "  ",
                "method": "LightingLevel", "lighting_level": 500.0
            }]
        }
    }));
    let diagnostics = validate(&document, &zones(&["Zone_1"]));
    let findings = &diagnostics.schedules_and_loads;
    assert_eq!(findings.inconsistent_loads, vec!["L1"]);
    assert!(findings.missing_schedules.is_empty());
    assert_eq!(diagnostics.issues.len(), 1);
    assert_eq!(diagnostics.issues[0].message, "lights 'L1' has no schedule_name");
    assert!(diagnostics.has_schedule_load_warnings());
}

#[test]
fn setpoint_findings() {
    let document = doc(json!({
        "schedules": {"compact": [{"name": "Heat", "lines": full_day_lines()}]},
        "thermostat_setpoints": [
            {"name": "Dual", "type": "DualSetpoint", "heating_schedule_name": "Heat"},
            {"name": "HeatOnly", "type": "SingleHeating", "heating_schedule_name": "Heat"}
        ],
        "zone_thermostats": [
            {"zone_name": "GLOBAL", "dual_setpoint": "Dual"},
            {"zone_name": "Zone_1", "single_heating_setpoint": "heatonly",
             "single_cooling_setpoint": "CoolOnly"}
        ]
    }));
    let diagnostics = validate(&document, &zones(&["Zone_1"]));
    let findings = &diagnostics.schedules_and_loads;
    assert_eq!(findings.missing_setpoints, vec!["CoolOnly"]);
    assert_eq!(findings.incomplete_setpoints, vec!["Dual"]);
    assert!(findings.missing_schedules.is_empty());
    assert!(diagnostics.has_schedule_load_warnings());
    assert!(diagnostics.zones.unknown_zone_references.is_empty());
}

#[test]
fn duplicate_schedules_are_per_kind() {
    let document = doc(json!({
        "schedules": {
            "compact": [
                {"name": "Occupancy", "lines": full_day_lines()},
                {"name": "OCCUPANCY", "lines": full_day_lines()}
            ],
            "constant": [{"name": "Occupancy", "value": 1.0}]
        }
    }));
    let diagnostics = validate(&document, &[]);
    assert_eq!(
        diagnostics.schedules_and_loads.duplicate_schedules,
        vec!["OCCUPANCY"]
    );
    assert_eq!(diagnostics.issues.len(), 1);
}

#[test]
fn invalid_schedules_and_materials_are_warnings() {
    let document = doc(json!({
        "materials": [
            {"kind": "NoMass", "name": "R1", "thermal_resistance": 0.0},
            {"kind": "SimpleGlazing", "name": "Win", "u_factor": 2.0,
             "solar_heat_gain_coefficient": 1.4}
        ],
        "constructions": [{"name": "Empty", "layers": [" "]}],
        "schedules": {
            "type_limits": [{"name": "Backwards", "lower_limit": 1.0, "upper_limit": 0.0}],
            "day_hourly": [{"name": "Short", "values": [1.0, 2.0]}],
            "compact": [{"name": "Partial", "lines": ["Through: 12/31", "For: AllDays", "Until: 18:00, 1"]}]
        }
    }));
    let diagnostics = validate(&document, &[]);
    assert_eq!(diagnostics.constructions.empty_constructions, vec!["Empty"]);
    assert_eq!(diagnostics.materials.invalid_materials, vec!["R1", "Win"]);
    assert_eq!(
        diagnostics.schedules_and_loads.invalid_schedules,
        vec!["Backwards", "Short", "Partial"]
    );
    assert_eq!(diagnostics.error_count(), 0);
    assert!(diagnostics
        .issues
        .iter()
        .any(|issue| issue.message == "schedule 'Partial' For at row 2 does not end at 24:00"));
}

#[test]
fn unknown_zone_references_skip_global() {
    let document = doc(json!({
        "zone_thermostats": [{"zone_name": "GLOBAL"}, {"zone_name": "Attic"}],
        "ideal_loads": {"per_zone": {"attic": {"heating_limit": "NoLimit"}, "Zone_1": {}}},
        "sizing": {"zones": {"Basement": {"heating_sizing_factor": 1.25}}}
    }));
    let diagnostics = validate(&document, &zones(&["Zone_1"]));
    assert_eq!(
        diagnostics.zones.unknown_zone_references,
        vec!["Attic", "Basement"]
    );
    assert_eq!(
        diagnostics.issues[0].message,
        "zone 'Attic' is not in the geometry (used by zone thermostats, ideal loads per-zone settings)"
    );
}

#[test]
fn issues_follow_category_order() {
    let document = doc(json!({
        "defaults": {"floor_construction": "Slab"},
        "constructions": [{"name": "Wall", "layers": ["Nope"]}],
        "internal_gains": {
            "lights": [{"name": "L", "zone_name": "Z", "schedule_name": "S", "method": "LightingLevel"}]
        },
        "sizing": {"zones": {"Z2": {}}}
    }));
    let diagnostics = validate(&document, &zones(&["Z"]));
    let categories: Vec<IssueCategory> = diagnostics
        .issues
        .iter()
        .map(|issue| issue.category)
        .collect();
    assert_eq!(
        categories,
        vec![
            IssueCategory::Constructions,
            IssueCategory::Materials,
            IssueCategory::Schedules,
            IssueCategory::Loads,
            IssueCategory::Zones,
        ]
    );
}

#[test]
fn geometry_is_summarized_not_judged() {
    let mut zone = Zone::named("Zone_1");
    zone.surface_count = 6;
    zone.window_count = 2;
    let diagnostics = validate(&ConfigurationDocument::default(), &[zone, Zone::named("Zone_2")]);
    assert_eq!(diagnostics.geometry.totals.zones, 2);
    assert_eq!(diagnostics.geometry.totals.surfaces, 6);
    assert_eq!(diagnostics.geometry.zones[0].window_count, 2);
    assert!(diagnostics.issues.is_empty());
}

#[test]
fn identical_inputs_serialize_identically() {
    let document = doc(json!({
        "constructions": [{"name": "Wall1", "layers": ["A", "B"]}],
        "ideal_loads": {"per_zone": {"Zone_B": {}, "Zone_A": {"availability_schedule": "X"}}},
        "sizing": {"zones": {"Zone_C": {}}}
    }));
    let zone_list = zones(&["Zone_1"]);
    let first = serde_json::to_string(&validate(&document, &zone_list)).expect("serialize");
    for _ in 0..5 {
        let again = serde_json::to_string(&validate(&document, &zone_list)).expect("serialize");
        assert_eq!(first, again);
    }
}

#[test]
fn diagnostics_json_uses_snake_case_fields() {
    let value = serde_json::to_value(validate(&ConfigurationDocument::default(), &[]))
        .expect("serialize diagnostics");
    assert!(value["constructions"]["missing_constructions"].is_array());
    assert!(value["schedules_and_loads"]["inconsistent_loads"].is_array());
    assert_eq!(value["geometry"]["totals"]["zones"], json!(0));
}
