use std::path::{Path, PathBuf};

fn scenarios_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("demos")
        .join("scenarios")
}

#[test]
fn demos_load_and_validate() {
    let root = scenarios_dir();
    let demos = [
        "01_single_cable.yaml",
        "02_overfilled.yaml",
        "03_legacy_diameters.yaml",
        "04_centimetre_units.yaml",
        "05_empty_conduit.yaml",
        "06_mixed_topologies.json",
    ];

    for name in demos {
        let path = root.join(name);
        let scenario = cf_project::load_any(&path)
            .unwrap_or_else(|e| panic!("Failed to load {}: {}", name, e));
        assert_eq!(scenario.version, cf_project::LATEST_VERSION, "{name}");
        cf_project::validate_scenario(&scenario)
            .unwrap_or_else(|e| panic!("Failed to validate {}: {}", name, e));
    }
}

#[test]
fn legacy_demo_is_migrated() {
    let scenario = cf_project::load_yaml(&scenarios_dir().join("03_legacy_diameters.yaml")).unwrap();
    assert_eq!(scenario.conduit.internal_radius, Some(50.0));
    assert_eq!(scenario.conduit.radius, None);
    assert_eq!(scenario.cables[0].outer_diameter, Some(40.0));
    assert_eq!(scenario.cables[1].outer_diameter, Some(20.0));
}

#[test]
fn quantities_count_towards_total() {
    let scenario = cf_project::load_yaml(&scenarios_dir().join("02_overfilled.yaml")).unwrap();
    assert_eq!(scenario.cables.len(), 1);
    assert_eq!(scenario.cable_count(), 3);

    let scenario = cf_project::load_json(&scenarios_dir().join("06_mixed_topologies.json")).unwrap();
    assert_eq!(scenario.cable_count(), 5);
}
