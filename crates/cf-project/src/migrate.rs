//! Schema migration framework.
//!
//! Version 1 files come from the diameter-only era: the conduit carried a
//! bare `radius` and cables carried a bare `diameter`.

use crate::ProjectError;
use crate::schema::Scenario;

pub const LATEST_VERSION: u32 = 2;

pub fn migrate_to_latest(mut scenario: Scenario) -> Result<Scenario, ProjectError> {
    while scenario.version < LATEST_VERSION {
        scenario = migrate_one_version(scenario)?;
    }
    Ok(scenario)
}

fn migrate_one_version(scenario: Scenario) -> Result<Scenario, ProjectError> {
    match scenario.version {
        1 => migrate_v1_to_v2(scenario),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

fn migrate_v1_to_v2(mut scenario: Scenario) -> Result<Scenario, ProjectError> {
    if let Some(radius) = scenario.conduit.radius.take() {
        if scenario.conduit.internal_radius.is_some()
            || scenario.conduit.internal_diameter.is_some()
        {
            return Err(ProjectError::Migration {
                what: "conduit has both legacy 'radius' and an internal size".to_string(),
            });
        }
        scenario.conduit.internal_radius = Some(radius);
    }

    for cable in &mut scenario.cables {
        let Some(diameter) = cable.diameter.take() else {
            continue;
        };
        if cable.outer_diameter.is_some() {
            return Err(ProjectError::Migration {
                what: format!(
                    "cable '{}' has both legacy 'diameter' and 'outer_diameter'",
                    cable.id
                ),
            });
        }
        cable.outer_diameter = Some(diameter);
    }

    scenario.version = 2;
    Ok(scenario)
}
