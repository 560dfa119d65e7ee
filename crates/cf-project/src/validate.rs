//! Scenario validation logic.

use crate::schema::{CableDef, CableDefaultsDef, ConduitDef, LimitsDef, Scenario};
use cf_fill::CableTopology;
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing value: {field} in {context}")]
    Missing { field: String, context: String },

    #[error("Conflicting values: {first} and {second} in {context}")]
    Conflict {
        first: String,
        second: String,
        context: String,
    },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported feature: {feature} - {reason}")]
    Unsupported { feature: String, reason: String },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

/// Largest `quantity` a single cable entry may carry.
pub const MAX_CABLE_QUANTITY: u32 = 10_000;

/// Largest number of cables a scenario may expand to, quantities included.
pub const MAX_SCENARIO_CABLES: u64 = 100_000;

pub fn validate_scenario(scenario: &Scenario) -> Result<(), ValidationError> {
    if scenario.version != crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: scenario.version,
        });
    }

    validate_conduit(&scenario.conduit)?;

    if let Some(limits) = &scenario.limits {
        validate_limits(limits)?;
    }

    if let Some(defaults) = &scenario.defaults {
        validate_defaults(defaults)?;
    }

    let mut cable_ids = HashSet::new();
    for cable in &scenario.cables {
        if cable.id.trim().is_empty() {
            return Err(ValidationError::Missing {
                field: "id".to_string(),
                context: "cables".to_string(),
            });
        }
        if !cable_ids.insert(&cable.id) {
            return Err(ValidationError::DuplicateId {
                id: cable.id.clone(),
                context: "cables".to_string(),
            });
        }
        validate_cable(cable)?;
    }

    let total = scenario.cable_count();
    if total > MAX_SCENARIO_CABLES {
        return Err(ValidationError::InvalidValue {
            field: "cables".to_string(),
            value: total.to_string(),
            reason: format!("a scenario may hold at most {MAX_SCENARIO_CABLES} cables"),
        });
    }

    Ok(())
}

fn validate_conduit(conduit: &ConduitDef) -> Result<(), ValidationError> {
    if conduit.radius.is_some() {
        return Err(ValidationError::Unsupported {
            feature: "conduit.radius".to_string(),
            reason: "version 1 field; use internal_radius".to_string(),
        });
    }

    match (conduit.internal_diameter, conduit.internal_radius) {
        (Some(d), None) => check_dimension("conduit.internal_diameter", d),
        (None, Some(r)) => check_dimension("conduit.internal_radius", r),
        (Some(_), Some(_)) => Err(ValidationError::Conflict {
            first: "internal_diameter".to_string(),
            second: "internal_radius".to_string(),
            context: "conduit".to_string(),
        }),
        (None, None) => Err(ValidationError::Missing {
            field: "internal_diameter or internal_radius".to_string(),
            context: "conduit".to_string(),
        }),
    }
}

fn validate_limits(limits: &LimitsDef) -> Result<(), ValidationError> {
    for (field, value) in [
        ("limits.no_cables", limits.no_cables),
        ("limits.one_cable", limits.one_cable),
        ("limits.two_cables", limits.two_cables),
        ("limits.three_or_more", limits.three_or_more),
    ] {
        let Some(value) = value else { continue };
        if !value.is_finite() || !(0.0..=100.0).contains(&value) {
            return Err(ValidationError::InvalidValue {
                field: field.to_string(),
                value: value.to_string(),
                reason: "fill limit must be a percentage between 0 and 100".to_string(),
            });
        }
    }
    Ok(())
}

fn validate_defaults(defaults: &CableDefaultsDef) -> Result<(), ValidationError> {
    check_optional("defaults.core_radius", defaults.core_radius)?;
    check_optional("defaults.sheath_thickness", defaults.sheath_thickness)?;
    check_optional("defaults.margin", defaults.margin)?;
    check_optional("defaults.insulation_thickness", defaults.insulation_thickness)?;
    Ok(())
}

fn validate_cable(cable: &CableDef) -> Result<(), ValidationError> {
    let context = format!("cable '{}'", cable.id);

    cable
        .topology
        .parse::<CableTopology>()
        .map_err(|e| ValidationError::InvalidValue {
            field: format!("{context}.topology"),
            value: cable.topology.clone(),
            reason: e.to_string(),
        })?;

    if cable.diameter.is_some() {
        return Err(ValidationError::Unsupported {
            feature: format!("{context}.diameter"),
            reason: "version 1 field; use outer_diameter".to_string(),
        });
    }

    if cable.core_area.is_some() && cable.core_radius.is_some() {
        return Err(ValidationError::Conflict {
            first: "core_area".to_string(),
            second: "core_radius".to_string(),
            context,
        });
    }

    if cable.quantity == 0 || cable.quantity > MAX_CABLE_QUANTITY {
        return Err(ValidationError::InvalidValue {
            field: format!("{context}.quantity"),
            value: cable.quantity.to_string(),
            reason: format!("quantity must be between 1 and {MAX_CABLE_QUANTITY}"),
        });
    }

    check_optional("core_area", cable.core_area)?;
    check_optional("core_radius", cable.core_radius)?;
    check_optional("sheath_thickness", cable.sheath_thickness)?;
    check_optional("insulation_thickness", cable.insulation_thickness)?;
    check_optional("margin", cable.margin)?;
    check_optional("outer_diameter", cable.outer_diameter)?;
    Ok(())
}

fn check_optional(field: &str, value: Option<f64>) -> Result<(), ValidationError> {
    match value {
        Some(v) => check_dimension(field, v),
        None => Ok(()),
    }
}

fn check_dimension(field: &str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must be finite".to_string(),
        });
    }
    if value < 0.0 {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            reason: "must not be negative".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::UnitsDef;

    fn scenario() -> Scenario {
        Scenario {
            version: crate::LATEST_VERSION,
            name: "valid".into(),
            units: UnitsDef::Mm,
            conduit: ConduitDef {
                internal_diameter: Some(100.0),
                ..ConduitDef::default()
            },
            limits: None,
            defaults: None,
            cables: vec![CableDef::named("a", "single"), CableDef::named("b", "trefoil")],
        }
    }

    #[test]
    fn valid_scenario_passes() {
        validate_scenario(&scenario()).unwrap();
    }

    #[test]
    fn duplicate_cable_ids() {
        let mut s = scenario();
        s.cables[1].id = "a".into();
        assert!(matches!(
            validate_scenario(&s),
            Err(ValidationError::DuplicateId { .. })
        ));
    }

    #[test]
    fn empty_cable_id() {
        let mut s = scenario();
        s.cables[0].id = "  ".into();
        assert!(matches!(
            validate_scenario(&s),
            Err(ValidationError::Missing { .. })
        ));
    }

    #[test]
    fn unknown_topology() {
        let mut s = scenario();
        s.cables[0].topology = "hexagonal".into();
        let err = validate_scenario(&s).unwrap_err();
        assert!(err.to_string().contains("hexagonal"));
    }

    #[test]
    fn conduit_needs_exactly_one_size() {
        let mut s = scenario();
        s.conduit.internal_radius = Some(50.0);
        assert!(matches!(
            validate_scenario(&s),
            Err(ValidationError::Conflict { .. })
        ));

        s.conduit = ConduitDef::default();
        assert!(matches!(
            validate_scenario(&s),
            Err(ValidationError::Missing { .. })
        ));
    }

    #[test]
    fn negative_dimension_rejected() {
        let mut s = scenario();
        s.cables[0].sheath_thickness = Some(-1.0);
        assert!(matches!(
            validate_scenario(&s),
            Err(ValidationError::InvalidValue { .. })
        ));

        let mut s = scenario();
        s.conduit.internal_diameter = Some(f64::NAN);
        assert!(validate_scenario(&s).is_err());
    }

    #[test]
    fn core_area_and_radius_conflict() {
        let mut s = scenario();
        s.cables[0].core_area = Some(100.0);
        s.cables[0].core_radius = Some(5.0);
        assert!(matches!(
            validate_scenario(&s),
            Err(ValidationError::Conflict { .. })
        ));
    }

    #[test]
    fn zero_quantity_rejected() {
        let mut s = scenario();
        s.cables[0].quantity = 0;
        assert!(validate_scenario(&s).is_err());
    }

    #[test]
    fn huge_quantity_rejected() {
        let mut s = scenario();
        s.cables[0].quantity = 4_000_000_000;
        let err = validate_scenario(&s).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidValue { ref field, .. } if field.ends_with("quantity")));

        s.cables[0].quantity = MAX_CABLE_QUANTITY;
        validate_scenario(&s).unwrap();
    }

    #[test]
    fn total_cable_count_is_bounded() {
        let mut s = scenario();
        s.cables = (0..11)
            .map(|i| {
                let mut c = CableDef::named(format!("c{i}"), "single");
                c.quantity = MAX_CABLE_QUANTITY;
                c
            })
            .collect();
        assert!(matches!(
            validate_scenario(&s),
            Err(ValidationError::InvalidValue { ref field, .. }) if field == "cables"
        ));

        s.cables.pop();
        validate_scenario(&s).unwrap();
    }

    #[test]
    fn limits_must_be_percentages() {
        let mut s = scenario();
        s.limits = Some(LimitsDef {
            one_cable: Some(140.0),
            ..LimitsDef::default()
        });
        assert!(validate_scenario(&s).is_err());

        s.limits = Some(LimitsDef {
            one_cable: Some(60.0),
            ..LimitsDef::default()
        });
        validate_scenario(&s).unwrap();
    }

    #[test]
    fn legacy_fields_rejected_at_latest_version() {
        let mut s = scenario();
        s.cables[0].diameter = Some(40.0);
        assert!(matches!(
            validate_scenario(&s),
            Err(ValidationError::Unsupported { .. })
        ));
    }

    #[test]
    fn future_version_rejected() {
        let mut s = scenario();
        s.version = 99;
        assert_eq!(
            validate_scenario(&s),
            Err(ValidationError::UnsupportedVersion { version: 99 })
        );
    }
}
