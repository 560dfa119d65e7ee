//! Scenario schema definitions.

use cf_core::units::LengthUnit;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Scenario {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub units: UnitsDef,
    pub conduit: ConduitDef,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limits: Option<LimitsDef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub defaults: Option<CableDefaultsDef>,
    #[serde(default)]
    pub cables: Vec<CableDef>,
}

/// Unit for every linear dimension in the file. Areas use its square.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitsDef {
    #[default]
    Mm,
    Cm,
    M,
    In,
}

impl From<UnitsDef> for LengthUnit {
    fn from(u: UnitsDef) -> Self {
        match u {
            UnitsDef::Mm => LengthUnit::Millimeter,
            UnitsDef::Cm => LengthUnit::Centimeter,
            UnitsDef::M => LengthUnit::Meter,
            UnitsDef::In => LengthUnit::Inch,
        }
    }
}

/// Conduit size. Exactly one of `internal_diameter` / `internal_radius`.
///
/// ```yaml
/// conduit:
///   internal_diameter: 100.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ConduitDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_diameter: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub internal_radius: Option<f64>,
    /// Version 1 field, moved to `internal_radius` by migration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radius: Option<f64>,
}

/// Fill limit overrides in percent. Missing entries keep the AS/NZS 3000 value.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LimitsDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub no_cables: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub one_cable: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_cables: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub three_or_more: Option<f64>,
}

/// Construction values applied to cables that leave them out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CableDefaultsDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheath_thickness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insulation_thickness: Option<f64>,
}

/// One cable entry.
///
/// The core is given either by `core_area` or by `core_radius`. When
/// `outer_diameter` is present it decides the occupied area.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CableDef {
    pub id: String,
    #[serde(default = "default_topology")]
    pub topology: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub core_radius: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sheath_thickness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insulation_thickness: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outer_diameter: Option<f64>,
    /// Version 1 field, moved to `outer_diameter` by migration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

impl CableDef {
    /// Cable with only an id and topology; everything else from defaults.
    pub fn named(id: impl Into<String>, topology: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            topology: topology.into(),
            core_area: None,
            core_radius: None,
            sheath_thickness: None,
            insulation_thickness: None,
            margin: None,
            outer_diameter: None,
            diameter: None,
            quantity: default_quantity(),
        }
    }
}

fn default_topology() -> String {
    "single".to_string()
}

fn default_quantity() -> u32 {
    1
}

impl Scenario {
    /// Number of physical cables, counting quantities.
    pub fn cable_count(&self) -> u64 {
        self.cables.iter().map(|c| u64::from(c.quantity)).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_yaml_fills_defaults() {
        let yaml = r#"
version: 2
name: Minimal
conduit:
  internal_diameter: 100.0
cables:
  - id: a
"#;
        let scenario: Scenario = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(scenario.units, UnitsDef::Mm);
        assert_eq!(scenario.cables[0].topology, "single");
        assert_eq!(scenario.cables[0].quantity, 1);
        assert!(scenario.limits.is_none());
    }

    #[test]
    fn units_map_to_length_units() {
        assert_eq!(LengthUnit::from(UnitsDef::In), LengthUnit::Inch);
        let units: UnitsDef = serde_yaml::from_str("cm").unwrap();
        assert_eq!(units, UnitsDef::Cm);
    }

    #[test]
    fn cable_count_includes_quantity() {
        let mut a = CableDef::named("a", "single");
        a.quantity = 3;
        let scenario = Scenario {
            version: 2,
            name: "n".into(),
            units: UnitsDef::Mm,
            conduit: ConduitDef::default(),
            limits: None,
            defaults: None,
            cables: vec![a, CableDef::named("b", "three")],
        };
        assert_eq!(scenario.cable_count(), 4);
    }

    #[test]
    fn legacy_fields_are_not_written_when_absent() {
        let yaml = serde_yaml::to_string(&CableDef::named("a", "four")).unwrap();
        assert!(!yaml.contains("diameter"));
    }
}
