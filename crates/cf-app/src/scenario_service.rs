//! Scenario loading, saving, and resolution into fill snapshots.

use std::path::Path;

use cf_core::units::LengthUnit;
use cf_fill::{
    CableDefaults, CableSpec, CableTopology, ComplianceTable, ConduitSize, ConduitSpec,
    FillEvaluation, Snapshot, core_radius_from_area,
};
use cf_project::schema::{CableDef, CableDefaultsDef, ConduitDef, LimitsDef, Scenario};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// A scenario converted to millimetres and expanded cable by cable.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedScenario {
    pub name: String,
    pub snapshot: Snapshot,
    pub table: ComplianceTable,
    /// Scenario cable id for each entry of `snapshot.cables`.
    pub labels: Vec<String>,
}

impl ResolvedScenario {
    pub fn evaluate(&self) -> AppResult<FillEvaluation> {
        Ok(cf_fill::evaluate(&self.snapshot, &self.table)?)
    }
}

/// Load a scenario (YAML or JSON by extension), migrating legacy versions.
pub fn load_scenario(path: &Path) -> AppResult<Scenario> {
    let scenario = cf_project::load_any(path).map_err(|e| AppError::ScenarioFileRead {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(
        path = %path.display(),
        name = %scenario.name,
        cables = scenario.cable_count(),
        "loaded scenario"
    );
    Ok(scenario)
}

/// Save a scenario; `.json` paths are written as JSON, everything else YAML.
pub fn save_scenario(path: &Path, scenario: &Scenario) -> AppResult<()> {
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let saved = if is_json {
        cf_project::save_json(path, scenario)
    } else {
        cf_project::save_yaml(path, scenario)
    };
    saved.map_err(|e| AppError::ScenarioFileWrite {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), "saved scenario");
    Ok(())
}

/// Convert a validated scenario into a snapshot and limit table.
pub fn resolve_scenario(scenario: &Scenario) -> AppResult<ResolvedScenario> {
    cf_project::validate_scenario(scenario).map_err(cf_project::ProjectError::from)?;

    let unit: LengthUnit = scenario.units.into();
    let conduit = resolve_conduit(&scenario.conduit, unit)?;
    let defaults = resolve_defaults(scenario.defaults.as_ref(), unit)?;
    let table = resolve_limits(scenario.limits.as_ref())?;

    let mut cables = Vec::new();
    let mut labels = Vec::new();
    for def in &scenario.cables {
        let spec = resolve_cable(def, &defaults, unit)?;
        for _ in 0..def.quantity {
            cables.push(spec);
            labels.push(def.id.clone());
        }
    }

    debug!(
        name = %scenario.name,
        unit = unit.symbol(),
        conduit_diameter_mm = conduit.internal_diameter(),
        cables = cables.len(),
        "resolved scenario"
    );

    Ok(ResolvedScenario {
        name: scenario.name.clone(),
        snapshot: Snapshot::new(conduit, cables),
        table,
        labels,
    })
}

/// Resolve and evaluate in one step.
pub fn evaluate_scenario(scenario: &Scenario) -> AppResult<FillEvaluation> {
    let resolved = resolve_scenario(scenario)?;
    let evaluation = resolved.evaluate()?;
    info!(
        name = %resolved.name,
        fill_percentage = evaluation.fill_percentage,
        max_allowable = evaluation.max_allowable_fill,
        compliant = evaluation.compliant,
        "evaluated scenario"
    );
    Ok(evaluation)
}

fn resolve_conduit(def: &ConduitDef, unit: LengthUnit) -> AppResult<ConduitSpec> {
    let size = match (def.internal_diameter, def.internal_radius) {
        (Some(d), None) => ConduitSize::Diameter(unit.to_mm(d)),
        (None, Some(r)) => ConduitSize::Radius(unit.to_mm(r)),
        _ => {
            return Err(AppError::InvalidInput(
                "conduit needs exactly one of internal_diameter or internal_radius".to_string(),
            ));
        }
    };
    Ok(ConduitSpec::new(size)?)
}

fn resolve_defaults(def: Option<&CableDefaultsDef>, unit: LengthUnit) -> AppResult<CableDefaults> {
    let mut defaults = CableDefaults::default();
    if let Some(def) = def {
        let mm = |v: Option<f64>, fallback: f64| v.map_or(fallback, |v| unit.to_mm(v));
        defaults = CableDefaults {
            core_radius: mm(def.core_radius, defaults.core_radius),
            sheath_thickness: mm(def.sheath_thickness, defaults.sheath_thickness),
            margin: mm(def.margin, defaults.margin),
            insulation_thickness: mm(def.insulation_thickness, defaults.insulation_thickness),
        };
    }
    defaults.validate()?;
    Ok(defaults)
}

fn resolve_limits(def: Option<&LimitsDef>) -> AppResult<ComplianceTable> {
    let mut table = ComplianceTable::AS_NZS_3000;
    if let Some(def) = def {
        table.no_cables = def.no_cables.unwrap_or(table.no_cables);
        table.one_cable = def.one_cable.unwrap_or(table.one_cable);
        table.two_cables = def.two_cables.unwrap_or(table.two_cables);
        table.three_or_more = def.three_or_more.unwrap_or(table.three_or_more);
    }
    table.validate()?;
    Ok(table)
}

fn resolve_cable(def: &CableDef, defaults: &CableDefaults, unit: LengthUnit) -> AppResult<CableSpec> {
    let topology: CableTopology = def.topology.parse()?;

    let has_construction = def.core_area.is_some()
        || def.core_radius.is_some()
        || def.sheath_thickness.is_some()
        || def.insulation_thickness.is_some()
        || def.margin.is_some();

    // Diameter-only cables carry no construction data of their own.
    if let (Some(od), false) = (def.outer_diameter, has_construction) {
        return Ok(CableSpec::from_outer_diameter(topology, unit.to_mm(od))?);
    }

    let core_radius = match (def.core_area, def.core_radius) {
        (Some(area), _) => core_radius_from_area(unit.area_to_mm2(area))?,
        (None, Some(r)) => unit.to_mm(r),
        (None, None) => defaults.core_radius,
    };
    let mm = |v: Option<f64>, fallback: f64| v.map_or(fallback, |v| unit.to_mm(v));

    let mut spec = CableSpec::new(
        topology,
        core_radius,
        mm(def.sheath_thickness, defaults.sheath_thickness),
        mm(def.margin, defaults.margin),
    )?
    .with_insulation(mm(def.insulation_thickness, defaults.insulation_thickness))?;

    if let Some(od) = def.outer_diameter {
        spec = spec.with_outer_diameter(unit.to_mm(od))?;
    }
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cf_project::schema::UnitsDef;

    fn scenario(units: UnitsDef, cables: Vec<CableDef>) -> Scenario {
        Scenario {
            version: cf_project::LATEST_VERSION,
            name: "test".into(),
            units,
            conduit: ConduitDef {
                internal_radius: Some(50.0),
                ..ConduitDef::default()
            },
            limits: None,
            defaults: None,
            cables,
        }
    }

    fn feeder() -> CableDef {
        let mut c = CableDef::named("feeder", "single");
        c.core_radius = Some(30.0);
        c.sheath_thickness = Some(3.0);
        c.margin = Some(2.0);
        c.insulation_thickness = Some(0.0);
        c
    }

    #[test]
    fn single_cable_scenario() {
        let eval = evaluate_scenario(&scenario(UnitsDef::Mm, vec![feeder()])).unwrap();
        assert_eq!(eval.cable_count, 1);
        assert!((eval.fill_percentage - 49.0).abs() < 1e-9);
        assert!(eval.compliant);
        assert_eq!(eval.max_allowable_fill, 53.0);
    }

    #[test]
    fn quantity_expands_cables() {
        let mut c = feeder();
        c.quantity = 3;
        let resolved = resolve_scenario(&scenario(UnitsDef::Mm, vec![c])).unwrap();
        assert_eq!(resolved.snapshot.cable_count(), 3);
        assert_eq!(resolved.labels, vec!["feeder"; 3]);

        let eval = resolved.evaluate().unwrap();
        assert!((eval.fill_percentage - 147.0).abs() < 1e-9);
        assert!(!eval.compliant);
    }

    #[test]
    fn units_convert_to_millimetres() {
        let mut c = feeder();
        c.core_radius = Some(3.0);
        c.sheath_thickness = Some(0.3);
        c.margin = Some(0.2);
        let mut s = scenario(UnitsDef::Cm, vec![c]);
        s.conduit.internal_radius = Some(5.0);

        let resolved = resolve_scenario(&s).unwrap();
        assert!((resolved.snapshot.conduit.internal_radius() - 50.0).abs() < 1e-9);
        let eval = resolved.evaluate().unwrap();
        assert!((eval.fill_percentage - 49.0).abs() < 1e-9);
    }

    #[test]
    fn core_area_uses_square_units() {
        let mut c = CableDef::named("a", "single");
        c.core_area = Some(1.0);
        let resolved = resolve_scenario(&scenario(UnitsDef::Cm, vec![c])).unwrap();
        let r = resolved.snapshot.cables[0].core_radius;
        assert!((std::f64::consts::PI * r * r - 100.0).abs() < 1e-9);
    }

    #[test]
    fn defaults_fill_missing_fields() {
        let mut s = scenario(UnitsDef::Mm, vec![CableDef::named("a", "single")]);
        s.defaults = Some(CableDefaultsDef {
            sheath_thickness: Some(5.0),
            ..CableDefaultsDef::default()
        });
        let spec = resolve_scenario(&s).unwrap().snapshot.cables[0];
        assert_eq!(spec.sheath_thickness, 5.0);
        assert_eq!(spec.core_radius, CableDefaults::CORE_RADIUS);
        assert_eq!(spec.insulation_thickness, CableDefaults::INSULATION_THICKNESS);
    }

    #[test]
    fn diameter_only_cable_is_authoritative() {
        let mut c = CableDef::named("legacy", "three");
        c.outer_diameter = Some(40.0);
        let spec = resolve_scenario(&scenario(UnitsDef::Mm, vec![c])).unwrap().snapshot.cables[0];
        assert_eq!(spec.core_radius, 0.0);
        assert_eq!(spec.outer_diameter().unwrap(), 40.0);
    }

    #[test]
    fn limit_overrides_apply() {
        let mut s = scenario(UnitsDef::Mm, vec![feeder()]);
        s.limits = Some(LimitsDef {
            one_cable: Some(45.0),
            ..LimitsDef::default()
        });
        let eval = evaluate_scenario(&s).unwrap();
        assert_eq!(eval.max_allowable_fill, 45.0);
        assert!(!eval.compliant);
    }

    #[test]
    fn invalid_scenario_is_rejected() {
        let mut c = feeder();
        c.topology = "hex".into();
        let err = resolve_scenario(&scenario(UnitsDef::Mm, vec![c])).unwrap_err();
        assert!(matches!(err, AppError::Project(_)));
    }

    #[test]
    fn oversized_quantity_fails_before_expansion() {
        let mut c = feeder();
        c.quantity = 4_000_000_000;
        let err = resolve_scenario(&scenario(UnitsDef::Mm, vec![c])).unwrap_err();
        assert!(matches!(err, AppError::Project(_)));
    }

    #[test]
    fn empty_scenario_is_compliant() {
        let eval = evaluate_scenario(&scenario(UnitsDef::Mm, vec![])).unwrap();
        assert_eq!(eval.total_cable_area, 0.0);
        assert_eq!(eval.fill_percentage, 0.0);
        assert_eq!(eval.max_allowable_fill, 100.0);
        assert!(eval.compliant);
    }
}
