//! Occupied-area accumulation.
//!
//! Sums are compensated so the result does not depend on cable order beyond
//! rounding noise.

use crate::cable::CableSpec;
use crate::common::{check_dimension, finite_circle_area};
use crate::error::FillResult;
use crate::geometry::effective_area;
use crate::topology::CableTopology;
use cf_core::numeric::{Real, compensated_sum};

/// Total effective area of `(topology, core_radius, sheath_thickness, margin)` entries.
pub fn total_area_from_geometry(cables: &[(CableTopology, Real, Real, Real)]) -> FillResult<Real> {
    let areas = cables
        .iter()
        .map(|&(topology, core_radius, sheath, margin)| {
            effective_area(topology, core_radius, sheath, margin)
        })
        .collect::<FillResult<Vec<_>>>()?;
    Ok(compensated_sum(areas))
}

/// Total area of `(topology, outer_diameter)` entries.
///
/// Topology rides along for cable counting only; area depends on diameter alone.
pub fn total_area_from_diameters(cables: &[(CableTopology, Real)]) -> FillResult<Real> {
    let areas = cables
        .iter()
        .map(|&(_, od)| finite_circle_area(check_dimension(od, "outer diameter")? / 2.0, "cable area"))
        .collect::<FillResult<Vec<_>>>()?;
    Ok(compensated_sum(areas))
}

/// Total area of canonical cable specs, honouring diameter overrides.
pub fn total_area(cables: &[CableSpec]) -> FillResult<Real> {
    let areas = cables
        .iter()
        .map(CableSpec::area)
        .collect::<FillResult<Vec<_>>>()?;
    Ok(compensated_sum(areas))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FillError;
    use std::f64::consts::PI;

    #[test]
    fn empty_inputs_sum_to_zero() {
        assert_eq!(total_area_from_geometry(&[]).unwrap(), 0.0);
        assert_eq!(total_area_from_diameters(&[]).unwrap(), 0.0);
        assert_eq!(total_area(&[]).unwrap(), 0.0);
    }

    #[test]
    fn three_single_cables() {
        let cables = [(CableTopology::Single, 30.0, 3.0, 2.0); 3];
        let total = total_area_from_geometry(&cables).unwrap();
        assert!((total - 3.0 * PI * 1225.0).abs() < 1e-9);
        assert!((total - 11545.35).abs() < 1e-2);
    }

    #[test]
    fn mixed_topologies() {
        let cables = [
            (CableTopology::Single, 1.0, 0.5, 0.1),
            (CableTopology::ThreeCore, 1.0, 0.5, 0.1),
        ];
        let expected = effective_area(CableTopology::Single, 1.0, 0.5, 0.1).unwrap()
            + effective_area(CableTopology::ThreeCore, 1.0, 0.5, 0.1).unwrap();
        let total = total_area_from_geometry(&cables).unwrap();
        assert!((total - expected).abs() < 1e-12);
    }

    #[test]
    fn diameters_ignore_topology() {
        let a = total_area_from_diameters(&[(CableTopology::Single, 70.0)]).unwrap();
        let b = total_area_from_diameters(&[(CableTopology::FourCore, 70.0)]).unwrap();
        assert_eq!(a, b);
        assert!((a - PI * 1225.0).abs() < 1e-9);
    }

    #[test]
    fn one_bad_entry_fails_the_sum() {
        let cables = [
            (CableTopology::Single, 30.0, 3.0, 2.0),
            (CableTopology::Single, 30.0, 3.0, -2.0),
        ];
        assert!(matches!(
            total_area_from_geometry(&cables),
            Err(FillError::NegativeDimension { .. })
        ));
        assert!(total_area_from_diameters(&[(CableTopology::Single, -1.0)]).is_err());
    }

    #[test]
    fn spec_sum_uses_overrides() {
        let derived = CableSpec::new(CableTopology::Single, 30.0, 3.0, 2.0).unwrap();
        let legacy = CableSpec::from_outer_diameter(CableTopology::Single, 70.0).unwrap();
        let total = total_area(&[derived, legacy]).unwrap();
        assert!((total - 2.0 * PI * 1225.0).abs() < 1e-9);
    }
}
