//! Effective cable dimensions from construction parameters.
//!
//! The effective radius is the radius of the circle a packed cable is
//! considered to occupy: core packing distance + core radius + sheath + margin.

use crate::common::{check_dimension, finite_circle_area};
use crate::error::FillResult;
use crate::topology::CableTopology;
use cf_core::numeric::Real;

/// Effective outer radius of a cable.
///
/// Fails on any negative or non-finite input.
pub fn effective_radius(
    topology: CableTopology,
    core_radius: Real,
    sheath_thickness: Real,
    margin: Real,
) -> FillResult<Real> {
    let core_radius = check_dimension(core_radius, "core radius")?;
    let sheath_thickness = check_dimension(sheath_thickness, "sheath thickness")?;
    let margin = check_dimension(margin, "margin")?;

    Ok(topology.core_center_distance(core_radius) + core_radius + sheath_thickness + margin)
}

/// Cross-sectional area of the effective circle, `pi * r_eff^2`.
pub fn effective_area(
    topology: CableTopology,
    core_radius: Real,
    sheath_thickness: Real,
    margin: Real,
) -> FillResult<Real> {
    let radius = effective_radius(topology, core_radius, sheath_thickness, margin)?;
    finite_circle_area(radius, "effective area")
}

/// Radius of a circular conductor with the given cross-sectional area.
pub fn core_radius_from_area(area: Real) -> FillResult<Real> {
    let area = check_dimension(area, "core area")?;
    if area == 0.0 {
        return Ok(0.0);
    }
    Ok((area / std::f64::consts::PI).sqrt())
}

/// Outer diameter implied by construction inputs.
///
/// Insulation is added to the core radius before packing, so it grows the
/// core spacing of multi-core cables as well as the outer radius.
pub fn outer_diameter_from_construction(
    topology: CableTopology,
    core_area: Real,
    sheath_thickness: Real,
    margin: Real,
    insulation_thickness: Real,
) -> FillResult<Real> {
    let core_radius = core_radius_from_area(core_area)?;
    let insulation = check_dimension(insulation_thickness, "insulation thickness")?;
    Ok(2.0 * effective_radius(topology, core_radius + insulation, sheath_thickness, margin)?)
}

/// Smallest outer diameter that still covers the packed cores and sheath.
pub fn min_outer_diameter(
    topology: CableTopology,
    core_radius: Real,
    sheath_thickness: Real,
    insulation_thickness: Real,
) -> FillResult<Real> {
    let core_radius = check_dimension(core_radius, "core radius")?;
    let insulation = check_dimension(insulation_thickness, "insulation thickness")?;
    Ok(2.0 * effective_radius(topology, core_radius + insulation, sheath_thickness, 0.0)?)
}
