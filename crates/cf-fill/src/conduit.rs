//! Conduit cross-section.

use crate::common::{check_dimension, circle_area, finite_circle_area};
use crate::error::FillResult;
use cf_core::numeric::Real;

/// Internal diameter of a freshly created conduit.
pub const DEFAULT_CONDUIT_DIAMETER: Real = 600.0;

/// A conduit size with its unit spelled out.
///
/// Radius and diameter both circulate at the boundary; carrying the tag
/// keeps them from being mixed up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ConduitSize {
    Radius(Real),
    Diameter(Real),
}

impl ConduitSize {
    pub fn diameter(self) -> Real {
        match self {
            ConduitSize::Radius(r) => 2.0 * r,
            ConduitSize::Diameter(d) => d,
        }
    }

    pub fn radius(self) -> Real {
        match self {
            ConduitSize::Radius(r) => r,
            ConduitSize::Diameter(d) => d / 2.0,
        }
    }
}

/// Circular conduit, described by its internal diameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ConduitSpec {
    internal_diameter: Real,
}

impl ConduitSpec {
    pub fn new(size: ConduitSize) -> FillResult<Self> {
        let internal_diameter = match size {
            ConduitSize::Radius(r) => {
                check_dimension(2.0 * check_dimension(r, "conduit radius")?, "conduit radius")?
            }
            ConduitSize::Diameter(d) => check_dimension(d, "conduit diameter")?,
        };
        // Keeps `area()` finite for every constructed conduit.
        finite_circle_area(internal_diameter / 2.0, "conduit area")?;
        Ok(Self { internal_diameter })
    }

    pub fn from_diameter(internal_diameter: Real) -> FillResult<Self> {
        Self::new(ConduitSize::Diameter(internal_diameter))
    }

    pub fn from_radius(internal_radius: Real) -> FillResult<Self> {
        Self::new(ConduitSize::Radius(internal_radius))
    }

    pub fn internal_diameter(&self) -> Real {
        self.internal_diameter
    }

    pub fn internal_radius(&self) -> Real {
        self.internal_diameter / 2.0
    }

    /// Internal cross-sectional area.
    pub fn area(&self) -> Real {
        circle_area(self.internal_radius())
    }
}

impl Default for ConduitSpec {
    fn default() -> Self {
        Self {
            internal_diameter: DEFAULT_CONDUIT_DIAMETER,
        }
    }
}

/// Internal cross-sectional area for an explicitly tagged size.
pub fn conduit_area(size: ConduitSize) -> FillResult<Real> {
    Ok(ConduitSpec::new(size)?.area())
}

pub fn conduit_area_from_radius(internal_radius: Real) -> FillResult<Real> {
    conduit_area(ConduitSize::Radius(internal_radius))
}

pub fn conduit_area_from_diameter(internal_diameter: Real) -> FillResult<Real> {
    conduit_area(ConduitSize::Diameter(internal_diameter))
}
