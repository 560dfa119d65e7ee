//! Canonical cable description.

use crate::common::{check_dimension, circle_area, finite_circle_area};
use crate::error::FillResult;
use crate::geometry::{core_radius_from_area, effective_radius};
use crate::topology::CableTopology;
use cf_core::numeric::Real;

/// Construction values used when a cable does not specify its own.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CableDefaults {
    pub core_radius: Real,
    pub sheath_thickness: Real,
    pub margin: Real,
    pub insulation_thickness: Real,
}

impl CableDefaults {
    pub const CORE_RADIUS: Real = 30.0;
    pub const SHEATH_THICKNESS: Real = 3.0;
    pub const MARGIN: Real = 2.0;
    pub const INSULATION_THICKNESS: Real = 1.0;

    pub fn validate(&self) -> FillResult<()> {
        check_dimension(self.core_radius, "default core radius")?;
        check_dimension(self.sheath_thickness, "default sheath thickness")?;
        check_dimension(self.margin, "default margin")?;
        check_dimension(self.insulation_thickness, "default insulation thickness")?;
        Ok(())
    }

    /// Core cross-sectional area implied by the default core radius.
    pub fn core_area(&self) -> Real {
        circle_area(self.core_radius)
    }
}

impl Default for CableDefaults {
    fn default() -> Self {
        Self {
            core_radius: Self::CORE_RADIUS,
            sheath_thickness: Self::SHEATH_THICKNESS,
            margin: Self::MARGIN,
            insulation_thickness: Self::INSULATION_THICKNESS,
        }
    }
}

/// One cable as seen by the fill calculation.
///
/// Construction parameters are the source of truth for geometry. The outer
/// diameter is derived from them unless `outer_diameter` carries an explicit
/// value, in which case that value is authoritative for area.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CableSpec {
    pub topology: CableTopology,
    pub core_radius: Real,
    pub sheath_thickness: Real,
    /// Insulation between conductor and sheath, added to the core radius before packing.
    pub insulation_thickness: Real,
    pub margin: Real,
    pub outer_diameter: Option<Real>,
}

impl CableSpec {
    /// Cable without core insulation or diameter override.
    pub fn new(
        topology: CableTopology,
        core_radius: Real,
        sheath_thickness: Real,
        margin: Real,
    ) -> FillResult<Self> {
        let spec = Self {
            topology,
            core_radius,
            sheath_thickness,
            insulation_thickness: 0.0,
            margin,
            outer_diameter: None,
        };
        spec.validate()?;
        Ok(spec)
    }

    /// Cable described by its conductor cross-sectional area.
    pub fn from_core_area(
        topology: CableTopology,
        core_area: Real,
        sheath_thickness: Real,
        margin: Real,
        insulation_thickness: Real,
    ) -> FillResult<Self> {
        let core_radius = core_radius_from_area(core_area)?;
        Self::new(topology, core_radius, sheath_thickness, margin)?
            .with_insulation(insulation_thickness)
    }

    pub fn from_defaults(topology: CableTopology, defaults: &CableDefaults) -> FillResult<Self> {
        Self::new(
            topology,
            defaults.core_radius,
            defaults.sheath_thickness,
            defaults.margin,
        )?
        .with_insulation(defaults.insulation_thickness)
    }

    /// Convert a legacy diameter-only cable.
    ///
    /// Construction parameters are zero; the diameter carries the area.
    pub fn from_outer_diameter(topology: CableTopology, outer_diameter: Real) -> FillResult<Self> {
        Self::new(topology, 0.0, 0.0, 0.0)?.with_outer_diameter(outer_diameter)
    }

    pub fn with_insulation(mut self, insulation_thickness: Real) -> FillResult<Self> {
        self.insulation_thickness = check_dimension(insulation_thickness, "insulation thickness")?;
        Ok(self)
    }

    pub fn with_outer_diameter(mut self, outer_diameter: Real) -> FillResult<Self> {
        self.outer_diameter = Some(check_dimension(outer_diameter, "outer diameter")?);
        Ok(self)
    }

    pub fn validate(&self) -> FillResult<()> {
        check_dimension(self.core_radius, "core radius")?;
        check_dimension(self.sheath_thickness, "sheath thickness")?;
        check_dimension(self.insulation_thickness, "insulation thickness")?;
        check_dimension(self.margin, "margin")?;
        if let Some(od) = self.outer_diameter {
            check_dimension(od, "outer diameter")?;
        }
        Ok(())
    }

    /// Core radius including its insulation, the radius used for packing.
    pub fn packing_radius(&self) -> Real {
        self.core_radius + self.insulation_thickness
    }

    /// Effective radius from construction, ignoring any diameter override.
    pub fn effective_radius(&self) -> FillResult<Real> {
        check_dimension(self.insulation_thickness, "insulation thickness")?;
        effective_radius(
            self.topology,
            self.packing_radius(),
            self.sheath_thickness,
            self.margin,
        )
    }

    pub fn derived_outer_diameter(&self) -> FillResult<Real> {
        Ok(2.0 * self.effective_radius()?)
    }

    /// Override when present, otherwise derived.
    pub fn outer_diameter(&self) -> FillResult<Real> {
        match self.outer_diameter {
            Some(od) => check_dimension(od, "outer diameter"),
            None => self.derived_outer_diameter(),
        }
    }

    /// Occupied cross-sectional area.
    pub fn area(&self) -> FillResult<Real> {
        match self.outer_diameter {
            Some(od) => {
                finite_circle_area(check_dimension(od, "outer diameter")? / 2.0, "cable area")
            }
            None => finite_circle_area(self.effective_radius()?, "cable area"),
        }
    }
}
