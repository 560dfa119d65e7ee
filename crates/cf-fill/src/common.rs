//! Common guards for fill calculations.

use crate::error::FillResult;
use cf_core::numeric::{Real, ensure_finite, ensure_non_negative};

/// Accept a linear dimension or area: finite and `>= 0`.
///
/// Never clamps. A negative value in compliance math is a caller bug.
pub fn check_dimension(value: Real, what: &'static str) -> FillResult<Real> {
    Ok(ensure_non_negative(value, what)?)
}

/// Area of a circle of the given radius.
#[inline]
pub fn circle_area(radius: Real) -> Real {
    std::f64::consts::PI * radius.powi(2)
}

/// `circle_area` that fails instead of overflowing to infinity.
///
/// Radii above roughly 1e154 square past `f64::MAX`.
pub fn finite_circle_area(radius: Real, what: &'static str) -> FillResult<Real> {
    Ok(ensure_finite(circle_area(radius), what)?)
}
