use crate::{CfError, CfResult};

/// Floating point type used throughout system
pub type Real = f64;

/// Absolute + relative tolerance pair for float comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> CfResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CfError::NonFinite { what, value: v })
    }
}

/// Finite and `>= 0`. Negative zero passes.
pub fn ensure_non_negative(v: Real, what: &'static str) -> CfResult<Real> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        Err(CfError::NegativeValue { what, value: v })
    } else {
        Ok(v)
    }
}

/// Neumaier-compensated sum.
///
/// Keeps the running error term so that permuting the input changes the
/// result by far less than a naive left fold would.
pub fn compensated_sum<I>(values: I) -> Real
where
    I: IntoIterator<Item = Real>,
{
    let mut sum = 0.0;
    let mut compensation = 0.0;
    for v in values {
        let t = sum + v;
        if sum.abs() >= v.abs() {
            compensation += (sum - t) + v;
        } else {
            compensation += (v - t) + sum;
        }
        sum = t;
    }
    sum + compensation
}
