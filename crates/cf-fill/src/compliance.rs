//! Simplified AS/NZS 3000 conduit fill limits.
//!
//! These are common interpretations of the standard's general limits and do
//! not cover every clause. Real installations must be checked against the
//! full standard.

use crate::error::{FillError, FillResult};
use cf_core::numeric::Real;

pub const AS_NZS_MAX_FILL_NO_CABLES: Real = 100.0;
pub const AS_NZS_MAX_FILL_ONE_CABLE: Real = 53.0;
pub const AS_NZS_MAX_FILL_TWO_CABLES: Real = 31.0;
pub const AS_NZS_MAX_FILL_THREE_OR_MORE_CABLES: Real = 40.0;

/// Maximum fill percentage per cable-count bucket.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplianceTable {
    /// Zero (or negative) cable count: unrestricted.
    pub no_cables: Real,
    pub one_cable: Real,
    pub two_cables: Real,
    pub three_or_more: Real,
}

impl ComplianceTable {
    pub const AS_NZS_3000: ComplianceTable = ComplianceTable {
        no_cables: AS_NZS_MAX_FILL_NO_CABLES,
        one_cable: AS_NZS_MAX_FILL_ONE_CABLE,
        two_cables: AS_NZS_MAX_FILL_TWO_CABLES,
        three_or_more: AS_NZS_MAX_FILL_THREE_OR_MORE_CABLES,
    };

    /// Limit for a cable count. Total over all integers.
    pub fn max_fill(&self, cable_count: i64) -> Real {
        match cable_count {
            i64::MIN..=0 => self.no_cables,
            1 => self.one_cable,
            2 => self.two_cables,
            _ => self.three_or_more,
        }
    }

    /// Inclusive check: a fill exactly at the limit complies.
    pub fn check(&self, fill_percentage: Real, cable_count: i64) -> ComplianceVerdict {
        let max_allowable = self.max_fill(cable_count);
        ComplianceVerdict {
            compliant: fill_percentage <= max_allowable,
            max_allowable,
        }
    }

    /// Percentages must be finite and within `0..=100`.
    pub fn validate(&self) -> FillResult<()> {
        for (what, value) in [
            ("no-cable limit", self.no_cables),
            ("one-cable limit", self.one_cable),
            ("two-cable limit", self.two_cables),
            ("three-or-more limit", self.three_or_more),
        ] {
            if !value.is_finite() {
                return Err(FillError::NonFinite { what, value });
            }
            if !(0.0..=100.0).contains(&value) {
                return Err(FillError::OutOfRange {
                    what,
                    value,
                    min: 0.0,
                    max: 100.0,
                });
            }
        }
        Ok(())
    }
}

impl Default for ComplianceTable {
    fn default() -> Self {
        Self::AS_NZS_3000
    }
}

/// Outcome of a compliance check.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComplianceVerdict {
    pub compliant: bool,
    pub max_allowable: Real,
}

impl From<ComplianceVerdict> for (bool, Real) {
    fn from(v: ComplianceVerdict) -> Self {
        (v.compliant, v.max_allowable)
    }
}

/// Limit for a cable count under [`ComplianceTable::AS_NZS_3000`].
pub fn max_allowable_fill(cable_count: i64) -> Real {
    ComplianceTable::AS_NZS_3000.max_fill(cable_count)
}

/// Saturating conversion for counts taken from collection lengths.
pub(crate) fn count_as_i64(count: usize) -> i64 {
    i64::try_from(count).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets() {
        assert_eq!(max_allowable_fill(-3), 100.0);
        assert_eq!(max_allowable_fill(0), 100.0);
        assert_eq!(max_allowable_fill(1), 53.0);
        assert_eq!(max_allowable_fill(2), 31.0);
        assert_eq!(max_allowable_fill(3), 40.0);
        assert_eq!(max_allowable_fill(5), 40.0);
        assert_eq!(max_allowable_fill(i64::MAX), 40.0);
    }

    #[test]
    fn boundary_is_inclusive() {
        let table = ComplianceTable::default();
        let at: (bool, Real) = table.check(53.0, 1).into();
        assert_eq!(at, (true, 53.0));
        let over: (bool, Real) = table.check(53.0001, 1).into();
        assert_eq!(over, (false, 53.0));
    }

    #[test]
    fn custom_table() {
        let table = ComplianceTable {
            one_cable: 60.0,
            ..ComplianceTable::AS_NZS_3000
        };
        table.validate().unwrap();
        assert!(table.check(55.0, 1).compliant);
        assert!(!ComplianceTable::AS_NZS_3000.check(55.0, 1).compliant);
    }

    #[test]
    fn invalid_tables() {
        let over = ComplianceTable {
            two_cables: 120.0,
            ..ComplianceTable::AS_NZS_3000
        };
        assert!(matches!(over.validate(), Err(FillError::OutOfRange { .. })));

        let nan = ComplianceTable {
            three_or_more: f64::NAN,
            ..ComplianceTable::AS_NZS_3000
        };
        assert!(matches!(nan.validate(), Err(FillError::NonFinite { .. })));
    }

    #[test]
    fn count_conversion_saturates() {
        assert_eq!(count_as_i64(3), 3);
        assert_eq!(count_as_i64(usize::MAX), i64::MAX);
    }
}
