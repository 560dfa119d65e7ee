//! Fill percentage and compliance evaluation.

use crate::accumulate::total_area;
use crate::cable::CableSpec;
use crate::compliance::{ComplianceTable, ComplianceVerdict, count_as_i64};
use crate::conduit::ConduitSpec;
use crate::error::FillResult;
use cf_core::numeric::Real;
use tracing::debug;

/// Percentage of the conduit cross-section taken up by cables.
///
/// A zero-area conduit yields `0.0` instead of dividing by zero; that state
/// shows up during start-up and reset. Results above 100 are kept as-is.
pub fn fill_percentage(total_cable_area: Real, conduit_area: Real) -> Real {
    if conduit_area == 0.0 {
        return 0.0;
    }
    (total_cable_area / conduit_area) * 100.0
}

/// Check a fill percentage against the AS/NZS 3000 table.
pub fn check_compliance(fill_percentage: Real, cable_count: i64) -> ComplianceVerdict {
    ComplianceTable::AS_NZS_3000.check(fill_percentage, cable_count)
}

/// Point-in-time copy of what is in the conduit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    pub conduit: ConduitSpec,
    pub cables: Vec<CableSpec>,
}

impl Snapshot {
    pub fn new(conduit: ConduitSpec, cables: Vec<CableSpec>) -> Self {
        Self { conduit, cables }
    }

    pub fn cable_count(&self) -> usize {
        self.cables.len()
    }
}

/// Everything a display needs about one evaluation pass.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FillEvaluation {
    pub cable_count: usize,
    pub total_cable_area: Real,
    pub conduit_area: Real,
    pub fill_percentage: Real,
    pub max_allowable_fill: Real,
    pub compliant: bool,
}

impl FillEvaluation {
    pub fn verdict(&self) -> ComplianceVerdict {
        ComplianceVerdict {
            compliant: self.compliant,
            max_allowable: self.max_allowable_fill,
        }
    }

    /// Percentage points left before the limit; negative when over.
    pub fn headroom(&self) -> Real {
        self.max_allowable_fill - self.fill_percentage
    }
}

/// Run geometry, accumulation and compliance over one snapshot.
pub fn evaluate(snapshot: &Snapshot, table: &ComplianceTable) -> FillResult<FillEvaluation> {
    let total_cable_area = total_area(&snapshot.cables)?;
    let conduit_area = snapshot.conduit.area();
    let fill = fill_percentage(total_cable_area, conduit_area);
    let cable_count = snapshot.cable_count();
    let verdict = table.check(fill, count_as_i64(cable_count));

    debug!(
        cable_count,
        total_cable_area,
        conduit_area,
        fill_percentage = fill,
        max_allowable = verdict.max_allowable,
        compliant = verdict.compliant,
        "evaluated conduit fill"
    );

    Ok(FillEvaluation {
        cable_count,
        total_cable_area,
        conduit_area,
        fill_percentage: fill,
        max_allowable_fill: verdict.max_allowable,
        compliant: verdict.compliant,
    })
}
