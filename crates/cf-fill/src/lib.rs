//! cf-fill: conduit fill geometry and compliance engine.
//!
//! Provides:
//! - Effective cable dimensions per core topology (single, trefoil, quad)
//! - Occupied-area accumulation over a set of cables
//! - Fill percentage against a conduit's internal cross-section
//! - Compliance against a tiered, cable-count keyed limit table
//!
//! Everything here is a pure function of its arguments. Live state (the cable
//! list, the current conduit size) is owned by the caller and handed in as a
//! [`Snapshot`].
//!
//! # Example
//!
//! ```
//! use cf_fill::{CableSpec, CableTopology, ComplianceTable, ConduitSpec, Snapshot, evaluate};
//!
//! let conduit = ConduitSpec::from_radius(50.0).unwrap();
//! let cable = CableSpec::new(CableTopology::Single, 30.0, 3.0, 2.0).unwrap();
//! let snapshot = Snapshot::new(conduit, vec![cable]);
//!
//! let result = evaluate(&snapshot, &ComplianceTable::default()).unwrap();
//! assert!(result.compliant);
//! assert_eq!(result.max_allowable_fill, 53.0);
//! ```

pub mod accumulate;
pub mod cable;
pub mod common;
pub mod compliance;
pub mod conduit;
pub mod error;
pub mod evaluate;
pub mod geometry;
pub mod topology;

// Re-exports
pub use accumulate::{total_area, total_area_from_diameters, total_area_from_geometry};
pub use cable::{CableDefaults, CableSpec};
pub use compliance::{ComplianceTable, ComplianceVerdict, max_allowable_fill};
pub use conduit::{
    ConduitSize, ConduitSpec, DEFAULT_CONDUIT_DIAMETER, conduit_area, conduit_area_from_diameter,
    conduit_area_from_radius,
};
pub use error::{FillError, FillResult};
pub use evaluate::{FillEvaluation, Snapshot, check_compliance, evaluate, fill_percentage};
pub use geometry::{
    core_radius_from_area, effective_area, effective_radius, min_outer_diameter,
    outer_diameter_from_construction,
};
pub use topology::CableTopology;
