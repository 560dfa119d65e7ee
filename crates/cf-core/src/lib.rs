//! cf-core: shared foundation for the conduit fill workspace.
//!
//! Contains:
//! - units (uom length/area types + millimetre constructors)
//! - numeric (Real + tolerances + guarded float helpers)
//! - ids (compact cable identifiers)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

pub use error::{CfError, CfResult};
pub use ids::CableId;
pub use numeric::*;
pub use units::*;
