//! Shared application service layer for conduit fill.
//!
//! Frontends go through this crate for scenario loading, the live cable
//! sandbox, and report rendering. The fill core only ever sees the
//! `Snapshot`s produced here.

pub mod error;
pub mod report;
pub mod sandbox;
pub mod scenario_service;

pub use error::{AppError, AppResult};
pub use report::{FillReport, render_report};
pub use sandbox::{ActiveCable, Sandbox, SandboxConfig, SharedSandbox, SpawnRequest};
pub use scenario_service::{
    ResolvedScenario, evaluate_scenario, load_scenario, resolve_scenario, save_scenario,
};
