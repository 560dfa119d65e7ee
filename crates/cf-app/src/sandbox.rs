//! Live cable registry for the interactive sandbox.
//!
//! The sandbox owns the conduit size, the cables currently inside it and the
//! id counter. Frontends mutate it through `spawn`/`remove_by_ids`/`reset`
//! and hand `snapshot()` to the fill evaluator.

use std::sync::{Arc, Mutex, MutexGuard};

use cf_core::CableId;
use cf_core::numeric::Real;
use cf_fill::common::check_dimension;
use cf_fill::{
    CableDefaults, CableSpec, CableTopology, ComplianceTable, ConduitSpec,
    DEFAULT_CONDUIT_DIAMETER, FillEvaluation, Snapshot, core_radius_from_area, min_outer_diameter,
    outer_diameter_from_construction,
};
use tracing::{debug, info, warn};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SandboxConfig {
    pub conduit_diameter: Real,
    pub defaults: CableDefaults,
    pub table: ComplianceTable,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            conduit_diameter: DEFAULT_CONDUIT_DIAMETER,
            defaults: CableDefaults::default(),
            table: ComplianceTable::AS_NZS_3000,
        }
    }
}

/// Parameters for one spawned cable. `None` falls back to the sandbox defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRequest {
    pub topology: CableTopology,
    pub core_area: Option<Real>,
    pub sheath_thickness: Option<Real>,
    pub margin: Option<Real>,
    pub insulation_thickness: Option<Real>,
    pub outer_diameter: Option<Real>,
}

impl SpawnRequest {
    pub fn new(topology: CableTopology) -> Self {
        Self {
            topology,
            core_area: None,
            sheath_thickness: None,
            margin: None,
            insulation_thickness: None,
            outer_diameter: None,
        }
    }

    pub fn with_core_area(mut self, core_area: Real) -> Self {
        self.core_area = Some(core_area);
        self
    }

    pub fn with_outer_diameter(mut self, outer_diameter: Real) -> Self {
        self.outer_diameter = Some(outer_diameter);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ActiveCable {
    pub id: CableId,
    pub spec: CableSpec,
}

#[derive(Debug, Clone)]
pub struct Sandbox {
    config: SandboxConfig,
    conduit: ConduitSpec,
    cables: Vec<ActiveCable>,
    next_id: Option<CableId>,
    last_used: Option<(CableTopology, Real)>,
}

impl Default for Sandbox {
    fn default() -> Self {
        Self {
            config: SandboxConfig::default(),
            conduit: ConduitSpec::default(),
            cables: Vec::new(),
            next_id: Some(CableId::FIRST),
            last_used: None,
        }
    }
}

impl Sandbox {
    pub fn new(config: SandboxConfig) -> AppResult<Self> {
        config.defaults.validate()?;
        config.table.validate()?;
        Ok(Self {
            config,
            conduit: ConduitSpec::from_diameter(config.conduit_diameter)?,
            ..Self::default()
        })
    }

    pub fn config(&self) -> &SandboxConfig {
        &self.config
    }

    pub fn conduit(&self) -> &ConduitSpec {
        &self.conduit
    }

    pub fn cables(&self) -> &[ActiveCable] {
        &self.cables
    }

    pub fn len(&self) -> usize {
        self.cables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cables.is_empty()
    }

    pub fn get(&self, id: CableId) -> AppResult<&ActiveCable> {
        self.cables
            .iter()
            .find(|c| c.id == id)
            .ok_or(AppError::CableNotFound(id))
    }

    /// Topology and outer diameter of the most recent spawn.
    pub fn last_used(&self) -> Option<(CableTopology, Real)> {
        self.last_used
    }

    /// Place a cable in the conduit and return its id.
    pub fn spawn(&mut self, request: SpawnRequest) -> AppResult<CableId> {
        let defaults = self.config.defaults;
        let sheath = request.sheath_thickness.unwrap_or(defaults.sheath_thickness);
        let margin = request.margin.unwrap_or(defaults.margin);
        let insulation = request
            .insulation_thickness
            .unwrap_or(defaults.insulation_thickness);
        let core_area = request.core_area.unwrap_or_else(|| defaults.core_area());
        let core_radius = core_radius_from_area(core_area)?;

        let outer_diameter = match request.outer_diameter {
            Some(requested) => {
                let requested = check_dimension(requested, "outer diameter")?;
                let minimum = min_outer_diameter(request.topology, core_radius, sheath, insulation)?;
                if requested < minimum {
                    warn!(
                        requested,
                        minimum,
                        topology = %request.topology,
                        "outer diameter too small for construction, raising to minimum"
                    );
                    minimum
                } else {
                    requested
                }
            }
            None => outer_diameter_from_construction(
                request.topology,
                core_area,
                sheath,
                margin,
                insulation,
            )?,
        };

        let spec = CableSpec::new(request.topology, core_radius, sheath, margin)?
            .with_insulation(insulation)?
            .with_outer_diameter(outer_diameter)?;

        let id = self.allocate_id()?;
        self.cables.push(ActiveCable { id, spec });
        self.last_used = Some((request.topology, outer_diameter));
        info!(%id, topology = %request.topology, outer_diameter, "spawned cable");
        Ok(id)
    }

    /// Spawn another cable like the previous one, or a default single cable.
    pub fn spawn_last_used(&mut self) -> AppResult<CableId> {
        let request = match self.last_used {
            Some((topology, outer_diameter)) => {
                SpawnRequest::new(topology).with_outer_diameter(outer_diameter)
            }
            None => SpawnRequest::new(CableTopology::Single),
        };
        self.spawn(request)
    }

    /// Remove the given cables; unknown ids are skipped. Returns how many went.
    pub fn remove_by_ids(&mut self, ids: &[CableId]) -> usize {
        let before = self.cables.len();
        self.cables.retain(|c| !ids.contains(&c.id));
        let removed = before - self.cables.len();
        debug!(requested = ids.len(), removed, "removed cables");
        removed
    }

    pub fn remove(&mut self, id: CableId) -> AppResult<ActiveCable> {
        let index = self
            .cables
            .iter()
            .position(|c| c.id == id)
            .ok_or(AppError::CableNotFound(id))?;
        Ok(self.cables.remove(index))
    }

    /// Drop every cable and restart numbering at 1. Conduit size is kept.
    pub fn reset(&mut self) {
        self.cables.clear();
        self.next_id = Some(CableId::FIRST);
        info!("sandbox reset");
    }

    pub fn set_conduit_diameter(&mut self, diameter: Real) -> AppResult<()> {
        self.conduit = ConduitSpec::from_diameter(diameter)?;
        info!(diameter, "conduit resized");
        Ok(())
    }

    pub fn set_conduit_radius(&mut self, radius: Real) -> AppResult<()> {
        self.conduit = ConduitSpec::from_radius(radius)?;
        info!(radius, "conduit resized");
        Ok(())
    }

    pub fn set_compliance_table(&mut self, table: ComplianceTable) -> AppResult<()> {
        table.validate()?;
        self.config.table = table;
        Ok(())
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.conduit, self.cables.iter().map(|c| c.spec).collect())
    }

    pub fn evaluate(&self) -> AppResult<FillEvaluation> {
        Ok(cf_fill::evaluate(&self.snapshot(), &self.config.table)?)
    }

    fn allocate_id(&mut self) -> AppResult<CableId> {
        let id = self
            .next_id
            .ok_or_else(|| AppError::InvalidInput("cable id space exhausted".to_string()))?;
        self.next_id = id.next();
        Ok(id)
    }
}

/// Sandbox shared between the event loop and pollers on other threads.
#[derive(Debug, Clone, Default)]
pub struct SharedSandbox {
    inner: Arc<Mutex<Sandbox>>,
}

impl SharedSandbox {
    pub fn new(sandbox: Sandbox) -> Self {
        Self {
            inner: Arc::new(Mutex::new(sandbox)),
        }
    }

    pub fn lock(&self) -> AppResult<MutexGuard<'_, Sandbox>> {
        self.inner.lock().map_err(|_| AppError::LockPoisoned)
    }

    /// Copy the state under the lock, then evaluate with the lock released.
    pub fn evaluate(&self) -> AppResult<FillEvaluation> {
        let (snapshot, table) = {
            let sandbox = self.lock()?;
            (sandbox.snapshot(), sandbox.config.table)
        };
        Ok(cf_fill::evaluate(&snapshot, &table)?)
    }

    pub fn snapshot(&self) -> AppResult<Snapshot> {
        Ok(self.lock()?.snapshot())
    }
}
