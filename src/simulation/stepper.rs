//! The simulation stepper: owns the body list and runs the per-tick pipeline.
//!
//! Stage order is fixed because later stages read values produced earlier in
//! the same tick (magnitudes, resultants, locales):
//!
//! 1. neighbor graph
//! 2. gravity
//! 3. locale refresh
//! 4. collision detection
//! 5. merging
//! 6. integration (velocity, then position)

use crate::simulation::collision::detect_collisions;
use crate::simulation::error::SimError;
use crate::simulation::forces::{Acceleration, NewtonianGravity};
use crate::simulation::integrator::euler_integrator;
use crate::simulation::locale::{refresh_locales, Locale};
use crate::simulation::merge::resolve_merges;
use crate::simulation::neighbors::NeighborGraph;
use crate::simulation::params::SimulationConfig;
use crate::simulation::states::{Body, BodyId, BodyInit, Color, IdAllocator, NVec2, System};

const SECONDS_PER_YEAR: f64 = 365.0 * 24.0 * 3600.0;

/// Identity changes from one tick, for consumers that follow specific ids.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub removed: Vec<BodyId>, // merged away this tick
    pub created: Vec<BodyId>, // merge successors plus bodies injected since the last tick
    pub t: f64, // elapsed simulated time after the tick
}

/// What a renderer needs to draw one body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyView {
    pub id: BodyId,
    pub position: NVec2,
    pub velocity: NVec2,
    pub display_radius: f64,
    pub color: Color,
}

pub struct Simulation {
    config: SimulationConfig,
    system: System,
    forces: NewtonianGravity,
    ids: IdAllocator,
    pending_created: Vec<BodyId>,
}

impl Simulation {
    /// Validate `config` and every initial body. Ids are assigned in list order from 0.
    pub fn new(config: SimulationConfig, inits: Vec<BodyInit>) -> Result<Self, SimError> {
        config.validate()?;

        let mut ids = IdAllocator::new();
        let bodies = inits
            .into_iter()
            .map(|init| Body::new(ids.next_id(), init, &config))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            forces: NewtonianGravity::new(config.g),
            config,
            system: System { bodies, t: 0.0 },
            ids,
            pending_created: Vec::new(),
        })
    }

    /// Run one full tick of the pipeline.
    pub fn step(&mut self) -> TickReport {
        let cfg = &self.config;
        let bodies = &mut self.system.bodies;

        let graph = NeighborGraph::build(bodies, cfg);
        self.forces.accumulate(bodies, &graph);
        refresh_locales(bodies);

        let collided = detect_collisions(bodies, &graph, cfg);
        if cfg.freeze_on_collision && collided.iter().any(|&c| c) {
            for b in bodies.iter_mut() {
                b.g_r = NVec2::zeros();
            }
        }
        let merged = resolve_merges(bodies, &collided, cfg, &mut self.ids);

        let dt = cfg.dt();
        euler_integrator(bodies, dt);
        self.system.t += dt;

        let mut created = std::mem::take(&mut self.pending_created);
        created.extend(merged.created);
        TickReport {
            removed: merged.removed,
            created,
            t: self.system.t,
        }
    }

    /// Add a body between ticks.
    ///
    /// Rejected without touching the simulation when the body is malformed or
    /// its locale is already held by an active body (it would merge at once).
    /// Bodies outside the active set do not block injection.
    pub fn inject_body(&mut self, init: BodyInit) -> Result<BodyId, SimError> {
        if let Err(e) = Body::validate(&init, &self.config) {
            log::warn!("rejected injected body: {e}");
            return Err(e);
        }
        let locale = Locale::of(&init.x);
        let cfg = &self.config;
        let occupied = self
            .system
            .bodies
            .iter()
            .find(|b| b.locale == locale && cfg.interacts(&b.x));
        if let Some(occupant) = occupied {
            let e = SimError::LocaleOccupied { locale, occupant: occupant.id };
            log::warn!("rejected injected body: {e}");
            return Err(e);
        }

        let id = self.ids.next_id();
        let body = Body::new(id, init, &self.config)?;
        log::info!("injected body {} (m = {:e} kg) at locale {}", id, body.m, locale);
        self.system.bodies.push(body);
        self.pending_created.push(id);
        Ok(id)
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn bodies(&self) -> &[Body] {
        &self.system.bodies
    }

    pub fn len(&self) -> usize {
        self.system.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.system.bodies.is_empty()
    }

    /// Elapsed simulated time (s)
    pub fn time(&self) -> f64 {
        self.system.t
    }

    /// Elapsed simulated time in calendar years
    pub fn years(&self) -> f64 {
        self.system.t / SECONDS_PER_YEAR
    }

    pub fn find(&self, id: BodyId) -> Option<&Body> {
        self.system.bodies.iter().find(|b| b.id == id)
    }

    /// The body currently holding the tracked id, if any
    pub fn tracked(&self) -> Option<&Body> {
        self.config.tracked_id.and_then(|id| self.find(id))
    }

    pub fn snapshot(&self) -> Vec<BodyView> {
        self.system
            .bodies
            .iter()
            .map(|b| BodyView {
                id: b.id,
                position: b.x,
                velocity: b.v,
                display_radius: b.display_radius(),
                color: b.color,
            })
            .collect()
    }

    pub fn total_mass(&self) -> f64 {
        self.system.bodies.iter().map(|b| b.m).sum()
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.system.bodies.iter().fold(NVec2::zeros(), |acc, b| acc + b.momentum())
    }
}
