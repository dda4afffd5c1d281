//! Core state types for the n-body simulation.
//!
//! Defines the 2D body record and the system that owns it:
//! - `Body`   the physical entity plus its per-tick neighbor data
//! - `System` the ordered body list and the elapsed simulated time `t`
//!
//! Positions and velocities use `NVec2` (nalgebra `Vector2<f64>`), SI units.

use std::f64::consts::PI;

use nalgebra::Vector2;

use crate::simulation::error::SimError;
use crate::simulation::locale::Locale;
use crate::simulation::params::SimulationConfig;

pub type NVec2 = Vector2<f64>;

/// RGB display color carried through merges.
pub type Color = [u8; 3];

/// Stable body identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u64);

impl std::fmt::Display for BodyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id source owned by the stepper.
#[derive(Debug, Clone, Default)]
pub struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self { next: 0 }
    }

    /// Hand out the next unused id
    pub fn next_id(&mut self) -> BodyId {
        let id = BodyId(self.next);
        self.next += 1;
        id
    }
}

/// Everything a caller supplies to create a body.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyInit {
    pub m: f64,        // mass (kg)
    pub x: NVec2,      // position (m)
    pub v: NVec2,      // velocity (m/s)
    pub color: Color,  // display color
    pub density: f64,  // average density (kg/m^3)
}

#[derive(Debug, Clone)]
pub struct Body {
    pub id: BodyId,
    pub m: f64, // mass
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub density: f64, // average density
    pub color: Color,
    pub real_diameter: f64, // physical sphere diameter
    pub display_diameter: f64, // scaled for drawing, never below 1
    pub locale: Locale, // coarse log-scale bucket

    // Per-tick neighbor data, index-aligned
    pub neighbors: Vec<BodyId>,
    pub r: Vec<NVec2>, // displacement toward each neighbor
    pub r_mag: Vec<f64>, // |r|
    pub g: Vec<NVec2>, // acceleration due to each neighbor

    pub g_r: NVec2, // resultant acceleration
    pub p: NVec2, // momentum as of the last integration
}

impl Body {
    /// Validate `init` against `cfg` and build a body with its derived fields.
    pub fn new(id: BodyId, init: BodyInit, cfg: &SimulationConfig) -> Result<Self, SimError> {
        Self::validate(&init, cfg)?;
        Ok(Self::derived(id, init, cfg))
    }

    /// Reject masses below the configured minimum, non-positive densities and
    /// a non-positive distance unit.
    pub fn validate(init: &BodyInit, cfg: &SimulationConfig) -> Result<(), SimError> {
        if !(init.m >= cfg.min_mass) {
            return Err(SimError::MassBelowMinimum { mass: init.m, min: cfg.min_mass });
        }
        if !(init.density > 0.0) {
            return Err(SimError::NonPositiveDensity(init.density));
        }
        if !(cfg.distance_unit > 0.0) {
            return Err(SimError::NonPositiveDistanceUnit(cfg.distance_unit));
        }
        Ok(())
    }

    /// Build a body whose inputs are already known to be valid (merge successors).
    pub(crate) fn derived(id: BodyId, init: BodyInit, cfg: &SimulationConfig) -> Self {
        let real_diameter = sphere_diameter(init.m, init.density);
        let display_diameter = (cfg.display_scale * real_diameter / cfg.distance_unit).max(1.0);
        Self {
            id,
            m: init.m,
            x: init.x,
            v: init.v,
            density: init.density,
            color: init.color,
            real_diameter,
            display_diameter,
            locale: Locale::of(&init.x),
            neighbors: Vec::new(),
            r: Vec::new(),
            r_mag: Vec::new(),
            g: Vec::new(),
            g_r: NVec2::zeros(),
            p: init.v * init.m,
        }
    }

    pub fn real_radius(&self) -> f64 {
        0.5 * self.real_diameter
    }

    pub fn display_radius(&self) -> f64 {
        0.5 * self.display_diameter
    }

    pub fn momentum(&self) -> NVec2 {
        self.v * self.m
    }

    /// Drop this tick's neighbor data and acceleration
    pub fn clear_neighbors(&mut self) {
        self.neighbors.clear();
        self.r.clear();
        self.r_mag.clear();
        self.g.clear();
        self.g_r = NVec2::zeros();
    }
}

/// Diameter of a uniform sphere with mass `m` and density `rho`
pub fn sphere_diameter(m: f64, rho: f64) -> f64 {
    2.0 * (3.0 * m / (4.0 * PI * rho)).cbrt()
}

#[derive(Debug, Clone, Default)]
pub struct System {
    pub bodies: Vec<Body>, // active bodies, insertion order
    pub t: f64, // elapsed simulated time (s)
}
