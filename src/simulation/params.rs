//! Numerical and physical parameters for the simulation
//!
//! `SimulationConfig` is built once and passed by reference into every stage:
//! - gravitational constant, base timestep and time-lapse multiplier,
//! - interaction radius or a tracked body id (global interaction),
//! - minimum mass and the distance/display scaling used for drawn sizes,
//! - the fixed collision look-ahead step

use std::f64::consts::FRAC_PI_4;

use crate::simulation::error::SimError;
use crate::simulation::states::{BodyId, NVec2};

/// Mean Earth-Sun distance (m)
pub const AU: f64 = 1.496e11;

/// Newton's gravitational constant (m^3 kg^-1 s^-2)
pub const G_NEWTON: f64 = 6.67430e-11;

/// Largest base timestep (s) before collision handling degrades
pub const MAX_TIME_STEP: f64 = 3000.0;

/// Effective step (s) used to extrapolate closing distance in collision detection
pub const COLLISION_STEP: f64 = 5000.0;

/// Below this mass the contact threshold math stops being reliable
pub const MIN_MASS: f64 = 1.0e22;

#[derive(Debug, Clone, PartialEq)]
pub struct SimulationConfig {
    pub g: f64, // gravitational constant
    pub time_step: f64, // base timestep (s)
    pub time_lapse: f64, // multiplier on the base timestep
    pub interaction_radius: f64, // bodies farther than this from the origin sit out
    pub tracked_id: Option<BodyId>, // when set, every body interacts
    pub min_mass: f64, // minimum body mass
    pub distance_unit: f64, // metres per display unit
    pub display_scale: f64, // apparent size enlargement
    pub collision_step: f64, // collision look-ahead (s)
    pub freeze_on_collision: bool, // zero every survivor's acceleration on a collision tick
}

impl Default for SimulationConfig {
    fn default() -> Self {
        let screen_scale = 3.0;
        Self {
            g: G_NEWTON,
            time_step: MAX_TIME_STEP,
            time_lapse: 1.0,
            interaction_radius: Self::view_interaction_radius(AU, screen_scale),
            tracked_id: None,
            min_mass: MIN_MASS,
            distance_unit: screen_scale * AU,
            display_scale: 700.0,
            collision_step: COLLISION_STEP,
            freeze_on_collision: false,
        }
    }
}

impl SimulationConfig {
    /// Check the invariants every stage relies on.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.time_step.abs() > MAX_TIME_STEP {
            return Err(SimError::TimestepTooLarge { step: self.time_step, max: MAX_TIME_STEP });
        }
        if !(self.distance_unit > 0.0) {
            return Err(SimError::NonPositiveDistanceUnit(self.distance_unit));
        }
        if !(self.display_scale > 0.0) {
            return Err(SimError::NonPositiveDisplayScale(self.display_scale));
        }
        if !(self.interaction_radius > 0.0) {
            return Err(SimError::NonPositiveInteractionRadius(self.interaction_radius));
        }
        Ok(())
    }

    /// Integration step: base timestep scaled by the time-lapse multiplier
    pub fn dt(&self) -> f64 {
        self.time_step * self.time_lapse
    }

    /// Interaction radius covering a square view of `screen_scale` units of `unit`
    /// either side of the origin (the view's half-diagonal). Zoomed-in views
    /// (`screen_scale < 1`) keep the radius of the unzoomed view.
    pub fn view_interaction_radius(unit: f64, screen_scale: f64) -> f64 {
        let half_diagonal = unit * screen_scale / FRAC_PI_4.sin();
        if screen_scale < 1.0 {
            half_diagonal / screen_scale
        } else {
            half_diagonal
        }
    }

    /// Global interaction is on whenever a body is being tracked
    pub fn global_interaction(&self) -> bool {
        self.tracked_id.is_some()
    }

    /// Whether a body at `x` belongs to the active set
    pub fn interacts(&self, x: &NVec2) -> bool {
        self.global_interaction() || x.norm() <= self.interaction_radius
    }
}
