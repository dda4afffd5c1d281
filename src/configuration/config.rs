//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants, timestep and interaction settings
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! A two-body scenario matching these types:
//!
//! ```yaml
//! parameters:
//!   G: 6.6743e-11          # gravitational constant
//!   time_step: 3000.0      # base step (s), at most 3000
//!   time_lapse: 1.0        # multiplier on the base step
//!   screen_scale: 3.0      # AU either side of the origin in the view
//!   tracked_id: 0          # optional, turns on global interaction
//!
//! bodies:
//!   - x: [0.0, 0.0]
//!     v: [0.0, 0.0]
//!     m: 1.989e30
//!     density: 1408.0
//!     color: [255, 255, 250]
//!   - x: [1.496e11, 0.0]
//!     v: [0.0, 29789.0]
//!     m: 5.972e24
//!     density: 5514.0
//! ```
//!
//! [`crate::simulation::scenario::build_scenario`] maps this into the runtime
//! [`crate::simulation::params::SimulationConfig`] and body list.

use serde::Deserialize;

use crate::simulation::params::{AU, COLLISION_STEP, MAX_TIME_STEP, MIN_MASS};

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(rename = "G")]
    pub g: f64, // gravitational constant
    #[serde(default = "default_time_step")]
    pub time_step: f64, // base time step (s)
    #[serde(default = "default_one")]
    pub time_lapse: f64, // multiplier on the time step
    #[serde(default = "default_au")]
    pub au: f64, // length unit of the view (m)
    #[serde(default = "default_screen_scale")]
    pub screen_scale: f64, // view half-width in `au`
    #[serde(default)]
    pub interaction_radius: Option<f64>, // overrides the radius derived from the view
    #[serde(default)]
    pub tracked_id: Option<u64>, // body followed across merges
    #[serde(default = "default_min_mass")]
    pub min_mass: f64, // minimum body mass
    #[serde(default = "default_display_scale")]
    pub display_scale: f64, // apparent size enlargement
    #[serde(default = "default_collision_step")]
    pub collision_step: f64, // collision look-ahead (s)
    #[serde(default)]
    pub freeze_on_collision: bool, // suspend all gravity on ticks with a merge
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    pub x: [f64; 2], // position (m)
    pub v: [f64; 2], // velocity (m/s)
    pub m: f64,      // mass (kg)
    #[serde(default = "default_density")]
    pub density: f64, // average density (kg/m^3)
    #[serde(default = "default_color")]
    pub color: [u8; 3], // display color
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    pub parameters: ParametersConfig, // Global numerical and physical parameters
    #[serde(default)]
    pub bodies: Vec<BodyConfig>, // List of bodies that define the initial state of the system
}

fn default_time_step() -> f64 {
    MAX_TIME_STEP
}

fn default_one() -> f64 {
    1.0
}

fn default_au() -> f64 {
    AU
}

fn default_screen_scale() -> f64 {
    3.0
}

fn default_min_mass() -> f64 {
    MIN_MASS
}

fn default_display_scale() -> f64 {
    700.0
}

fn default_collision_step() -> f64 {
    COLLISION_STEP
}

fn default_density() -> f64 {
    1000.0
}

fn default_color() -> [u8; 3] {
    [255, 255, 255]
}
