//! Build fully-initialized simulations from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime
//! [`Simulation`] containing:
//! - the immutable `SimulationConfig`
//! - the initial bodies with ids `0..n` in file order
//! - the id allocator used for merge successors and injected bodies

use crate::configuration::config::{BodyConfig, ParametersConfig, ScenarioConfig};
use crate::simulation::error::SimError;
use crate::simulation::params::SimulationConfig;
use crate::simulation::states::{BodyId, BodyInit, NVec2};
use crate::simulation::stepper::Simulation;

pub fn build_scenario(cfg: ScenarioConfig) -> Result<Simulation, SimError> {
    let config = build_config(&cfg.parameters);

    // Bodies: map `BodyConfig` -> `BodyInit` using nalgebra vectors
    let inits: Vec<BodyInit> = cfg.bodies.iter().map(|bc: &BodyConfig| BodyInit {
        m: bc.m,
        x: NVec2::new(bc.x[0], bc.x[1]),
        v: NVec2::new(bc.v[0], bc.v[1]),
        color: bc.color,
        density: bc.density,
    }).collect();

    log::info!(
        "building scenario: {} bodies, dt = {} s, interaction radius = {:e} m",
        inits.len(),
        config.dt(),
        config.interaction_radius
    );

    Simulation::new(config, inits)
}

/// Runtime config from `ParametersConfig`. Lengths in the view are measured in
/// `screen_scale * au` metres.
pub fn build_config(p: &ParametersConfig) -> SimulationConfig {
    let interaction_radius = p
        .interaction_radius
        .unwrap_or_else(|| SimulationConfig::view_interaction_radius(p.au, p.screen_scale));

    SimulationConfig {
        g: p.g,
        time_step: p.time_step,
        time_lapse: p.time_lapse,
        interaction_radius,
        tracked_id: p.tracked_id.map(BodyId),
        min_mass: p.min_mass,
        distance_unit: p.screen_scale * p.au,
        display_scale: p.display_scale,
        collision_step: p.collision_step,
        freeze_on_collision: p.freeze_on_collision,
    }
}
