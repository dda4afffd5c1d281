//! Contact detection between bodies that share a locale bucket.
//!
//! The closing speed is a magnitude-sum heuristic (`|v_n| + |v_i|` per axis)
//! that ignores direction. The contact threshold extrapolates that speed over
//! a fixed look-ahead step rather than the integration timestep.

use crate::simulation::neighbors::NeighborGraph;
use crate::simulation::params::SimulationConfig;
use crate::simulation::states::{Body, NVec2};

/// Flag colliding bodies and zero their resultant acceleration.
///
/// Returns one flag per body index. Uses the `r_mag` computed by the force
/// stage and the locale refreshed just before this stage.
pub fn detect_collisions(bodies: &mut [Body], graph: &NeighborGraph, cfg: &SimulationConfig) -> Vec<bool> {
    let mut collided = vec![false; bodies.len()];

    for &n in &graph.active {
        for (k, &i) in graph.neighbors[n].iter().enumerate() {
            let (bn, bi) = (&bodies[n], &bodies[i]);
            if bi.locale != bn.locale {
                continue;
            }
            let vf = NVec2::new(bn.v.x.abs() + bi.v.x.abs(), bn.v.y.abs() + bi.v.y.abs());
            let limit = contact_threshold(bn, bi, vf.norm(), cfg.collision_step);
            if bn.r_mag[k] < limit {
                collided[n] = true;
                collided[i] = true;
            }
        }
    }

    for (b, hit) in bodies.iter_mut().zip(&collided) {
        if *hit {
            b.g_r = NVec2::zeros();
        }
    }

    collided
}

/// Separation below which two bodies are considered in contact
pub fn contact_threshold(a: &Body, b: &Body, closing_speed: f64, step: f64) -> f64 {
    a.real_radius() + b.real_radius() + closing_speed * step
}
