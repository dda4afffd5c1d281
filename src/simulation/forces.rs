//! Force / acceleration contributors for the n-body engine
//!
//! Gravity is evaluated over the neighbor graph built for the tick. The
//! per-neighbor vectors (`r`, `r_mag`, `g`) stay index-aligned with each
//! body's neighbor list so collision detection can reuse the magnitudes.

use crate::simulation::neighbors::NeighborGraph;
use crate::simulation::states::{Body, NVec2};

/// Trait for acceleration sources operating on the active set.
///
/// An implementation fills `r`, `r_mag`, `g` and `g_r` for each active body.
/// It may write to any body in the active set, not only the one it is
/// currently evaluating.
pub trait Acceleration {
    fn accumulate(&self, bodies: &mut [Body], graph: &NeighborGraph);
}

/// Newtonian gravity with a near-field cutoff instead of softening.
///
/// Pairs whose centers are closer than the sum of their radii contribute
/// nothing, and the neighbor of such a pair has its whole resultant zeroed for
/// the tick. Evaluating a body clears any zeroing previously applied to it, so
/// of two overlapping bodies only the one evaluated first stays zeroed.
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub decimals: i32, // components are rounded to this many decimal places
}

impl NewtonianGravity {
    pub fn new(g: f64) -> Self {
        Self { g, decimals: 10 }
    }

    fn round(&self, c: f64) -> f64 {
        let scale = 10f64.powi(self.decimals);
        (c * scale).round() / scale
    }
}

impl Acceleration for NewtonianGravity {
    fn accumulate(&self, bodies: &mut [Body], graph: &NeighborGraph) {
        let mut suppressed = vec![false; bodies.len()];

        for &n in &graph.active {
            suppressed[n] = false;
            let others = &graph.neighbors[n];
            let mut r = Vec::with_capacity(others.len());
            let mut r_mag = Vec::with_capacity(others.len());
            let mut g = Vec::with_capacity(others.len());

            for &i in others {
                // points from n toward its neighbor
                let ri: NVec2 = -(bodies[n].x - bodies[i].x);
                let mag = ri.norm();
                let contact = bodies[n].real_radius() + bodies[i].real_radius();

                let gi = if mag > contact {
                    // a = G m_i r / |r|^3
                    (self.g * bodies[i].m * ri / mag.powi(3)).map(|c| self.round(c))
                } else {
                    suppressed[i] = true;
                    NVec2::zeros()
                };

                r.push(ri);
                r_mag.push(mag);
                g.push(gi);
            }

            let b = &mut bodies[n];
            b.r = r;
            b.r_mag = r_mag;
            b.g = g;
        }

        for &n in &graph.active {
            let b = &mut bodies[n];
            b.g_r = if suppressed[n] {
                NVec2::zeros()
            } else {
                b.g.iter().fold(NVec2::zeros(), |acc, gi| acc + gi)
            };
        }
    }
}
