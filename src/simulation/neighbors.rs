//! Per-tick interaction graph.
//!
//! Decides which bodies take part in this tick (the active set) and gives every
//! active body an ordered list of all other active bodies. The radius test only
//! decides membership; within the active set the graph is a full mesh.

use crate::simulation::params::SimulationConfig;
use crate::simulation::states::Body;

/// Active set and neighbor lists for one tick, as indices into the body list.
#[derive(Debug, Clone, Default)]
pub struct NeighborGraph {
    /// Body indices taking part this tick, in insertion order
    pub active: Vec<usize>,
    /// Neighbor indices per body index, empty for inactive bodies
    pub neighbors: Vec<Vec<usize>>,
    in_set: Vec<bool>,
}

impl NeighborGraph {
    /// Build the graph and write each body's ordered `neighbors` id list.
    ///
    /// Every body's previous neighbor data and resultant are cleared, so a body
    /// outside the active set ends the stage with zero acceleration rather
    /// than a stale one.
    pub fn build(bodies: &mut [Body], cfg: &SimulationConfig) -> Self {
        let in_set: Vec<bool> = bodies.iter().map(|b| cfg.interacts(&b.x)).collect();
        let active: Vec<usize> = (0..bodies.len()).filter(|&i| in_set[i]).collect();

        let mut neighbors = vec![Vec::new(); bodies.len()];
        for b in bodies.iter_mut() {
            b.clear_neighbors();
        }
        for &i in &active {
            let others: Vec<usize> = active.iter().copied().filter(|&j| j != i).collect();
            let ids = others.iter().map(|&j| bodies[j].id).collect();
            bodies[i].neighbors = ids;
            neighbors[i] = others;
        }

        Self { active, neighbors, in_set }
    }

    pub fn is_active(&self, i: usize) -> bool {
        self.in_set.get(i).copied().unwrap_or(false)
    }
}
