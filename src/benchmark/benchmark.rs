use std::time::Instant;

use crate::simulation::params::{SimulationConfig, AU};
use crate::simulation::states::{BodyId, BodyInit, NVec2};
use crate::simulation::stepper::Simulation;

/// Helper to build `n` deterministic bodies spread over a few AU, at rest
fn make_bodies(n: usize) -> Vec<BodyInit> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            BodyInit {
                m: 1.0e24,
                // deterministic positions, no rand needed
                x: NVec2::new((i_f * 0.37).sin() * 5.0 * AU, (i_f * 0.13).cos() * 5.0 * AU),
                v: NVec2::zeros(),
                color: [255, 255, 255],
                density: 3000.0,
            }
        })
        .collect()
}

/// Helper config: everything interacts so every step is a full n^2 pass
fn make_config() -> SimulationConfig {
    SimulationConfig {
        tracked_id: Some(BodyId(0)),
        ..SimulationConfig::default()
    }
}

/// Time `Simulation::step` for a range of n
/// Prints one line per n with the mean wall time of a step
pub fn bench_step() {
    let ns = [100, 200, 400, 800, 1600, 3200];

    for n in ns {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };

        let mut sim = match Simulation::new(make_config(), make_bodies(n)) {
            Ok(sim) => sim,
            Err(e) => {
                log::error!("benchmark setup failed for n = {n}: {e}");
                return;
            }
        };

        // Warm up
        sim.step();

        let t0 = Instant::now();
        let mut merges = 0;
        for _ in 0..steps {
            merges += sim.step().removed.len();
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("N = {n:5}, step = {ms:10.3} ms, merged = {merges}");
    }
}
