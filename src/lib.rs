pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, BodyId, BodyInit, Color, IdAllocator, System, NVec2};
pub use simulation::params::SimulationConfig;
pub use simulation::error::SimError;
pub use simulation::locale::Locale;
pub use simulation::neighbors::NeighborGraph;
pub use simulation::forces::{Acceleration, NewtonianGravity};
pub use simulation::collision::detect_collisions;
pub use simulation::merge::{resolve_merges, merge_cluster, MergeOutcome};
pub use simulation::integrator::euler_integrator;
pub use simulation::stepper::{Simulation, TickReport, BodyView};
pub use simulation::scenario::{build_scenario, build_config};

pub use configuration::config::{ParametersConfig, BodyConfig, ScenarioConfig};

pub use benchmark::benchmark::bench_step;
