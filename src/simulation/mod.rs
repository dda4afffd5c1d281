pub mod states;
pub mod params;
pub mod error;
pub mod locale;
pub mod neighbors;
pub mod forces;
pub mod collision;
pub mod merge;
pub mod integrator;
pub mod stepper;
pub mod scenario;
