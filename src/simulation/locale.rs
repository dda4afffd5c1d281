//! Coarse log-scale spatial buckets.
//!
//! Each axis maps to `round(sign(c) * log10(|c|))`, with an explicit zero case.
//! Bodies sharing a bucket have a similar order of magnitude of distance from the
//! origin on both axes. Only used to narrow collision candidates; two bodies in the
//! same bucket can still be far apart.

use std::fmt;

use crate::simulation::states::{Body, NVec2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Locale(pub i32, pub i32);

impl Locale {
    pub fn of(x: &NVec2) -> Self {
        Locale(axis_bucket(x.x), axis_bucket(x.y))
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

/// Bucket for one coordinate. Halves round to even.
pub fn axis_bucket(c: f64) -> i32 {
    if c == 0.0 {
        return 0;
    }
    (c.signum() * c.abs().log10()).round_ties_even() as i32
}

/// Recompute every body's bucket from its current position
pub fn refresh_locales(bodies: &mut [Body]) {
    for b in bodies.iter_mut() {
        b.locale = Locale::of(&b.x);
    }
}
