//! Fixed-step time integrator for the n-body system
//!
//! Semi-implicit (symplectic) Euler: the velocity is kicked with this tick's
//! resultant acceleration, then the position drifts with the *new* velocity.

use super::states::Body;

/// Advance every body by one step of `dt`.
/// Bodies with no neighbors have a zero resultant and drift at constant velocity.
pub fn euler_integrator(bodies: &mut [Body], dt: f64) {
    // Kick: v_n+1 = v_n + dt * a_n
    for b in bodies.iter_mut() {
        b.v += b.g_r * dt;
        b.p = b.v * b.m;
    }

    // Drift: x_n+1 = x_n + dt * v_n+1
    for b in bodies.iter_mut() {
        b.x += b.v * dt;
    }
}
