//! Velocity model of a parachutist under gravity and linear drag
//!
//! v(t) = (g m / c) (1 - exp(-(c/m) t))

use nalgebra::DVector;

use super::params::Constants;

/// Instantaneous velocity (m/s) at time `t`
pub fn velocity(k: &Constants, t: f64) -> f64 {
    k.terminal_velocity() * (1.0 - (-k.decay_rate() * t).exp())
}

/// Evaluate the velocity model at every point of `times`
pub fn sample(k: &Constants, times: &DVector<f64>) -> DVector<f64> {
    times.map(|t| velocity(k, t))
}

/// Closed-form distance fallen over [0, t], the exact integral of [`velocity`]
pub fn distance(k: &Constants, t: f64) -> f64 {
    let rate = k.decay_rate();
    k.terminal_velocity() * (t - (1.0 - (-rate * t).exp()) / rate)
}
