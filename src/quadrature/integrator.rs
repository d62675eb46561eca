//! Composite quadrature rules for the distance fallen over [0, T]
//!
//! All three rules share one shape: sample the velocity model on a grid,
//! then take `width * (weights · samples)`. Only the weight pattern and the
//! width differ:
//! - trapezoidal: weights 1/2, 1, ..., 1, 1/2 and width `T / n`
//! - Simpson:     weights 1, 4, 2, 4, ..., 1 and width `T / (3 n)`
//! - unequal:     trapezoidal weights and the mean gap of the grid as width

use std::fmt;

use log::warn;
use nalgebra::DVector;

use super::error::QuadratureError;
use super::grid::SampleGrid;
use super::params::Constants;
use super::velocity;

/// The quadrature rules, in the order the driver reports them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Trapezoidal,
    Simpsons,
    TrapezoidalUnequal,
}

impl Method {
    pub fn name(&self) -> &'static str {
        match self {
            Method::Trapezoidal => "Trapezoidal",
            Method::Simpsons => "Simpsons",
            Method::TrapezoidalUnequal => "Trapezoidal Unequal",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Composite trapezoidal rule over `segments` equal sub-intervals
pub fn trapezoidal(k: &Constants, target_time: f64, segments: usize) -> Result<f64, QuadratureError> {
    if segments < 1 {
        return Err(QuadratureError::InvalidSegmentCount {
            method: Method::Trapezoidal,
            segments,
            minimum: 1,
        });
    }
    let grid = SampleGrid::uniform(target_time, segments)?;
    let dt = target_time / segments as f64;

    let samples = velocity::sample(k, grid.points());
    Ok(dt * trapezoid_weights(grid.len()).dot(&samples))
}

/// Composite Simpson 1/3 rule over `segments` equal sub-intervals
///
/// Odd indices 1, 3, .. below `segments` take weight 4 and even interior
/// indices 2, 4, .. below `segments - 1` take weight 2. For an odd segment
/// count this leaves index `segments - 1` out of the sum, so the result is
/// only a proper Simpson estimate when `segments` is even.
pub fn simpson(k: &Constants, target_time: f64, segments: usize) -> Result<f64, QuadratureError> {
    if segments < 2 {
        return Err(QuadratureError::InvalidSegmentCount {
            method: Method::Simpsons,
            segments,
            minimum: 2,
        });
    }
    if segments % 2 == 1 {
        warn!("Simpson's rule with odd segment count {segments} skips sample {}", segments - 1);
    }
    let grid = SampleGrid::uniform(target_time, segments)?;
    let dt = target_time / segments as f64;

    let samples = velocity::sample(k, grid.points());
    Ok(dt / 3.0 * simpson_weights(segments).dot(&samples))
}

/// Trapezoidal weighting over an arbitrary grid, scaled by the mean gap
///
/// This is not the exact per-interval trapezoid area: every interval is
/// treated as if it had the average width of the grid.
pub fn trapezoidal_unequal(k: &Constants, grid: &SampleGrid) -> Result<f64, QuadratureError> {
    let samples = velocity::sample(k, grid.points());
    Ok(grid.mean_spacing() * trapezoid_weights(grid.len()).dot(&samples))
}

/// Validate raw time points, then apply [`trapezoidal_unequal`]
pub fn trapezoidal_unequal_points(
    k: &Constants,
    target_time: f64,
    time_points: Vec<f64>,
) -> Result<f64, QuadratureError> {
    let grid = SampleGrid::from_points(target_time, time_points)?;
    trapezoidal_unequal(k, &grid)
}

fn trapezoid_weights(len: usize) -> DVector<f64> {
    let mut w = DVector::from_element(len, 1.0);
    w[0] = 0.5;
    w[len - 1] = 0.5;
    w
}

fn simpson_weights(segments: usize) -> DVector<f64> {
    let mut w = DVector::zeros(segments + 1);
    w[0] = 1.0;
    w[segments] = 1.0;
    for i in (1..segments).step_by(2) {
        w[i] += 4.0;
    }
    for i in (2..segments - 1).step_by(2) {
        w[i] += 2.0;
    }
    w
}
