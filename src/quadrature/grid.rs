//! Sample grids over [0, T]
//!
//! A `SampleGrid` is a strictly increasing sequence of time points that starts
//! at 0 and ends at the target time. Uniform grids come from [`SampleGrid::uniform`],
//! non-uniform ones either from a literal list ([`SampleGrid::from_points`]) or
//! from sorted random draws ([`SampleGrid::random`]).

use nalgebra::DVector;
use rand::distributions::{Distribution, Uniform};
use rand::Rng;

use super::error::{GridDefect, QuadratureError};

/// Relative slack allowed when checking that a grid ends at the target time
const SPAN_TOL: f64 = 1e-12;

#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    points: DVector<f64>,
}

impl SampleGrid {
    /// `segments + 1` equally spaced points, first = 0, last = `target_time`
    pub fn uniform(target_time: f64, segments: usize) -> Result<Self, QuadratureError> {
        check_target(target_time)?;
        if segments == 0 {
            return Err(QuadratureError::InvalidGrid(GridDefect::TooFewPoints { len: 1 }));
        }
        let dt = target_time / segments as f64;
        let mut points = DVector::from_fn(segments + 1, |i, _| i as f64 * dt);
        // pin the last point so it is exactly the target, not n * (T / n)
        points[segments] = target_time;
        Ok(Self { points })
    }

    /// Validate an arbitrary grid spanning [0, `target_time`]
    pub fn from_points(target_time: f64, points: Vec<f64>) -> Result<Self, QuadratureError> {
        check_target(target_time)?;
        if points.len() < 2 {
            return Err(QuadratureError::InvalidGrid(GridDefect::TooFewPoints {
                len: points.len(),
            }));
        }
        if let Some(index) = (1..points.len()).find(|&i| !(points[i] > points[i - 1])) {
            return Err(QuadratureError::InvalidGrid(GridDefect::NotIncreasing { index }));
        }

        let first = points[0];
        let last = points[points.len() - 1];
        let slack = SPAN_TOL * target_time;
        if first.abs() > slack || (last - target_time).abs() > slack {
            return Err(QuadratureError::InvalidGrid(GridDefect::OutOfSpan {
                first,
                last,
                target: target_time,
            }));
        }

        Ok(Self {
            points: DVector::from_vec(points),
        })
    }

    /// `num_points` points: both endpoints plus `num_points - 2` distinct
    /// interior draws from U(0, `target_time`), sorted
    pub fn random<R: Rng + ?Sized>(
        target_time: f64,
        num_points: usize,
        rng: &mut R,
    ) -> Result<Self, QuadratureError> {
        check_target(target_time)?;
        if num_points < 2 {
            return Err(QuadratureError::InvalidGrid(GridDefect::TooFewPoints { len: num_points }));
        }

        let dist = Uniform::new(0.0, target_time);
        let interior = num_points - 2;
        let mut points = Vec::with_capacity(num_points);
        points.push(0.0);
        while points.len() < interior + 1 {
            let t = dist.sample(rng);
            if t > 0.0 {
                points.push(t);
            }
            if points.len() == interior + 1 {
                points[1..].sort_by(f64::total_cmp);
                points.dedup();
            }
        }
        points.push(target_time);

        Self::from_points(target_time, points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &DVector<f64> {
        &self.points
    }

    /// Arithmetic mean of the consecutive gaps
    pub fn mean_spacing(&self) -> f64 {
        let gaps = self.points.as_slice().windows(2).map(|w| w[1] - w[0]);
        gaps.sum::<f64>() / (self.points.len() - 1) as f64
    }
}

fn check_target(target_time: f64) -> Result<(), QuadratureError> {
    if target_time.is_finite() && target_time > 0.0 {
        Ok(())
    } else {
        Err(QuadratureError::InvalidTargetTime(target_time))
    }
}
