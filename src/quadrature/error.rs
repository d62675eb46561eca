//! Error taxonomy for the quadrature engine

use std::fmt;

use thiserror::Error;

use super::integrator::Method;

/// Errors raised by the velocity model, the sample grids and the integrators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuadratureError {
    #[error("{method} needs at least {minimum} segments, got {segments}")]
    InvalidSegmentCount {
        method: Method,
        segments: usize,
        minimum: usize,
    },

    #[error("invalid sample grid: {0}")]
    InvalidGrid(GridDefect),

    #[error("degenerate constant {name} = {value}")]
    DegenerateConstants { name: &'static str, value: f64 },

    #[error("target time must be finite and positive, got {0}")]
    InvalidTargetTime(f64),
}

/// What is wrong with a sample grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GridDefect {
    TooFewPoints { len: usize },
    NotIncreasing { index: usize },
    OutOfSpan { first: f64, last: f64, target: f64 },
}

impl fmt::Display for GridDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridDefect::TooFewPoints { len } => {
                write!(f, "need at least 2 points, got {len}")
            }
            GridDefect::NotIncreasing { index } => {
                write!(f, "points are not strictly increasing at index {index}")
            }
            GridDefect::OutOfSpan { first, last, target } => {
                write!(f, "points span [{first}, {last}], expected [0, {target}]")
            }
        }
    }
}
