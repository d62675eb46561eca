//! Physical constants of the falling-object model
//!
//! `Constants` holds the validated runtime values:
//! - gravitational acceleration `g`,
//! - mass `m`,
//! - linear drag coefficient `c`
//!
//! Both `m` and `c` appear as divisors in the velocity model, so they are
//! checked once here instead of inside every integrator.

use crate::configuration::config::ConstantsConfig;
use super::error::QuadratureError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Constants {
    g: f64, // m/s^2
    m: f64, // kg
    c: f64, // kg/s
}

impl Constants {
    pub fn new(g: f64, m: f64, c: f64) -> Result<Self, QuadratureError> {
        for (name, value) in [("g", g), ("m", m), ("c", c)] {
            if !value.is_finite() {
                return Err(QuadratureError::DegenerateConstants { name, value });
            }
        }
        if m == 0.0 {
            return Err(QuadratureError::DegenerateConstants { name: "m", value: m });
        }
        if c == 0.0 {
            return Err(QuadratureError::DegenerateConstants { name: "c", value: c });
        }
        Ok(Self { g, m, c })
    }

    pub fn from_config(cfg: &ConstantsConfig) -> Result<Self, QuadratureError> {
        Self::new(cfg.g, cfg.m, cfg.c)
    }

    pub fn g(&self) -> f64 {
        self.g
    }

    pub fn m(&self) -> f64 {
        self.m
    }

    pub fn c(&self) -> f64 {
        self.c
    }

    /// Limit velocity `g m / c`
    pub fn terminal_velocity(&self) -> f64 {
        self.g * self.m / self.c
    }

    /// Decay rate `c / m` of the exponential term
    pub fn decay_rate(&self) -> f64 {
        self.c / self.m
    }
}
