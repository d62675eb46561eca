//! Configuration types for loading quadrature scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! falling-object scenario. A scenario consists of:
//!
//! - [`ConstantsConfig`] – physical constants of the drag model
//! - [`RunConfig`]       – target time, resolutions and report settings
//! - [`ScenarioConfig`]  – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! The reference scenario written against these types:
//!
//! ```yaml
//! constants:
//!   g: 9.8                  # gravitational acceleration (m/s^2)
//!   m: 68.1                 # mass (kg)
//!   c: 12.5                 # linear drag coefficient (kg/s)
//!
//! run:
//!   target_time: 10.0       # upper integration bound (s)
//!   segment_counts: [2, 5, 10, 100, 1000]
//!   unequal_points: 100     # points in the non-uniform grid, endpoints included
//!   seed: 42                # optional, omit for an entropy-seeded grid
//!   analytical_solution: 289.43515
//!   scaling: physical       # or "legacy"
//! ```
//!
//! The driver maps this configuration into its validated runtime scenario,
//! see [`crate::quadrature::scenario::Scenario`].

use serde::Deserialize;

/// How distances are scaled before they land in the result table
/// `scaling: "physical"` or `scaling: "legacy"`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScalingConfig {
    #[serde(rename = "physical")] // Plain composite rules, distance in metres
    #[default]
    Physical,

    #[serde(rename = "legacy")] // Every result multiplied by g*m/c a second time
    Legacy,
}

/// Physical constants of the drag model
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ConstantsConfig {
    pub g: f64, // gravitational acceleration (m/s^2)
    pub m: f64, // mass (kg)
    pub c: f64, // drag coefficient (kg/s)
}

impl Default for ConstantsConfig {
    fn default() -> Self {
        Self {
            g: 9.8,
            m: 68.1,
            c: 12.5,
        }
    }
}

/// Settings for one driver run
#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub target_time: f64,         // integrate over [0, target_time]
    pub segment_counts: Vec<usize>, // resolutions for the equally spaced rules, in display order
    #[serde(default = "default_unequal_points")]
    pub unequal_points: usize,    // size of the non-uniform grid
    #[serde(default)]
    pub seed: Option<u64>,        // seed for the non-uniform grid
    #[serde(default = "default_analytical_solution")]
    pub analytical_solution: f64, // reference value printed next to the table
    #[serde(default)]
    pub scaling: ScalingConfig,
}

fn default_unequal_points() -> usize {
    100
}

fn default_analytical_solution() -> f64 {
    289.43515
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            target_time: 10.0,
            segment_counts: vec![2, 5, 10, 100, 1000],
            unequal_points: default_unequal_points(),
            seed: None,
            analytical_solution: default_analytical_solution(),
            scaling: ScalingConfig::Physical,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ScenarioConfig {
    pub constants: ConstantsConfig, // drag model constants
    pub run: RunConfig,             // what to integrate and how to report it
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_reference_yaml() {
        let yaml = r#"
constants:
  g: 9.8
  m: 68.1
  c: 12.5
run:
  target_time: 10.0
  segment_counts: [2, 5, 10, 100, 1000]
  unequal_points: 100
  seed: 42
  analytical_solution: 289.43515
  scaling: legacy
"#;
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.constants, ConstantsConfig::default());
        assert_eq!(cfg.run.segment_counts, vec![2, 5, 10, 100, 1000]);
        assert_eq!(cfg.run.seed, Some(42));
        assert_eq!(cfg.run.scaling, ScalingConfig::Legacy);
    }

    #[test]
    fn optional_run_fields_fall_back_to_defaults() {
        let yaml = r#"
constants: { g: 9.8, m: 68.1, c: 12.5 }
run:
  target_time: 10.0
  segment_counts: [4]
"#;
        let cfg: ScenarioConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.run.unequal_points, 100);
        assert_eq!(cfg.run.seed, None);
        assert_eq!(cfg.run.analytical_solution, 289.43515);
        assert_eq!(cfg.run.scaling, ScalingConfig::Physical);
    }

    #[test]
    fn unknown_scaling_is_rejected() {
        let yaml = r#"
constants: { g: 9.8, m: 68.1, c: 12.5 }
run: { target_time: 10.0, segment_counts: [2], scaling: corrected }
"#;
        assert!(serde_yaml::from_str::<ScenarioConfig>(yaml).is_err());
    }
}
