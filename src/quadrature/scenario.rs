//! Build a validated runtime scenario from configuration and run it
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a `Scenario` holding:
//! - the validated physical constants (`Constants`)
//! - the target time and the resolutions for the equally spaced rules
//! - the size and seed of the non-uniform grid
//! - the reporting settings (analytical value, scaling)
//!
//! `Scenario::run` evaluates every (method, resolution) pair into a
//! `ResultTable`. A failing pair is recorded as an error entry and the run
//! carries on with the next one.

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::configuration::config::{ScalingConfig, ScenarioConfig};
use crate::report::table::ResultTable;
use super::error::QuadratureError;
use super::grid::SampleGrid;
use super::integrator::{simpson, trapezoidal, trapezoidal_unequal, Method};
use super::params::Constants;

#[derive(Debug, Clone, PartialEq)]
pub struct Scenario {
    pub constants: Constants,
    pub target_time: f64,
    pub segment_counts: Vec<usize>,
    pub unequal_points: usize,
    pub seed: Option<u64>,
    pub analytical_solution: f64,
    pub scaling: ScalingConfig,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, QuadratureError> {
        // constants first, nothing below is meaningful with m = 0 or c = 0
        let constants = Constants::from_config(&cfg.constants)?;

        let run = cfg.run;
        if !(run.target_time.is_finite() && run.target_time > 0.0) {
            return Err(QuadratureError::InvalidTargetTime(run.target_time));
        }

        info!(
            "scenario: g = {}, m = {}, c = {}, T = {}, segments = {:?}, unequal points = {}",
            constants.g(),
            constants.m(),
            constants.c(),
            run.target_time,
            run.segment_counts,
            run.unequal_points
        );

        Ok(Self {
            constants,
            target_time: run.target_time,
            segment_counts: run.segment_counts,
            unequal_points: run.unequal_points,
            seed: run.seed,
            analytical_solution: run.analytical_solution,
            scaling: run.scaling,
        })
    }

    /// Run every rule, drawing the non-uniform grid from the configured seed
    /// (or from entropy when no seed is set)
    pub fn run(&self) -> ResultTable {
        let mut rng = match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        };
        let grid = SampleGrid::random(self.target_time, self.unequal_points, &mut rng);
        self.run_with_grid(grid)
    }

    /// Run every rule with a caller-supplied non-uniform grid
    pub fn run_with_grid(&self, grid: Result<SampleGrid, QuadratureError>) -> ResultTable {
        let mut table = ResultTable::new();

        for &segments in &self.segment_counts {
            let outcome = trapezoidal(&self.constants, self.target_time, segments);
            self.record(&mut table, Method::Trapezoidal, segments, outcome);

            let outcome = simpson(&self.constants, self.target_time, segments);
            self.record(&mut table, Method::Simpsons, segments, outcome);
        }

        match grid {
            Ok(grid) => {
                let outcome = trapezoidal_unequal(&self.constants, &grid);
                self.record(&mut table, Method::TrapezoidalUnequal, grid.len(), outcome);
            }
            Err(e) => self.record(&mut table, Method::TrapezoidalUnequal, self.unequal_points, Err(e)),
        }

        table
    }

    /// Report text for `table`, as printed by the binary
    pub fn report(&self, table: &ResultTable) -> String {
        table.render(self.analytical_solution)
    }

    fn record(
        &self,
        table: &mut ResultTable,
        method: Method,
        segments: usize,
        outcome: Result<f64, QuadratureError>,
    ) {
        let outcome = outcome.map(|d| self.scale(d));
        match &outcome {
            Ok(d) => debug!("{method} with {segments} segments: {d}"),
            Err(e) => warn!("{method} with {segments} segments failed: {e}"),
        }
        table.insert(method, segments, outcome);
    }

    fn scale(&self, distance: f64) -> f64 {
        match self.scaling {
            ScalingConfig::Physical => distance,
            // reproduces the double-scaled figures: g*m/c applied on top of v(t)
            ScalingConfig::Legacy => self.constants.terminal_velocity() * distance,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::config::{ConstantsConfig, RunConfig};
    use approx::assert_relative_eq;

    fn literal_grid() -> SampleGrid {
        SampleGrid::from_points(10.0, vec![0.0, 0.7, 1.9, 3.2, 5.0, 6.1, 8.4, 10.0]).unwrap()
    }

    #[test]
    fn degenerate_constants_fail_before_running() {
        let cfg = ScenarioConfig {
            constants: ConstantsConfig { g: 9.8, m: 68.1, c: 0.0 },
            run: RunConfig::default(),
        };
        assert!(matches!(
            Scenario::build_scenario(cfg),
            Err(QuadratureError::DegenerateConstants { name: "c", .. })
        ));
    }

    #[test]
    fn bad_target_time_is_rejected() {
        let mut cfg = ScenarioConfig::default();
        cfg.run.target_time = 0.0;
        assert_eq!(
            Scenario::build_scenario(cfg),
            Err(QuadratureError::InvalidTargetTime(0.0))
        );
    }

    #[test]
    fn table_follows_resolution_order() {
        let scenario = Scenario::build_scenario(ScenarioConfig::default()).unwrap();
        let table = scenario.run_with_grid(Ok(literal_grid()));

        let keys: Vec<(Method, usize)> = table
            .entries()
            .iter()
            .map(|e| (e.key.method, e.key.segments))
            .collect();
        assert_eq!(
            keys,
            vec![
                (Method::Trapezoidal, 2),
                (Method::Simpsons, 2),
                (Method::Trapezoidal, 5),
                (Method::Simpsons, 5),
                (Method::Trapezoidal, 10),
                (Method::Simpsons, 10),
                (Method::Trapezoidal, 100),
                (Method::Simpsons, 100),
                (Method::Trapezoidal, 1000),
                (Method::Simpsons, 1000),
                (Method::TrapezoidalUnequal, 8),
            ]
        );
    }

    #[test]
    fn failing_entry_does_not_stop_the_run() {
        let mut cfg = ScenarioConfig::default();
        cfg.run.segment_counts = vec![1, 10];
        let scenario = Scenario::build_scenario(cfg).unwrap();
        let table = scenario.run_with_grid(Ok(literal_grid()));

        assert!(table.distance(Method::Trapezoidal, 1).is_some());
        assert!(matches!(
            table.get(Method::Simpsons, 1),
            Some(Err(QuadratureError::InvalidSegmentCount { .. }))
        ));
        assert!(table.distance(Method::Simpsons, 10).is_some());
        assert!(table.distance(Method::TrapezoidalUnequal, 8).is_some());
    }

    #[test]
    fn grid_failure_is_recorded_under_requested_size() {
        let mut cfg = ScenarioConfig::default();
        cfg.run.unequal_points = 1;
        cfg.run.seed = Some(3);
        let scenario = Scenario::build_scenario(cfg).unwrap();
        let table = scenario.run();

        assert!(matches!(
            table.get(Method::TrapezoidalUnequal, 1),
            Some(Err(QuadratureError::InvalidGrid(_)))
        ));
        assert!(table.distance(Method::Simpsons, 1000).is_some());
    }

    #[test]
    fn legacy_scaling_multiplies_by_terminal_velocity() {
        let physical = Scenario::build_scenario(ScenarioConfig::default()).unwrap();
        let mut legacy = physical.clone();
        legacy.scaling = ScalingConfig::Legacy;

        let p = physical.run_with_grid(Ok(literal_grid()));
        let l = legacy.run_with_grid(Ok(literal_grid()));
        let factor = 9.8 * 68.1 / 12.5;
        for (a, b) in p.entries().iter().zip(l.entries()) {
            assert_relative_eq!(
                b.outcome.clone().unwrap(),
                factor * a.outcome.clone().unwrap(),
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        let mut cfg = ScenarioConfig::default();
        cfg.run.seed = Some(42);
        let scenario = Scenario::build_scenario(cfg).unwrap();
        assert_eq!(scenario.run(), scenario.run());
        assert!(scenario.run().distance(Method::TrapezoidalUnequal, 100).is_some());
    }
}
