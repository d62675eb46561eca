pub mod quadrature;
pub mod configuration;
pub mod report;
pub mod benchmark;

pub use quadrature::error::{QuadratureError, GridDefect};
pub use quadrature::params::Constants;
pub use quadrature::velocity::{velocity, distance};
pub use quadrature::grid::SampleGrid;
pub use quadrature::integrator::{trapezoidal, simpson, trapezoidal_unequal, trapezoidal_unequal_points, Method};
pub use quadrature::scenario::Scenario;

pub use configuration::config::{ScenarioConfig, ConstantsConfig, RunConfig, ScalingConfig};

pub use report::table::{ResultTable, ResultKey, Entry};

pub use benchmark::benchmark::bench_quadrature;
