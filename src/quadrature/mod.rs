pub mod error;
pub mod params;
pub mod velocity;
pub mod grid;
pub mod integrator;
pub mod scenario;
