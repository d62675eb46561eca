use std::time::Instant;

use crate::quadrature::error::QuadratureError;
use crate::quadrature::params::Constants;
use crate::quadrature::integrator::{simpson, trapezoidal};

/// Time both equally spaced rules for a range of segment counts and print
/// their error against `analytical`
/// Paste output directly into a spreadsheet to graph convergence
pub fn bench_quadrature(k: &Constants, target_time: f64, analytical: f64) -> Result<(), QuadratureError> {
    println!("segments,trap_ms,trap_err,simpson_ms,simpson_err");

    // doubling keeps every count even, Simpson needs that
    let mut segments = 2;
    while segments <= 1 << 20 {
        // small n: average over a few calls to smooth noise
        let reps = if segments <= 1 << 12 { 20 } else { 1 };

        // Warm up
        let mut trap = trapezoidal(k, target_time, segments)?;
        let t0 = Instant::now();
        for _ in 0..reps {
            trap = trapezoidal(k, target_time, segments)?;
        }
        let ms_trap = t0.elapsed().as_secs_f64() * 1000.0 / reps as f64;

        let mut simp = simpson(k, target_time, segments)?;
        let t1 = Instant::now();
        for _ in 0..reps {
            simp = simpson(k, target_time, segments)?;
        }
        let ms_simp = t1.elapsed().as_secs_f64() * 1000.0 / reps as f64;

        println!(
            "{},{:.6},{:.3e},{:.6},{:.3e}",
            segments,
            ms_trap,
            (trap - analytical).abs(),
            ms_simp,
            (simp - analytical).abs()
        );

        segments *= 2;
    }

    Ok(())
}
