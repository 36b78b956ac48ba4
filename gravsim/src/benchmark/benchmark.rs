//! Wall-clock timing of the hot paths
//!
//! Output is CSV on stdout so it can be pasted straight into a spreadsheet.

use std::time::Instant;

use crate::simulation::integrator::IntegratorKind;
use crate::simulation::states::{Body, Coordinates2D};
use crate::simulation::universe::Universe;
use crate::visualization::color::Rgba;

/// Helper to build a deterministic universe of size `n`
/// Bodies are spread on a sin/cos lattice so no rng is needed
fn make_universe(n: usize, integrator: IntegratorKind) -> Universe {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        let position = Coordinates2D::new(
            500.0 + (i_f * 0.37).sin() * 400.0,
            500.0 + (i_f * 0.13).cos() * 400.0,
        );

        bodies.push(Body::new(format!("b{i}"), Rgba::WHITE, position, 1.0 + (i % 7) as f64, 0.01));
    }

    Universe::new(Coordinates2D::new(1000.0, 1000.0), 0.1, bodies).with_integrator(integrator)
}

/// Time one `integrate` call for both passes over a range of body counts
pub fn bench_integrate() {
    println!("N,sequential_ms,symmetric_ms");

    for n in (200..=3200).step_by(200) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };

        let mut seq = make_universe(n, IntegratorKind::Sequential);
        let t0 = Instant::now();
        for _ in 0..steps {
            seq.integrate();
        }
        let ms_seq = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        let mut sym = make_universe(n, IntegratorKind::Symmetric);
        let t1 = Instant::now();
        for _ in 0..steps {
            sym.integrate();
        }
        let ms_sym = t1.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6},{:.6}", n, ms_seq, ms_sym);
    }
}

/// Time a 300x300 view grid and a whole-world grid over a range of body counts
pub fn bench_field() {
    println!("N,view_ms,total_ms");

    for n in [10, 50, 100, 200, 400, 800] {
        let universe = make_universe(n, IntegratorKind::Sequential);

        let t0 = Instant::now();
        let view = universe.gravity_field_grid(1.0, [300, 300], [0.3, 0.3], [0.0, 0.0]);
        let ms_view = t0.elapsed().as_secs_f64() * 1000.0;

        let t1 = Instant::now();
        let total = universe.total_gravity_field_grid(5.0, 1.0);
        let ms_total = t1.elapsed().as_secs_f64() * 1000.0;

        std::hint::black_box((&view, &total));

        println!("{},{:.6},{:.6}", n, ms_view, ms_total);
    }
}
