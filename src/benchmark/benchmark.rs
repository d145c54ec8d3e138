use std::time::Instant;

use crate::simulation::integrator::generate_trajectory;
use crate::simulation::params::{AttractorKind, Parameters};
use crate::simulation::particles::ParticleSet;
use crate::simulation::states::Point3;
use crate::simulation::trail::TrailBuffer;

/// Time one live tick for growing particle counts
pub fn bench_tick() {
    // Different set sizes to test
    let ns = [1, 10, 100, 1000, 10_000, 100_000];
    let steps = 100; // ticks averaged per size

    let params = Parameters::default();

    for n in ns {
        for kind in [AttractorKind::Lorenz, AttractorKind::Rossler] {
            let mut set = ParticleSet::initialize(n, kind);
            let active = params.active(kind);

            // Warm up, also fills the first trail slot
            if set.tick(&active, params.dt).is_err() {
                return;
            }

            let t0 = Instant::now();
            for _ in 0..steps {
                if set.tick(&active, params.dt).is_err() {
                    return;
                }
            }
            let per_tick = t0.elapsed().as_secs_f64() / steps as f64;

            println!("N = {n:6}, {kind:7} tick = {:10.6} ms", per_tick * 1000.0);
        }
    }
}

/// Time one-shot bulk generation for growing point counts
pub fn bench_generate() {
    let counts = [1_000, 5_000, 10_000, 20_000, 100_000, 1_000_000];
    let params = Parameters::default();
    let seed = Point3::new(0.1, 0.0, 0.0);

    for num_points in counts {
        for kind in [AttractorKind::Lorenz, AttractorKind::Rossler] {
            let t0 = Instant::now();
            let active = params.active(kind);
            let points = match generate_trajectory(&active, params.dt, seed, num_points) {
                Ok(points) => points,
                Err(_) => return,
            };
            let elapsed = t0.elapsed().as_secs_f64();

            let ms = elapsed * 1000.0;
            println!("points = {:8}, {kind:7} generate = {ms:10.6} ms", points.len());
        }
    }
}

/// Cost of a steady-state trail push (one eviction per push) vs capacity
/// Paste output directly into a spreadsheet to graph
pub fn bench_trail_curve() {
    println!("capacity,push_ns");

    let pushes = 200_000;

    for capacity in (500..=20_000).step_by(500) {
        let mut trail = match TrailBuffer::new(capacity) {
            Ok(trail) => trail,
            Err(_) => return,
        };

        // Fill first so every timed push evicts
        for i in 0..capacity {
            trail.push(Point3::new(i as f64, 0.0, 0.0));
        }

        let t0 = Instant::now();
        for i in 0..pushes {
            trail.push(Point3::new(i as f64, 1.0, 2.0));
        }
        let ns_per_push = t0.elapsed().as_secs_f64() * 1e9 / pushes as f64;

        println!("{},{:.3}", capacity, ns_per_push);
    }
}
