//! Benchmarks for tumbler simulation steps and boundary generation.

use criterion::{criterion_group, criterion_main, Criterion};
use tumbler::*;

fn bench_polygon_steps(c: &mut Criterion) {
    c.bench_function("hexagon_100_particles_60_steps", |b| {
        b.iter(|| {
            let config: SimulationConfig<f32> = SimulationConfig::new()
                .with_shape(ShapeKind::Polygon, 6)
                .with_particles(100, 6.0, 3.0);
            let mut sim = Simulation::new(config, 42);
            let globals = GlobalSettings::new();
            for _ in 0..60 {
                sim.step(&globals);
            }
            sim.kinetic_energy()
        });
    });
}

fn bench_concave_steps(c: &mut Criterion) {
    c.bench_function("skull_400_particles_60_steps", |b| {
        b.iter(|| {
            let config: SimulationConfig<f32> = SimulationConfig::new()
                .with_shape(ShapeKind::Skull, 0)
                .with_particles(400, 4.0, 2.0);
            let mut sim = Simulation::new(config, 7);
            let globals = GlobalSettings::new();
            for _ in 0..60 {
                sim.step(&globals);
            }
            sim.kinetic_energy()
        });
    });
}

fn bench_shape_generation(c: &mut Criterion) {
    c.bench_function("generate_every_shape", |b| {
        b.iter(|| {
            let mut total = 0;
            for kind in ShapeKind::ALL {
                total += generate(kind, 8, 200.0f32, Vec2::zero(), 0.3).len();
            }
            total
        });
    });
}

criterion_group!(benches, bench_polygon_steps, bench_concave_steps, bench_shape_generation);
criterion_main!(benches);
