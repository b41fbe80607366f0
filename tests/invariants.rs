use proptest::prelude::*;
use tumbler::{generate, GlobalSettings, ShapeKind, Simulation, SimulationConfig, Vec2};

fn any_shape() -> impl Strategy<Value = ShapeKind> {
    (0..ShapeKind::ALL.len()).prop_map(|i| ShapeKind::ALL[i])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn state_stays_finite_and_bounded(
        seed in any::<u64>(),
        shape in any_shape(),
        vertex_count in 0u32..12,
        count in 0u32..40,
        radius in 1.0f64..20.0,
        speed in 0.0f64..15.0,
        gravity in -1.0f64..1.0,
        restitution in 0.0f64..1.5,
        rotation_speed in -0.05f64..0.05,
        time_scale in 0.0f64..3.0,
    ) {
        let config = SimulationConfig::new()
            .with_shape(shape, vertex_count)
            .with_gravity(gravity)
            .with_restitution(restitution)
            .with_rotation_speed(rotation_speed)
            .with_particles(count, radius, speed);
        let mut sim = Simulation::new(config, seed);
        let globals = GlobalSettings::new().with_time_scale(time_scale);

        for _ in 0..100 {
            prop_assert!(sim.step(&globals));
            prop_assert_eq!(sim.particles().len(), count as usize);
            for p in sim.particles() {
                prop_assert!(p.is_finite());
                prop_assert!(p.pos.length() <= sim.runaway_limit());
                prop_assert_eq!(p.radius, radius);
            }
        }
    }

    #[test]
    fn polygon_vertices_sit_on_the_circle(
        sides in 3u32..64,
        radius in 1.0f64..500.0,
        cx in -100.0f64..100.0,
        cy in -100.0f64..100.0,
        rotation in -10.0f64..10.0,
    ) {
        let center = Vec2::new(cx, cy);
        let vertices = generate(ShapeKind::Polygon, sides, radius, center, rotation);
        prop_assert_eq!(vertices.len(), sides as usize);
        for v in &vertices {
            prop_assert!((v.distance(center) - radius).abs() < 1e-6 * radius.max(1.0));
        }
    }

    #[test]
    fn fractional_counts_floor(count in 0.0f64..200.0) {
        let mut config = SimulationConfig::<f64>::new();
        config.particle_count = count;
        let sim = Simulation::new(config, 0);
        prop_assert_eq!(sim.particles().len(), count.floor() as usize);
    }
}
