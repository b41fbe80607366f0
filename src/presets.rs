//! Built-in configurations shipped alongside generated ones.

use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::float::Float;
use crate::shape::ShapeKind;
use alloc::string::ToString;
use alloc::vec::Vec as AllocVec;

struct Preset {
    name: &'static str,
    description: &'static str,
    shape: ShapeKind,
    vertex_count: u32,
    gravity: f32,
    friction: f32,
    restitution: f32,
    rotation_speed: f32,
    particle_count: u32,
    particle_radius: f32,
    initial_speed: f32,
}

const PRESETS: &[Preset] = &[
    Preset {
        name: "square-drop",
        description: "A single ball dropped into a slowly turning square",
        shape: ShapeKind::Polygon, vertex_count: 4,
        gravity: 0.3, friction: 0.001, restitution: 0.8, rotation_speed: 0.005,
        particle_count: 1, particle_radius: 10.0, initial_speed: 0.0,
    },
    Preset {
        name: "hexagon-swirl",
        description: "A busy hexagon spinning at a brisk pace",
        shape: ShapeKind::Polygon, vertex_count: 6,
        gravity: 0.2, friction: 0.001, restitution: 0.9, rotation_speed: 0.01,
        particle_count: 30, particle_radius: 8.0, initial_speed: 3.0,
    },
    Preset {
        name: "starburst",
        description: "Bouncy marbles ricocheting inside a counter-rotating star",
        shape: ShapeKind::Star, vertex_count: 5,
        gravity: 0.15, friction: 0.0005, restitution: 0.95, rotation_speed: -0.008,
        particle_count: 40, particle_radius: 6.0, initial_speed: 4.0,
    },
    Preset {
        name: "haunted-house",
        description: "Restless spirits knocking about an old house",
        shape: ShapeKind::House, vertex_count: 0,
        gravity: 0.25, friction: 0.002, restitution: 0.7, rotation_speed: 0.003,
        particle_count: 25, particle_radius: 7.0, initial_speed: 2.0,
    },
    Preset {
        name: "skull-rattle",
        description: "Loose teeth rattling around a tumbling skull",
        shape: ShapeKind::Skull, vertex_count: 0,
        gravity: 0.3, friction: 0.001, restitution: 0.85, rotation_speed: 0.006,
        particle_count: 35, particle_radius: 6.0, initial_speed: 3.0,
    },
    Preset {
        name: "candy-cane",
        description: "Sugar beads sliding through a hooked cane",
        shape: ShapeKind::CandyCane, vertex_count: 0,
        gravity: 0.2, friction: 0.001, restitution: 0.8, rotation_speed: 0.004,
        particle_count: 20, particle_radius: 5.0, initial_speed: 2.0,
    },
    Preset {
        name: "evergreen",
        description: "Ornaments settling into the branches of a turning tree",
        shape: ShapeKind::Tree, vertex_count: 0,
        gravity: 0.25, friction: 0.002, restitution: 0.75, rotation_speed: 0.002,
        particle_count: 30, particle_radius: 6.0, initial_speed: 2.0,
    },
    Preset {
        name: "ghost-float",
        description: "Near-weightless wisps drifting inside a ghost",
        shape: ShapeKind::Ghost, vertex_count: 0,
        gravity: 0.05, friction: 0.0005, restitution: 0.9, rotation_speed: 0.004,
        particle_count: 25, particle_radius: 8.0, initial_speed: 1.5,
    },
    Preset {
        name: "pumpkin-patch",
        description: "Seeds tumbling inside a lobed pumpkin",
        shape: ShapeKind::Pumpkin, vertex_count: 0,
        gravity: 0.2, friction: 0.001, restitution: 0.8, rotation_speed: 0.005,
        particle_count: 40, particle_radius: 5.0, initial_speed: 2.0,
    },
    Preset {
        name: "sweetheart",
        description: "Candy hearts bouncing inside a heart",
        shape: ShapeKind::Heart, vertex_count: 0,
        gravity: 0.2, friction: 0.001, restitution: 0.85, rotation_speed: -0.004,
        particle_count: 24, particle_radius: 7.0, initial_speed: 2.5,
    },
    Preset {
        name: "zero-g",
        description: "Frictionless, perfectly elastic octagon with no gravity",
        shape: ShapeKind::Polygon, vertex_count: 8,
        gravity: 0.0, friction: 0.0, restitution: 1.0, rotation_speed: 0.01,
        particle_count: 50, particle_radius: 5.0, initial_speed: 3.0,
    },
];

impl Preset {
    fn build<F: Float>(&self, id: u64) -> SimulationConfig<F> {
        SimulationConfig::new()
            .with_id(id)
            .with_shape(self.shape, self.vertex_count)
            .with_gravity(F::from_f32(self.gravity))
            .with_friction(F::from_f32(self.friction))
            .with_restitution(F::from_f32(self.restitution))
            .with_rotation_speed(F::from_f32(self.rotation_speed))
            .with_particles(
                self.particle_count,
                F::from_f32(self.particle_radius),
                F::from_f32(self.initial_speed),
            )
            .with_metadata(self.name, self.description)
    }
}

/// Names of every built-in preset, in display order.
pub fn names() -> impl Iterator<Item = &'static str> {
    PRESETS.iter().map(|p| p.name)
}

/// Every built-in preset. Ids start at 1 in display order.
pub fn all<F: Float>() -> AllocVec<SimulationConfig<F>> {
    PRESETS
        .iter()
        .enumerate()
        .map(|(i, p)| p.build(i as u64 + 1))
        .collect()
}

/// Look a preset up by name.
pub fn by_name<F: Float>(name: &str) -> Result<SimulationConfig<F>, SimulationError> {
    PRESETS
        .iter()
        .position(|p| p.name == name)
        .map(|i| PRESETS[i].build(i as u64 + 1))
        .ok_or_else(|| SimulationError::UnknownPreset { name: name.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_resolves() {
        for name in names() {
            let config: SimulationConfig<f32> = by_name(name).expect("preset exists");
            assert_eq!(config.name, name);
        }
    }

    #[test]
    fn ids_are_unique() {
        let configs: AllocVec<SimulationConfig<f64>> = all();
        for (i, a) in configs.iter().enumerate() {
            for b in &configs[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn unknown_preset_is_an_error() {
        assert!(matches!(
            by_name::<f32>("nope"),
            Err(SimulationError::UnknownPreset { .. })
        ));
    }
}
