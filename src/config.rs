//! Configuration types for a simulation instance and the shared multipliers.

use crate::float::Float;
use crate::shape::ShapeKind;
use alloc::string::String;

/// Per-instance configuration.
///
/// Values are used exactly as given; nothing is validated or clamped. Changing
/// `id`, `particle_count`, `particle_radius` or `initial_speed` requires a
/// reinitialization (see [`SimulationConfig::requires_reset`]); every other
/// field applies live.
///
/// # Builder Pattern
/// ```
/// use tumbler::{ShapeKind, SimulationConfig};
///
/// let config: SimulationConfig<f32> = SimulationConfig::new()
///     .with_shape(ShapeKind::Star, 6)
///     .with_gravity(0.3)
///     .with_restitution(0.9)
///     .with_particles(40, 6.0, 2.5);
/// assert_eq!(config.particle_total(), 40);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SimulationConfig<F: Float> {
    /// Instance identity. A new id means a new instance.
    pub id: u64,
    pub shape: ShapeKind,
    /// Polygon side count or star point count. Ignored by silhouettes.
    pub vertex_count: u32,
    /// Downward acceleration per tick (y grows downward).
    pub gravity: F,
    /// Per-tick velocity decay. Default: 0.001.
    pub friction: F,
    /// Velocity kept after a wall bounce.
    pub restitution: F,
    /// Boundary rotation in radians per tick. Default: 0.005.
    pub rotation_speed: F,
    /// Requested particle count; floored, negative means none.
    pub particle_count: F,
    pub particle_radius: F,
    pub initial_speed: F,
    pub name: String,
    pub description: String,
}

impl<F: Float> SimulationConfig<F> {
    /// Create a new config with default values.
    pub fn new() -> Self {
        SimulationConfig {
            id: 0,
            shape: ShapeKind::Polygon,
            vertex_count: 4,
            gravity: F::from_f32(0.2),
            friction: F::from_f32(0.001),
            restitution: F::from_f32(0.8),
            rotation_speed: F::from_f32(0.005),
            particle_count: F::from_f32(20.0),
            particle_radius: F::from_f32(8.0),
            initial_speed: F::from_f32(2.0),
            name: String::new(),
            description: String::new(),
        }
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.id = id;
        self
    }

    /// Set the boundary shape and its vertex (or star point) count.
    pub fn with_shape(mut self, shape: ShapeKind, vertex_count: u32) -> Self {
        self.shape = shape;
        self.vertex_count = vertex_count;
        self
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_friction(mut self, friction: F) -> Self {
        self.friction = friction;
        self
    }

    pub fn with_restitution(mut self, restitution: F) -> Self {
        self.restitution = restitution;
        self
    }

    pub fn with_rotation_speed(mut self, rotation_speed: F) -> Self {
        self.rotation_speed = rotation_speed;
        self
    }

    /// Set particle count, radius and initial speed together.
    pub fn with_particles(mut self, count: u32, radius: F, initial_speed: F) -> Self {
        self.particle_count = F::from_f32(count as f32);
        self.particle_radius = radius;
        self.initial_speed = initial_speed;
        self
    }

    /// Set the descriptive metadata.
    pub fn with_metadata(mut self, name: &str, description: &str) -> Self {
        self.name = String::from(name);
        self.description = String::from(description);
        self
    }

    /// Number of particles this config produces: `max(0, floor(particle_count))`.
    /// NaN gives zero.
    pub fn particle_total(&self) -> usize {
        let n = self.particle_count.floor().to_f64();
        if n > 0.0 {
            n as usize
        } else {
            0
        }
    }

    /// Whether moving from `self` to `other` changes the identity subset and
    /// therefore needs a fresh particle set.
    pub fn requires_reset(&self, other: &Self) -> bool {
        self.id != other.id
            || self.particle_total() != other.particle_total()
            || !same(self.particle_radius, other.particle_radius)
            || !same(self.initial_speed, other.initial_speed)
    }
}

impl<F: Float> Default for SimulationConfig<F> {
    fn default() -> Self {
        Self::new()
    }
}

// NaN compares unequal to itself; two NaNs count as unchanged.
fn same<F: Float>(a: F, b: F) -> bool {
    a == b || (a != a && b != b)
}

/// Multipliers shared read-only by every instance, read fresh each tick.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct GlobalSettings<F: Float> {
    pub gravity: F,
    /// Scales the implicit unit timestep. Zero pauses the simulation.
    pub time_scale: F,
    pub rotation: F,
    pub bounciness: F,
}

impl<F: Float> GlobalSettings<F> {
    /// All multipliers at 1.0.
    pub fn new() -> Self {
        GlobalSettings {
            gravity: F::one(),
            time_scale: F::one(),
            rotation: F::one(),
            bounciness: F::one(),
        }
    }

    pub fn with_gravity(mut self, gravity: F) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_time_scale(mut self, time_scale: F) -> Self {
        self.time_scale = time_scale;
        self
    }

    pub fn with_rotation(mut self, rotation: F) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_bounciness(mut self, bounciness: F) -> Self {
        self.bounciness = bounciness;
        self
    }

    /// Settings with a zero time scale.
    pub fn paused(self) -> Self {
        self.with_time_scale(F::zero())
    }
}

impl<F: Float> Default for GlobalSettings<F> {
    fn default() -> Self {
        Self::new()
    }
}
