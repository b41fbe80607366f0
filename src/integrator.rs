//! Explicit per-tick kinematics: rotation, gravity, friction, translation.
//!
//! The timestep is an implicit unit scaled by `GlobalSettings::time_scale`,
//! i.e. one host callback interval. Results therefore depend on how often
//! the host calls `step`; hosts wanting frame-rate independence should call
//! it at a fixed cadence.

use crate::config::{GlobalSettings, SimulationConfig};
use crate::float::Float;
use crate::particle::Particle;
use crate::system::SimulationState;

/// Velocity multiplier applied once per tick, clamped to `[0, 1]` so large
/// `friction * time_scale` products stop a particle instead of reversing it.
pub fn friction_decay<F: Float>(friction: F, time_scale: F) -> F {
    (F::one() - friction * time_scale).clamp(F::zero(), F::one())
}

/// Advance rotation and every particle by one tick.
///
/// A zero `time_scale` leaves the state untouched.
pub fn advance<F: Float>(
    state: &mut SimulationState<F>,
    config: &SimulationConfig<F>,
    globals: &GlobalSettings<F>,
) {
    let dt = globals.time_scale;
    state.rotation = state.rotation + config.rotation_speed * globals.rotation * dt;

    let gravity = config.gravity * globals.gravity * dt;
    let decay = friction_decay(config.friction, dt);
    for p in state.particles.iter_mut() {
        integrate(p, gravity, decay, dt);
    }
}

/// Apply one tick to a single particle.
pub fn integrate<F: Float>(p: &mut Particle<F>, gravity: F, decay: F, dt: F) {
    p.vel.y = p.vel.y + gravity;
    p.vel = p.vel.scale(decay);
    p.pos = p.pos + p.vel.scale(dt);
}
