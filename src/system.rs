//! Per-instance particle state and its (re)initialization.

use crate::config::SimulationConfig;
use crate::float::Float;
use crate::particle::Particle;
use crate::vec::Vec2;
use alloc::vec::Vec as AllocVec;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Particles spawn within this distance of the origin.
pub const SPAWN_RADIUS: f32 = 30.0;

/// Mixes a generation counter into the base seed. Generation 0 leaves the
/// seed unchanged.
const GENERATION_MIX: u64 = 0x9E37_79B9_7F4A_7C15;

/// Rotation accumulator plus the particle list.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationState<F: Float> {
    /// Boundary angle in radians. Grows without bound.
    pub rotation: F,
    pub particles: AllocVec<Particle<F>>,
}

/// Owns a [`SimulationState`] and rebuilds it on demand.
#[derive(Clone, Debug)]
pub struct ParticleSystem<F: Float> {
    state: SimulationState<F>,
    seed: u64,
    generation: u64,
}

impl<F: Float> ParticleSystem<F> {
    /// Build the initial state from `config` using `seed`.
    pub fn new(config: &SimulationConfig<F>, seed: u64) -> Self {
        let state = SimulationState {
            rotation: F::zero(),
            particles: Self::initialize(config, seed),
        };
        ParticleSystem { state, seed, generation: 0 }
    }

    /// Spawn `config.particle_total()` particles near the origin.
    ///
    /// Each particle gets a polar-sampled position (angle in `[0, 2π)`,
    /// distance in `[0, SPAWN_RADIUS)`), a velocity with uniform direction and
    /// magnitude `initial_speed * [0.5, 1.5)`, the configured radius, and a
    /// palette colour by index. Same config and seed, same particles.
    pub fn initialize(config: &SimulationConfig<F>, seed: u64) -> AllocVec<Particle<F>> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let count = config.particle_total();
        let tau = core::f32::consts::TAU;

        let mut particles = AllocVec::with_capacity(count);
        for i in 0..count {
            let angle: f32 = rng.random_range(0.0..tau);
            let distance: f32 = rng.random_range(0.0..SPAWN_RADIUS);
            let heading: f32 = rng.random_range(0.0..tau);
            let speed_factor: f32 = rng.random_range(0.5..1.5);

            let pos = Vec2::from_angle(F::from_f32(angle)).scale(F::from_f32(distance));
            let vel = Vec2::from_angle(F::from_f32(heading))
                .scale(config.initial_speed * F::from_f32(speed_factor));
            particles.push(Particle::new(i as u32, pos, vel, config.particle_radius));
        }

        log::debug!("initialized {} particles (seed {:#x})", count, seed);
        particles
    }

    /// Replace every particle and reset the rotation to zero.
    ///
    /// Each call advances the generation, so repeated rebuilds give fresh
    /// layouts while remaining reproducible from the base seed.
    pub fn reinitialize(&mut self, config: &SimulationConfig<F>) {
        self.generation = self.generation.wrapping_add(1);
        let seed = self.seed ^ self.generation.wrapping_mul(GENERATION_MIX);
        self.state.rotation = F::zero();
        self.state.particles = Self::initialize(config, seed);
    }

    pub fn state(&self) -> &SimulationState<F> { &self.state }
    pub fn state_mut(&mut self) -> &mut SimulationState<F> { &mut self.state }
    pub fn particles(&self) -> &[Particle<F>] { &self.state.particles }
    pub fn particles_mut(&mut self) -> &mut [Particle<F>] { &mut self.state.particles }
    pub fn particle_count(&self) -> usize { self.state.particles.len() }
    pub fn rotation(&self) -> F { self.state.rotation }
    pub fn seed(&self) -> u64 { self.seed }
    pub fn generation(&self) -> u64 { self.generation }
}
