//! The per-tick orchestrator.
//!
//! A [`Simulation`] owns one instance: its config, particle state and the
//! boundary loop for the current rotation. The host decides the cadence and
//! calls [`Simulation::tick`] (or [`Simulation::step`]) once per callback;
//! nothing here blocks or schedules.

use crate::collision;
use crate::config::{GlobalSettings, SimulationConfig};
use crate::error::SimulationError;
use crate::float::Float;
use crate::integrator;
use crate::observer::{NoOpStepObserver, StepObserver};
use crate::particle::Particle;
use crate::shape;
use crate::system::{ParticleSystem, SimulationState};
use crate::vec::Vec2;
use alloc::sync::Arc;
use alloc::vec::Vec as AllocVec;
use core::sync::atomic::{AtomicBool, Ordering};

/// Boundary radius used until the host sets one.
pub const DEFAULT_BOUNDARY_RADIUS: f32 = 200.0;

/// Distance beyond the boundary radius at which a particle counts as escaped.
pub const DEFAULT_RUNAWAY_MARGIN: f32 = 150.0;

/// Cloneable stop flag.
///
/// Once stopped, the owning [`Simulation`] refuses to step. A host can keep a
/// handle in its teardown path and stop the instance even after it is no
/// longer displayed.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Render view for one tick, in simulation-local coordinates.
#[derive(Copy, Clone, Debug)]
pub struct Snapshot<'a, F: Float> {
    pub boundary: &'a [Vec2<F>],
    pub particles: &'a [Particle<F>],
    pub rotation: F,
}

/// One independent simulation instance.
pub struct Simulation<F: Float> {
    config: SimulationConfig<F>,
    system: ParticleSystem<F>,
    boundary: AllocVec<Vec2<F>>,
    boundary_radius: F,
    runaway_margin: F,
    stop: StopHandle,
}

impl<F: Float> Simulation<F> {
    /// Create an instance from `config`, spawning particles from `seed`.
    pub fn new(config: SimulationConfig<F>, seed: u64) -> Self {
        let system = ParticleSystem::new(&config, seed);
        let mut sim = Simulation {
            config,
            system,
            boundary: AllocVec::new(),
            boundary_radius: F::from_f32(DEFAULT_BOUNDARY_RADIUS),
            runaway_margin: F::from_f32(DEFAULT_RUNAWAY_MARGIN),
            stop: StopHandle::new(),
        };
        sim.regenerate_boundary();
        sim
    }

    /// Set the boundary radius.
    pub fn with_boundary_radius(mut self, radius: F) -> Self {
        self.boundary_radius = radius;
        self.regenerate_boundary();
        self
    }

    /// Set how far past the boundary radius a particle may go before it is
    /// reset to the origin.
    pub fn with_runaway_margin(mut self, margin: F) -> Self {
        self.runaway_margin = margin;
        self
    }

    /// Run one step unless stopped. Returns whether a step ran.
    pub fn step(&mut self, globals: &GlobalSettings<F>) -> bool {
        self.step_observed(globals, &mut NoOpStepObserver)
    }

    /// Run one step unless stopped, reporting each phase to `observer`.
    ///
    /// Order: integrate, boundary phase, particle phase, recovery. Non-finite
    /// particles are reset after every phase; escaped particles after the
    /// last one. With a zero time scale both collision phases are skipped.
    pub fn step_observed<O: StepObserver>(
        &mut self,
        globals: &GlobalSettings<F>,
        observer: &mut O,
    ) -> bool {
        if self.stop.is_stopped() {
            return false;
        }

        integrator::advance(self.system.state_mut(), &self.config, globals);
        observer.on_integrate();
        self.regenerate_boundary();

        let limit = self.runaway_limit();
        let restitution = self.config.restitution * globals.bounciness;
        let particles = self.system.particles_mut();
        let mut recovered = collision::recover_non_finite(particles);

        // A paused tick leaves contacts alone so the frame stays frozen.
        let paused = globals.time_scale == F::zero();

        let contacts = if paused {
            0
        } else {
            collision::resolve_boundary(particles, &self.boundary, restitution)
        };
        observer.on_boundary_phase(contacts);
        recovered += collision::recover_non_finite(particles);

        let overlaps = if paused { 0 } else { collision::resolve_pairs(particles) };
        observer.on_particle_phase(overlaps);
        recovered += collision::recover_runaways(particles, limit);

        if recovered > 0 {
            log::debug!("reset {} particle(s) to origin", recovered);
            observer.on_recovered(recovered);
        }
        log::trace!("step complete, rotation {}", self.system.rotation());
        observer.on_step_complete();
        true
    }

    /// Scheduled entry point: check the stop flag, step, and return the
    /// render view. Returns `None` once stopped.
    pub fn tick(&mut self, globals: &GlobalSettings<F>) -> Option<Snapshot<'_, F>> {
        if self.step(globals) {
            Some(self.snapshot())
        } else {
            None
        }
    }

    /// Current boundary loop and particles.
    pub fn snapshot(&self) -> Snapshot<'_, F> {
        Snapshot {
            boundary: &self.boundary,
            particles: self.system.particles(),
            rotation: self.system.rotation(),
        }
    }

    /// Swap in a new config. Live fields apply immediately; a change to the
    /// identity subset rebuilds the particles. Returns whether it rebuilt.
    pub fn set_config(&mut self, config: SimulationConfig<F>) -> bool {
        let reset = self.config.requires_reset(&config);
        self.config = config;
        if reset {
            self.system.reinitialize(&self.config);
        }
        self.regenerate_boundary();
        reset
    }

    /// Manual rebuild: fresh particles, rotation back to zero.
    pub fn rebuild(&mut self) {
        self.system.reinitialize(&self.config);
        self.regenerate_boundary();
    }

    pub fn stop(&self) {
        self.stop.stop();
    }

    pub fn is_stopped(&self) -> bool {
        self.stop.is_stopped()
    }

    /// A handle that stops this instance from elsewhere.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Overwrite one particle's position and velocity.
    pub fn place_particle(
        &mut self,
        index: usize,
        pos: Vec2<F>,
        vel: Vec2<F>,
    ) -> Result<(), SimulationError> {
        let count = self.system.particle_count();
        let p = self
            .system
            .particles_mut()
            .get_mut(index)
            .ok_or(SimulationError::ParticleOutOfBounds { index, count })?;
        p.pos = pos;
        p.vel = vel;
        Ok(())
    }

    /// Total kinetic energy at unit mass.
    pub fn kinetic_energy(&self) -> F {
        self.system
            .particles()
            .iter()
            .fold(F::zero(), |sum, p| sum + p.kinetic_energy())
    }

    pub fn config(&self) -> &SimulationConfig<F> { &self.config }
    pub fn state(&self) -> &SimulationState<F> { self.system.state() }
    pub fn particles(&self) -> &[Particle<F>] { self.system.particles() }
    pub fn boundary(&self) -> &[Vec2<F>] { &self.boundary }
    pub fn rotation(&self) -> F { self.system.rotation() }
    pub fn boundary_radius(&self) -> F { self.boundary_radius }
    pub fn runaway_limit(&self) -> F { self.boundary_radius + self.runaway_margin }

    fn regenerate_boundary(&mut self) {
        self.boundary = shape::generate(
            self.config.shape,
            self.config.vertex_count,
            self.boundary_radius,
            Vec2::zero(),
            self.system.rotation(),
        );
    }
}
