//! Step observer trait for monitoring simulation progress.

/// Trait for observing simulation steps.
///
/// Implement this trait to monitor a step as it runs (debug overlays,
/// profiling, tests). All methods have default no-op implementations.
pub trait StepObserver {
    /// Called after rotation and particle kinematics have advanced.
    fn on_integrate(&mut self) {}

    /// Called after the boundary phase with the number of edge contacts.
    fn on_boundary_phase(&mut self, _contacts: usize) {}

    /// Called after the particle-particle phase with the number of
    /// overlapping pairs.
    fn on_particle_phase(&mut self, _overlaps: usize) {}

    /// Called when one or more particles were reset to the origin, either for
    /// non-finite state or for escaping the boundary.
    fn on_recovered(&mut self, _count: usize) {}

    /// Called when a simulation step is fully complete.
    fn on_step_complete(&mut self) {}
}

/// A no-op observer that does nothing. Use as default when no observation needed.
pub struct NoOpStepObserver;

impl StepObserver for NoOpStepObserver {}
