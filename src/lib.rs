//! Bouncing particles inside rotating polygonal and concave boundaries.
//!
//! `tumbler` is the physics core of a particle toy: circles fall, bounce and
//! collide inside a boundary that spins in place. It produces geometry only;
//! drawing, scheduling and configuration authoring belong to the host.
//!
//! # Features
//!
//! - **Boundary shapes**: regular polygons, stars, and hand-authored concave
//!   silhouettes (house, skull, candy cane, tree, ghost, pumpkin, heart)
//! - **Concave-safe collisions**: segment-distance boundary test, equal-mass
//!   elastic particle collisions
//! - **Always finite**: non-finite or escaped particles are reset to the origin
//! - **Deterministic**: seeded particle spawning, no hidden randomness
//! - **Observable**: Monitor steps via the `StepObserver` trait
//! - **`no_std` compatible**: Works in embedded and WASM environments
//!
//! # Example
//! ```
//! use tumbler::{GlobalSettings, ShapeKind, Simulation, SimulationConfig};
//!
//! let config = SimulationConfig::<f32>::new()
//!     .with_shape(ShapeKind::Pumpkin, 0)
//!     .with_particles(12, 6.0, 2.0);
//! let mut sim = Simulation::new(config, 42);
//! let globals = GlobalSettings::new();
//!
//! for _ in 0..60 {
//!     if let Some(frame) = sim.tick(&globals) {
//!         assert_eq!(frame.particles.len(), 12);
//!     }
//! }
//! ```

#![no_std]

extern crate alloc;

pub mod float;
pub mod vec;
pub mod silhouette;
pub mod shape;
pub mod particle;
pub mod config;
pub mod system;
pub mod integrator;
pub mod collision;
pub mod observer;
pub mod simulation;
pub mod presets;
pub mod error;

// Re-export primary API
pub use float::Float;
pub use vec::Vec2;
pub use shape::{generate, ShapeKind};
pub use particle::{ColorTag, Particle};
pub use config::{GlobalSettings, SimulationConfig};
pub use system::{ParticleSystem, SimulationState};
pub use collision::{closest_point_on_segment, SegmentContact};
pub use observer::{NoOpStepObserver, StepObserver};
pub use simulation::{Simulation, Snapshot, StopHandle};
pub use error::SimulationError;
