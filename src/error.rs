//! Error types for the fallible edges of the simulation API.
//!
//! The physics itself never fails; these cover lookups and strict parsing.

use alloc::string::String;
use core::fmt;

/// Errors returned by lookups and strict parsing.
#[derive(Debug, Clone, PartialEq)]
pub enum SimulationError {
    /// Shape tag is not part of the known vocabulary.
    UnknownShape { tag: String },
    /// Particle index is out of bounds.
    ParticleOutOfBounds { index: usize, count: usize },
    /// No preset is registered under this name.
    UnknownPreset { name: String },
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::UnknownShape { tag } => write!(f, "unknown shape tag `{}`", tag),
            SimulationError::ParticleOutOfBounds { index, count } => {
                write!(f, "particle index {} out of bounds (count: {})", index, count)
            }
            SimulationError::UnknownPreset { name } => write!(f, "no preset named `{}`", name),
        }
    }
}

impl core::error::Error for SimulationError {}
