//! Locomotion domain: construction errors.

use crate::locomotion::TuningViolation;

/// Raised while building a controller; nothing on the per-tick path fails.
#[derive(Debug, Clone, PartialEq)]
pub enum LocomotionError {
    InvalidTuning(Vec<TuningViolation>),
    /// The body's gravity scale at construction cannot serve as the base scale.
    InvalidBaseGravity(f32),
    /// The entity has no ground-check reference to sense from.
    MissingGroundCheck,
}

impl std::fmt::Display for LocomotionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LocomotionError::InvalidTuning(violations) => {
                write!(f, "Invalid locomotion tuning ({} problems)", violations.len())?;
                for violation in violations {
                    write!(f, "\n  - {}", violation)?;
                }
                Ok(())
            }
            LocomotionError::InvalidBaseGravity(scale) => {
                write!(f, "Base gravity scale {} must be finite and >= 0", scale)
            }
            LocomotionError::MissingGroundCheck => {
                write!(f, "No ground check configured for the locomotion body")
            }
        }
    }
}

impl std::error::Error for LocomotionError {}
