//! Locomotion domain: live motion state owned by the controller.

use bevy::prelude::*;

use crate::locomotion::{ClimbState, JumpProfile};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

/// A jump press waiting for the next fixed step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingJump {
    pub profile: JumpProfile,
    /// Cleared after the first consult; later retries only try the grounded tier.
    pub fresh: bool,
}

/// An in-flight dash; the launch velocity is held until the timer runs out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashState {
    pub remaining: f32,
    pub velocity: Vec2,
}

/// Mutable per-controller state. Commands write intent here, the fixed step
/// turns it into body writes.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MotionState {
    pub grounded: bool,
    pub was_grounded: bool,
    pub facing: Facing,
    /// Components clamped to [-1, 1].
    pub input: Vec2,

    pub jumps_used: u8,
    pub jump_held: bool,
    pub long_jump_held: bool,
    pub pending_jump: Option<PendingJump>,
    pub cut_armed: bool,
    pub cut_applied: bool,

    pub dash: Option<DashState>,
    pub double_jump_control: Option<f32>,

    pub climb: ClimbState,
    /// Zero velocity on the next fixed step (a climb just latched).
    pub latch_pending: bool,
    /// Restore the base gravity scale on the next fixed step (a climb just ended).
    /// Gravity shaping overwrites it in the same step unless a dash short-circuits.
    pub restore_gravity: bool,
}

impl MotionState {
    pub fn is_dashing(&self) -> bool {
        self.dash.is_some()
    }

    pub fn is_double_jump_control_active(&self) -> bool {
        self.double_jump_control.is_some()
    }

    /// Horizontal sign for a launch: input when past the deadzone, facing otherwise.
    pub fn launch_direction(&self, deadzone: f32) -> f32 {
        if self.input.x.abs() > deadzone {
            self.input.x.signum()
        } else {
            self.facing.sign()
        }
    }
}

/// Read-only view of the jump state machine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocomotionPhase {
    Grounded,
    CoyoteWindow,
    Airborne { jumps_used: u8 },
    DoubleJumpControl { remaining: f32 },
    Dashing { remaining: f32 },
}
