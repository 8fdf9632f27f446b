//! Locomotion domain: engine-agnostic player locomotion core.
//!
//! Commands (`set_move_intent`, `request_jump`, ...) record intent. Once per
//! frame `update_frame` senses ground and ticks timers; once per physics step
//! `fixed_step` resolves jumps, climbing, horizontal force and gravity shaping
//! and writes the result to the body.

mod climb;
mod config;
mod controller;
mod error;
mod ground;
mod jump;
mod state;
mod timers;


pub use climb::{ClimbChange, ClimbKind, ClimbState};
pub use config::{AbilityConfig, JumpProfile, LocomotionTuning, LongJumpExtension, TuningViolation};
pub use controller::{
    BodyState, LocomotionBody, LocomotionController, LocomotionEvent, LocomotionSnapshot,
    MAX_PENDING_EVENTS,
};
pub use error::LocomotionError;
pub use ground::{GroundProbe, GroundSensor, GroundTransition};
pub use jump::{JumpOutcome, JumpRejection, JumpResolver, JumpTier};
pub use state::{DashState, Facing, LocomotionPhase, MotionState, PendingJump};
pub use timers::TimerBank;
