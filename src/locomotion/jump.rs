//! Locomotion domain: jump resolution between grounded, double and long jumps.

use bevy::prelude::*;

use crate::locomotion::{
    DashState, JumpProfile, LocomotionTuning, MotionState, PendingJump, TimerBank,
};

/// Which allowance a successful jump was drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpTier {
    /// Grounded or within coyote time.
    Grounded,
    /// Any airborne jump after the grounded one.
    Double,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpRejection {
    NoJumpsLeft,
    DashCoolingDown,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpOutcome {
    Launched {
        tier: JumpTier,
        profile: JumpProfile,
        velocity: Vec2,
    },
    Rejected(JumpRejection),
}

/// Decides what a jump request turns into. Owns the dash cooldown clock.
#[derive(Debug, Clone, PartialEq)]
pub struct JumpResolver {
    last_dash_at: Option<f32>,
}

impl Default for JumpResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl JumpResolver {
    pub fn new() -> Self {
        Self { last_dash_at: None }
    }

    pub fn dash_ready(&self, now: f32, cooldown: f32) -> bool {
        match self.last_dash_at {
            Some(last) => now >= last + cooldown,
            None => true,
        }
    }

    pub fn last_dash_at(&self) -> Option<f32> {
        self.last_dash_at
    }

    /// Resolve a pending request against the current timers and motion.
    ///
    /// On success this writes jump count, timers, dash and double-jump windows
    /// into `motion`/`timers` and returns the velocity the controller must apply.
    /// A rejection leaves everything untouched.
    pub fn resolve(
        &mut self,
        request: PendingJump,
        tuning: &LocomotionTuning,
        timers: &mut TimerBank,
        motion: &mut MotionState,
        velocity: Vec2,
        now: f32,
    ) -> JumpOutcome {
        let tier = if timers.allows_ground_jump(motion.grounded) {
            JumpTier::Grounded
        } else if request.fresh && motion.jumps_used < tuning.max_jump_count {
            JumpTier::Double
        } else {
            return JumpOutcome::Rejected(JumpRejection::NoJumpsLeft);
        };

        if request.profile == JumpProfile::Long && !self.dash_ready(now, tuning.dash_cooldown) {
            return JumpOutcome::Rejected(JumpRejection::DashCoolingDown);
        }

        let config = tuning.ability(request.profile);
        let launched = match request.profile {
            JumpProfile::Normal => {
                let force = match tier {
                    JumpTier::Grounded => config.jump_force,
                    JumpTier::Double => config.double_jump_force,
                };
                Vec2::new(velocity.x, force)
            }
            JumpProfile::Long => {
                let direction = motion.launch_direction(tuning.deadzone);
                let launch = tuning.long_jump_extension.launch_velocity(direction);
                // Vertical launch adds to the current vertical velocity.
                let dash_velocity = Vec2::new(launch.x, velocity.y + launch.y);

                self.last_dash_at = Some(now);
                motion.dash = Some(DashState {
                    remaining: tuning.dash_duration,
                    velocity: dash_velocity,
                });
                dash_velocity
            }
        };

        match tier {
            JumpTier::Grounded => motion.jumps_used = 1,
            JumpTier::Double => {
                motion.jumps_used += 1;
                if request.profile == JumpProfile::Normal {
                    motion.double_jump_control = Some(tuning.double_jump_control_duration);
                }
            }
        }

        timers.consume_coyote();
        timers.consume_jump_buffer();
        motion.cut_applied = false;

        JumpOutcome::Launched {
            tier,
            profile: request.profile,
            velocity: launched,
        }
    }
}
