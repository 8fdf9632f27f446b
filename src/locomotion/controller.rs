//! Locomotion domain: the per-tick controller composing sensing, timers,
//! jumping, climbing and gravity shaping.

use bevy::prelude::*;

use crate::locomotion::{
    ClimbChange, ClimbKind, Facing, GroundProbe, GroundSensor, GroundTransition, JumpOutcome,
    JumpProfile, JumpRejection, JumpResolver, JumpTier, LocomotionError, LocomotionPhase,
    LocomotionTuning, MotionState, PendingJump, TimerBank,
};

/// Vertical speeds within this band count as neither rising nor falling.
const VERTICAL_REST_EPSILON: f32 = 1e-4;

/// Horizontal speed above which the body counts as moving for animation.
const MOVING_SPEED: f32 = 0.1;

/// Undrained events beyond this count drop the oldest.
pub const MAX_PENDING_EVENTS: usize = 64;

/// The rigid body the controller drives. Only the controller writes to it.
pub trait LocomotionBody {
    fn position(&self) -> Vec2;
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    fn gravity_scale(&self) -> f32;
    fn set_gravity_scale(&mut self, scale: f32);
    fn mass(&self) -> f32;
}

/// Plain copy of a body's state, handy for engines that hand out components
/// separately and for driving the controller without an engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub gravity_scale: f32,
    pub mass: f32,
}

impl Default for BodyState {
    fn default() -> Self {
        Self {
            position: Vec2::ZERO,
            velocity: Vec2::ZERO,
            gravity_scale: 1.0,
            mass: 1.0,
        }
    }
}

impl LocomotionBody for BodyState {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity = velocity;
    }

    fn gravity_scale(&self) -> f32 {
        self.gravity_scale
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale = scale;
    }

    fn mass(&self) -> f32 {
        self.mass
    }
}

/// One-shot notifications drained by observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocomotionEvent {
    Jumped { tier: JumpTier, profile: JumpProfile },
    Landed,
    ClimbStarted(ClimbKind),
    ClimbStopped(ClimbKind),
}

/// Everything animation and audio may read. Computing it has no side effects.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocomotionSnapshot {
    pub grounded: bool,
    pub facing: Facing,
    pub horizontal_speed: f32,
    /// -1, 0 or 1.
    pub horizontal_sign: f32,
    pub vertical_velocity: f32,
    pub climbing: Option<ClimbKind>,
    pub dashing: bool,
    pub jumps_used: u8,
    pub is_walking: bool,
    pub is_running: bool,
    pub is_jumping: bool,
    pub is_climbing: bool,
    pub phase: LocomotionPhase,
}

#[derive(Component, Debug, Clone)]
pub struct LocomotionController {
    tuning: LocomotionTuning,
    sensor: GroundSensor,
    timers: TimerBank,
    resolver: JumpResolver,
    motion: MotionState,
    base_gravity_scale: f32,
    clock: f32,
    observed_velocity: Vec2,
    events: Vec<LocomotionEvent>,
    enabled: bool,
}

impl LocomotionController {
    /// Build a controller for a body whose current gravity scale becomes the base.
    pub fn new(tuning: LocomotionTuning, base_gravity_scale: f32) -> Result<Self, LocomotionError> {
        tuning.validate()?;

        if !(base_gravity_scale.is_finite() && base_gravity_scale >= 0.0) {
            return Err(LocomotionError::InvalidBaseGravity(base_gravity_scale));
        }

        let sensor = GroundSensor::new(tuning.ground_check_offset, tuning.ground_check_radius);
        let timers = TimerBank::new(tuning.coyote_time, tuning.jump_buffer_time);

        Ok(Self {
            tuning,
            sensor,
            timers,
            resolver: JumpResolver::new(),
            motion: MotionState::default(),
            base_gravity_scale,
            clock: 0.0,
            observed_velocity: Vec2::ZERO,
            events: Vec::new(),
            enabled: true,
        })
    }

    // -------------------------------------------------------------------------
    // Command surface
    // -------------------------------------------------------------------------

    /// A disabled controller ignores commands and leaves the body to physics.
    /// Disabling drops queued intent and lets go of any climb, so the next
    /// fixed step hands back the base gravity scale.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;

        if !enabled {
            self.motion.input = Vec2::ZERO;
            self.motion.pending_jump = None;
            self.motion.cut_armed = false;
            self.motion.jump_held = false;
            self.motion.long_jump_held = false;
            self.motion.dash = None;
            self.motion.double_jump_control = None;
            let change = self.motion.climb.set_input_held(false);
            self.apply_climb_change(change);
        }
        info!("Locomotion {}", if enabled { "enabled" } else { "disabled" });
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Out-of-range or non-finite components are absorbed, not rejected.
    pub fn set_move_intent(&mut self, x: f32, y: f32) {
        if !self.enabled {
            return;
        }
        self.motion.input = Vec2::new(sanitize_axis(x), sanitize_axis(y));
    }

    pub fn request_jump(&mut self, pressed: bool) {
        if !self.enabled {
            return;
        }
        if pressed {
            if !self.motion.jump_held {
                // A fresh press supersedes a release still waiting for the fixed step.
                self.motion.cut_armed = false;
                self.queue_jump(JumpProfile::Normal);
            }
        } else {
            self.motion.cut_armed = true;
        }
        self.motion.jump_held = pressed;
    }

    pub fn request_long_jump(&mut self, pressed: bool) {
        if !self.enabled {
            return;
        }
        if pressed && !self.motion.long_jump_held {
            self.queue_jump(JumpProfile::Long);
        }
        self.motion.long_jump_held = pressed;
    }

    pub fn set_climb_held(&mut self, pressed: bool) {
        if !self.enabled {
            return;
        }
        let change = self.motion.climb.set_input_held(pressed);
        self.apply_climb_change(change);
    }

    pub fn enter_zone(&mut self, kind: ClimbKind) {
        info!("Entered {:?} area", kind);
        let change = self.motion.climb.enter_zone(kind);
        self.apply_climb_change(change);
    }

    pub fn exit_zone(&mut self, kind: ClimbKind) {
        info!("Exited {:?} area", kind);
        let change = self.motion.climb.exit_zone(kind);
        self.apply_climb_change(change);
    }

    // -------------------------------------------------------------------------
    // Per-frame update
    // -------------------------------------------------------------------------

    /// Ground sensing and timers. Reads the body, never writes it.
    pub fn update_frame(&mut self, probe: &impl GroundProbe, body: &impl LocomotionBody, dt: f32) {
        if !self.enabled {
            return;
        }
        self.clock += dt;
        self.observed_velocity = body.velocity();

        let transition = self.sensor.sense(probe, body.position());
        self.motion.was_grounded = self.sensor.was_grounded_last_frame();
        self.motion.grounded = self.sensor.is_grounded();

        self.timers.tick(dt);
        if self.motion.grounded {
            self.timers.refresh_coyote();
        }

        match transition {
            GroundTransition::Landed => {
                // Landing never interrupts a dash; only the jump count resets.
                self.motion.jumps_used = 0;
                self.push_event(LocomotionEvent::Landed);
                debug!("Landed: dashing={}", self.motion.is_dashing());
            }
            GroundTransition::LeftGround => {
                debug!("Left ground: jumps_used={}", self.motion.jumps_used);
            }
            GroundTransition::Unchanged => {}
        }
    }

    // -------------------------------------------------------------------------
    // Fixed step
    // -------------------------------------------------------------------------

    /// Velocity and gravity mutation, in a fixed order: pending climb writes,
    /// dash, jump resolution, climbing, horizontal force, jump cut, gravity
    /// shaping, fall clamp.
    pub fn fixed_step(&mut self, body: &mut impl LocomotionBody, dt: f32) {
        if !self.enabled {
            self.restore_base_gravity(body);
            return;
        }
        let mut velocity = body.velocity();
        // A release only cuts the ascent it happens during.
        let cut_requested = std::mem::take(&mut self.motion.cut_armed);

        if std::mem::take(&mut self.motion.latch_pending) {
            velocity = Vec2::ZERO;
        }
        self.restore_base_gravity(body);

        if let Some(dash) = self.motion.dash.as_mut() {
            dash.remaining -= dt;
            if dash.remaining > 0.0 {
                let held = dash.velocity;
                self.write_velocity(body, held);
                return;
            }
            self.motion.dash = None;
        }

        velocity = self.resolve_pending_jump(velocity);
        // A jump off a climb must not carry zero gravity into a dash.
        self.restore_base_gravity(body);
        if self.motion.is_dashing() {
            self.write_velocity(body, velocity);
            return;
        }

        if let Some(remaining) = self.motion.double_jump_control.as_mut() {
            *remaining -= dt;
            if *remaining <= 0.0 {
                self.motion.double_jump_control = None;
            }
        }

        if let Some(kind) = self.motion.climb.active() {
            velocity = self.climb_velocity(kind);
            body.set_gravity_scale(0.0);
            self.write_velocity(body, velocity);
            return;
        }

        velocity.x = self.apply_horizontal(velocity.x, body.mass(), dt);
        if cut_requested {
            velocity.y = self.apply_jump_cut(velocity.y);
        }

        let gravity_scale = self.shape_gravity(velocity.y);
        body.set_gravity_scale(gravity_scale);

        if !self.motion.grounded && self.motion.is_double_jump_control_active() {
            velocity.x = self.apply_double_jump_steering(velocity.x, dt);
        }

        velocity.y = self.clamp_fall(velocity.y);
        self.write_velocity(body, velocity);
    }

    fn resolve_pending_jump(&mut self, velocity: Vec2) -> Vec2 {
        let Some(request) = self.motion.pending_jump else {
            return velocity;
        };

        if !self.timers.has_buffered_jump() {
            self.motion.pending_jump = None;
            return velocity;
        }

        let outcome = self.resolver.resolve(
            request,
            &self.tuning,
            &mut self.timers,
            &mut self.motion,
            velocity,
            self.clock,
        );

        match outcome {
            JumpOutcome::Launched {
                tier,
                profile,
                velocity: launched,
            } => {
                self.motion.pending_jump = None;
                let change = self.motion.climb.release();
                self.apply_climb_change(change);
                self.push_event(LocomotionEvent::Jumped { tier, profile });
                debug!(
                    "Jump: tier={:?}, profile={:?}, jumps_used={}",
                    tier, profile, self.motion.jumps_used
                );
                launched
            }
            JumpOutcome::Rejected(JumpRejection::DashCoolingDown) => {
                self.motion.pending_jump = None;
                debug!("Long jump rejected: dash cooling down");
                velocity
            }
            JumpOutcome::Rejected(JumpRejection::NoJumpsLeft) => {
                // Stays buffered; a landing inside the window turns it into a grounded jump.
                if let Some(pending) = self.motion.pending_jump.as_mut() {
                    pending.fresh = false;
                }
                velocity
            }
        }
    }

    fn climb_velocity(&self, kind: ClimbKind) -> Vec2 {
        let speed = match kind {
            ClimbKind::Ladder => self.tuning.ladder_climb_speed,
            ClimbKind::Rope => self.tuning.rope_climb_speed,
        };

        let vertical = self.motion.input.y;
        if vertical.abs() > self.tuning.deadzone {
            Vec2::new(0.0, vertical * speed)
        } else {
            Vec2::ZERO
        }
    }

    /// Force toward the target speed, integrated as `dv = F * dt / m`. The step
    /// never overshoots the target, so large frame times cannot oscillate.
    fn apply_horizontal(&mut self, vx: f32, mass: f32, dt: f32) -> f32 {
        let control = if self.motion.grounded {
            1.0
        } else {
            self.tuning.normal_jump.air_control_strength
        };
        let inverse_mass = if mass.is_finite() && mass > 0.0 { 1.0 / mass } else { 1.0 };
        let input = self.motion.input.x;

        let (target, rate) = if input.abs() < self.tuning.deadzone {
            (0.0, self.tuning.deceleration)
        } else {
            let speed = if input.abs() <= self.tuning.walk_threshold {
                self.tuning.walk_speed
            } else {
                self.tuning.run_speed
            };

            if input > 0.0 {
                self.motion.facing = Facing::Right;
            } else if input < 0.0 {
                self.motion.facing = Facing::Left;
            }

            (speed * input.signum(), self.tuning.acceleration)
        };

        let gain = (rate * control * inverse_mass * dt).clamp(0.0, 1.0);
        vx + (target - vx) * gain
    }

    fn apply_jump_cut(&mut self, vy: f32) -> f32 {
        if vy <= 0.0 || self.motion.cut_applied {
            return vy;
        }

        self.motion.cut_applied = true;
        vy * self.tuning.normal_jump.jump_cut_multiplier
    }

    /// Profile selection follows the long-jump button as currently held, not
    /// the kind of jump in flight.
    fn active_profile(&self) -> JumpProfile {
        if self.motion.long_jump_held {
            JumpProfile::Long
        } else {
            JumpProfile::Normal
        }
    }

    fn shape_gravity(&self, vy: f32) -> f32 {
        let config = self.tuning.ability(self.active_profile());

        if vy < -VERTICAL_REST_EPSILON {
            let fast_fall = self.motion.input.y < -self.tuning.fast_fall_threshold;
            let mult = if fast_fall {
                config.fast_fall_gravity_mult
            } else {
                config.falling_gravity_mult
            };
            self.base_gravity_scale * mult
        } else if vy > VERTICAL_REST_EPSILON {
            self.base_gravity_scale * config.rising_gravity_mult
        } else {
            self.base_gravity_scale
        }
    }

    fn apply_double_jump_steering(&self, vx: f32, dt: f32) -> f32 {
        let config = self.tuning.ability(self.active_profile());
        let steered =
            vx + self.motion.input.x * self.tuning.acceleration * config.air_control_strength * dt;
        steered.clamp(-config.max_horizontal_speed, config.max_horizontal_speed)
    }

    fn clamp_fall(&self, vy: f32) -> f32 {
        let max_fall = self.tuning.ability(self.active_profile()).max_fall_speed;
        vy.max(-max_fall)
    }

    /// Base scale after a climb ends. Outside a dash, gravity shaping
    /// overwrites it later in the same step.
    fn restore_base_gravity(&mut self, body: &mut impl LocomotionBody) {
        if std::mem::take(&mut self.motion.restore_gravity) {
            body.set_gravity_scale(self.base_gravity_scale);
        }
    }

    fn push_event(&mut self, event: LocomotionEvent) {
        if self.events.len() >= MAX_PENDING_EVENTS {
            self.events.remove(0);
        }
        self.events.push(event);
    }

    fn write_velocity(&mut self, body: &mut impl LocomotionBody, velocity: Vec2) {
        body.set_velocity(velocity);
        self.observed_velocity = velocity;
    }

    fn queue_jump(&mut self, profile: JumpProfile) {
        self.timers.refresh_jump_buffer();
        self.motion.pending_jump = Some(PendingJump {
            profile,
            fresh: true,
        });
    }

    fn apply_climb_change(&mut self, change: Option<ClimbChange>) {
        match change {
            Some(ClimbChange::Started(kind)) => {
                self.motion.jumps_used = 0;
                self.motion.latch_pending = true;
                self.motion.restore_gravity = false;
                self.push_event(LocomotionEvent::ClimbStarted(kind));
                info!("Started climbing {:?}", kind);
            }
            Some(ClimbChange::Stopped(kind)) => {
                self.motion.latch_pending = false;
                self.motion.restore_gravity = true;
                self.push_event(LocomotionEvent::ClimbStopped(kind));
                info!("Stopped climbing {:?}", kind);
            }
            None => {}
        }
    }

    // -------------------------------------------------------------------------
    // Observation surface
    // -------------------------------------------------------------------------

    pub fn snapshot(&self) -> LocomotionSnapshot {
        let velocity = self.observed_velocity;
        let climbing = self.motion.climb.active();
        let is_moving = velocity.x.abs() > MOVING_SPEED;
        let is_running = is_moving && self.motion.input.x.abs() > self.tuning.walk_threshold;

        LocomotionSnapshot {
            grounded: self.motion.grounded,
            facing: self.motion.facing,
            horizontal_speed: velocity.x.abs(),
            horizontal_sign: if velocity.x == 0.0 { 0.0 } else { velocity.x.signum() },
            vertical_velocity: velocity.y,
            climbing,
            dashing: self.motion.is_dashing(),
            jumps_used: self.motion.jumps_used,
            is_walking: is_moving && !is_running,
            is_running,
            is_jumping: !self.motion.grounded && climbing.is_none(),
            is_climbing: climbing.is_some(),
            phase: self.phase(),
        }
    }

    pub fn phase(&self) -> LocomotionPhase {
        if let Some(dash) = self.motion.dash {
            LocomotionPhase::Dashing {
                remaining: dash.remaining,
            }
        } else if let Some(remaining) = self.motion.double_jump_control {
            LocomotionPhase::DoubleJumpControl { remaining }
        } else if self.motion.grounded {
            LocomotionPhase::Grounded
        } else if self.timers.has_coyote() && self.motion.jumps_used == 0 {
            LocomotionPhase::CoyoteWindow
        } else {
            LocomotionPhase::Airborne {
                jumps_used: self.motion.jumps_used,
            }
        }
    }

    /// Hand over the one-shot events raised since the last drain.
    pub fn drain_events(&mut self) -> Vec<LocomotionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn is_grounded(&self) -> bool {
        self.motion.grounded
    }

    pub fn is_dashing(&self) -> bool {
        self.motion.is_dashing()
    }

    pub fn jumps_used(&self) -> u8 {
        self.motion.jumps_used
    }

    pub fn climbing(&self) -> Option<ClimbKind> {
        self.motion.climb.active()
    }

    pub fn facing(&self) -> Facing {
        self.motion.facing
    }

    pub fn motion(&self) -> &MotionState {
        &self.motion
    }

    pub fn timers(&self) -> &TimerBank {
        &self.timers
    }

    pub fn sensor(&self) -> &GroundSensor {
        &self.sensor
    }

    pub fn tuning(&self) -> &LocomotionTuning {
        &self.tuning
    }

    pub fn base_gravity_scale(&self) -> f32 {
        self.base_gravity_scale
    }

    /// Seconds of simulated time seen by the controller.
    pub fn clock(&self) -> f32 {
        self.clock
    }
}

fn sanitize_axis(value: f32) -> f32 {
    if value.is_finite() { value.clamp(-1.0, 1.0) } else { 0.0 }
}
