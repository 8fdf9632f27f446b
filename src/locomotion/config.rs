//! Locomotion domain: tunable jump profiles and controller tuning.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::locomotion::LocomotionError;

/// Which jump profile a jump (or gravity decision) reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
pub enum JumpProfile {
    #[default]
    Normal,
    Long,
}

/// Jump feel shared by the normal and long-jump profiles.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AbilityConfig {
    pub jump_force: f32,
    pub double_jump_force: f32,
    pub max_fall_speed: f32,
    pub rising_gravity_mult: f32,
    pub falling_gravity_mult: f32,
    pub fast_fall_gravity_mult: f32,
    /// Scale applied to upward velocity when jump is released early, in [0, 1].
    pub jump_cut_multiplier: f32,
    pub max_horizontal_speed: f32,
    /// Horizontal authority while airborne, in [0, 1].
    pub air_control_strength: f32,
}

impl Default for AbilityConfig {
    fn default() -> Self {
        Self {
            jump_force: 12.0,
            double_jump_force: 10.0,
            max_fall_speed: 20.0,
            rising_gravity_mult: 1.0,
            falling_gravity_mult: 2.5,
            fast_fall_gravity_mult: 3.0,
            jump_cut_multiplier: 0.5,
            max_horizontal_speed: 8.0,
            air_control_strength: 0.2,
        }
    }
}

/// Fields only the long-jump profile carries.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LongJumpExtension {
    pub force_multiplier: f32,
    pub horizontal_boost_multiplier: f32,
    pub vertical_reducer: f32,
    pub dash_speed: f32,
    /// Combined launch speed of the dash.
    pub launch_speed: f32,
    /// Degrees above horizontal, in [0, 90].
    pub launch_angle: f32,
}

impl Default for LongJumpExtension {
    fn default() -> Self {
        Self {
            force_multiplier: 1.5,
            horizontal_boost_multiplier: 2.5,
            vertical_reducer: 0.5,
            dash_speed: 15.0,
            launch_speed: 20.0,
            launch_angle: 45.0,
        }
    }
}

impl LongJumpExtension {
    /// Launch velocity for a dash heading in `direction` (sign only).
    pub fn launch_velocity(&self, direction: f32) -> Vec2 {
        let angle = self.launch_angle.to_radians();
        Vec2::new(
            self.launch_speed * angle.cos() * direction.signum(),
            self.launch_speed * angle.sin(),
        )
    }
}

/// Push a violation when `$value` falls outside the named range.
macro_rules! check_range {
    ($violations:expr, $section:expr, $field:expr, $value:expr, positive) => {
        if !($value.is_finite() && $value > 0.0) {
            $violations.push(TuningViolation {
                section: $section,
                field: $field,
                value: $value,
                expected: "finite and > 0",
            });
        }
    };
    ($violations:expr, $section:expr, $field:expr, $value:expr, non_negative) => {
        if !($value.is_finite() && $value >= 0.0) {
            $violations.push(TuningViolation {
                section: $section,
                field: $field,
                value: $value,
                expected: "finite and >= 0",
            });
        }
    };
    ($violations:expr, $section:expr, $field:expr, $value:expr, unit) => {
        if !(0.0..=1.0).contains(&$value) {
            $violations.push(TuningViolation {
                section: $section,
                field: $field,
                value: $value,
                expected: "within [0, 1]",
            });
        }
    };
    ($violations:expr, $section:expr, $field:expr, $value:expr, between($min:expr, $max:expr)) => {
        if !($min..=$max).contains(&$value) {
            $violations.push(TuningViolation {
                section: $section,
                field: $field,
                value: $value,
                expected: concat!("within [", stringify!($min), ", ", stringify!($max), "]"),
            });
        }
    };
}

/// Every tunable value the locomotion controller reads.
///
/// Loaded once at startup and never mutated while the controller runs.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LocomotionTuning {
    pub walk_speed: f32,
    pub run_speed: f32,
    pub acceleration: f32,
    pub deceleration: f32,
    /// Horizontal input magnitude at or below which the walk speed is used.
    pub walk_threshold: f32,
    pub deadzone: f32,
    /// Downward input magnitude beyond which fast-fall gravity applies.
    pub fast_fall_threshold: f32,

    pub ground_check_offset: Vec2,
    pub ground_check_radius: f32,

    /// Total jumps between landings, the grounded jump included.
    pub max_jump_count: u8,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    pub double_jump_control_duration: f32,

    pub dash_duration: f32,
    pub dash_cooldown: f32,

    pub ladder_climb_speed: f32,
    pub rope_climb_speed: f32,

    pub normal_jump: AbilityConfig,
    pub long_jump: AbilityConfig,
    pub long_jump_extension: LongJumpExtension,
}

impl Default for LocomotionTuning {
    fn default() -> Self {
        Self {
            walk_speed: 5.0,
            run_speed: 8.0,
            acceleration: 50.0,
            deceleration: 50.0,
            walk_threshold: 0.25,
            deadzone: 0.1,
            fast_fall_threshold: 0.5,
            ground_check_offset: Vec2::new(0.0, -0.8),
            ground_check_radius: 0.2,
            max_jump_count: 2,
            coyote_time: 0.2,
            jump_buffer_time: 0.2,
            double_jump_control_duration: 0.2,
            dash_duration: 0.2,
            dash_cooldown: 1.0,
            ladder_climb_speed: 5.0,
            rope_climb_speed: 3.0,
            normal_jump: AbilityConfig::default(),
            long_jump: AbilityConfig::default(),
            long_jump_extension: LongJumpExtension::default(),
        }
    }
}

impl LocomotionTuning {
    pub fn ability(&self, profile: JumpProfile) -> &AbilityConfig {
        match profile {
            JumpProfile::Normal => &self.normal_jump,
            JumpProfile::Long => &self.long_jump,
        }
    }

    /// Check every numeric constraint, collecting all violations.
    pub fn validate(&self) -> Result<(), LocomotionError> {
        let mut violations = Vec::new();

        check_range!(violations, "", "walk_speed", self.walk_speed, positive);
        check_range!(violations, "", "run_speed", self.run_speed, positive);
        check_range!(violations, "", "acceleration", self.acceleration, positive);
        check_range!(violations, "", "deceleration", self.deceleration, positive);
        check_range!(violations, "", "walk_threshold", self.walk_threshold, unit);
        check_range!(violations, "", "deadzone", self.deadzone, unit);
        check_range!(violations, "", "fast_fall_threshold", self.fast_fall_threshold, unit);
        check_range!(violations, "", "ground_check_radius", self.ground_check_radius, positive);
        check_range!(violations, "", "coyote_time", self.coyote_time, non_negative);
        check_range!(violations, "", "jump_buffer_time", self.jump_buffer_time, non_negative);
        check_range!(
            violations,
            "",
            "double_jump_control_duration",
            self.double_jump_control_duration,
            non_negative
        );
        check_range!(violations, "", "dash_duration", self.dash_duration, non_negative);
        check_range!(violations, "", "dash_cooldown", self.dash_cooldown, non_negative);
        check_range!(violations, "", "ladder_climb_speed", self.ladder_climb_speed, positive);
        check_range!(violations, "", "rope_climb_speed", self.rope_climb_speed, positive);

        if !self.ground_check_offset.is_finite() {
            violations.push(TuningViolation {
                section: "",
                field: "ground_check_offset",
                value: f32::NAN,
                expected: "a finite offset",
            });
        }

        if self.max_jump_count == 0 {
            violations.push(TuningViolation {
                section: "",
                field: "max_jump_count",
                value: 0.0,
                expected: "at least 1",
            });
        }

        self.normal_jump.check(&mut violations, "normal_jump");
        self.long_jump.check(&mut violations, "long_jump");

        let ext = &self.long_jump_extension;
        let section = "long_jump_extension";
        check_range!(violations, section, "force_multiplier", ext.force_multiplier, positive);
        check_range!(
            violations,
            section,
            "horizontal_boost_multiplier",
            ext.horizontal_boost_multiplier,
            between(1.0, 5.0)
        );
        check_range!(violations, section, "vertical_reducer", ext.vertical_reducer, unit);
        check_range!(violations, section, "dash_speed", ext.dash_speed, positive);
        check_range!(violations, section, "launch_speed", ext.launch_speed, positive);
        check_range!(violations, section, "launch_angle", ext.launch_angle, between(0.0, 90.0));

        if violations.is_empty() {
            Ok(())
        } else {
            Err(LocomotionError::InvalidTuning(violations))
        }
    }
}

impl AbilityConfig {
    fn check(&self, violations: &mut Vec<TuningViolation>, section: &'static str) {
        check_range!(violations, section, "jump_force", self.jump_force, positive);
        check_range!(violations, section, "double_jump_force", self.double_jump_force, positive);
        check_range!(violations, section, "max_fall_speed", self.max_fall_speed, positive);
        check_range!(violations, section, "rising_gravity_mult", self.rising_gravity_mult, positive);
        check_range!(violations, section, "falling_gravity_mult", self.falling_gravity_mult, positive);
        check_range!(
            violations,
            section,
            "fast_fall_gravity_mult",
            self.fast_fall_gravity_mult,
            positive
        );
        check_range!(violations, section, "jump_cut_multiplier", self.jump_cut_multiplier, unit);
        check_range!(violations, section, "max_horizontal_speed", self.max_horizontal_speed, positive);
        check_range!(violations, section, "air_control_strength", self.air_control_strength, unit);
    }
}

/// A single tuning value outside its allowed range.
#[derive(Debug, Clone, PartialEq)]
pub struct TuningViolation {
    /// Nested profile the field belongs to, empty for top-level fields.
    pub section: &'static str,
    pub field: &'static str,
    pub value: f32,
    pub expected: &'static str,
}

impl std::fmt::Display for TuningViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.section.is_empty() {
            write!(f, "'{}' is {} but must be {}", self.field, self.value, self.expected)
        } else {
            write!(
                f,
                "'{}.{}' is {} but must be {}",
                self.section, self.field, self.value, self.expected
            )
        }
    }
}
