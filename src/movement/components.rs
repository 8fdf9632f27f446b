//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{ClimbKind, LocomotionTuning};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Player character
    Player,
    /// Ladder and rope sensors - should not block movement
    Climbable,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Sensor volume the player can climb while inside it.
#[derive(Component, Debug, Clone, Copy, Reflect)]
pub struct ClimbZone {
    pub kind: ClimbKind,
}

/// Where the ground check circle sits relative to the body.
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
pub struct GroundCheck {
    pub offset: Vec2,
    pub radius: f32,
}

impl GroundCheck {
    pub fn from_tuning(tuning: &LocomotionTuning) -> Self {
        Self {
            offset: tuning.ground_check_offset,
            radius: tuning.ground_check_radius,
        }
    }
}
