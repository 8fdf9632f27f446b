//! Movement domain: one-shot locomotion messages for animation and audio.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::locomotion::{ClimbKind, JumpProfile, JumpTier};

/// Fired on the fixed step a jump launches
#[derive(Debug, Clone, Copy)]
pub struct JumpedEvent {
    pub entity: Entity,
    pub tier: JumpTier,
    pub profile: JumpProfile,
}

impl Message for JumpedEvent {}

/// Fired on the frame ground contact begins
#[derive(Debug, Clone, Copy)]
pub struct LandedEvent {
    pub entity: Entity,
}

impl Message for LandedEvent {}

/// Fired when active climbing starts or stops
#[derive(Debug, Clone, Copy)]
pub struct ClimbChangedEvent {
    pub entity: Entity,
    pub kind: ClimbKind,
    pub climbing: bool,
}

impl Message for ClimbChangedEvent {}
