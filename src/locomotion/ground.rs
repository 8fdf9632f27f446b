//! Locomotion domain: ground/air classification from a world overlap query.

use bevy::prelude::*;

/// World query the sensor asks whether ground lies within a small circle.
pub trait GroundProbe {
    fn overlaps_ground(&self, center: Vec2, radius: f32) -> bool;
}

impl<F> GroundProbe for F
where
    F: Fn(Vec2, f32) -> bool,
{
    fn overlaps_ground(&self, center: Vec2, radius: f32) -> bool {
        self(center, radius)
    }
}

/// Change in ground contact between two consecutive frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroundTransition {
    Unchanged,
    Landed,
    LeftGround,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GroundSensor {
    offset: Vec2,
    radius: f32,
    grounded: bool,
    was_grounded: bool,
}

impl GroundSensor {
    /// `offset` is measured from the body position to the check circle's center.
    pub fn new(offset: Vec2, radius: f32) -> Self {
        Self {
            offset,
            radius,
            grounded: false,
            was_grounded: false,
        }
    }

    /// Query the probe for this frame and report how contact changed.
    pub fn sense(&mut self, probe: &impl GroundProbe, position: Vec2) -> GroundTransition {
        self.was_grounded = self.grounded;
        self.grounded = probe.overlaps_ground(self.check_center(position), self.radius);

        match (self.was_grounded, self.grounded) {
            (false, true) => GroundTransition::Landed,
            (true, false) => GroundTransition::LeftGround,
            _ => GroundTransition::Unchanged,
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn was_grounded_last_frame(&self) -> bool {
        self.was_grounded
    }

    pub fn check_center(&self, position: Vec2) -> Vec2 {
        position + self.offset
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }
}
