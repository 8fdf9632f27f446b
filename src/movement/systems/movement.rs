//! Movement domain: the fixed-step write to the rigid body and message fan-out.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{LocomotionBody, LocomotionController, LocomotionEvent};
use crate::movement::{ClimbChangedEvent, JumpedEvent, LandedEvent, Player};

/// Avian components of one entity seen as a `LocomotionBody`.
pub struct AvianBody<'a> {
    position: Vec2,
    velocity: &'a mut LinearVelocity,
    gravity: &'a mut GravityScale,
    mass: f32,
}

impl<'a> AvianBody<'a> {
    pub fn new(
        transform: &Transform,
        velocity: &'a mut LinearVelocity,
        gravity: &'a mut GravityScale,
        mass: Option<&ComputedMass>,
    ) -> Self {
        Self {
            position: transform.translation.truncate(),
            velocity,
            gravity,
            mass: mass.map_or(1.0, |m| m.value()),
        }
    }
}

impl LocomotionBody for AvianBody<'_> {
    fn position(&self) -> Vec2 {
        self.position
    }

    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn gravity_scale(&self) -> f32 {
        self.gravity.0
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity.0 = scale;
    }

    fn mass(&self) -> f32 {
        self.mass
    }
}

pub(crate) fn apply_locomotion(
    time: Res<Time>,
    mut query: Query<
        (
            &Transform,
            &mut LinearVelocity,
            &mut GravityScale,
            Option<&ComputedMass>,
            &mut LocomotionController,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    for (transform, mut velocity, mut gravity, mass, mut controller) in &mut query {
        let mut body = AvianBody::new(transform, &mut velocity, &mut gravity, mass);
        controller.fixed_step(&mut body, dt);
    }
}

/// Drain controller events into messages.
pub(crate) fn publish_events(
    mut query: Query<(Entity, &mut LocomotionController), With<Player>>,
    mut jumped: MessageWriter<JumpedEvent>,
    mut landed: MessageWriter<LandedEvent>,
    mut climb_changed: MessageWriter<ClimbChangedEvent>,
) {
    for (entity, mut controller) in &mut query {
        for event in controller.drain_events() {
            match event {
                LocomotionEvent::Jumped { tier, profile } => {
                    jumped.write(JumpedEvent {
                        entity,
                        tier,
                        profile,
                    });
                }
                LocomotionEvent::Landed => {
                    landed.write(LandedEvent { entity });
                }
                LocomotionEvent::ClimbStarted(kind) => {
                    climb_changed.write(ClimbChangedEvent {
                        entity,
                        kind,
                        climbing: true,
                    });
                }
                LocomotionEvent::ClimbStopped(kind) => {
                    climb_changed.write(ClimbChangedEvent {
                        entity,
                        kind,
                        climbing: false,
                    });
                }
            }
        }
    }
}
