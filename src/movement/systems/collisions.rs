//! Movement domain: ground sensing and climb zone tracking.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{BodyState, LocomotionController};
use crate::movement::{ClimbZone, GameLayer, Player};

/// Frame update: ground overlap, coyote and buffer timers.
pub(crate) fn sense_ground(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    mut query: Query<
        (
            &Transform,
            &LinearVelocity,
            &GravityScale,
            Option<&ComputedMass>,
            &mut LocomotionController,
        ),
        With<Player>,
    >,
) {
    // Filter to only hit Ground layer entities (not ladders, ropes, etc.)
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let probe = |center: Vec2, radius: f32| {
        !spatial_query
            .shape_intersections(&Collider::circle(radius), center, 0.0, &ground_filter)
            .is_empty()
    };

    let dt = time.delta_secs();
    for (transform, velocity, gravity, mass, mut controller) in &mut query {
        let body = BodyState {
            position: transform.translation.truncate(),
            velocity: velocity.0,
            gravity_scale: gravity.0,
            mass: mass.map_or(1.0, |m| m.value()),
        };
        controller.update_frame(&probe, &body, dt);
    }
}

/// Feed ladder and rope overlap into the controller.
pub(crate) fn track_climb_zones(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    zone_query: Query<&ClimbZone>,
    mut player_query: Query<&mut LocomotionController, With<Player>>,
) {
    for event in collision_start_events.read() {
        let Some((zone, other)) = zone_pair(&zone_query, event.collider1, event.collider2) else {
            continue;
        };
        if let Ok(mut controller) = player_query.get_mut(other) {
            controller.enter_zone(zone.kind);
        }
    }

    for event in collision_end_events.read() {
        let Some((zone, other)) = zone_pair(&zone_query, event.collider1, event.collider2) else {
            continue;
        };
        if let Ok(mut controller) = player_query.get_mut(other) {
            controller.exit_zone(zone.kind);
        }
    }
}

/// Split a contact pair into the climb zone and the other collider.
fn zone_pair(
    zone_query: &Query<&ClimbZone>,
    collider1: Entity,
    collider2: Entity,
) -> Option<(ClimbZone, Entity)> {
    if let Ok(zone) = zone_query.get(collider1) {
        Some((*zone, collider2))
    } else if let Ok(zone) = zone_query.get(collider2) {
        Some((*zone, collider1))
    } else {
        None
    }
}
