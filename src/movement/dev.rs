//! Movement domain: sandbox room and debug gizmos (dev-tools only).

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{ClimbKind, LocomotionController};
use crate::movement::{ClimbZone, GameLayer, Ground, Player};

/// Length of the climb indicator line drawn through the player.
const CLIMB_INDICATOR_LENGTH: f32 = 1.0;

pub(crate) fn spawn_sandbox(mut commands: Commands) {
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let ladder_color = Color::srgba(0.6, 0.45, 0.25, 0.6);
    let rope_color = Color::srgba(0.8, 0.75, 0.5, 0.6);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let climb_layers = CollisionLayers::new(GameLayer::Climbable, [GameLayer::Player]);

    let mut spawn_ground = |size: Vec2, position: Vec2, color: Color| {
        commands.spawn((
            Ground,
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(position.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Friction::new(0.0),
            ground_layers,
        ));
    };

    // Floor
    spawn_ground(Vec2::new(40.0, 1.0), Vec2::new(0.0, -6.0), ground_color);

    // Platform 1 - left side
    spawn_ground(Vec2::new(5.0, 0.5), Vec2::new(-8.0, -2.5), platform_color);

    // Platform 2 - right side, higher
    spawn_ground(Vec2::new(5.0, 0.5), Vec2::new(8.0, 0.5), platform_color);

    // Platform 3 - center, highest
    spawn_ground(Vec2::new(4.0, 0.5), Vec2::new(0.0, 4.0), platform_color);

    let mut spawn_climb_zone = |kind: ClimbKind, size: Vec2, position: Vec2, color: Color| {
        commands.spawn((
            ClimbZone { kind },
            Sprite {
                color,
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(position.extend(-0.5)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Sensor,
            CollisionEventsEnabled,
            climb_layers,
        ));
    };

    // Ladder from the floor up to platform 1
    spawn_climb_zone(
        ClimbKind::Ladder,
        Vec2::new(1.0, 4.0),
        Vec2::new(-11.5, -3.5),
        ladder_color,
    );

    // Rope hanging from platform 3
    spawn_climb_zone(
        ClimbKind::Rope,
        Vec2::new(0.4, 6.0),
        Vec2::new(2.5, 1.0),
        rope_color,
    );
}

/// Ground check circle (green grounded, red airborne) and a climb indicator:
/// blue upward on a ladder, yellow downward on a rope.
pub(crate) fn draw_locomotion_gizmos(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &LocomotionController), With<Player>>,
) {
    for (transform, controller) in &query {
        let position = transform.translation.truncate();
        let sensor = controller.sensor();

        let color = if controller.is_grounded() {
            Color::srgb(0.0, 1.0, 0.0)
        } else {
            Color::srgb(1.0, 0.0, 0.0)
        };
        gizmos.circle_2d(sensor.check_center(position), sensor.radius(), color);

        match controller.climbing() {
            Some(ClimbKind::Ladder) => {
                gizmos.line_2d(
                    position,
                    position + Vec2::Y * CLIMB_INDICATOR_LENGTH,
                    Color::srgb(0.0, 0.0, 1.0),
                );
            }
            Some(ClimbKind::Rope) => {
                gizmos.line_2d(
                    position,
                    position - Vec2::Y * CLIMB_INDICATOR_LENGTH,
                    Color::srgb(1.0, 1.0, 0.0),
                );
            }
            None => {}
        }
    }
}
