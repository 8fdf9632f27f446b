//! Movement domain: player bootstrap and data-driven locomotion setup.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{LocomotionController, LocomotionError, LocomotionTuning};
use crate::movement::{GameLayer, GroundCheck, Player};

/// Player collider size in meters.
pub const PLAYER_SIZE: Vec2 = Vec2::new(0.75, 1.5);

/// Base gravity scale of the player; jump gravity multipliers scale from here.
pub const PLAYER_GRAVITY_SCALE: f32 = 2.0;

/// Spawn the player body once tuning is available.
pub(crate) fn spawn_player(
    mut commands: Commands,
    tuning: Option<Res<LocomotionTuning>>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let ground_check = match &tuning {
        Some(tuning) => GroundCheck::from_tuning(tuning),
        None => {
            warn!("LocomotionTuning not available, using default ground check");
            GroundCheck::from_tuning(&LocomotionTuning::default())
        }
    };

    info!(
        "Spawning player: ground_check_offset={}, radius={}",
        ground_check.offset, ground_check.radius
    );

    commands.spawn((
        Player,
        ground_check,
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(0.0, 2.0, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(PLAYER_GRAVITY_SCALE),
            Friction::new(0.0),
            Restitution::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Climbable]),
        ),
    ));
}

/// Give each newly spawned player a controller built from the loaded tuning.
/// The body's gravity scale at this point becomes the controller's base scale.
pub(crate) fn attach_locomotion(
    mut commands: Commands,
    tuning: Res<LocomotionTuning>,
    query: Query<
        (Entity, Option<&GroundCheck>, &GravityScale),
        (Added<Player>, Without<LocomotionController>),
    >,
) {
    for (entity, ground_check, gravity) in &query {
        match build_controller(&tuning, ground_check, gravity.0) {
            Ok(controller) => {
                info!("Attached locomotion controller to {:?}", entity);
                commands.entity(entity).insert(controller);
            }
            Err(e) => {
                error!("Cannot attach locomotion to {:?}: {}", entity, e);
            }
        }
    }
}

/// The entity's ground check overrides the tuning's offset and radius.
pub fn build_controller(
    tuning: &LocomotionTuning,
    ground_check: Option<&GroundCheck>,
    base_gravity_scale: f32,
) -> Result<LocomotionController, LocomotionError> {
    let Some(ground_check) = ground_check else {
        return Err(LocomotionError::MissingGroundCheck);
    };

    let mut tuning = tuning.clone();
    tuning.ground_check_offset = ground_check.offset;
    tuning.ground_check_radius = ground_check.radius;

    LocomotionController::new(tuning, base_gravity_scale)
}
