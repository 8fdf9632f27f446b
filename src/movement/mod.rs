//! Movement domain: Bevy and Avian glue driving the locomotion controller.
//!
//! Per frame: input is sampled and dispatched as commands, climb zones and
//! ground contact are fed in, and events are published as messages. Per
//! physics step: the controller writes velocity and gravity scale.

mod bootstrap;
mod components;
#[cfg(feature = "dev-tools")]
mod dev;
mod events;
mod resources;
mod systems;


use bevy::prelude::*;

use crate::locomotion::{ClimbKind, LocomotionTuning};

pub use bootstrap::{PLAYER_GRAVITY_SCALE, PLAYER_SIZE, build_controller};
pub use components::{ClimbZone, GameLayer, Ground, GroundCheck, Player};
pub use events::{ClimbChangedEvent, JumpedEvent, LandedEvent};
pub use resources::{CLIMB_KEYS, JUMP_KEYS, LONG_JUMP_KEYS, MovementInput};
pub use systems::AvianBody;

use bootstrap::{attach_locomotion, spawn_player};
use systems::{
    apply_locomotion, dispatch_input, publish_events, read_input, sense_ground, track_climb_zones,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .register_type::<ClimbKind>()
            .register_type::<ClimbZone>()
            .register_type::<GroundCheck>()
            .add_message::<JumpedEvent>()
            .add_message::<LandedEvent>()
            .add_message::<ClimbChangedEvent>()
            .add_systems(Startup, spawn_player)
            .add_systems(
                Update,
                (
                    attach_locomotion.run_if(resource_exists::<LocomotionTuning>),
                    read_input,
                    dispatch_input,
                    track_climb_zones,
                    sense_ground,
                    publish_events,
                )
                    .chain(),
            )
            .add_systems(FixedUpdate, apply_locomotion);

        #[cfg(feature = "dev-tools")]
        app.add_systems(Startup, dev::spawn_sandbox)
            .add_systems(Update, dev::draw_locomotion_gizmos.after(sense_ground));
    }
}
