//! Movement domain: input sampling and command dispatch for locomotion.

use bevy::prelude::*;

use crate::locomotion::LocomotionController;
use crate::movement::{MovementInput, Player};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<MovementInput>) {
    *input = MovementInput::sample(&keyboard);
}

/// Turn this frame's input into controller commands. Press edges go before
/// release edges so a tap inside one frame still jumps (and cuts).
pub(crate) fn dispatch_input(
    input: Res<MovementInput>,
    mut query: Query<&mut LocomotionController, With<Player>>,
) {
    for mut controller in &mut query {
        controller.set_move_intent(input.axis.x, input.axis.y);

        if input.jump_just_pressed {
            controller.request_jump(true);
        }
        if input.jump_just_released {
            controller.request_jump(false);
        }

        if input.long_jump_just_pressed {
            controller.request_long_jump(true);
        }
        if input.long_jump_just_released {
            controller.request_long_jump(false);
        }

        if input.climb_just_pressed {
            controller.set_climb_held(true);
        }
        if input.climb_just_released {
            controller.set_climb_held(false);
        }
    }
}
