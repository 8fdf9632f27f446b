//! Movement domain: input resources.

use bevy::prelude::*;

pub const JUMP_KEYS: [KeyCode; 2] = [KeyCode::Space, KeyCode::KeyK];
pub const LONG_JUMP_KEYS: [KeyCode; 3] = [KeyCode::ShiftLeft, KeyCode::ShiftRight, KeyCode::KeyJ];
pub const CLIMB_KEYS: [KeyCode; 2] = [KeyCode::KeyE, KeyCode::KeyL];

/// Keyboard state for one frame, reduced to axes and button edges.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct MovementInput {
    pub axis: Vec2,
    pub jump_just_pressed: bool,
    pub jump_just_released: bool,
    pub long_jump_just_pressed: bool,
    pub long_jump_just_released: bool,
    pub climb_just_pressed: bool,
    pub climb_just_released: bool,
}

impl MovementInput {
    pub fn sample(keyboard: &ButtonInput<KeyCode>) -> Self {
        // Horizontal axis
        let mut x = 0.0;
        if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
            x -= 1.0;
        }
        if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
            x += 1.0;
        }

        // Vertical axis (climbing, fast fall)
        let mut y = 0.0;
        if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
            y -= 1.0;
        }
        if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
            y += 1.0;
        }

        let (jump_just_pressed, jump_just_released) = button_edges(keyboard, &JUMP_KEYS);
        let (long_jump_just_pressed, long_jump_just_released) =
            button_edges(keyboard, &LONG_JUMP_KEYS);
        let (climb_just_pressed, climb_just_released) = button_edges(keyboard, &CLIMB_KEYS);

        Self {
            axis: Vec2::new(x, y),
            jump_just_pressed,
            jump_just_released,
            long_jump_just_pressed,
            long_jump_just_released,
            climb_just_pressed,
            climb_just_released,
        }
    }
}

/// A button bound to several keys is released only once none of them is held.
fn button_edges(keyboard: &ButtonInput<KeyCode>, keys: &[KeyCode]) -> (bool, bool) {
    let pressed = keyboard.any_just_pressed(keys.iter().copied());
    let released = keyboard.any_just_released(keys.iter().copied())
        && !keyboard.any_pressed(keys.iter().copied());
    (pressed, released)
}
