use avian2d::prelude::*;
use bevy::prelude::*;

use ledgeline::{content, movement};

/// World units are meters; the camera shows this many pixels per meter.
const PIXELS_PER_METER: f32 = 32.0;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Ledgeline".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .add_plugins((content::ContentPlugin::default(), movement::MovementPlugin))
        .add_systems(Startup, setup_camera)
        .run();
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Transform::from_scale(Vec3::splat(1.0 / PIXELS_PER_METER)),
    ));
}
