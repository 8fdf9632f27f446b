//! Content domain: unit tests for tuning file parsing.

use super::parse_locomotion_tuning;
use crate::locomotion::{JumpProfile, LocomotionTuning};
use bevy::prelude::Vec2;

#[test]
fn test_parse_full_tuning() {
    let ron = r#"
        (
            walk_speed: 4.0,
            run_speed: 9.0,
            acceleration: 40.0,
            deceleration: 60.0,
            walk_threshold: 0.3,
            deadzone: 0.15,
            fast_fall_threshold: 0.5,
            ground_check_offset: (0.0, -1.0),
            ground_check_radius: 0.25,
            max_jump_count: 3,
            coyote_time: 0.1,
            jump_buffer_time: 0.15,
            double_jump_control_duration: 0.3,
            dash_duration: 0.25,
            dash_cooldown: 2.0,
            ladder_climb_speed: 4.0,
            rope_climb_speed: 2.0,
            normal_jump: (
                jump_force: 11.0,
                double_jump_force: 9.0,
            ),
            long_jump: (
                max_fall_speed: 25.0,
                air_control_strength: 0.4,
            ),
            long_jump_extension: (
                launch_speed: 18.0,
                launch_angle: 30.0,
            ),
        )
    "#;

    let tuning = parse_locomotion_tuning(ron, "inline.ron").unwrap();
    assert_eq!(tuning.walk_speed, 4.0);
    assert_eq!(tuning.max_jump_count, 3);
    assert_eq!(tuning.ground_check_offset, Vec2::new(0.0, -1.0));
    assert_eq!(tuning.normal_jump.jump_force, 11.0);
    assert_eq!(tuning.ability(JumpProfile::Long).max_fall_speed, 25.0);
    assert_eq!(tuning.long_jump_extension.launch_angle, 30.0);
    // Unlisted nested fields keep their defaults.
    assert_eq!(tuning.normal_jump.jump_cut_multiplier, 0.5);
    assert_eq!(tuning.long_jump_extension.dash_speed, 15.0);
}

#[test]
fn test_missing_fields_fall_back_to_defaults() {
    let tuning = parse_locomotion_tuning("(run_speed: 10.0)", "inline.ron").unwrap();

    let expected = LocomotionTuning {
        run_speed: 10.0,
        ..Default::default()
    };
    assert_eq!(tuning, expected);
}

#[test]
fn test_parse_error_names_file() {
    let err = parse_locomotion_tuning("(walk_speed: fast)", "locomotion.ron").unwrap_err();
    assert_eq!(err.file, "locomotion.ron");
    assert!(err.message.starts_with("Parse error"));
    assert!(err.to_string().starts_with("Failed to load locomotion.ron"));
}

#[test]
fn test_out_of_range_values_are_rejected() {
    let ron = "(deadzone: 1.5, normal_jump: (jump_cut_multiplier: -0.1))";
    let err = parse_locomotion_tuning(ron, "inline.ron").unwrap_err();

    assert!(err.message.contains("'deadzone'"));
    assert!(err.message.contains("'normal_jump.jump_cut_multiplier'"));
}

#[test]
fn test_shipped_tuning_file_is_valid() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join(super::DEFAULT_DATA_DIR)
        .join(super::LOCOMOTION_FILE);

    let tuning = super::load_locomotion_tuning(&path).unwrap();
    assert_eq!(tuning.max_jump_count, 2);
}

#[test]
fn test_missing_file_reports_io_error() {
    let err = super::load_locomotion_tuning(std::path::Path::new("does/not/exist.ron"))
        .unwrap_err();
    assert!(err.message.starts_with("IO error"));
}
