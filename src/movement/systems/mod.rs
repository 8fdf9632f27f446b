//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{sense_ground, track_climb_zones};
pub(crate) use input::{dispatch_input, read_input};
pub(crate) use movement::{apply_locomotion, publish_events};
pub use movement::AvianBody;
