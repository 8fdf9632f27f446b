//! Ledgeline: player locomotion for a 2D platformer.
//!
//! `locomotion` is the engine-agnostic controller, `movement` drives it from
//! Bevy and Avian, and `content` loads its tuning from RON.

pub mod content;
pub mod locomotion;
pub mod movement;
