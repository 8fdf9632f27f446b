//! Locomotion domain: ladder and rope zone occupancy and active climbing.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize, Reflect)]
pub enum ClimbKind {
    Ladder,
    Rope,
}

/// Emitted when active climbing starts or stops.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClimbChange {
    Started(ClimbKind),
    Stopped(ClimbKind),
}

/// Occupancy is tracked per zone kind; at most one kind is actively climbed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClimbState {
    on_ladder: bool,
    on_rope: bool,
    input_held: bool,
    active: Option<ClimbKind>,
}

impl ClimbState {
    pub fn enter_zone(&mut self, kind: ClimbKind) -> Option<ClimbChange> {
        *self.occupancy_mut(kind) = true;
        if self.input_held {
            self.try_start()
        } else {
            None
        }
    }

    pub fn exit_zone(&mut self, kind: ClimbKind) -> Option<ClimbChange> {
        *self.occupancy_mut(kind) = false;
        if self.active == Some(kind) {
            self.stop()
        } else {
            None
        }
    }

    pub fn set_input_held(&mut self, held: bool) -> Option<ClimbChange> {
        self.input_held = held;
        if held { self.try_start() } else { self.stop() }
    }

    /// A successful jump lets go of whatever is being climbed.
    pub fn release(&mut self) -> Option<ClimbChange> {
        self.stop()
    }

    pub fn active(&self) -> Option<ClimbKind> {
        self.active
    }

    pub fn is_climbing(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_climbing_ladder(&self) -> bool {
        self.active == Some(ClimbKind::Ladder)
    }

    pub fn is_climbing_rope(&self) -> bool {
        self.active == Some(ClimbKind::Rope)
    }

    pub fn occupies(&self, kind: ClimbKind) -> bool {
        match kind {
            ClimbKind::Ladder => self.on_ladder,
            ClimbKind::Rope => self.on_rope,
        }
    }

    pub fn input_held(&self) -> bool {
        self.input_held
    }

    fn occupancy_mut(&mut self, kind: ClimbKind) -> &mut bool {
        match kind {
            ClimbKind::Ladder => &mut self.on_ladder,
            ClimbKind::Rope => &mut self.on_rope,
        }
    }

    fn try_start(&mut self) -> Option<ClimbChange> {
        if self.active.is_some() {
            return None;
        }

        // Ladder wins when both zones are occupied.
        let kind = if self.on_ladder {
            ClimbKind::Ladder
        } else if self.on_rope {
            ClimbKind::Rope
        } else {
            return None;
        };

        self.active = Some(kind);
        Some(ClimbChange::Started(kind))
    }

    fn stop(&mut self) -> Option<ClimbChange> {
        self.active.take().map(ClimbChange::Stopped)
    }
}
