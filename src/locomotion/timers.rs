//! Locomotion domain: coyote-time and jump-buffer counters.

/// Grace-window counters, in seconds, ticked once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TimerBank {
    coyote_time: f32,
    jump_buffer_time: f32,
    coyote_counter: f32,
    jump_buffer_counter: f32,
}

impl TimerBank {
    pub fn new(coyote_time: f32, jump_buffer_time: f32) -> Self {
        Self {
            coyote_time,
            jump_buffer_time,
            coyote_counter: 0.0,
            jump_buffer_counter: 0.0,
        }
    }

    /// Counters never drop below zero.
    pub fn tick(&mut self, dt: f32) {
        self.coyote_counter = (self.coyote_counter - dt).max(0.0);
        self.jump_buffer_counter = (self.jump_buffer_counter - dt).max(0.0);
    }

    pub fn refresh_coyote(&mut self) {
        self.coyote_counter = self.coyote_time;
    }

    pub fn refresh_jump_buffer(&mut self) {
        self.jump_buffer_counter = self.jump_buffer_time;
    }

    pub fn consume_coyote(&mut self) {
        self.coyote_counter = 0.0;
    }

    pub fn consume_jump_buffer(&mut self) {
        self.jump_buffer_counter = 0.0;
    }

    pub fn coyote_remaining(&self) -> f32 {
        self.coyote_counter
    }

    pub fn jump_buffer_remaining(&self) -> f32 {
        self.jump_buffer_counter
    }

    pub fn has_coyote(&self) -> bool {
        self.coyote_counter > 0.0
    }

    pub fn has_buffered_jump(&self) -> bool {
        self.jump_buffer_counter > 0.0
    }

    /// Whether a jump attempt counts as grounded-tier right now.
    pub fn allows_ground_jump(&self, grounded: bool) -> bool {
        (grounded || self.has_coyote()) && self.has_buffered_jump()
    }
}
