use crate::components::Side;
use crate::synth::SoundEvent;

/// Simulation clock, counted in fixed ticks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Time {
    pub tick: u64,
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.tick += 1;
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub left: u8,  // AI score
    pub right: u8, // Player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn get(&self, side: Side) -> u8 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn has_winner(&self, win_score: u8) -> Option<Side> {
        if self.left >= win_score {
            Some(Side::Left)
        } else if self.right >= win_score {
            Some(Side::Right)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// What happened to the ball during the current tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Events {
    pub point_to: Option<Side>,
    pub paddle_hit: bool,
    pub wall_hit: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Side that won a point this tick, if any
    pub fn scored(&self) -> Option<Side> {
        self.point_to
    }

    /// Sounds to play for this tick, wall first
    pub fn sounds(&self) -> impl Iterator<Item = SoundEvent> {
        [
            (self.wall_hit, SoundEvent::WallHit),
            (self.paddle_hit, SoundEvent::PaddleHit),
            (self.point_to.is_some(), SoundEvent::Score),
        ]
        .into_iter()
        .filter_map(|(happened, sound)| happened.then_some(sound))
    }
}

/// Keys that mean something on the replay prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPress {
    Affirm,  // Y
    Decline, // N
    Cancel,  // Escape
}

/// Input gathered by the frontend since the previous tick
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct InputState {
    pub quit: bool,
    pub pointer_y: Option<f32>,
    pub key: Option<KeyPress>,
    pub paddle_dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Window closed or Escape pressed
    pub fn wants_exit(&self) -> bool {
        self.quit || self.key == Some(KeyPress::Cancel)
    }
}
