use glam::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

use crate::config::Config;
use crate::geometry::Aabb;
use crate::resources::GameRng;

/// Which half of the court an entity belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Left,  // AI
    Right, // Human
}

impl Side {
    pub fn label(self) -> &'static str {
        match self {
            Side::Left => "AI",
            Side::Right => "Player",
        }
    }
}

/// Paddle component - position is the top-left corner
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec2,
    pub size: Vec2,
    pub speed: f32,
    pub initial: Vec2,
    pub screen_height: f32,
}

impl Paddle {
    pub fn new(side: Side, config: &Config) -> Self {
        let initial = config.paddle_start(side);
        Self {
            side,
            pos: initial,
            size: Vec2::new(config.paddle_width, config.paddle_height),
            speed: config.paddle_speed(side),
            initial,
            screen_height: config.screen_height,
        }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_top_left(self.pos, self.size)
    }

    pub fn center_y(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    pub fn reset_position(&mut self) {
        self.pos = self.initial;
    }

    pub fn move_up(&mut self) {
        self.pos.y -= self.speed;
        self.clamp();
    }

    pub fn move_down(&mut self) {
        self.pos.y += self.speed;
        self.clamp();
    }

    /// Center the paddle on a pointer coordinate
    pub fn update_from_pointer(&mut self, pointer_y: f32) {
        self.pos.y = pointer_y - self.size.y / 2.0;
        self.clamp();
    }

    /// Keep the paddle fully on screen
    pub fn clamp(&mut self) {
        self.pos.y = self.pos.y.clamp(0.0, self.screen_height - self.size.y);
    }
}

/// Ball component - position is the top-left corner, velocity is px/tick
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2, size: f32) -> Self {
        Self { pos, vel, size }
    }

    pub fn rect(&self) -> Aabb {
        Aabb::from_top_left(self.pos, Vec2::splat(self.size))
    }

    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.size / 2.0)
    }

    pub fn left(&self) -> f32 {
        self.pos.x
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size
    }

    pub fn top(&self) -> f32 {
        self.pos.y
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size
    }

    /// Put the ball back at the center with a fresh velocity.
    ///
    /// `direction_hint` fixes the sign of the horizontal speed; `None` picks
    /// one at random (first serve of a round).
    pub fn serve(&mut self, direction_hint: Option<f32>, config: &Config, rng: &mut GameRng) {
        self.pos = config.ball_spawn();

        let direction = direction_hint.unwrap_or_else(|| random_sign(rng));
        let spread = [0.9, 1.0, 1.1].choose(&mut rng.0).copied().unwrap_or(1.0);
        let vx = config.ball_speed_initial_x * direction * spread;

        let mut vy =
            config.ball_speed_initial_y * random_sign(rng) * rng.0.gen_range(0.8..=1.2);
        if vy.abs() < 1.0 {
            vy = random_sign(rng) * config.ball_speed_initial_y * 0.8;
        }

        self.vel = Vec2::new(vx, vy);
    }
}

fn random_sign(rng: &mut GameRng) -> f32 {
    if rng.0.gen_bool(0.5) {
        1.0
    } else {
        -1.0
    }
}

/// Movement intent for a keyboard-driven paddle
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8, // -1 = up, 0 = stop, 1 = down
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Marker for the paddle steered by the AI policy
#[derive(Debug, Clone, Copy, Default)]
pub struct AiControlled;

/// Marker for the paddle steered by the local player
#[derive(Debug, Clone, Copy, Default)]
pub struct HumanControlled;
