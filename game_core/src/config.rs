use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub screen_width: f32,
    pub screen_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_margin: f32,
    pub human_paddle_speed: f32,
    pub ai_paddle_speed: f32,
    pub ball_size: f32,
    pub ball_speed_initial_x: f32,
    pub ball_speed_initial_y: f32,
    pub ball_speed_increase: f32,
    pub ball_speed_max_factor: f32,
    pub ball_spin_factor: f32,
    pub ai_track_zone: f32,
    pub ai_jitter_divisor: f32,
    pub ai_return_speed_divisor: f32,
    pub win_score: u8,
    pub tick_rate: u32,
    pub prompt_tick_rate: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            screen_width: Params::SCREEN_WIDTH,
            screen_height: Params::SCREEN_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            human_paddle_speed: Params::HUMAN_PADDLE_SPEED,
            ai_paddle_speed: Params::AI_PADDLE_SPEED,
            ball_size: Params::BALL_SIZE,
            ball_speed_initial_x: Params::BALL_SPEED_INITIAL_X,
            ball_speed_initial_y: Params::BALL_SPEED_INITIAL_Y,
            ball_speed_increase: Params::BALL_SPEED_INCREASE,
            ball_speed_max_factor: Params::BALL_SPEED_MAX_FACTOR,
            ball_spin_factor: Params::BALL_SPIN_FACTOR,
            ai_track_zone: Params::AI_TRACK_ZONE,
            ai_jitter_divisor: Params::AI_JITTER_DIVISOR,
            ai_return_speed_divisor: Params::AI_RETURN_SPEED_DIVISOR,
            win_score: Params::WIN_SCORE,
            tick_rate: Params::TICK_RATE,
            prompt_tick_rate: Params::PROMPT_TICK_RATE,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get X position (left edge) for a paddle based on its side
    pub fn paddle_x(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.paddle_margin,
            Side::Right => self.screen_width - self.paddle_margin - self.paddle_width,
        }
    }

    /// Starting top-left corner of a paddle, vertically centered on whole pixels
    pub fn paddle_start(&self, side: Side) -> Vec2 {
        let y = (self.screen_height / 2.0).floor() - (self.paddle_height / 2.0).floor();
        Vec2::new(self.paddle_x(side), y)
    }

    pub fn paddle_speed(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.ai_paddle_speed,
            Side::Right => self.human_paddle_speed,
        }
    }

    /// Clamp a paddle's top edge to the screen
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        y.clamp(0.0, self.screen_height - self.paddle_height)
    }

    /// Top-left corner of the ball when it sits at the exact screen center
    pub fn ball_spawn(&self) -> Vec2 {
        let half_size = (self.ball_size / 2.0).floor();
        Vec2::new(
            (self.screen_width / 2.0).floor() - half_size,
            (self.screen_height / 2.0).floor() - half_size,
        )
    }

    /// Per-axis cap applied to the ball velocity after a paddle hit
    pub fn max_ball_speed(&self) -> f32 {
        self.ball_speed_initial_x * self.ball_speed_max_factor
    }

    /// Half-width of the uniform jitter added to the AI's target
    pub fn ai_jitter(&self) -> f32 {
        self.paddle_height / self.ai_jitter_divisor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(Side::Left), 30.0, "Left paddle X position");
        assert_eq!(config.paddle_x(Side::Right), 560.0, "Right paddle X position");
    }

    #[test]
    fn test_config_paddle_start_is_vertically_centered() {
        let config = Config::new();
        let start = config.paddle_start(Side::Left);
        assert_eq!(start.y, 165.0);
        assert_eq!(start.y + config.paddle_height / 2.0, 200.0);
    }

    #[test]
    fn test_config_clamp_paddle_y() {
        let config = Config::new();
        assert_eq!(config.clamp_paddle_y(-10.0), 0.0);
        assert_eq!(
            config.clamp_paddle_y(1000.0),
            config.screen_height - config.paddle_height
        );
        assert_eq!(config.clamp_paddle_y(120.0), 120.0);
    }

    #[test]
    fn test_config_ball_spawn_is_centered() {
        let config = Config::new();
        assert_eq!(config.ball_spawn(), Vec2::new(295.0, 195.0));
    }

    #[test]
    fn test_config_derived_constants() {
        let config = Config::new();
        assert_eq!(config.max_ball_speed(), 17.5);
        assert!((config.ai_jitter() - 70.0 / 4.5).abs() < 1e-5);
        assert_eq!(config.tick_rate, 60);
        assert_eq!(config.prompt_tick_rate, 15);
    }
}
