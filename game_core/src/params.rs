/// Game tuning parameters for Pong
///
/// Distances are pixels, speeds are pixels per tick.
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Screen
    pub const SCREEN_WIDTH: f32 = 600.0;
    pub const SCREEN_HEIGHT: f32 = 400.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 70.0;
    pub const PADDLE_MARGIN: f32 = 30.0; // Gap between screen edge and paddle
    pub const HUMAN_PADDLE_SPEED: f32 = 7.0;
    pub const AI_PADDLE_SPEED: f32 = 5.5; // Slower than the human on purpose

    // Ball
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_SPEED_INITIAL_X: f32 = 5.0;
    pub const BALL_SPEED_INITIAL_Y: f32 = 5.0;
    pub const BALL_SPEED_INCREASE: f32 = 1.07; // Multiply |vx| on paddle hit
    pub const BALL_SPEED_MAX_FACTOR: f32 = 3.5; // Cap = factor * initial x speed
    pub const BALL_SPIN_FACTOR: f32 = 2.5;

    // AI
    pub const AI_TRACK_ZONE: f32 = 0.7; // Fraction of width the AI watches
    pub const AI_JITTER_DIVISOR: f32 = 4.5; // Jitter = paddle height / divisor
    pub const AI_RETURN_SPEED_DIVISOR: f32 = 3.0;

    // Score
    pub const WIN_SCORE: u8 = 5; // First to 5 wins

    // Loop
    pub const TICK_RATE: u32 = 60;
    pub const PROMPT_TICK_RATE: u32 = 15;

    // Audio
    pub const SAMPLE_RATE: u32 = 22_050;
    pub const TONE_VOLUME: f32 = 0.3;
}
