pub mod components;
pub mod config;
pub mod fsm;
pub mod geometry;
pub mod params;
pub mod resources;
pub mod synth;
pub mod systems;

pub use components::*;
pub use config::*;
pub use fsm::*;
pub use geometry::*;
pub use params::*;
pub use resources::*;
pub use synth::*;

pub use glam::Vec2;

use hecs::World;
use systems::*;

/// Run one fixed tick of the Pong simulation.
///
/// Returns the round winner if this tick decided the round.
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
    input: &InputState,
) -> Option<Side> {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest input (keyboard intent for the human paddle)
    ingest_input(world, input);

    // 2. Move paddles: human from input, AI from the ball
    drive_human_paddles(world, input);
    drive_ai_paddles(world, config, rng);

    // 3. Move ball
    move_ball(world);

    // 4. Check collisions (walls, then paddles)
    check_collisions(world, config, events);

    // 5. Check scoring (ball exited court)
    let winner = check_scoring(world, config, score, events, rng);

    time.advance();
    winner
}

/// Helper to create a paddle entity with the controller for its side
pub fn create_paddle(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    let paddle = Paddle::new(side, config);
    match side {
        Side::Left => world.spawn((paddle, AiControlled)),
        Side::Right => world.spawn((paddle, PaddleIntent::new(), HumanControlled)),
    }
}

/// Helper to create the ball entity
pub fn create_ball(
    world: &mut World,
    pos: glam::Vec2,
    vel: glam::Vec2,
    config: &Config,
) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel, config.ball_size),))
}

/// Populate an empty world for a new round: both paddles and a served ball
pub fn spawn_round(world: &mut World, config: &Config, rng: &mut GameRng) {
    create_paddle(world, Side::Left, config);
    create_paddle(world, Side::Right, config);

    let mut ball = Ball::new(config.ball_spawn(), glam::Vec2::ZERO, config.ball_size);
    ball.serve(None, config, rng);
    world.spawn((ball,));
}
