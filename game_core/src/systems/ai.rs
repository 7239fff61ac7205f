use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::{AiControlled, Ball, Config, GameRng, Paddle, Side};

/// Steer every AI paddle toward the ball
pub fn drive_ai_paddles(world: &mut World, config: &Config, rng: &mut GameRng) {
    let ball = world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| (ball.center(), ball.vel.x));

    let Some((ball_center, ball_vx)) = ball else {
        return;
    };

    for (_entity, (paddle, _)) in world.query_mut::<(&mut Paddle, &AiControlled)>() {
        update_ai(paddle, ball_center, ball_vx, config, rng);
    }
}

/// Reactive tracking policy.
///
/// While the ball heads toward the paddle and is inside the tracking zone the
/// paddle chases the ball's height plus a jitter that is resampled every tick,
/// so it never tracks perfectly. Otherwise it drifts back to the middle at a
/// third of its speed.
pub fn update_ai(
    paddle: &mut Paddle,
    ball_center: Vec2,
    ball_vx: f32,
    config: &Config,
    rng: &mut GameRng,
) {
    let speed = paddle.speed;
    let center_y = paddle.center_y();

    if is_incoming(paddle.side, ball_center.x, ball_vx, config) {
        let jitter = config.ai_jitter();
        let target = ball_center.y + rng.0.gen_range(-jitter..=jitter);

        if (center_y - target).abs() > speed {
            if center_y < target - speed / 2.0 {
                paddle.pos.y += speed;
            } else if center_y > target + speed / 2.0 {
                paddle.pos.y -= speed;
            }
        }
    } else {
        let screen_center = (config.screen_height / 2.0).floor();
        let drift = speed / config.ai_return_speed_divisor;

        if (center_y - screen_center).abs() > speed {
            if center_y < screen_center {
                paddle.pos.y += drift;
            } else if center_y > screen_center {
                paddle.pos.y -= drift;
            }
        }
    }

    paddle.clamp();
}

/// Ball travels toward this side and has not gone deep into the far half
fn is_incoming(side: Side, ball_x: f32, ball_vx: f32, config: &Config) -> bool {
    let zone = config.screen_width * config.ai_track_zone;
    match side {
        Side::Left => ball_vx < 0.0 && ball_x < zone,
        Side::Right => ball_vx > 0.0 && ball_x > config.screen_width - zone,
    }
}
