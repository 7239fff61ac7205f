use crate::{Ball, Config, Events, Paddle, Side};
use hecs::World;

/// Check ball collisions with walls and paddles
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    check_wall_collisions(world, config, events);
    check_paddle_collisions(world, config, events);
}

/// Bounce the ball off the top and bottom walls
pub fn check_wall_collisions(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.top() <= 0.0 {
            ball.pos.y = 0.0;
            ball.vel.y = -ball.vel.y;
            events.wall_hit = true;
        }
        if ball.bottom() >= config.screen_height {
            ball.pos.y = config.screen_height - ball.size;
            ball.vel.y = -ball.vel.y;
            events.wall_hit = true;
        }
    }
}

/// Resolve at most one ball/paddle hit per tick.
///
/// Paddles are tested left first; if the ball somehow overlaps both, the left
/// one wins.
pub fn check_paddle_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let mut paddles: Vec<(Side, crate::Aabb)> = world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, p)| (p.side, p.rect()))
        .collect();
    paddles.sort_by_key(|(side, _)| *side);

    let max_speed = config.max_ball_speed();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let ball_rect = ball.rect();
        let Some((_side, paddle_rect)) = paddles
            .iter()
            .find(|(_side, rect)| ball_rect.overlaps(rect))
        else {
            continue;
        };

        // Push ball out of paddle along its direction of travel
        if ball.vel.x > 0.0 {
            ball.pos.x = paddle_rect.min.x - ball.size;
        } else if ball.vel.x < 0.0 {
            ball.pos.x = paddle_rect.max.x;
        }

        ball.vel.x *= -config.ball_speed_increase;

        // Hitting off-center adds spin
        let offset = ball.center().y - paddle_rect.center().y;
        let delta_y = offset / (config.paddle_height / config.ball_spin_factor);
        ball.vel.y += delta_y * config.ball_spin_factor;

        ball.vel.x = ball.vel.x.clamp(-max_speed, max_speed);
        ball.vel.y = ball.vel.y.clamp(-max_speed, max_speed);

        events.paddle_hit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle, Ball, Config, Events};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, Events) {
        let world = hecs::World::new();
        let config = Config::new();
        let events = Events::new();
        (world, config, events)
    }

    fn the_ball(world: &hecs::World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| *ball)
            .unwrap()
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events) = setup_world();
        let ball_vel = Vec2::new(5.0, -4.0); // Moving up
        create_ball(&mut world, Vec2::new(300.0, -2.0), ball_vel, &config);

        check_collisions(&mut world, &config, &mut events);

        let ball = the_ball(&world);
        assert_eq!(ball.vel.y, 4.0, "Ball should bounce down after hitting top wall");
        assert_eq!(ball.vel.x, ball_vel.x, "X velocity should be unchanged");
        assert_eq!(ball.pos.y, 0.0, "Ball should be clamped to the wall");
        assert!(events.wall_hit, "Should trigger wall_hit event");
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events) = setup_world();
        let ball_vel = Vec2::new(5.0, 4.0); // Moving down
        create_ball(&mut world, Vec2::new(300.0, 393.0), ball_vel, &config);

        check_collisions(&mut world, &config, &mut events);

        let ball = the_ball(&world);
        assert_eq!(ball.vel.y, -4.0, "Ball should bounce up after hitting bottom wall");
        assert_eq!(ball.bottom(), config.screen_height);
        assert!(events.wall_hit);
    }

    #[test]
    fn test_ball_touching_top_wall_bounces() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(300.0, 0.0), Vec2::new(5.0, -4.0), &config);

        check_wall_collisions(&mut world, &config, &mut events);

        assert!(the_ball(&world).vel.y > 0.0);
        assert!(events.wall_hit);
    }

    #[test]
    fn test_no_wall_hit_in_open_court() {
        let (mut world, config, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(300.0, 200.0), Vec2::new(5.0, 4.0), &config);

        check_collisions(&mut world, &config, &mut events);

        assert!(!events.wall_hit);
        assert!(!events.paddle_hit);
        assert_eq!(the_ball(&world).vel, Vec2::new(5.0, 4.0));
    }

    #[test]
    fn test_ball_collides_with_right_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Right, &config);
        let paddle_rect = Paddle::new(Side::Right, &config).rect();

        // Overlapping the paddle face, centered on the paddle
        let ball_pos = Vec2::new(paddle_rect.min.x - 5.0, paddle_rect.center().y - 5.0);
        create_ball(&mut world, ball_pos, Vec2::new(5.0, 0.0), &config);

        check_collisions(&mut world, &config, &mut events);

        let ball = the_ball(&world);
        assert!((ball.vel.x + 5.0 * 1.07).abs() < 1e-4, "got {}", ball.vel.x);
        assert_eq!(ball.vel.y, 0.0, "Center hit adds no spin");
        assert_eq!(ball.right(), paddle_rect.min.x, "Ball pushed out of paddle");
        assert!(events.paddle_hit, "Should trigger paddle_hit event");
    }

    #[test]
    fn test_ball_collides_with_left_paddle() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        let paddle_rect = Paddle::new(Side::Left, &config).rect();

        let ball_pos = Vec2::new(paddle_rect.max.x - 3.0, paddle_rect.center().y - 5.0);
        create_ball(&mut world, ball_pos, Vec2::new(-6.0, 0.0), &config);

        check_collisions(&mut world, &config, &mut events);

        let ball = the_ball(&world);
        assert!(ball.vel.x > 0.0, "Ball should bounce right after hitting left paddle");
        assert!((ball.vel.x - 6.0 * 1.07).abs() < 1e-4);
        assert_eq!(ball.left(), paddle_rect.max.x);
        assert!(events.paddle_hit);
    }

    #[test]
    fn test_ball_trajectory_affected_by_hit_position() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        let paddle_rect = Paddle::new(Side::Left, &config).rect();

        // Ball center 28px above paddle center: delta = -28 / 28 = -1
        let ball_pos = Vec2::new(paddle_rect.max.x - 3.0, paddle_rect.center().y - 28.0 - 5.0);
        create_ball(&mut world, ball_pos, Vec2::new(-5.0, 1.0), &config);

        check_collisions(&mut world, &config, &mut events);

        let ball = the_ball(&world);
        assert!((ball.vel.y - (1.0 - 2.5)).abs() < 1e-4, "got {}", ball.vel.y);

        // Same thing below the center deflects downward
        world.clear();
        events.clear();
        create_paddle(&mut world, Side::Left, &config);
        let ball_pos = Vec2::new(paddle_rect.max.x - 3.0, paddle_rect.center().y + 28.0 - 5.0);
        create_ball(&mut world, ball_pos, Vec2::new(-5.0, 0.0), &config);

        check_collisions(&mut world, &config, &mut events);

        assert!((the_ball(&world).vel.y - 2.5).abs() < 1e-4);
    }

    #[test]
    fn test_ball_speed_caps_at_max() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);
        let paddle_rect = Paddle::new(Side::Left, &config).rect();

        let ball_pos = Vec2::new(paddle_rect.max.x - 3.0, paddle_rect.min.y - 8.0);
        create_ball(&mut world, ball_pos, Vec2::new(-17.0, -17.0), &config);

        check_collisions(&mut world, &config, &mut events);

        let ball = the_ball(&world);
        let max = config.max_ball_speed();
        assert_eq!(ball.vel.x, max, "X speed should be capped");
        assert_eq!(ball.vel.y, -max, "Y speed should be capped");
    }

    #[test]
    fn test_only_one_paddle_hit_per_tick() {
        let (mut world, mut config, mut events) = setup_world();
        // Shrink the court so one ball can overlap both paddles
        config.screen_width = 90.0;
        config.paddle_margin = 35.0;
        create_paddle(&mut world, Side::Left, &config);
        create_paddle(&mut world, Side::Right, &config);

        let left = Paddle::new(Side::Left, &config).rect();
        create_ball(
            &mut world,
            Vec2::new(left.max.x - 8.0, left.center().y - 5.0),
            Vec2::new(-5.0, 0.0),
            &config,
        );

        check_paddle_collisions(&mut world, &config, &mut events);

        let ball = the_ball(&world);
        assert!((ball.vel.x - 5.35).abs() < 1e-4, "Speed-up applied once");
        assert_eq!(ball.left(), left.max.x, "Left paddle resolved first");
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, mut events) = setup_world();
        create_paddle(&mut world, Side::Left, &config);

        check_collisions(&mut world, &config, &mut events);

        assert!(!events.paddle_hit);
        assert!(!events.wall_hit);
    }
}
