use crate::{Ball, Config, Events, GameRng, Score, Side};
use hecs::World;
use tracing::debug;

/// Check if the ball left the court.
///
/// A point is awarded for each exit. Unless that point wins the round the
/// ball is served again. Returns the round winner, if any.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rng: &mut GameRng,
) -> Option<Side> {
    let mut winner = None;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.right() >= config.screen_width {
            // Got past the right paddle
            Side::Left
        } else if ball.left() <= 0.0 {
            Side::Right
        } else {
            continue;
        };

        score.increment(scorer);
        events.point_to = Some(scorer);
        debug!(
            scorer = scorer.label(),
            left = score.left,
            right = score.right,
            "point scored"
        );

        if score.get(scorer) >= config.win_score {
            winner = Some(scorer);
        } else {
            ball.serve(Some(serve_direction(scorer)), config, rng);
        }
    }

    winner
}

/// Horizontal sign of the serve that follows a point.
///
/// A ball lost off the right edge is served leftward and vice versa.
pub fn serve_direction(scorer: Side) -> f32 {
    match scorer {
        Side::Left => -1.0,
        Side::Right => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, Ball, Config, Events, GameRng, Score};
    use glam::Vec2;

    fn setup_world() -> (hecs::World, Config, Score, Events, GameRng) {
        let world = hecs::World::new();
        let config = Config::new();
        let score = Score::new();
        let events = Events::new();
        let rng = GameRng::new(12345); // Fixed seed for deterministic tests
        (world, config, score, events, rng)
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
    fn test_player_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-1.0, 200.0), Vec2::new(-5.0, 0.0), &config);

        let winner = check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(winner, None);
        assert_eq!(score.right, 1, "Player should score");
        assert_eq!(score.left, 0, "AI should not score");
        assert_eq!(events.scored(), Some(Side::Right));
        assert!(the_ball(&world).vel.x > 0.0, "Serve heads right");
    }

    #[test]
    fn test_ai_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(591.0, 200.0), Vec2::new(5.0, 0.0), &config);

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(score.left, 1, "AI should score");
        assert_eq!(score.right, 0);
        assert_eq!(events.scored(), Some(Side::Left));
        assert!(the_ball(&world).vel.x < 0.0, "Serve heads left");
    }

    #[test]
    fn test_ball_resets_after_scoring() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-1.0, 30.0), Vec2::new(-5.0, 2.0), &config);

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        let ball = the_ball(&world);
        assert_eq!(ball.pos, config.ball_spawn(), "Ball should reset to center");
        assert!(ball.vel.y.abs() >= config.ball_speed_initial_y * 0.8 - 1e-4);
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(300.0, 200.0), Vec2::new(5.0, 4.0), &config);

        let winner = check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(winner, None);
        assert_eq!(score, Score::new(), "No score when ball in bounds");
        assert_eq!(events.scored(), None, "No scoring events");
    }

    #[test]
    fn test_winning_point_ends_round_without_serve() {
        let (mut world, config, mut score, mut events, mut rng) = setup_world();
        score.left = 4;
        create_ball(&mut world, Vec2::new(595.0, 200.0), Vec2::new(6.0, 1.0), &config);

        let winner = check_scoring(&mut world, &config, &mut score, &mut events, &mut rng);

        assert_eq!(winner, Some(Side::Left));
        assert_eq!(score.left, 5);
        assert_eq!(the_ball(&world).pos.x, 595.0, "Ball is not served again");
    }

    #[test]
    fn test_serve_direction() {
        assert_eq!(serve_direction(Side::Left), -1.0);
        assert_eq!(serve_direction(Side::Right), 1.0);
    }
}
