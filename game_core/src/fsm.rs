//! Round/match state machine
//!
//! Drives one match from the first serve through any number of replayed
//! rounds until the player declines or quits.

use std::time::Duration;

use hecs::World;
use tracing::{debug, info};

use crate::components::{Ball, Paddle, Side};
use crate::config::Config;
use crate::geometry::Aabb;
use crate::resources::{Events, GameRng, InputState, KeyPress, Score, Time};
use crate::synth::SoundEvent;

/// Services the match needs from whatever shows the game to the player
pub trait Frontend {
    /// Input gathered since the previous call
    fn poll_input(&mut self) -> InputState;
    /// Draw one frame of play
    fn render(&mut self, frame: &Frame);
    /// Replace the court with a message screen
    fn show_message(&mut self, text: &str, subtext: Option<&str>);
    /// Start a sound without waiting for it
    fn play(&mut self, event: SoundEvent);
}

/// Everything needed to draw one frame of play
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub left_paddle: Aabb,
    pub right_paddle: Aabb,
    pub ball: Aabb,
    pub score: Score,
}

/// Match states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    Rallying,
    RoundOver,
    AwaitingReplayChoice,
    Terminated,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    RoundWon,
    ResultShown,
    PlayAgain,
    Decline,
    Quit,
}

impl MatchState {
    /// Get next state for a given action (if valid)
    pub fn next(self, action: MatchAction) -> Option<MatchState> {
        match (self, action) {
            (MatchState::Terminated, _) => None,
            (_, MatchAction::Quit) => Some(MatchState::Terminated),

            (MatchState::Rallying, MatchAction::RoundWon) => Some(MatchState::RoundOver),
            (MatchState::RoundOver, MatchAction::ResultShown) => {
                Some(MatchState::AwaitingReplayChoice)
            }
            (MatchState::AwaitingReplayChoice, MatchAction::PlayAgain) => {
                Some(MatchState::Rallying)
            }
            (MatchState::AwaitingReplayChoice, MatchAction::Decline) => {
                Some(MatchState::Terminated)
            }

            // Invalid transition
            _ => None,
        }
    }
}

/// A match against the AI
pub struct Match {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub rng: GameRng,
    pub state: MatchState,
    pub winner: Option<Side>,
    pub rounds_played: u32,
}

impl Match {
    pub fn new(config: Config, rng: GameRng) -> Self {
        let mut game = Self {
            world: World::new(),
            time: Time::new(),
            config,
            score: Score::new(),
            events: Events::new(),
            rng,
            state: MatchState::Rallying,
            winner: None,
            rounds_played: 0,
        };
        crate::spawn_round(&mut game.world, &game.config, &mut game.rng);
        game
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == MatchState::Terminated
    }

    /// Ticks per second for the current state
    pub fn tick_rate(&self) -> u32 {
        match self.state {
            MatchState::AwaitingReplayChoice => self.config.prompt_tick_rate,
            _ => self.config.tick_rate,
        }
    }

    /// Wall-clock length of one tick in the current state
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.tick_rate().max(1)))
    }

    /// Attempt a transition; returns whether it happened
    pub fn transition(&mut self, action: MatchAction) -> bool {
        match self.state.next(action) {
            Some(next) => {
                debug!(from = ?self.state, to = ?next, ?action, "match transition");
                self.state = next;
                true
            }
            None => false,
        }
    }

    /// Run one tick of whatever the current state does
    pub fn tick<F: Frontend + ?Sized>(&mut self, frontend: &mut F) -> MatchState {
        let input = frontend.poll_input();
        if input.quit {
            info!("quit requested");
            self.transition(MatchAction::Quit);
            return self.state;
        }

        match self.state {
            MatchState::Rallying => self.tick_rally(frontend, &input),
            MatchState::RoundOver => self.show_result(frontend),
            MatchState::AwaitingReplayChoice => self.tick_prompt(&input),
            MatchState::Terminated => {}
        }

        self.state
    }

    fn tick_rally<F: Frontend + ?Sized>(&mut self, frontend: &mut F, input: &InputState) {
        if input.wants_exit() {
            info!("match cancelled mid-rally");
            self.transition(MatchAction::Quit);
            return;
        }

        let winner = crate::step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.rng,
            input,
        );

        for sound in self.events.sounds() {
            frontend.play(sound);
        }

        if let Some(winner) = winner {
            info!(
                winner = winner.label(),
                ai = self.score.left,
                player = self.score.right,
                "round over"
            );
            self.winner = Some(winner);
            self.rounds_played += 1;
            self.transition(MatchAction::RoundWon);
        }

        if let Some(frame) = self.frame() {
            frontend.render(&frame);
        }
    }

    fn show_result<F: Frontend + ?Sized>(&mut self, frontend: &mut F) {
        let subtext = format!(
            "Player: {}  AI: {}\nPlay Again? (Y/N)",
            self.score.right, self.score.left
        );
        frontend.show_message(self.result_message(), Some(subtext.as_str()));
        self.transition(MatchAction::ResultShown);
    }

    fn tick_prompt(&mut self, input: &InputState) {
        match input.key {
            Some(KeyPress::Affirm) => {
                info!("starting a new round");
                self.restart_round();
                self.transition(MatchAction::PlayAgain);
            }
            Some(KeyPress::Decline) => {
                info!("player declined another round");
                self.transition(MatchAction::Decline);
            }
            Some(KeyPress::Cancel) => {
                info!("replay prompt cancelled");
                self.transition(MatchAction::Quit);
            }
            None => {}
        }
    }

    /// Headline for the round-over screen
    pub fn result_message(&self) -> &'static str {
        match self.winner {
            Some(Side::Right) => "You Win!",
            Some(Side::Left) => "You Lose! The AI prevailed.",
            None => "Game Over!",
        }
    }

    /// Reset scores, paddles and ball for a fresh round
    pub fn restart_round(&mut self) {
        self.score.reset();
        self.events.clear();
        self.winner = None;
        self.world.clear();
        crate::spawn_round(&mut self.world, &self.config, &mut self.rng);
    }

    /// Snapshot of the court for rendering
    pub fn frame(&self) -> Option<Frame> {
        let mut left_paddle = None;
        let mut right_paddle = None;
        for (_e, paddle) in self.world.query::<&Paddle>().iter() {
            match paddle.side {
                Side::Left => left_paddle = Some(paddle.rect()),
                Side::Right => right_paddle = Some(paddle.rect()),
            }
        }
        let ball = self
            .world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, ball)| ball.rect());

        Some(Frame {
            left_paddle: left_paddle?,
            right_paddle: right_paddle?,
            ball: ball?,
            score: self.score,
        })
    }
}
