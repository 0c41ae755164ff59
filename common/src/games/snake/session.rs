use std::time::Duration;

use crate::games::SessionRng;
use crate::log;
use super::game_state::{SnakeGameState, TickOutcome};
use super::settings::SnakeSessionSettings;
use super::types::{DeathReason, Direction, Food, GameVariant, Point};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    Ready,
    Running,
    Paused,
    GameOver(DeathReason),
}

/// Everything the renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct SnakeSnapshot {
    pub variant: GameVariant,
    pub field_width: usize,
    pub field_height: usize,
    pub snake: Vec<Point>,
    pub direction: Direction,
    pub foods: Vec<Food>,
    pub rocks: Vec<Point>,
    pub score: u32,
    pub high_score: u32,
    pub foods_eaten: u32,
    pub running: bool,
    pub paused: bool,
    pub over: bool,
    pub death_reason: Option<DeathReason>,
    pub tick_interval: Duration,
    pub rock_spawn_interval: Option<Duration>,
}

pub struct SnakeSession {
    settings: SnakeSessionSettings,
    rng: SessionRng,
    state: SnakeGameState,
    status: SessionStatus,
    high_score: u32,
    games_played: u32,
}

impl SnakeSession {
    pub fn new(settings: SnakeSessionSettings, mut rng: SessionRng) -> Self {
        let state = SnakeGameState::new(&settings, &mut rng);
        log!(
            "{} session created on {}x{} field (seed {})",
            settings.variant.title(),
            settings.field_size.width,
            settings.field_size.height,
            rng.seed()
        );
        Self {
            settings,
            rng,
            state,
            status: SessionStatus::Ready,
            high_score: 0,
            games_played: 0,
        }
    }

    /// Session over a hand-built board, used to set up exact positions.
    pub fn with_state(settings: SnakeSessionSettings, rng: SessionRng, state: SnakeGameState) -> Self {
        Self {
            settings,
            rng,
            state,
            status: SessionStatus::Ready,
            high_score: 0,
            games_played: 0,
        }
    }

    pub fn start(&mut self) {
        if self.status == SessionStatus::Ready {
            self.status = SessionStatus::Running;
            self.games_played += 1;
            log!("Game #{} started", self.games_played);
        }
    }

    pub fn tick(&mut self) -> Option<TickOutcome> {
        if self.status != SessionStatus::Running {
            return None;
        }

        let outcome = self.state.update(&self.settings, &mut self.rng);
        self.high_score = self.high_score.max(self.state.score);

        if let TickOutcome::Died(reason) = outcome {
            self.status = SessionStatus::GameOver(reason);
            log!(
                "Game over: {}. Score: {}, high score: {}",
                reason.describe(),
                self.state.score,
                self.high_score
            );
        }

        Some(outcome)
    }

    /// Callback of the slower rock timer.
    pub fn spawn_rock_tick(&mut self) -> Option<Point> {
        if self.status != SessionStatus::Running {
            return None;
        }
        self.state.try_spawn_rock(&self.settings, &mut self.rng)
    }

    pub fn set_direction_intent(&mut self, direction: Direction) {
        if matches!(self.status, SessionStatus::GameOver(_)) {
            return;
        }
        self.state.snake.set_pending_direction(direction);
    }

    pub fn toggle_pause(&mut self) {
        self.status = match self.status {
            SessionStatus::Running => SessionStatus::Paused,
            SessionStatus::Paused => SessionStatus::Running,
            other => other,
        };
    }

    /// Throws the current board away and starts a new game. The high score
    /// survives.
    pub fn restart(&mut self) {
        self.state = SnakeGameState::new(&self.settings, &mut self.rng);
        self.status = SessionStatus::Ready;
        self.start();
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    pub fn is_paused(&self) -> bool {
        self.status == SessionStatus::Paused
    }

    pub fn is_over(&self) -> bool {
        matches!(self.status, SessionStatus::GameOver(_))
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn games_played(&self) -> u32 {
        self.games_played
    }

    pub fn tick_interval(&self) -> Duration {
        self.state.tick_interval
    }

    pub fn rock_spawn_interval(&self) -> Option<Duration> {
        self.settings.rocks.as_ref().map(|rocks| rocks.spawn_interval)
    }

    pub fn state(&self) -> &SnakeGameState {
        &self.state
    }

    pub fn snapshot(&self) -> SnakeSnapshot {
        SnakeSnapshot {
            variant: self.settings.variant,
            field_width: self.settings.field_size.width,
            field_height: self.settings.field_size.height,
            snake: self.state.snake.body.iter().copied().collect(),
            direction: self.state.snake.direction,
            foods: self.state.foods.clone(),
            rocks: self.state.rocks.clone(),
            score: self.state.score,
            high_score: self.high_score,
            foods_eaten: self.state.foods_eaten,
            running: self.is_running(),
            paused: self.is_paused(),
            over: self.is_over(),
            death_reason: self.state.death_reason,
            tick_interval: self.state.tick_interval,
            rock_spawn_interval: self.rock_spawn_interval(),
        }
    }
}
