//! Session scalars and event notification
//!
//! Phase, score, lives and defeated count live here and are mutated only
//! through explicit operations. Every mutation publishes a typed event to
//! its subscribers, synchronously and in registration order. Each event type
//! keeps its own listener list; there is no catch-all bus. Delivery holds
//! `&mut self`, so a listener cannot call back into the mutators from inside
//! a notification.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFEATS_PER_LEVEL, INITIAL_LIVES};

/// Current phase of the session
///
/// Owned exclusively by [`GameState`]; transitions are unrestricted here,
/// the orchestrator drives title -> playing -> gameover -> title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    Title,
    Ready,
    Playing,
    GameOver,
}

/// Notification published by [`GameState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PhaseChanged(Phase),
    ScoreChanged(u32),
    LivesChanged(u8),
    /// Lives crossed to zero; carries the score at that instant
    GameOver { score: u32 },
}

/// Event type discriminant used to register listeners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEventKind {
    PhaseChange = 0,
    ScoreChange = 1,
    LivesChange = 2,
    GameOver = 3,
}

impl GameEvent {
    fn kind(&self) -> GameEventKind {
        match self {
            GameEvent::PhaseChanged(_) => GameEventKind::PhaseChange,
            GameEvent::ScoreChanged(_) => GameEventKind::ScoreChange,
            GameEvent::LivesChanged(_) => GameEventKind::LivesChange,
            GameEvent::GameOver { .. } => GameEventKind::GameOver,
        }
    }
}

type Listener = Box<dyn FnMut(&GameEvent)>;

/// Phase, score, lives and defeated count with event publication
pub struct GameState {
    phase: Phase,
    score: u32,
    lives: u8,
    max_lives: u8,
    defeated_count: u32,
    listeners: [Vec<Listener>; 4],
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(INITIAL_LIVES)
    }
}

impl GameState {
    /// Fresh state on the title phase with full lives
    pub fn new(max_lives: u8) -> Self {
        Self {
            phase: Phase::Title,
            score: 0,
            lives: max_lives,
            max_lives,
            defeated_count: 0,
            listeners: [Vec::new(), Vec::new(), Vec::new(), Vec::new()],
        }
    }

    /// Subscribe to one event type
    ///
    /// Listeners fire synchronously, in registration order, for every event
    /// of that type.
    pub fn on(&mut self, kind: GameEventKind, listener: impl FnMut(&GameEvent) + 'static) {
        self.listeners[kind as usize].push(Box::new(listener));
    }

    fn emit(&mut self, event: GameEvent) {
        for listener in &mut self.listeners[event.kind() as usize] {
            listener(&event);
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Change phase; emits only when the phase actually changes
    pub fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            self.phase = phase;
            self.emit(GameEvent::PhaseChanged(phase));
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn add_score(&mut self, points: u32) {
        self.score += points;
        self.emit(GameEvent::ScoreChanged(self.score));
    }

    pub fn reset_score(&mut self) {
        self.score = 0;
        self.emit(GameEvent::ScoreChanged(self.score));
    }

    pub fn lives(&self) -> u8 {
        self.lives
    }

    pub fn max_lives(&self) -> u8 {
        self.max_lives
    }

    /// Lose `amount` lives, clamped at zero
    ///
    /// Emits a lives-change, and exactly one game-over on the transition to
    /// zero; further losses while already at zero stay clamped and do not
    /// re-emit game-over.
    pub fn lose_life(&mut self, amount: u8) {
        let before = self.lives;
        self.lives = self.lives.saturating_sub(amount);
        self.emit(GameEvent::LivesChanged(self.lives));

        if before > 0 && self.lives == 0 {
            let score = self.score;
            log::info!("game over at score {score}");
            self.emit(GameEvent::GameOver { score });
        }
    }

    pub fn reset_lives(&mut self) {
        self.lives = self.max_lives;
        self.emit(GameEvent::LivesChanged(self.lives));
    }

    pub fn defeated_count(&self) -> u32 {
        self.defeated_count
    }

    pub fn increment_defeated_count(&mut self) {
        self.defeated_count += 1;
    }

    pub fn reset_defeated_count(&mut self) {
        self.defeated_count = 0;
    }

    /// Current difficulty level, always derived from the defeated count
    pub fn difficulty_level(&self) -> u32 {
        self.defeated_count / DEFEATS_PER_LEVEL + 1
    }

    /// Start-of-game reset: zero score and defeated count, restore lives
    ///
    /// The phase is left untouched; score and lives changes are re-emitted
    /// so display listeners resync.
    pub fn reset(&mut self) {
        self.score = 0;
        self.defeated_count = 0;
        self.lives = self.max_lives;

        self.emit(GameEvent::ScoreChanged(self.score));
        self.emit(GameEvent::LivesChanged(self.lives));
    }
}

impl fmt::Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameState")
            .field("phase", &self.phase)
            .field("score", &self.score)
            .field("lives", &self.lives)
            .field("defeated_count", &self.defeated_count)
            .finish_non_exhaustive()
    }
}
