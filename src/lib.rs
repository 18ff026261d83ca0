//! Janken Rush - a rock-paper-scissors reflex arcade game
//!
//! Core modules:
//! - `sim`: Deterministic session simulation (judgement, difficulty, enemies,
//!   collisions, game state, orchestration)
//! - `tuning`: Data-driven game balance
//! - `highscores`: Persisted high-score contract
//!
//! The simulation owns no rendering, camera, or gesture inference. Hosts feed
//! it a per-tick snapshot of the player's current hands and read back a frame
//! snapshot for display.

pub mod highscores;
pub mod sim;
pub mod tuning;

pub use highscores::{FileHighScores, HighScoreStore, MemoryHighScores};
pub use sim::{
    CollisionHit, DifficultyConfig, DifficultyCurve, Enemy, EnemyRegistry, FrameSnapshot,
    GameEvent, GameEventKind, GameSession, GameState, HandPair, HandType, Outcome, Phase,
    PlayerHandSource, Side, judge,
};
pub use tuning::Tuning;

/// Game configuration constants
///
/// Positions live on a single logical vertical axis: the player's band sits at
/// zero, enemies spawn above it and fall toward it. Renderers map these units
/// to pixels however they like.
pub mod consts {
    /// Reference position of the player's band on the vertical axis
    pub const PLAYER_BAND_POSITION: f32 = 0.0;
    /// Where freshly spawned enemies start falling from
    pub const SPAWN_POSITION: f32 = 630.0;
    /// Where the non-colliding preview marker is parked
    pub const PREVIEW_POSITION: f32 = 550.0;
    /// Distance past the player band at which an enemy despawns unconditionally
    pub const DESPAWN_MARGIN: f32 = 100.0;
    /// Strict collision threshold around the player band
    pub const COLLISION_THRESHOLD: f32 = 50.0;

    /// Base enemy descent speed (units/s) before the difficulty multiplier
    pub const ENEMY_BASE_SPEED: f32 = 100.0;
    /// Wins needed per difficulty level
    pub const DEFEATS_PER_LEVEL: u32 = 5;

    /// Lives at session start
    pub const INITIAL_LIVES: u8 = 3;
    /// Score awarded per won judgement
    pub const SCORE_PER_WIN: u32 = 10;
    /// Lives lost on a losing judgement
    pub const LIFE_LOSS_ON_LOSE: u8 = 3;
    /// Lives lost on a drawn judgement
    pub const LIFE_LOSS_ON_DRAW: u8 = 1;
}
