//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Explicit delta-time only, no wall-clock reads
//! - Seeded RNG only
//! - Stable iteration order (by entity ID)
//! - No rendering or platform dependencies

pub mod collision;
pub mod difficulty;
pub mod enemies;
pub mod janken;
pub mod session;
pub mod state;

pub use collision::{CollisionHit, resolve_collisions};
pub use difficulty::{DifficultyConfig, DifficultyCurve};
pub use enemies::{Enemy, EnemyRegistry};
pub use janken::{HandPair, HandType, Outcome, Side, judge};
pub use session::{FrameSnapshot, GameSession, PlayerHandSource};
pub use state::{GameEvent, GameEventKind, GameState, Phase};
