//! Data-driven game balance
//!
//! Every recognized knob of the simulation in one load-time struct: lives,
//! scoring, the collision band, axis layout and the difficulty table. Values
//! are fixed once the session is built; nothing here mutates at runtime.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::sim::DifficultyConfig;

/// Load-time configuration for a session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub initial_lives: u8,
    pub score_per_win: u32,
    pub life_loss_on_lose: u8,
    pub life_loss_on_draw: u8,
    /// Strict distance threshold around the player band
    pub collision_threshold: f32,
    /// How far past the band an enemy may fall before despawning
    pub despawn_margin: f32,
    pub spawn_position: f32,
    pub preview_position: f32,
    /// Descent speed (units/s) at a 1.0 difficulty multiplier
    pub enemy_base_speed: f32,
    /// Ordered per-level difficulty entries
    pub difficulty_table: Vec<DifficultyConfig>,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_lives: INITIAL_LIVES,
            score_per_win: SCORE_PER_WIN,
            life_loss_on_lose: LIFE_LOSS_ON_LOSE,
            life_loss_on_draw: LIFE_LOSS_ON_DRAW,
            collision_threshold: COLLISION_THRESHOLD,
            despawn_margin: DESPAWN_MARGIN,
            spawn_position: SPAWN_POSITION,
            preview_position: PREVIEW_POSITION,
            enemy_base_speed: ENEMY_BASE_SPEED,
            difficulty_table: DifficultyConfig::default_table(),
        }
    }
}

impl Tuning {
    /// Load tuning from a JSON file, falling back to defaults on any error
    pub fn from_json_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(tuning) => {
                    log::info!("loaded tuning from {}", path.display());
                    tuning
                }
                Err(err) => {
                    log::warn!("invalid tuning file {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no tuning file at {}, using defaults", path.display());
                Self::default()
            }
        }
    }
}
