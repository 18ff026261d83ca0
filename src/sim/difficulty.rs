//! Difficulty progression
//!
//! A fixed table maps difficulty levels to spawn cadence, descent speed and
//! spawn-pattern flags. Levels past the end of the table extrapolate from the
//! last entry so a long run keeps getting harder. The next-hands draw is the
//! single stochastic element of the core and runs on an injected RNG.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::janken::{HandPair, HandType};
use crate::consts::{DEFEATS_PER_LEVEL, ENEMY_BASE_SPEED};

/// Speed gained per extrapolated level past the table
const EXTRA_SPEED_PER_LEVEL: f32 = 0.3;
/// Interval shaved per extrapolated level past the table
const EXTRA_INTERVAL_PER_LEVEL: f32 = 0.1;
/// Spawn interval never drops below this
const MIN_SPAWN_INTERVAL: f32 = 0.5;

/// Immutable difficulty settings for one level
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyConfig {
    pub level: u32,
    /// Multiplier on the base descent speed
    pub speed_multiplier: f32,
    /// Seconds between spawns
    pub spawn_interval: f32,
    /// Spawn on both sides at once
    pub both_hands: bool,
    /// Allow the two sides to show different hands
    pub random_hands: bool,
}

impl DifficultyConfig {
    /// The stock six-level progression
    pub fn default_table() -> Vec<DifficultyConfig> {
        [
            (1, 1.0, 3.0, false, false),
            (2, 1.2, 2.5, true, false),
            (3, 1.5, 2.0, true, true),
            (4, 1.8, 1.5, true, true),
            (5, 2.2, 1.2, true, true),
            (6, 2.5, 1.0, true, true),
        ]
        .into_iter()
        .map(
            |(level, speed_multiplier, spawn_interval, both_hands, random_hands)| {
                DifficultyConfig {
                    level,
                    speed_multiplier,
                    spawn_interval,
                    both_hands,
                    random_hands,
                }
            },
        )
        .collect()
    }
}

/// Difficulty lookup and next-spawn generation
#[derive(Debug, Clone)]
pub struct DifficultyCurve {
    table: Vec<DifficultyConfig>,
    base_speed: f32,
}

impl Default for DifficultyCurve {
    fn default() -> Self {
        Self::new(DifficultyConfig::default_table(), ENEMY_BASE_SPEED)
    }
}

impl DifficultyCurve {
    /// Build a curve from an ordered level table and a base descent speed
    ///
    /// The table is expected to be sorted by level starting at 1; the stock
    /// table from [`DifficultyConfig::default_table`] satisfies this.
    pub fn new(table: Vec<DifficultyConfig>, base_speed: f32) -> Self {
        debug_assert!(!table.is_empty());
        Self { table, base_speed }
    }

    /// Difficulty level for a defeated count (one level per five wins)
    pub fn level_for(defeated_count: u32) -> u32 {
        defeated_count / DEFEATS_PER_LEVEL + 1
    }

    /// Difficulty settings for a defeated count
    ///
    /// Returns the table entry verbatim while the level is in range. Beyond
    /// the table, the last entry is extended: speed keeps climbing, the
    /// interval keeps shrinking down to its floor, and the pattern flags stay.
    pub fn config_for(&self, defeated_count: u32) -> DifficultyConfig {
        let level = Self::level_for(defeated_count);

        if let Some(config) = self.table.iter().find(|c| c.level == level) {
            return *config;
        }

        let last = self.table[self.table.len() - 1];
        let extra = (level - last.level) as f32;
        DifficultyConfig {
            level,
            speed_multiplier: last.speed_multiplier + extra * EXTRA_SPEED_PER_LEVEL,
            spawn_interval: (last.spawn_interval - extra * EXTRA_INTERVAL_PER_LEVEL)
                .max(MIN_SPAWN_INTERVAL),
            both_hands: last.both_hands,
            random_hands: last.random_hands,
        }
    }

    /// Descent speed (units/s) under the given settings
    pub fn descent_speed(&self, config: &DifficultyConfig) -> f32 {
        self.base_speed * config.speed_multiplier
    }

    /// Draw the hands for the next spawn
    ///
    /// Single-hand levels pick one side and one hand uniformly. Both-hand
    /// levels show the same hand on both sides, except that `random_hands`
    /// levels flip a coin and, on heads, draw the two sides independently.
    pub fn generate_next_hands(&self, config: &DifficultyConfig, rng: &mut impl Rng) -> HandPair {
        if !config.both_hands {
            let left_side = rng.random_bool(0.5);
            let hand = random_hand(rng);
            if left_side {
                HandPair {
                    left: Some(hand),
                    right: None,
                }
            } else {
                HandPair {
                    left: None,
                    right: Some(hand),
                }
            }
        } else {
            let left = random_hand(rng);
            let right = if config.random_hands && rng.random_bool(0.5) {
                random_hand(rng)
            } else {
                left
            };
            HandPair {
                left: Some(left),
                right: Some(right),
            }
        }
    }
}

fn random_hand(rng: &mut impl Rng) -> HandType {
    HandType::ALL[rng.random_range(0..HandType::ALL.len())]
}
