//! Falling enemy entities
//!
//! The registry owns every active enemy, advances their descent each tick,
//! and drops entities unconditionally once they cross the despawn boundary
//! below the player band. Entities are addressed by stable ids, never by
//! index, so removal order can't skip neighbours. A single optional preview
//! slot telegraphs the next spawn without taking part in collisions.

use serde::{Deserialize, Serialize};

use super::janken::{HandType, Side};
use crate::consts::{DESPAWN_MARGIN, PLAYER_BAND_POSITION, PREVIEW_POSITION, SPAWN_POSITION};

/// A falling enemy hand
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Enemy {
    /// Stable identifier, unique for the enemy's lifetime
    pub id: u32,
    pub hand: HandType,
    pub side: Side,
    /// Position on the vertical axis; the player band sits at zero
    pub position: f32,
    /// Descent speed in units/s
    pub speed: f32,
    /// Preview markers never move and never collide
    pub is_preview: bool,
}

/// Owner of the active enemy collection
#[derive(Debug, Clone)]
pub struct EnemyRegistry {
    /// Active enemies in spawn order (ids strictly increasing)
    enemies: Vec<Enemy>,
    preview: Option<Enemy>,
    next_id: u32,
    spawn_position: f32,
    preview_position: f32,
    despawn_boundary: f32,
}

impl Default for EnemyRegistry {
    fn default() -> Self {
        Self::new(SPAWN_POSITION, PREVIEW_POSITION, DESPAWN_MARGIN)
    }
}

impl EnemyRegistry {
    /// Build a registry with an explicit axis layout
    pub fn new(spawn_position: f32, preview_position: f32, despawn_margin: f32) -> Self {
        Self {
            enemies: Vec::new(),
            preview: None,
            next_id: 1,
            spawn_position,
            preview_position,
            despawn_boundary: PLAYER_BAND_POSITION - despawn_margin,
        }
    }

    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Create a new enemy at the spawn boundary and return its id
    pub fn spawn(&mut self, hand: HandType, side: Side, speed: f32) -> u32 {
        let id = self.next_entity_id();
        self.enemies.push(Enemy {
            id,
            hand,
            side,
            position: self.spawn_position,
            speed,
            is_preview: false,
        });
        id
    }

    /// Advance every enemy's descent and drop the ones past the despawn
    /// boundary
    ///
    /// Despawning is unconditional and independent of collision checks: an
    /// enemy nobody judged simply disappears with no score or life effect.
    pub fn advance(&mut self, dt: f32) {
        let boundary = self.despawn_boundary;
        for enemy in &mut self.enemies {
            enemy.position -= enemy.speed * dt;
        }
        self.enemies.retain(|e| e.position >= boundary);
    }

    /// Remove an enemy by id; no-op when the id is unknown
    pub fn remove(&mut self, id: u32) {
        self.enemies.retain(|e| e.id != id);
    }

    /// Read-only view of the active enemies
    pub fn all(&self) -> &[Enemy] {
        &self.enemies
    }

    pub fn len(&self) -> usize {
        self.enemies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enemies.is_empty()
    }

    /// Drop every enemy and the preview slot (session restart)
    pub fn clear(&mut self) {
        self.enemies.clear();
        self.preview = None;
    }

    /// Create or replace the preview marker for the upcoming spawn
    pub fn set_preview(&mut self, hand: HandType, side: Side) {
        let id = self.next_entity_id();
        self.preview = Some(Enemy {
            id,
            hand,
            side,
            position: self.preview_position,
            speed: 0.0,
            is_preview: true,
        });
    }

    /// The current preview marker, if any
    pub fn preview(&self) -> Option<&Enemy> {
        self.preview.as_ref()
    }

    pub fn clear_preview(&mut self) {
        self.preview = None;
    }

    /// Materialize the preview as a real enemy at the given speed
    ///
    /// Equivalent to `spawn` with the preview's stored hand and side; the
    /// slot is emptied either way. Returns the new enemy's id, or `None`
    /// when no preview was set.
    pub fn consume_preview(&mut self, speed: f32) -> Option<u32> {
        let preview = self.preview.take()?;
        Some(self.spawn(preview.hand, preview.side, speed))
    }
}
