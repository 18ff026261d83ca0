//! Collision scan and judgement resolution
//!
//! Each tick the resolver scans the live enemies for entities inside the
//! player's band, judges each one against the player's current hand on that
//! side, and hands the results back. It mutates neither the registry nor the
//! game state; the session applies outcomes and removes matched ids
//! afterwards, which keeps the scan free of the index-shifting hazards a
//! remove-while-iterating design would carry.

use super::enemies::Enemy;
use super::janken::{HandPair, HandType, Outcome, Side, judge};
use crate::consts::PLAYER_BAND_POSITION;

/// One judged collision, produced and consumed within a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionHit {
    pub enemy_id: u32,
    pub side: Side,
    pub outcome: Outcome,
    pub player_hand: HandType,
    pub enemy_hand: HandType,
}

/// Scan enemies against the player's current hands
///
/// An enemy collides when its distance to the player band is strictly less
/// than `threshold`. Sides where the player shows no hand are skipped even
/// when an enemy is in range; previews never collide. Every qualifying enemy
/// yields its own independent hit, at most one per enemy per tick.
pub fn resolve_collisions(
    player: &HandPair,
    enemies: &[Enemy],
    threshold: f32,
) -> Vec<CollisionHit> {
    let mut hits = Vec::new();

    for enemy in enemies {
        if enemy.is_preview {
            continue;
        }
        let Some(player_hand) = player.get(enemy.side) else {
            continue;
        };
        let distance = (enemy.position - PLAYER_BAND_POSITION).abs();
        if distance < threshold {
            hits.push(CollisionHit {
                enemy_id: enemy.id,
                side: enemy.side,
                outcome: judge(player_hand, enemy.hand),
                player_hand,
                enemy_hand: enemy.hand,
            });
        }
    }

    hits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::COLLISION_THRESHOLD;

    fn enemy(id: u32, hand: HandType, side: Side, position: f32) -> Enemy {
        Enemy {
            id,
            hand,
            side,
            position,
            speed: 100.0,
            is_preview: false,
        }
    }

    fn both_rock() -> HandPair {
        HandPair {
            left: Some(HandType::Rock),
            right: Some(HandType::Rock),
        }
    }

    #[test]
    fn test_threshold_is_strict() {
        let at_threshold = [enemy(1, HandType::Scissors, Side::Left, 50.0)];
        let hits = resolve_collisions(&both_rock(), &at_threshold, COLLISION_THRESHOLD);
        assert!(hits.is_empty(), "exactly 50 units away must not collide");

        let just_inside = [enemy(1, HandType::Scissors, Side::Left, 49.999)];
        let hits = resolve_collisions(&both_rock(), &just_inside, COLLISION_THRESHOLD);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].outcome, Outcome::Win);
    }

    #[test]
    fn test_distance_is_absolute() {
        // An enemy just past the band (negative position) still collides.
        let below = [enemy(1, HandType::Paper, Side::Right, -30.0)];
        let hits = resolve_collisions(&both_rock(), &below, COLLISION_THRESHOLD);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].outcome, Outcome::Lose);
    }

    #[test]
    fn test_null_hand_skips_side() {
        let player = HandPair {
            left: None,
            right: Some(HandType::Rock),
        };
        let enemies = [
            enemy(1, HandType::Scissors, Side::Left, 0.0),
            enemy(2, HandType::Scissors, Side::Right, 0.0),
        ];

        let hits = resolve_collisions(&player, &enemies, COLLISION_THRESHOLD);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].enemy_id, 2);
        assert_eq!(hits[0].side, Side::Right);
    }

    #[test]
    fn test_multiple_enemies_each_produce_a_hit() {
        let enemies = [
            enemy(1, HandType::Scissors, Side::Left, 10.0),
            enemy(2, HandType::Rock, Side::Left, -10.0),
            enemy(3, HandType::Paper, Side::Right, 40.0),
        ];

        let hits = resolve_collisions(&both_rock(), &enemies, COLLISION_THRESHOLD);
        assert_eq!(hits.len(), 3);
        assert_eq!(hits[0].outcome, Outcome::Win);
        assert_eq!(hits[1].outcome, Outcome::Draw);
        assert_eq!(hits[2].outcome, Outcome::Lose);
    }

    #[test]
    fn test_preview_never_collides() {
        let mut preview = enemy(1, HandType::Scissors, Side::Left, 0.0);
        preview.is_preview = true;

        let hits = resolve_collisions(&both_rock(), &[preview], COLLISION_THRESHOLD);
        assert!(hits.is_empty());
    }

    #[test]
    fn test_out_of_range_enemy_is_ignored() {
        let enemies = [enemy(1, HandType::Scissors, Side::Left, 300.0)];
        let hits = resolve_collisions(&both_rock(), &enemies, COLLISION_THRESHOLD);
        assert!(hits.is_empty());
    }
}
