//! Rock-paper-scissors primitives and the judgement rule
//!
//! The judgement is total and pure: every (player, enemy) pair maps to
//! exactly one outcome, with no state and no failure mode.

use serde::{Deserialize, Serialize};

/// One of the three playable hands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandType {
    Rock,
    Scissors,
    Paper,
}

impl HandType {
    /// All hands, in cycle order
    pub const ALL: [HandType; 3] = [HandType::Rock, HandType::Scissors, HandType::Paper];

    /// The hand this one defeats
    pub fn beats(self) -> HandType {
        match self {
            HandType::Rock => HandType::Scissors,
            HandType::Scissors => HandType::Paper,
            HandType::Paper => HandType::Rock,
        }
    }
}

/// Left or right player slot, each independently tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

/// Result of a single judgement, seen from the player's side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

/// Per-side hand snapshot
///
/// `None` means no hand is shown (or detected) on that side; the resolver
/// skips such sides entirely. The same shape carries the difficulty curve's
/// next-spawn draw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandPair {
    pub left: Option<HandType>,
    pub right: Option<HandType>,
}

impl HandPair {
    /// Snapshot with both sides empty
    pub const NONE: HandPair = HandPair {
        left: None,
        right: None,
    };

    /// The hand shown on the given side
    pub fn get(self, side: Side) -> Option<HandType> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Judge a player hand against an enemy hand
///
/// Rock beats scissors, scissors beats paper, paper beats rock;
/// identical hands draw.
pub fn judge(player: HandType, enemy: HandType) -> Outcome {
    if player == enemy {
        Outcome::Draw
    } else if player.beats() == enemy {
        Outcome::Win
    } else {
        Outcome::Lose
    }
}
