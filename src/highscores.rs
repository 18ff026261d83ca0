//! Persisted high score
//!
//! The simulation touches the store only at game-over: read the record,
//! write back only when it was beaten. Where the record actually lives is a
//! host concern; this module ships a volatile store for tests and demos and
//! a JSON file store for native hosts.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Read/write contract for the single persisted high score
pub trait HighScoreStore {
    /// The stored record; zero when nothing has been recorded yet
    fn get_high_score(&self) -> u32;

    /// Store `score` if it beats the record
    ///
    /// Writes only on a strict improvement and returns whether a new record
    /// was set.
    fn save_high_score(&mut self, score: u32) -> bool;
}

/// Volatile in-memory store
#[derive(Debug, Clone, Copy, Default)]
pub struct MemoryHighScores {
    best: u32,
}

impl MemoryHighScores {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HighScoreStore for MemoryHighScores {
    fn get_high_score(&self) -> u32 {
        self.best
    }

    fn save_high_score(&mut self, score: u32) -> bool {
        if score > self.best {
            self.best = score;
            true
        } else {
            false
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct HighScoreRecord {
    high_score: u32,
}

/// JSON-file-backed store
///
/// A missing or corrupt file loads as an empty record; write failures are
/// logged and reported as "no record set".
#[derive(Debug)]
pub struct FileHighScores {
    path: PathBuf,
    best: u32,
}

impl FileHighScores {
    /// Open a store at the given path, reading any existing record
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let best = match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str::<HighScoreRecord>(&json) {
                Ok(record) => record.high_score,
                Err(err) => {
                    log::warn!("corrupt high score file {}: {err}", path.display());
                    0
                }
            },
            Err(_) => {
                log::info!("no high score file at {}, starting fresh", path.display());
                0
            }
        };
        Self { path, best }
    }
}

impl HighScoreStore for FileHighScores {
    fn get_high_score(&self) -> u32 {
        self.best
    }

    fn save_high_score(&mut self, score: u32) -> bool {
        if score <= self.best {
            return false;
        }
        let Ok(json) = serde_json::to_string(&HighScoreRecord { high_score: score }) else {
            return false;
        };
        match std::fs::write(&self.path, json) {
            Ok(()) => {
                self.best = score;
                log::info!("high score saved ({score})");
                true
            }
            Err(err) => {
                log::warn!("failed to write high score {}: {err}", self.path.display());
                false
            }
        }
    }
}
