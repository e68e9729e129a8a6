//! Run leaderboard
//!
//! Keeps the best 10 finished runs of this process, in memory only. Runs are
//! ranked by score, and coins collected break score ties.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// Maximum number of runs kept on the board
pub const MAX_HIGH_SCORES: usize = 10;

/// A single finished run, captured at the moment of game over
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunRecord {
    pub score: u64,
    pub coins: u32,
    /// Frames survived
    pub frames: u64,
}

impl RunRecord {
    /// Board order: higher score first, then more coins
    fn rank_cmp(&self, other: &RunRecord) -> Ordering {
        other
            .score
            .cmp(&self.score)
            .then(other.coins.cmp(&self.coins))
    }
}

/// Best runs, sorted best first
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct HighScores {
    pub entries: Vec<RunRecord>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot the run would take, if it makes the board at all.
    /// A run tying an existing one on score and coins goes behind it.
    fn slot_for(&self, run: &RunRecord) -> Option<usize> {
        if run.score == 0 {
            return None;
        }
        let slot = self
            .entries
            .iter()
            .position(|e| run.rank_cmp(e) == Ordering::Less)
            .unwrap_or(self.entries.len());
        (slot < MAX_HIGH_SCORES).then_some(slot)
    }

    /// Record a finished run. Returns its 1-based rank, or None if it missed the board.
    pub fn record(&mut self, run: RunRecord) -> Option<usize> {
        let slot = self.slot_for(&run)?;
        self.entries.insert(slot, run);
        self.entries.truncate(MAX_HIGH_SCORES);
        log::debug!(
            "Run scored {} with {} coins (rank {})",
            run.score,
            run.coins,
            slot + 1
        );
        Some(slot + 1)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Best score on the board
    pub fn top_score(&self) -> Option<u64> {
        self.entries.first().map(|e| e.score)
    }
}
