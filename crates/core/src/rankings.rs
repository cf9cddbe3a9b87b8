//! High-score table kept in memory for the lifetime of the process.
//!
//! Only names and scores are tracked; saving the table is left to whoever
//! owns the process.

use crate::types::{DEFAULT_NAME, NAME_LEN, RANKING_SLOTS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ranking {
    pub name: String,
    pub score: u64,
}

/// Fixed-size table sorted by score, highest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rankings {
    entries: Vec<Ranking>,
}

impl Default for Rankings {
    fn default() -> Self {
        Self::new()
    }
}

impl Rankings {
    /// Ten placeholder entries, all scoring zero.
    pub fn new() -> Self {
        Self {
            entries: vec![
                Ranking {
                    name: DEFAULT_NAME.to_string(),
                    score: 0,
                };
                RANKING_SLOTS
            ],
        }
    }

    pub fn entries(&self) -> &[Ranking] {
        &self.entries
    }

    fn lowest(&self) -> u64 {
        self.entries.last().map_or(0, |r| r.score)
    }

    /// A score makes the table when it beats the lowest tracked entry.
    pub fn is_top_score(&self, score: u64) -> bool {
        score > self.lowest()
    }

    /// Insert a new entry and drop the lowest one. Entries with an equal
    /// score keep their place ahead of the newcomer.
    ///
    /// Returns the position the entry landed at, or `None` if it did not
    /// make the table.
    pub fn record(&mut self, name: &str, score: u64) -> Option<usize> {
        if !self.is_top_score(score) {
            return None;
        }
        let at = self
            .entries
            .iter()
            .position(|r| r.score < score)
            .unwrap_or(self.entries.len());
        self.entries.insert(
            at,
            Ranking {
                name: name.to_string(),
                score,
            },
        );
        self.entries.truncate(RANKING_SLOTS);
        tracing::info!(name, score, position = at, "recorded ranking");
        Some(at)
    }
}

/// Three-letter initials editor.
///
/// Starts at "AAA" with the cursor on the first letter. Letters cycle
/// through `A..=Z` and the cursor wraps around both ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitialsEntry {
    letters: [u8; NAME_LEN],
    cursor: usize,
}

impl Default for InitialsEntry {
    fn default() -> Self {
        Self::new()
    }
}

impl InitialsEntry {
    pub fn new() -> Self {
        Self {
            letters: [b'A'; NAME_LEN],
            cursor: 0,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn name(&self) -> String {
        self.letters.iter().map(|&b| b as char).collect()
    }

    pub fn next_letter(&mut self) {
        let c = &mut self.letters[self.cursor];
        *c = if *c >= b'Z' { b'A' } else { *c + 1 };
    }

    pub fn prev_letter(&mut self) {
        let c = &mut self.letters[self.cursor];
        *c = if *c <= b'A' { b'Z' } else { *c - 1 };
    }

    pub fn move_left(&mut self) {
        self.cursor = (self.cursor + NAME_LEN - 1) % NAME_LEN;
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1) % NAME_LEN;
    }
}
