use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::Position;

/// A path on the board that spells a dictionary word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordMatch {
    pub path: Vec<Position>,
    pub word: String,
    /// True iff the word is in the common-words list
    pub common: bool,
}

/// Result of a full board search
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Every matching path, in breadth-first discovery order.
    /// The same word reached by different paths appears once per path.
    pub matches: Vec<WordMatch>,
    /// Number of paths visited, matching or not
    pub traversed: u64,
}

impl Solution {
    /// Distinct common words, sorted ascending
    pub fn common_words(&self) -> Vec<&str> {
        self.distinct_words(true)
    }

    /// Distinct uncommon words, sorted ascending
    pub fn uncommon_words(&self) -> Vec<&str> {
        self.distinct_words(false)
    }

    fn distinct_words(&self, common: bool) -> Vec<&str> {
        self.matches
            .iter()
            .filter(|m| m.common == common)
            .map(|m| m.word.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}
