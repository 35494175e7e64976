use crate::models::Solution;

pub struct Scorer;

impl Scorer {
    /// Points for a single word.
    ///
    /// Scoring rules (Boggle), by character count:
    /// - 3 or 4 letters: 1
    /// - 5 letters: 2
    /// - 6 letters: 3
    /// - 7 letters: 5
    /// - 8 or more: 11
    pub fn word_score(word: &str) -> u32 {
        match word.chars().count() {
            0..=2 => 0,
            3 | 4 => 1,
            5 => 2,
            6 => 3,
            7 => 5,
            _ => 11,
        }
    }

    /// Total score of every distinct word found, each counted once
    pub fn total_score(solution: &Solution) -> u32 {
        solution
            .common_words()
            .into_iter()
            .chain(solution.uncommon_words())
            .map(Self::word_score)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Position, WordMatch};

    #[test]
    fn test_word_score() {
        assert_eq!(Scorer::word_score("at"), 0);
        assert_eq!(Scorer::word_score("sun"), 1);
        assert_eq!(Scorer::word_score("four"), 1);
        assert_eq!(Scorer::word_score("furor"), 2);
        assert_eq!(Scorer::word_score("ensure"), 3);
        assert_eq!(Scorer::word_score("sunrise"), 5);
        assert_eq!(Scorer::word_score("questing"), 11);
    }

    #[test]
    fn test_total_counts_each_word_once() {
        let word_match = |word: &str, common: bool| WordMatch {
            path: vec![Position::new(0, 0)],
            word: word.to_string(),
            common,
        };
        let solution = Solution {
            matches: vec![
                word_match("fur", false),
                word_match("fur", false),
                word_match("ensure", true),
                word_match("furor", false),
            ],
            traversed: 4,
        };

        // fur(1) + ensure(3) + furor(2)
        assert_eq!(Scorer::total_score(&solution), 6);
    }
}
