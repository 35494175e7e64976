use std::fmt::Write;

use anyhow::Result;
use serde::Serialize;

use crate::{
    config::OutputFormat,
    game::Scorer,
    models::{Board, Position, Solution, WordMatch},
};

/// Everything printed for a solved board
#[derive(Debug, Serialize)]
pub struct Report<'a> {
    pub size: usize,
    pub board: Vec<&'a [String]>,
    pub traversed: u64,
    pub matches: &'a [WordMatch],
    pub common_words: Vec<&'a str>,
    pub uncommon_words: Vec<&'a str>,
    pub score: u32,
}

impl<'a> Report<'a> {
    pub fn new(board: &'a Board, solution: &'a Solution) -> Self {
        Self {
            size: board.size(),
            board: board.rows().collect(),
            traversed: solution.traversed,
            matches: &solution.matches,
            common_words: solution.common_words(),
            uncommon_words: solution.uncommon_words(),
            score: Scorer::total_score(solution),
        }
    }

    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    fn to_text(&self) -> String {
        let mut out = String::new();

        for m in self.matches {
            // Writing to a String cannot fail
            let _ = writeln!(out, "Found {:?} via {}", m.word, format_path(&m.path));
        }

        let _ = writeln!(out, "\n===");
        let _ = writeln!(
            out,
            "Checked {} different paths and found {} common words:",
            self.traversed,
            self.common_words.len()
        );
        for word in &self.common_words {
            let _ = writeln!(out, "  {}", word);
        }
        let _ = writeln!(
            out,
            "and {} uncommon words: [{}]",
            self.uncommon_words.len(),
            self.uncommon_words.join(" ")
        );
        let _ = writeln!(out, "Total score: {}", self.score);

        out
    }
}

fn format_path(path: &[Position]) -> String {
    path.iter()
        .map(Position::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
