use std::collections::HashSet;
use std::path::Path;
use tokio::fs;
use anyhow::{Context, Result};

/// A set of lowercase words used for membership tests
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Load a whitespace-separated word list from a file
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("reading word list {}", path.display()))?;
        let dictionary = Self::parse(&content);

        tracing::info!("Loaded {} words from {}", dictionary.len(), path.display());

        Ok(dictionary)
    }

    /// Build a dictionary from whitespace-separated words, ignoring case
    pub fn parse(input: &str) -> Self {
        let words = input
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();

        Self { words }
    }

    /// Create an empty dictionary
    pub fn empty() -> Self {
        Self::default()
    }

    /// Check if a word exists in the dictionary. `word` must already be lowercase.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of words in the dictionary
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if dictionary is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
