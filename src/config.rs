use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub words: WordListConfig,
    pub board: BoardConfig,
    pub solver: SolverConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WordListConfig {
    pub dictionary_path: String,
    pub common_words_path: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoardSource {
    /// Read rows of tiles from standard input
    Stdin,
    /// Generate a random board
    Random,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoardConfig {
    pub size: usize,
    pub source: BoardSource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SolverConfig {
    /// Search each starting cell on its own worker
    pub concurrent: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from any key lookup (the environment, or a map in tests)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let words = WordListConfig {
            dictionary_path: var("DICTIONARY_PATH", "./data/all.txt"),
            common_words_path: var("COMMON_WORDS_PATH", "./data/common.txt"),
        };

        let size: usize = var("BOARD_SIZE", "4")
            .parse()
            .context("BOARD_SIZE must be a number")?;
        if size == 0 {
            bail!("BOARD_SIZE must be at least 1");
        }

        let source = match var("BOARD_SOURCE", "stdin").to_lowercase().as_str() {
            "stdin" => BoardSource::Stdin,
            "random" => BoardSource::Random,
            other => bail!("BOARD_SOURCE must be 'stdin' or 'random', got '{}'", other),
        };

        let concurrent: bool = var("SOLVER_CONCURRENT", "false")
            .parse()
            .context("SOLVER_CONCURRENT must be true or false")?;

        let format = match var("OUTPUT_FORMAT", "text").to_lowercase().as_str() {
            "text" => OutputFormat::Text,
            "json" => OutputFormat::Json,
            other => bail!("OUTPUT_FORMAT must be 'text' or 'json', got '{}'", other),
        };

        Ok(Config {
            words,
            board: BoardConfig { size, source },
            solver: SolverConfig { concurrent },
            output: OutputConfig { format },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.words.dictionary_path, "./data/all.txt");
        assert_eq!(config.words.common_words_path, "./data/common.txt");
        assert_eq!(config.board.size, 4);
        assert_eq!(config.board.source, BoardSource::Stdin);
        assert!(!config.solver.concurrent);
        assert_eq!(config.output.format, OutputFormat::Text);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("BOARD_SIZE", "5"),
            ("BOARD_SOURCE", "Random"),
            ("SOLVER_CONCURRENT", "true"),
            ("OUTPUT_FORMAT", "json"),
            ("DICTIONARY_PATH", "/tmp/words.txt"),
        ])
        .unwrap();
        assert_eq!(config.board.size, 5);
        assert_eq!(config.board.source, BoardSource::Random);
        assert!(config.solver.concurrent);
        assert_eq!(config.output.format, OutputFormat::Json);
        assert_eq!(config.words.dictionary_path, "/tmp/words.txt");
    }

    #[test]
    fn test_invalid_values() {
        assert!(config_from(&[("BOARD_SIZE", "four")]).is_err());
        assert!(config_from(&[("BOARD_SIZE", "0")]).is_err());
        assert!(config_from(&[("BOARD_SOURCE", "file")]).is_err());
        assert!(config_from(&[("SOLVER_CONCURRENT", "maybe")]).is_err());
        assert!(config_from(&[("OUTPUT_FORMAT", "xml")]).is_err());
    }
}
