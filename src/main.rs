mod config;
mod dictionary;
mod game;
mod models;
mod report;
mod utils;

use std::{path::Path, sync::Arc, time::Instant};

use anyhow::{Context, Result};
use config::{BoardSource, Config};
use dictionary::Dictionary;
use game::{BoardGenerator, Solver};
use models::{Board, BoardError};
use report::Report;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing. Logs go to stderr, results to stdout.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "boggle_solver=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let config = Config::from_env()?;
    tracing::debug!("Configuration loaded: {:?}", config);

    let dictionary = load_word_list(&config.words.dictionary_path).await;
    let common_words = load_word_list(&config.words.common_words_path).await;

    let board = match config.board.source {
        BoardSource::Stdin => read_board(config.board.size).await?,
        BoardSource::Random => BoardGenerator::generate(config.board.size)?,
    };
    tracing::info!("Solving board:\n{}", board);

    let started = Instant::now();
    let board = Arc::new(board);
    let solution = if config.solver.concurrent {
        game::solve_concurrent(board.clone(), Arc::new(dictionary), Arc::new(common_words))
            .await?
    } else {
        let board = board.clone();
        tokio::task::spawn_blocking(move || {
            Solver::new(&board, &dictionary, &common_words).solve()
        })
        .await
        .context("solver task failed")?
    };
    tracing::info!(
        "Visited {} paths, found {} matches in {:?}",
        solution.traversed,
        solution.matches.len(),
        started.elapsed()
    );

    let output = Report::new(&board, &solution).render(config.output.format)?;
    print!("{}", output);

    Ok(())
}

/// Load a word list, falling back to an empty one so the search still runs
async fn load_word_list(path: &str) -> Dictionary {
    match Dictionary::load(path).await {
        Ok(dict) => {
            if dict.is_empty() {
                tracing::warn!("Word list {} is empty", path);
            }
            dict
        }
        Err(e) => {
            tracing::warn!("Failed to load word list: {:#}. Using empty word list.", e);
            tracing::warn!(
                "Download a word list to {} for full functionality",
                Path::new(path).display()
            );
            Dictionary::empty()
        }
    }
}

/// Prompt for and read `size` rows of space-separated tiles from stdin
async fn read_board(size: usize) -> Result<Board> {
    println!("Input your Boggle board, separating tiles with spaces:");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut input = String::new();
    let mut rows = 0;

    while rows < size {
        let Some(line) = lines.next_line().await.context("reading input")? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        // Reject a bad row now rather than after the whole board is typed
        let found = line.split_whitespace().count();
        if found != size {
            return Err(BoardError::WrongTileCount {
                row: rows,
                expected: size,
                found,
            }
            .into());
        }
        input.push_str(line);
        input.push('\n');
        rows += 1;
    }

    Ok(Board::parse(&input, size)?)
}
