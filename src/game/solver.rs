use std::sync::Arc;

use anyhow::{Context, Result};
use futures::future::try_join_all;

use crate::{
    dictionary::Dictionary,
    game::validator::PathValidator,
    models::{Board, Position, Solution, WordMatch},
};

/// Neighbor offsets as (row, col), in the order paths are extended:
/// up, down, left, right, then the four diagonals.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (0, -1),
    (0, 1),
    (-1, 0),
    (1, 0),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
];

/// Minimum word length in characters (not tiles)
pub const MIN_WORD_LENGTH: usize = 3;

/// Enumerates every non-repeating 8-connected path on a board and reports
/// the ones that spell dictionary words.
///
/// Matches come out in breadth-first order: shorter paths first, and within
/// one length, ordered by seed cell (row-major) then by the neighbor offset
/// chosen at each step. Each seed subtree is walked depth-first with offsets
/// tried in order, which visits that subtree's paths in exactly this
/// lexicographic order; a stable sort by path length then interleaves the
/// subtrees into the breadth-first order without keeping a whole level of
/// paths in memory.
pub struct Solver<'a> {
    board: &'a Board,
    dictionary: &'a Dictionary,
    common_words: &'a Dictionary,
}

/// Mutable state of one depth-first walk
struct Walk {
    path: Vec<Position>,
    visited: Vec<bool>,
    word: String,
    word_chars: usize,
    matches: Vec<WordMatch>,
    traversed: u64,
}

impl<'a> Solver<'a> {
    pub fn new(board: &'a Board, dictionary: &'a Dictionary, common_words: &'a Dictionary) -> Self {
        Self {
            board,
            dictionary,
            common_words,
        }
    }

    /// Search every path starting from every cell
    pub fn solve(&self) -> Solution {
        merge(self.board.positions().map(|seed| self.solve_from(seed)))
    }

    /// Search every path whose first cell is `seed`.
    /// Matches are in depth-first order; use [`merge`] to combine seeds.
    pub fn solve_from(&self, seed: Position) -> Solution {
        let cells = self.board.size() * self.board.size();
        let mut walk = Walk {
            path: Vec::with_capacity(cells),
            visited: vec![false; cells],
            word: String::new(),
            word_chars: 0,
            matches: Vec::new(),
            traversed: 0,
        };

        self.visit(seed, &mut walk);

        tracing::debug!(
            "Seed {} visited {} paths, {} matches",
            seed,
            walk.traversed,
            walk.matches.len()
        );

        Solution {
            matches: walk.matches,
            traversed: walk.traversed,
        }
    }

    /// In-bounds neighbors of `pos`, in offset order
    fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(move |&(d_row, d_col)| pos.offset(d_row, d_col, self.board.size()))
    }

    fn visit(&self, pos: Position, walk: &mut Walk) {
        let index = self.board.index(pos);
        let word_len = walk.word.len();

        walk.path.push(pos);
        walk.visited[index] = true;
        walk.word.push_str(self.board.tile(pos));
        walk.word_chars += self.board.tile_len(pos);
        walk.traversed += 1;

        if walk.word_chars >= MIN_WORD_LENGTH && self.dictionary.contains(&walk.word) {
            debug_assert!(PathValidator::is_valid_path(self.board, &walk.path));
            debug_assert_eq!(PathValidator::resolve(self.board, &walk.path), walk.word);
            walk.matches.push(WordMatch {
                path: walk.path.clone(),
                word: walk.word.clone(),
                common: self.common_words.contains(&walk.word),
            });
        }

        for next in self.neighbors(pos) {
            if !walk.visited[self.board.index(next)] {
                self.visit(next, walk);
            }
        }

        walk.word_chars -= self.board.tile_len(pos);
        walk.word.truncate(word_len);
        walk.visited[index] = false;
        walk.path.pop();
    }
}

/// Combine per-seed results, given in row-major seed order, into breadth-first order
pub fn merge(partials: impl IntoIterator<Item = Solution>) -> Solution {
    let mut solution = Solution::default();
    for partial in partials {
        solution.traversed += partial.traversed;
        solution.matches.extend(partial.matches);
    }
    // Stable: ties keep seed order, then depth-first order within the seed
    solution.matches.sort_by_key(|m| m.path.len());
    solution
}

/// Search each seed cell on its own blocking worker and merge the results.
/// Produces the same solution as [`Solver::solve`].
pub async fn solve_concurrent(
    board: Arc<Board>,
    dictionary: Arc<Dictionary>,
    common_words: Arc<Dictionary>,
) -> Result<Solution> {
    let seeds: Vec<Position> = board.positions().collect();

    let workers = seeds.into_iter().map(|seed| {
        let board = board.clone();
        let dictionary = dictionary.clone();
        let common_words = common_words.clone();
        tokio::task::spawn_blocking(move || {
            Solver::new(&board, &dictionary, &common_words).solve_from(seed)
        })
    });

    let partials = try_join_all(workers)
        .await
        .context("solver worker failed")?;

    Ok(merge(partials))
}
