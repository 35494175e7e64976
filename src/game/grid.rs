use rand::Rng;

use crate::{
    models::{Board, BoardError},
    utils::letters::{get_cumulative_distribution, tile_for},
};

pub struct BoardGenerator;

impl BoardGenerator {
    /// Generate a new size x size board with weighted letter distribution
    pub fn generate(size: usize) -> Result<Board, BoardError> {
        Self::generate_with(size, &mut rand::rng())
    }

    pub fn generate_with(size: usize, rng: &mut impl Rng) -> Result<Board, BoardError> {
        let cumulative_dist = get_cumulative_distribution();
        let total = cumulative_dist.last().map_or(0.0, |(_, cumulative)| *cumulative);

        let mut rows = Vec::with_capacity(size);

        for _ in 0..size {
            let mut row = Vec::with_capacity(size);
            for _ in 0..size {
                let letter = Self::random_letter(&cumulative_dist, total, rng);
                row.push(tile_for(letter));
            }
            rows.push(row);
        }

        Board::from_rows(rows)
    }

    fn random_letter(cumulative_dist: &[(char, f32)], total: f32, rng: &mut impl Rng) -> char {
        let random_value = rng.random::<f32>() * total;

        for (letter, cumulative) in cumulative_dist {
            if random_value <= *cumulative {
                return *letter;
            }
        }

        'e' // Fallback
    }
}
