pub mod board;
pub mod solution;

pub use board::{Board, BoardError, Position};
pub use solution::{Solution, WordMatch};
