pub mod grid;
pub mod scorer;
pub mod solver;
pub mod validator;

pub use grid::BoardGenerator;
pub use scorer::Scorer;
pub use solver::{solve_concurrent, Solver};
