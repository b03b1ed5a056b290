pub mod climb;
pub mod runner;

pub use self::climb::{hill_climb, HillClimber, ScoredKey};
pub use self::runner::{solve, ProgressCallback, Solution, Solver};
