//! Best-first solver for the N x N sliding puzzle.
//!
//! The engine in [`solver`] combines a [`Heuristic`](traits::search::Heuristic)
//! with an [`OrderingPolicy`](traits::search::OrderingPolicy): Manhattan
//! distance or misplaced tiles, ordered greedily or by moves plus heuristic.
//! Unsolvable start boards and runs that exceed their iteration budget are
//! retried from a fresh board supplied by a [`StartGenerator`](traits::search::StartGenerator).

pub mod config;
pub mod frontier;
pub mod generator;
pub mod heuristic;
pub mod ordering;
pub mod puzzle;
pub mod solvability;
pub mod solver;
pub mod tile;
pub mod traits;
pub mod util;


pub use config::SearchConfig;
pub use heuristic::HeuristicKind;
pub use ordering::OrderingKind;
pub use puzzle::{Direction, Puzzle, PuzzleError};
pub use solver::{Outcome, RestartReason, SearchEvent, Snapshot, Solution, SolveError, Solver};
