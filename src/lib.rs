#![warn(missing_docs)]

//! # `gokigen`
//!
//! A solver and generator for [Slant](https://en.wikipedia.org/wiki/Gokigen_Naname) (gokigen naname) puzzles.
//! Build a puzzle object using a [`PuzzleBuilder`](builder::PuzzleBuilder) and call [`solve()`](Puzzle::solve)
//! for an assignment of diagonals, or call [`generate()`](generate::generate) for a fresh puzzle with exactly
//! one solution.
//!
//! # Internals
//! This crate is driven by expressing the puzzle as a Boolean satisfiability problem: one decision variable per
//! cell, true for `\` and false for `/`. A clue digit becomes a cardinality constraint over the up-to-four
//! diagonals able to touch the clued lattice point. The remaining rule, that the chosen diagonals never close a
//! loop, is global; a cycle can span the whole board, so it has no per-cell decomposition. It is enforced by
//! refutation instead: whenever the engine proposes an assignment, the chosen diagonals are laid out as a graph
//! over the lattice points and scanned for cycles, and every cycle found is excluded with a blocking clause
//! before the engine is asked again.
//!
//! Generation runs an annealed local search over candidate clue grids, scoring each candidate by how many cells
//! its clues pin down (discounted by a penalty for every clue spent) and finishing when some candidate pins down
//! every cell, i.e. has exactly one solution. Structurally poor candidates are discarded by a cheap pretest
//! before any solver call.

pub use board::{Puzzle, Solution};
pub use cell::{Clue, Diagonal};
pub use location::Location;

pub(crate) mod board;
mod tests;
pub mod builder;
pub(crate) mod cell;
pub mod generate;
pub(crate) mod graph;
pub(crate) mod location;
pub(crate) mod logic;
pub(crate) mod solver;
