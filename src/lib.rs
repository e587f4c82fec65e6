//! # Jump In' Solver Library
//!
//! This library provides the rule engine for the Jump In' sliding puzzle, in which
//! rabbits must reach the brown holes of a 5x5 board by jumping over obstacles
//! while two-cell foxes slide along a fixed axis, and a breadth-first solver that
//! finds the shortest winning sequence of moves from any configuration.
//!
//! It is used by three binaries:
//! - `human_player`: Interactive play in the terminal, with hints, undo and redo.
//! - `ai_solver`: Takes a board configuration and prints an optimal solution.
//! - `level_generator`: Scrambles solved boards into new puzzles and reports
//!   their optimal solution lengths.
//!
//! ## Modules
//! - `engine`: Tiles, the `Board`, move legality, move enumeration and win detection.
//! - `piece`: The piece families (mushroom, rabbit, fox half) and their short codes.
//! - `moves`: The `Move` value and its axis classification.
//! - `node`: Search-graph vertices wrapping immutable board snapshots.
//! - `solver`: Breadth-first search, path cleaning and cached hints.
//! - `game`: Play sessions with undo, redo and hints.
//! - `levels`: Built-in puzzle layouts.
//! - `generator`: Seeded random puzzle scrambling.
//! - `utils`: Text parsing helpers for boards.
//! - `error`: Error types for board parsing.

pub mod engine;
pub mod error;
pub mod game;
pub mod generator;
pub mod levels;
pub mod moves;
pub mod node;
pub mod piece;
pub mod solver;
pub mod utils;

pub use engine::Board;
pub use moves::Move;
pub use solver::Solver;
