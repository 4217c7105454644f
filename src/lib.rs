//! Terminal Tic-Tac-Toe against an exhaustive minimax opponent
//!
//! This crate provides:
//! - A complete 3x3 board model with win and tie detection
//! - Alpha-beta minimax search that always reads the game out to the end
//! - An interactive game loop with validated terminal input

pub mod board;
pub mod error;
pub mod lines;
pub mod play;
pub mod search;

pub use board::{Action, Board, Cell, Mark, Outcome};
pub use error::{Error, Result};
pub use play::{GameConfig, Turn};
pub use search::{Side, best_move, minimax};
