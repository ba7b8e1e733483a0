//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use chess_bot::board::prelude::*;
//! ```

pub use super::{
    Color, FenError, GameOutcome, Minimax, Move, MoveError, Piece, Position, PositionBuilder,
    SearchResult, Square,
};
