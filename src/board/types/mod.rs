//! Core board types.
//!
//! - `Piece`, `Color` and `PlacedPiece` - piece kinds, sides, and a piece on a square
//! - `Square` - `(file, rank)` coordinate with rank 0 on top
//! - `Move` - a `(from, to)` pair

mod moves;
mod piece;
mod square;

pub use moves::Move;
pub use piece::{Color, Piece, PlacedPiece};
pub use square::Square;
