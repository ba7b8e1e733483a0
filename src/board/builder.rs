//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing strings.
//!
//! # Example
//! ```
//! use chess_bot::board::{PositionBuilder, Color, Piece};
//!
//! let pos = PositionBuilder::new()
//!     .piece("f1".parse().unwrap(), Color::White, Piece::King)
//!     .piece("d8".parse().unwrap(), Color::Black, Piece::King)
//!     .piece("b1".parse().unwrap(), Color::White, Piece::Rook)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(pos.to_fen(), "3k4/8/8/8/8/8/8/1R3K2 w 0 1");
//! ```

use super::{Color, Piece, PlacedPiece, Position, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty position builder.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Place a piece on the board, replacing any piece already there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn remove(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build the position. The outcome is left undetermined; call
    /// `Position::update_outcome` before playing on it.
    ///
    /// # Panics
    /// Panics if a piece was placed on a square outside the board; build
    /// squares with `Square::new` or by parsing to rule that out.
    #[must_use]
    pub fn build(self) -> Position {
        let mut pos = Position::empty();
        for (sq, color, piece) in self.pieces {
            pos.set_piece(sq, Some(PlacedPiece::new(piece, color)));
        }
        pos.side_to_move = self.side_to_move;
        pos.halfmove_clock = self.halfmove_clock;
        pos.fullmove_number = self.fullmove_number;
        pos
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_matches_fen() {
        let pos = PositionBuilder::new()
            .piece(Square(0, 0), Color::Black, Piece::Bishop)
            .piece(Square(3, 0), Color::Black, Piece::King)
            .piece(Square(7, 0), Color::Black, Piece::Bishop)
            .piece(Square(1, 7), Color::White, Piece::Rook)
            .piece(Square(5, 7), Color::White, Piece::King)
            .build();
        assert_eq!(pos, Position::from_fen("b2k3b/8/8/8/8/8/8/1R3K2 w 0 1"));
    }

    #[test]
    #[should_panic]
    fn test_off_board_square_panics() {
        let _ = PositionBuilder::new()
            .piece(Square(8, 0), Color::White, Piece::King)
            .build();
    }

    #[test]
    fn test_builder_replace_and_remove() {
        let pos = PositionBuilder::new()
            .piece(Square(0, 0), Color::White, Piece::Rook)
            .piece(Square(0, 0), Color::Black, Piece::Bishop)
            .piece(Square(4, 4), Color::White, Piece::King)
            .remove(Square(4, 4))
            .side_to_move(Color::Black)
            .halfmove_clock(12)
            .fullmove_number(30)
            .build();
        assert_eq!(pos.to_fen(), "b7/8/8/8/8/8/8/8 b 12 30");
    }
}
