//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece types. Only the king and the two line movers exist.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    King,
    Rook,
    Bishop,
}

const ORTHOGONAL: [(i8, i8); 4] = [(0, -1), (1, 0), (0, 1), (-1, 0)];
const DIAGONAL: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, 1), (-1, -1)];
const ALL_DIRECTIONS: [(i8, i8); 8] = [
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

impl Piece {
    /// All piece types
    pub const ALL: [Piece; 3] = [Piece::King, Piece::Rook, Piece::Bishop];

    /// Parse a piece from a FEN letter (k, r, b in either case)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'k' => Some(Piece::King),
            'r' => Some(Piece::Rook),
            'b' => Some(Piece::Bishop),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::King => 'k',
            Piece::Rook => 'r',
            Piece::Bishop => 'b',
        }
    }

    /// Convert piece to character with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Unit steps of every ray this piece walks, as `(file, rank)` deltas.
    /// Rank deltas are in internal orientation (positive = towards rank 1).
    #[inline]
    #[must_use]
    pub const fn directions(self) -> &'static [(i8, i8)] {
        match self {
            Piece::King => &ALL_DIRECTIONS,
            Piece::Rook => &ORTHOGONAL,
            Piece::Bishop => &DIAGONAL,
        }
    }

    /// How far a single ray may extend before hitting the edge.
    #[inline]
    #[must_use]
    pub const fn max_steps(self) -> usize {
        match self {
            Piece::King => 1,
            Piece::Rook | Piece::Bishop => 7,
        }
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// The single-letter code used in position strings (`w` / `b`).
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Color::White => 'w',
            Color::Black => 'b',
        }
    }

    #[must_use]
    pub fn from_char(c: char) -> Option<Color> {
        match c {
            'w' => Some(Color::White),
            'b' => Some(Color::Black),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// A piece standing on the board.
///
/// The square that holds it is its coordinate; moving it means moving the
/// value to another slot.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlacedPiece {
    pub kind: Piece,
    pub color: Color,
    /// Set once the piece has made a real (non-virtual) move. No rule reads it.
    pub has_moved: bool,
}

impl PlacedPiece {
    #[must_use]
    pub const fn new(kind: Piece, color: Color) -> Self {
        PlacedPiece {
            kind,
            color,
            has_moved: false,
        }
    }

    #[inline]
    #[must_use]
    pub fn to_fen_char(self) -> char {
        self.kind.to_fen_char(self.color)
    }
}

impl fmt::Display for PlacedPiece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_accepts_only_implemented_pieces() {
        assert_eq!(Piece::from_char('K'), Some(Piece::King));
        assert_eq!(Piece::from_char('r'), Some(Piece::Rook));
        assert_eq!(Piece::from_char('B'), Some(Piece::Bishop));
        assert_eq!(Piece::from_char('q'), None);
        assert_eq!(Piece::from_char('n'), None);
        assert_eq!(Piece::from_char('p'), None);
    }

    #[test]
    fn test_fen_char_case_follows_color() {
        assert_eq!(Piece::Rook.to_fen_char(Color::White), 'R');
        assert_eq!(Piece::Rook.to_fen_char(Color::Black), 'r');
        assert_eq!(PlacedPiece::new(Piece::King, Color::Black).to_string(), "k");
    }

    #[test]
    fn test_direction_sets() {
        assert_eq!(Piece::King.directions().len(), 8);
        assert_eq!(Piece::Rook.directions().len(), 4);
        assert_eq!(Piece::Bishop.directions().len(), 4);
        assert!(Piece::Rook
            .directions()
            .iter()
            .all(|&(df, dr)| df == 0 || dr == 0));
        assert!(Piece::Bishop
            .directions()
            .iter()
            .all(|&(df, dr)| df != 0 && dr != 0));
    }

    #[test]
    fn test_color_opponent_and_codes() {
        assert_eq!(Color::White.opponent(), Color::Black);
        assert_eq!(Color::Black.opponent(), Color::White);
        assert_eq!(Color::from_char('w'), Some(Color::White));
        assert_eq!(Color::from_char('x'), None);
        assert_eq!(Color::Black.to_char(), 'b');
    }
}
