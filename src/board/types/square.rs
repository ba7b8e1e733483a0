//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A square on the board, represented as (file, rank).
///
/// File 0 is `a`. Rank 0 is the top row of the internal grid, which is
/// algebraic rank `8`; rank 7 is algebraic rank `1`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (file, rank)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(file: usize, rank: usize) -> Option<Self> {
        if file < 8 && rank < 8 {
            Some(Square(file, rank))
        } else {
            None
        }
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.0
    }

    /// Get the rank (0-7, where 0 = the top row, algebraic rank 8)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> usize {
        self.1
    }

    /// Flip the square vertically (e.g., a1 <-> a8)
    #[inline]
    #[must_use]
    pub const fn flip_vertical(self) -> Self {
        Square(self.0, 7 - self.1)
    }

    /// Step by a `(file, rank)` delta, or `None` when it leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, df: i8, dr: i8) -> Option<Self> {
        let file = self.0.checked_add_signed(isize::from(df))?;
        let rank = self.1.checked_add_signed(isize::from(dr))?;
        Square::new(file, rank)
    }

    /// Board scan order index: top row first, files left to right.
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.1 * 8 + self.0
    }

    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx % 8, idx / 8)
    }

    /// Every square in board scan order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.0 as u8 + b'a') as char, 8 - self.1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((file, rank): (usize, usize)) -> Result<Self, Self::Error> {
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        if rank >= 8 {
            return Err(SquareError::RankOutOfBounds { rank });
        }
        Ok(Square(file, rank))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2 {
            return Err(invalid());
        }

        let file = match chars[0] {
            'a'..='h' => chars[0] as usize - 'a' as usize,
            _ => return Err(invalid()),
        };

        let rank = match chars[1] {
            '1'..='8' => 7 - (chars[1] as usize - '1' as usize),
            _ => return Err(invalid()),
        };

        Ok(Square(file, rank))
    }
}
