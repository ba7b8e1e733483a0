use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{Color, Move, Piece, PlacedPiece, Position, Square};

impl Position {
    /// Parse a position string: `<placement> [<turn> <halfmove> <fullmove>]`.
    ///
    /// The three trailing fields are given together or not at all; without
    /// them the defaults are `w 0 1`. An empty-square run
    /// that overhangs file h at the end of a rank is clipped; every other
    /// malformation is an error.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let mut pos = Position::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.is_empty() {
            return Err(FenError::Empty);
        }
        if !matches!(parts.len(), 1 | 4) {
            return Err(FenError::WrongFieldCount { found: parts.len() });
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file = 0usize;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    if !(1..=8).contains(&run) {
                        return Err(FenError::InvalidEmptyRun { char: c });
                    }
                    file += run as usize;
                } else {
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    let color = if c.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    pos.set_piece(Square(file, rank_idx), Some(PlacedPiece::new(piece, color)));
                    file += 1;
                }
            }
            if file < 8 {
                return Err(FenError::RankTooShort {
                    rank: rank_idx,
                    files: file,
                });
            }
        }

        if let Some(turn) = parts.get(1) {
            let mut chars = turn.chars();
            pos.side_to_move = match (chars.next(), chars.next()) {
                (Some(c), None) => Color::from_char(c),
                _ => None,
            }
            .ok_or_else(|| FenError::InvalidSideToMove {
                found: (*turn).to_string(),
            })?;
        }
        if let Some(clock) = parts.get(2) {
            pos.halfmove_clock = parse_counter(clock)?;
        }
        if let Some(number) = parts.get(3) {
            pos.fullmove_number = parse_counter(number)?;
        }

        Ok(pos)
    }

    /// Parse a position string.
    ///
    /// # Panics
    /// Panics if the string is invalid. Use `try_from_fen` for fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid position string")
    }

    /// Serialize the placement followed by the side to move next, the
    /// half-move clock and the full-move number.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in 0..8 {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some(piece) = self.piece_at(Square(file, rank)) {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char());
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        format!(
            "{} {} {} {}",
            rows.join("/"),
            self.side_to_move.to_char(),
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in coordinate notation (e.g. "b1b5").
    ///
    /// Only the syntax is checked here; legality is decided by `make_move`.
    pub fn parse_move(text: &str) -> Result<Move, MoveParseError> {
        if text.len() != 4 {
            return Err(MoveParseError::InvalidLength { len: text.len() });
        }
        let invalid = || MoveParseError::InvalidSquare {
            notation: text.to_string(),
        };
        let from = text
            .get(0..2)
            .and_then(|s| s.parse::<Square>().ok())
            .ok_or_else(invalid)?;
        let to = text
            .get(2..4)
            .and_then(|s| s.parse::<Square>().ok())
            .ok_or_else(invalid)?;
        Ok(Move::new(from, to))
    }
}

fn parse_counter(field: &str) -> Result<u32, FenError> {
    let invalid = || FenError::InvalidCounter {
        found: field.to_string(),
    };
    if !field.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    field.parse().map_err(|_| invalid())
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}
