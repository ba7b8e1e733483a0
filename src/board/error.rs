//! Error types for board operations.

use std::fmt;

/// Error type for position string parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Position string is empty
    Empty,
    /// Placement field does not have exactly 8 ranks
    WrongRankCount { found: usize },
    /// Invalid piece character in placement
    InvalidPiece { char: char },
    /// Empty-square run outside 1-8
    InvalidEmptyRun { char: char },
    /// A piece lands past file h
    TooManyFiles { rank: usize, files: usize },
    /// A rank describes fewer than 8 files
    RankTooShort { rank: usize, files: usize },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Half-move clock or full-move number is not a number
    InvalidCounter { found: String },
    /// Neither placement alone nor placement, turn, half-move and full-move
    WrongFieldCount { found: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::Empty => write!(f, "Empty position string"),
            FenError::WrongRankCount { found } => {
                write!(f, "Placement must have 8 ranks, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in position string")
            }
            FenError::InvalidEmptyRun { char } => {
                write!(f, "Invalid empty-square run '{char}', expected 1-8")
            }
            FenError::TooManyFiles { rank, files } => {
                write!(f, "Too many files ({files}) in rank {rank}")
            }
            FenError::RankTooShort { rank, files } => {
                write!(f, "Rank {rank} covers only {files} files")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            FenError::InvalidCounter { found } => {
                write!(f, "Invalid move counter '{found}'")
            }
            FenError::WrongFieldCount { found } => {
                write!(f, "Position string needs 1 or 4 fields, found {found}")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Error type for move text parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string must be exactly 4 characters
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Why a move could not be played on the live position.
///
/// None of these change the position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// No piece on the source square
    EmptySquare { square: String },
    /// The piece belongs to the side not on move
    NotYourTurn { square: String },
    /// Target is not among the piece's legal moves
    IllegalMove { notation: String },
    /// The game has already ended
    GameOver { outcome: String },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::EmptySquare { square } => write!(f, "No piece on {square}"),
            MoveError::NotYourTurn { square } => {
                write!(f, "Piece on {square} does not belong to the side to move")
            }
            MoveError::IllegalMove { notation } => write!(f, "Illegal move '{notation}'"),
            MoveError::GameOver { outcome } => write!(f, "Game is over ({outcome})"),
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: usize },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: usize },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
