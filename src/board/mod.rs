//! Board representation and game rules.
//!
//! A mailbox 8×8 grid holding kings, rooks and bishops. Moves are generated
//! by walking rays, filtered for legality by trying each one in the virtual
//! move sandbox, and searched with a plain alpha-beta minimax.
//!
//! # Example
//! ```
//! use chess_bot::board::{Color, Minimax, Position};
//!
//! let mut pos = Position::new_game("b2k3b/8/8/8/8/8/8/1R3K2 w 0 1").unwrap();
//! let moves = pos.generate_moves(Color::White);
//! println!("White has {} legal moves", moves.len());
//!
//! let mut bot = Minimax::new(Color::White, 2);
//! let best = bot.best_move(&mut pos).best_move.unwrap();
//! pos.make_move(best).unwrap();
//! ```

mod builder;
mod error;
mod eval;
mod fen;
mod game;
mod history;
mod movegen;
pub mod prelude;
mod pst;
mod rules;
mod sandbox;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, MoveError, MoveParseError, SquareError};
pub use eval::piece_value;
pub use history::{MoveHistory, MoveRecord, PlyRecord};
pub use rules::{GameOutcome, MateStatus, INACTIVITY_LIMIT};
pub use search::{Minimax, SearchResult, SENTINEL, WINDOW};
pub use state::{Position, SquareFlags};
pub use types::{Color, Move, Piece, PlacedPiece, Square};
