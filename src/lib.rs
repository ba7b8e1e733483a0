pub mod board;
pub mod engine;

pub use board::{Color, GameOutcome, Minimax, Move, Piece, Position, Square};
pub use engine::{Engine, EngineConfig};
