//! Fixed-depth minimax with alpha-beta pruning.
//!
//! No move ordering, no transposition table, no iterative deepening. Every
//! hypothetical move goes through `Position::virtual_move`, so the searched
//! position is the caller's own and is left untouched when the search ends.

mod minimax;

pub use minimax::Minimax;

use super::Move;

/// Bound a node starts from before any child is scored; also what a node
/// with no moves to try reports.
pub const SENTINEL: i32 = 99_990;

/// Half-width of the window each root move is searched with.
pub const WINDOW: i32 = 100_000;

/// Result of a root search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// The best move found, `None` when the searching side has no legal move
    pub best_move: Option<Move>,
    /// Score of `best_move`'s subtree (`-SENTINEL` without a move)
    pub score: i32,
    /// Nodes visited, root children included
    pub nodes: u64,
}
