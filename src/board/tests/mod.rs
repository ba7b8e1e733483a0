//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `draw.rs` - Inactivity draw and the half-move clock
//! - `edge_cases.rs` - Check, mate and stalemate positions
//! - `sandbox.rs` - Virtual moves leave the board exactly as found
//! - `search.rs` - Alpha-beta against plain minimax, bot behaviour
//! - `proptest.rs` - Property-based tests

mod proptest;

use crate::board::{Move, Position};

pub(super) fn mv(text: &str) -> Move {
    Position::parse_move(text).expect("bad move text in test")
}
