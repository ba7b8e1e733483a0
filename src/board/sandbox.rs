//! Apply-inspect-revert for hypothetical moves.
//!
//! Only the two touched occupants are saved. Restoration happens in `Drop`,
//! so it runs on normal return, on an `Err` result and while unwinding.

use std::ops::{Deref, DerefMut};

use super::{Move, PlacedPiece, Position, Square};

/// A position with one move provisionally applied.
pub(crate) struct VirtualMove<'a> {
    pos: &'a mut Position,
    saved: [(Square, Option<PlacedPiece>); 2],
}

impl<'a> VirtualMove<'a> {
    pub(crate) fn apply(pos: &'a mut Position, mv: Move) -> Self {
        let saved = [
            (mv.from, pos.piece_at(mv.from)),
            (mv.to, pos.piece_at(mv.to)),
        ];
        let moving = pos.piece_at(mv.from);
        pos.set_piece(mv.to, moving);
        pos.set_piece(mv.from, None);
        VirtualMove { pos, saved }
    }
}

impl Deref for VirtualMove<'_> {
    type Target = Position;

    fn deref(&self) -> &Position {
        self.pos
    }
}

impl DerefMut for VirtualMove<'_> {
    fn deref_mut(&mut self) -> &mut Position {
        self.pos
    }
}

impl Drop for VirtualMove<'_> {
    fn drop(&mut self) {
        for (sq, piece) in self.saved.iter().rev() {
            self.pos.set_piece(*sq, *piece);
        }
    }
}

impl Position {
    /// Play `mv` on this position, run `inspect` against it, then put both
    /// touched squares back exactly as they were.
    ///
    /// Whatever `inspect` returns is handed back unchanged, including `Err`
    /// values; a panic inside `inspect` still restores the board before it
    /// propagates. No legality check is made: any `(from, to)` pair works,
    /// including an empty source.
    pub fn virtual_move<R>(&mut self, mv: Move, inspect: impl FnOnce(&mut Position) -> R) -> R {
        let mut guard = VirtualMove::apply(self, mv);
        inspect(&mut guard)
    }
}
