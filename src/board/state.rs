use super::history::MoveHistory;
use super::rules::GameOutcome;
use super::{Color, Piece, PlacedPiece, Square};

/// Display markers carried by a square. The rules layer only ever sets
/// `check` and `checkmate`; `highlight` is left to the host.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SquareFlags {
    pub highlight: bool,
    pub check: bool,
    pub checkmate: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub(crate) struct Slot {
    pub(crate) occupant: Option<PlacedPiece>,
    pub(crate) flags: SquareFlags,
}

/// The game state: an 8×8 grid plus turn, counters and move log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub(crate) slots: [[Slot; 8]; 8], // [rank][file]
    pub(crate) side_to_move: Color,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
    pub(crate) history: MoveHistory,
    pub(crate) outcome: GameOutcome,
}

impl Default for Position {
    fn default() -> Self {
        Self::empty()
    }
}

impl Position {
    /// An empty board with White to move, clocks at `0 1`.
    #[must_use]
    pub fn empty() -> Self {
        Position {
            slots: [[Slot::default(); 8]; 8],
            side_to_move: Color::White,
            halfmove_clock: 0,
            fullmove_number: 1,
            history: MoveHistory::new(),
            outcome: GameOutcome::None,
        }
    }

    #[inline]
    pub(crate) fn slot(&self, sq: Square) -> &Slot {
        debug_assert!(sq.file() < 8 && sq.rank() < 8, "square {sq:?} is off the board");
        &self.slots[sq.rank()][sq.file()]
    }

    #[inline]
    pub(crate) fn slot_mut(&mut self, sq: Square) -> &mut Slot {
        debug_assert!(sq.file() < 8 && sq.rank() < 8, "square {sq:?} is off the board");
        &mut self.slots[sq.rank()][sq.file()]
    }

    /// The piece standing on `sq`, if any.
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<PlacedPiece> {
        self.slot(sq).occupant
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|p| p.kind)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Put `piece` on `sq`, replacing whatever stood there.
    pub(crate) fn set_piece(&mut self, sq: Square, piece: Option<PlacedPiece>) {
        self.slot_mut(sq).occupant = piece;
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Moves played since the last capture.
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[must_use]
    pub fn history(&self) -> &MoveHistory {
        &self.history
    }

    /// Outcome cached by the last call to `update_outcome`.
    #[must_use]
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    #[must_use]
    pub fn flags(&self, sq: Square) -> SquareFlags {
        self.slot(sq).flags
    }

    pub fn flags_mut(&mut self, sq: Square) -> &mut SquareFlags {
        &mut self.slot_mut(sq).flags
    }

    /// Occupied squares in board scan order, optionally filtered by color
    /// and piece type.
    #[must_use]
    pub fn find_pieces(&self, color: Option<Color>, kind: Option<Piece>) -> Vec<Square> {
        self.occupied()
            .filter(|(_, p)| color.map_or(true, |c| p.color == c))
            .filter(|(_, p)| kind.map_or(true, |k| p.kind == k))
            .map(|(sq, _)| sq)
            .collect()
    }

    /// Every occupied square with its piece, in board scan order.
    pub fn occupied(&self) -> impl Iterator<Item = (Square, PlacedPiece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// First king of `color` in scan order.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        self.occupied()
            .find(|(_, p)| p.color == color && p.kind == Piece::King)
            .map(|(sq, _)| sq)
    }

    /// Reset highlight markers, and the check markers too when asked.
    pub fn clear_highlight(&mut self, clear_check: bool) {
        for slot in self.slots.iter_mut().flatten() {
            slot.flags.highlight = false;
            if clear_check {
                slot.flags.check = false;
            }
        }
    }

    pub(crate) fn clear_mate_flags(&mut self) {
        for slot in self.slots.iter_mut().flatten() {
            slot.flags.check = false;
            slot.flags.checkmate = false;
        }
    }

    /// Occupants only, for comparing boards regardless of flags and log.
    #[must_use]
    pub fn placement(&self) -> [[Option<PlacedPiece>; 8]; 8] {
        let mut out = [[None; 8]; 8];
        for (rank, row) in self.slots.iter().enumerate() {
            for (file, slot) in row.iter().enumerate() {
                out[rank][file] = slot.occupant;
            }
        }
        out
    }
}
