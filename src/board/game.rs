//! Playing real moves: game setup, rewinding, and the move log.

use super::error::{FenError, MoveError};
use super::history::PlyRecord;
use super::rules::GameOutcome;
use super::{Color, Move, PlacedPiece, Position};

impl Position {
    /// Start a game from `fen` with an empty log and a fresh outcome.
    pub fn new_game(fen: &str) -> Result<Self, FenError> {
        let mut pos = Position::try_from_fen(fen)?;
        pos.update_outcome();
        log::debug!("new game from {fen}: {}", pos.outcome);
        Ok(pos)
    }

    /// Jump to a position recorded earlier in this game.
    ///
    /// The log keeps only the plies played before that position. On a parse
    /// error nothing changes.
    pub fn load_snapshot(&mut self, fen: &str) -> Result<(), FenError> {
        let mut loaded = Position::try_from_fen(fen)?;
        let mut history = std::mem::take(&mut self.history);
        history.truncate_to(loaded.fullmove_number, loaded.side_to_move);
        loaded.history = history;
        loaded.update_outcome();
        log::debug!(
            "rewound to {fen}, {} log entries kept",
            loaded.history.len()
        );
        *self = loaded;
        Ok(())
    }

    /// Log text for `mv`: the mover's letter in its color's case and the
    /// destination, e.g. `Rb5` or `kc7`.
    #[must_use]
    pub fn move_notation(&self, mv: Move) -> String {
        match self.piece_at(mv.from) {
            Some(piece) => format!("{piece}{}", mv.to),
            None => mv.to.to_string(),
        }
    }

    /// Play `mv` for the side to move.
    ///
    /// Illegal requests are rejected without touching the position. A legal
    /// move updates the inactivity counter, marks the piece as moved, hands
    /// the turn over, logs the move and re-evaluates the outcome.
    pub fn make_move(&mut self, mv: Move) -> Result<GameOutcome, MoveError> {
        if self.outcome.is_over() {
            return Err(MoveError::GameOver {
                outcome: self.outcome.to_string(),
            });
        }
        let piece = self.piece_at(mv.from).ok_or_else(|| MoveError::EmptySquare {
            square: mv.from.to_string(),
        })?;
        if piece.color != self.side_to_move {
            return Err(MoveError::NotYourTurn {
                square: mv.from.to_string(),
            });
        }
        if !self.legal_moves_from(mv.from).contains(&mv.to) {
            return Err(MoveError::IllegalMove {
                notation: mv.to_string(),
            });
        }

        let notation = self.move_notation(mv);
        let captured = self
            .piece_at(mv.to)
            .is_some_and(|target| target.color != piece.color);

        self.set_piece(
            mv.to,
            Some(PlacedPiece {
                has_moved: true,
                ..piece
            }),
        );
        self.set_piece(mv.from, None);

        if captured {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }

        let mover = self.side_to_move;
        let number = self.fullmove_number;
        self.side_to_move = mover.opponent();
        if mover == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }

        self.clear_highlight(true);
        let fen = self.to_fen();
        log::trace!("{number}. {notation} -> {fen}");
        self.history.record(number, mover, PlyRecord { notation, fen });

        Ok(self.update_outcome())
    }
}
