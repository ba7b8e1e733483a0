//! Check, checkmate, stalemate and the inactivity draw.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Color, Move, Position};

/// Moves without a capture allowed before the game is drawn.
pub const INACTIVITY_LIMIT: u32 = 50;

/// Mobility verdict for one side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MateStatus {
    None,
    Checkmate,
    Stalemate,
}

/// How the game stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameOutcome {
    #[default]
    None,
    Stalemate,
    /// The side that has been mated (or has no king at all).
    Checkmate(Color),
    /// The half-move clock passed `INACTIVITY_LIMIT`.
    DrawByInactivity,
}

impl GameOutcome {
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameOutcome::None)
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::None => write!(f, "none"),
            GameOutcome::Stalemate => write!(f, "stalemate"),
            GameOutcome::Checkmate(Color::White) => write!(f, "checkmate-for-white"),
            GameOutcome::Checkmate(Color::Black) => write!(f, "checkmate-for-black"),
            GameOutcome::DrawByInactivity => write!(f, "draw-by-inactivity"),
        }
    }
}

impl Position {
    /// Whether `color`'s king is attacked, either now or, when `hypothetical`
    /// is given, right after that move. A side without a king is never in
    /// check.
    pub fn is_in_check(&mut self, color: Color, hypothetical: Option<Move>) -> bool {
        match hypothetical {
            Some(mv) => self.virtual_move(mv, |pos| pos.king_attacked(color)),
            None => self.king_attacked(color),
        }
    }

    fn king_attacked(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_attacked_by(king, color.opponent()))
    }

    /// Classify `color`'s mobility.
    ///
    /// No legal move while in check is mate; without check it is stalemate
    /// only on `color`'s own turn. A missing king counts as mate. Marks the
    /// king's square `check` or `checkmate` as a side effect.
    pub fn checkmate_status(&mut self, color: Color) -> MateStatus {
        let Some(king) = self.king_square(color) else {
            return MateStatus::Checkmate;
        };

        if !self.has_legal_move(color) {
            if self.is_in_check(color, None) {
                self.flags_mut(king).checkmate = true;
                MateStatus::Checkmate
            } else if self.side_to_move == color {
                MateStatus::Stalemate
            } else {
                MateStatus::None
            }
        } else {
            if self.is_in_check(color, None) {
                self.flags_mut(king).check = true;
            }
            MateStatus::None
        }
    }

    /// Re-run end-of-game detection on the live position and cache it.
    ///
    /// The inactivity draw wins over everything; otherwise Black is examined
    /// before White.
    pub fn update_outcome(&mut self) -> GameOutcome {
        self.clear_mate_flags();

        let outcome = if self.halfmove_clock > INACTIVITY_LIMIT {
            GameOutcome::DrawByInactivity
        } else {
            match self.checkmate_status(Color::Black) {
                MateStatus::Checkmate => GameOutcome::Checkmate(Color::Black),
                MateStatus::Stalemate => GameOutcome::Stalemate,
                MateStatus::None => match self.checkmate_status(Color::White) {
                    MateStatus::Checkmate => GameOutcome::Checkmate(Color::White),
                    MateStatus::Stalemate => GameOutcome::Stalemate,
                    MateStatus::None => GameOutcome::None,
                },
            }
        };

        if outcome != self.outcome {
            log::debug!("outcome {} -> {} at {}", self.outcome, outcome, self.to_fen());
        }
        self.outcome = outcome;
        outcome
    }

    /// Text shown to the host when the game has ended, empty otherwise.
    #[must_use]
    pub fn outcome_message(&self) -> String {
        match self.outcome {
            GameOutcome::None => String::new(),
            GameOutcome::Stalemate => "Stalemate!".to_string(),
            GameOutcome::Checkmate(loser) => format!("{loser} is checkmated!"),
            GameOutcome::DrawByInactivity => {
                format!("Draw: {INACTIVITY_LIMIT} moves without a capture")
            }
        }
    }
}
