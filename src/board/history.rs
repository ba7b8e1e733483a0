//! Move log keyed by full-move number.

use std::collections::BTreeMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Color;

/// One side's half of a logged move.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PlyRecord {
    /// Piece letter in its color's case plus destination, e.g. `Rb5`.
    pub notation: String,
    /// Position string right after the move.
    pub fen: String,
}

/// Both halves of one full move. Either half may be missing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub white: Option<PlyRecord>,
    pub black: Option<PlyRecord>,
}

impl MoveRecord {
    #[must_use]
    pub fn side(&self, color: Color) -> Option<&PlyRecord> {
        match color {
            Color::White => self.white.as_ref(),
            Color::Black => self.black.as_ref(),
        }
    }

    fn side_mut(&mut self, color: Color) -> &mut Option<PlyRecord> {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    fn is_empty(&self) -> bool {
        self.white.is_none() && self.black.is_none()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveHistory {
    entries: BTreeMap<u32, MoveRecord>,
}

impl MoveHistory {
    #[must_use]
    pub fn new() -> Self {
        MoveHistory {
            entries: BTreeMap::new(),
        }
    }

    pub(crate) fn record(&mut self, number: u32, color: Color, ply: PlyRecord) {
        *self.entries.entry(number).or_default().side_mut(color) = Some(ply);
    }

    #[must_use]
    pub fn get(&self, number: u32) -> Option<&MoveRecord> {
        self.entries.get(&number)
    }

    /// Entries in move-number order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &MoveRecord)> {
        self.entries.iter().map(|(n, rec)| (*n, rec))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn last_number(&self) -> Option<u32> {
        self.entries.keys().next_back().copied()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Drop every ply played at or after the position `(fullmove, to_move)`.
    pub(crate) fn truncate_to(&mut self, fullmove: u32, to_move: Color) {
        match to_move {
            Color::White => {
                self.entries.retain(|n, _| *n < fullmove);
            }
            Color::Black => {
                self.entries.retain(|n, _| *n <= fullmove);
                if let Some(rec) = self.entries.get_mut(&fullmove) {
                    rec.black = None;
                    if rec.is_empty() {
                        self.entries.remove(&fullmove);
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ply(text: &str) -> PlyRecord {
        PlyRecord {
            notation: text.to_string(),
            fen: format!("fen-{text}"),
        }
    }

    fn sample() -> MoveHistory {
        let mut history = MoveHistory::new();
        history.record(1, Color::White, ply("Rb5"));
        history.record(1, Color::Black, ply("kd7"));
        history.record(2, Color::White, ply("Kf2"));
        history.record(2, Color::Black, ply("bc7"));
        history.record(3, Color::White, ply("Rb7"));
        history
    }

    #[test]
    fn test_record_merges_halves() {
        let history = sample();
        assert_eq!(history.len(), 3);
        let first = history.get(1).unwrap();
        assert_eq!(first.side(Color::White).unwrap().notation, "Rb5");
        assert_eq!(first.side(Color::Black).unwrap().notation, "kd7");
        assert_eq!(history.last_number(), Some(3));
    }

    #[test]
    fn test_truncate_to_white_to_move() {
        let mut history = sample();
        history.truncate_to(2, Color::White);
        assert_eq!(history.len(), 1);
        assert_eq!(history.last_number(), Some(1));
    }

    #[test]
    fn test_truncate_to_black_to_move_keeps_white_half() {
        let mut history = sample();
        history.truncate_to(2, Color::Black);
        assert_eq!(history.len(), 2);
        let second = history.get(2).unwrap();
        assert!(second.white.is_some());
        assert!(second.black.is_none());
    }

    #[test]
    fn test_truncate_past_tail_is_noop() {
        let mut history = sample();
        history.truncate_to(10, Color::White);
        assert_eq!(history, sample());
    }
}
