//! Ray walking and legality filtering.
//!
//! Every piece type attacks exactly the squares it can move to, so the raw
//! move set doubles as the attack set.

use super::{Color, Move, Position, Square};

impl Position {
    /// Rays of the piece on `from`, each ordered outward from the piece.
    ///
    /// A ray ends at the board edge or at the first occupied square, which is
    /// kept when it holds an enemy piece and dropped when it holds a friendly
    /// one. Empty squares yield no rays.
    #[must_use]
    pub fn rays(&self, from: Square) -> Vec<Vec<Square>> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };

        let mut rays = Vec::with_capacity(piece.kind.directions().len());
        for &(df, dr) in piece.kind.directions() {
            let mut ray = Vec::new();
            let mut cur = from;
            for _ in 0..piece.kind.max_steps() {
                let Some(next) = cur.offset(df, dr) else { break };
                match self.piece_at(next) {
                    Some(other) => {
                        if other.color != piece.color {
                            ray.push(next);
                        }
                        break;
                    }
                    None => ray.push(next),
                }
                cur = next;
            }
            rays.push(ray);
        }
        rays
    }

    /// All rays of the piece on `from` flattened, in direction order.
    #[must_use]
    pub fn raw_moves(&self, from: Square) -> Vec<Square> {
        self.rays(from).into_iter().flatten().collect()
    }

    /// Squares attacked by the piece on `from`; identical to its raw moves.
    #[inline]
    #[must_use]
    pub fn attacking_squares(&self, from: Square) -> Vec<Square> {
        self.raw_moves(from)
    }

    /// Whether any piece of `by` attacks `target`.
    #[must_use]
    pub fn is_attacked_by(&self, target: Square, by: Color) -> bool {
        self.find_pieces(Some(by), None)
            .into_iter()
            .any(|sq| self.attacking_squares(sq).contains(&target))
    }

    /// Raw moves of the piece on `from` that do not leave its own king
    /// attacked. Each candidate costs one sandbox round-trip.
    #[must_use]
    pub fn legal_moves_from(&mut self, from: Square) -> Vec<Square> {
        let Some(piece) = self.piece_at(from) else {
            return Vec::new();
        };
        self.raw_moves(from)
            .into_iter()
            .filter(|&to| !self.is_in_check(piece.color, Some(Move::new(from, to))))
            .collect()
    }

    /// Legal destinations for every piece of `color`, pieces in board scan
    /// order. Pieces without a legal move are listed with an empty set.
    #[must_use]
    pub fn all_legal_moves(&mut self, color: Color) -> Vec<(Square, Vec<Square>)> {
        self.find_pieces(Some(color), None)
            .into_iter()
            .map(|from| (from, self.legal_moves_from(from)))
            .collect()
    }

    /// Flat list of legal moves for `color`, same order as `all_legal_moves`.
    #[must_use]
    pub fn generate_moves(&mut self, color: Color) -> Vec<Move> {
        self.all_legal_moves(color)
            .into_iter()
            .flat_map(|(from, targets)| targets.into_iter().map(move |to| Move::new(from, to)))
            .collect()
    }

    #[must_use]
    pub fn has_legal_move(&mut self, color: Color) -> bool {
        self.find_pieces(Some(color), None)
            .into_iter()
            .any(|from| !self.legal_moves_from(from).is_empty())
    }

    /// Mark `from` and its legal targets as highlighted for the host.
    pub fn highlight_moves(&mut self, from: Square) {
        self.clear_highlight(false);
        if self.is_empty(from) {
            return;
        }
        let targets = self.legal_moves_from(from);
        self.flags_mut(from).highlight = true;
        for to in targets {
            self.flags_mut(to).highlight = true;
        }
    }
}
