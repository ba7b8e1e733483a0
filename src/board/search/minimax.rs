use super::{SearchResult, SENTINEL, WINDOW};
use crate::board::{Color, Move, Position};

/// A searcher playing one color.
///
/// Leaves are scored as the negated static evaluation from the opponent's
/// perspective, so larger is better for `color` throughout. Maximizing plies
/// move `color`, minimizing plies move the opponent; the position's own
/// side-to-move field is not consulted.
#[derive(Clone, Debug)]
pub struct Minimax {
    color: Color,
    opponent: Color,
    depth: u32,
    nodes: u64,
}

impl Minimax {
    /// Searcher for `color` with a fixed depth; depths below 1 become 1.
    #[must_use]
    pub fn new(color: Color, depth: u32) -> Self {
        Minimax {
            color,
            opponent: color.opponent(),
            depth: depth.max(1),
            nodes: 0,
        }
    }

    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    #[must_use]
    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Best move for `color` at the configured depth.
    pub fn best_move(&mut self, pos: &mut Position) -> SearchResult {
        self.search_root(pos, self.depth, true)
    }

    /// Score every legal root move with a fresh full window and keep the
    /// highest. Ties keep the move enumerated first.
    pub fn search_root(&mut self, pos: &mut Position, depth: u32, maximizing: bool) -> SearchResult {
        self.nodes = 0;
        let mover = self.mover(maximizing);
        let child_depth = depth.saturating_sub(1);

        let mut best: Option<(Move, i32)> = None;
        for mv in pos.generate_moves(mover) {
            let value = pos.virtual_move(mv, |p| {
                self.search(p, child_depth, -WINDOW, WINDOW, !maximizing)
            });
            log::trace!("root {mv}: {value}");
            if best.map_or(true, |(_, score)| value > score) {
                best = Some((mv, value));
            }
        }

        let result = SearchResult {
            best_move: best.map(|(mv, _)| mv),
            score: best.map_or(-SENTINEL, |(_, score)| score),
            nodes: self.nodes,
        };
        match result.best_move {
            Some(mv) => log::info!(
                "{} plays {mv} (score {}, depth {depth}, {} nodes)",
                mover,
                result.score,
                result.nodes
            ),
            None => log::info!("{mover} has no legal move"),
        }
        result
    }

    /// Alpha-beta value of `pos` with `depth` plies left.
    ///
    /// Returns as soon as `beta <= alpha`. When the live game is already
    /// decided no moves are tried and the starting bound comes back.
    pub fn search(
        &mut self,
        pos: &mut Position,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> i32 {
        self.nodes += 1;

        if depth == 0 {
            return -pos.evaluate(self.opponent);
        }

        let mut best = if maximizing { -SENTINEL } else { SENTINEL };
        if pos.outcome().is_over() {
            return best;
        }

        for mv in pos.generate_moves(self.mover(maximizing)) {
            let value = pos.virtual_move(mv, |p| self.search(p, depth - 1, alpha, beta, !maximizing));
            if maximizing {
                best = best.max(value);
                alpha = alpha.max(best);
            } else {
                best = best.min(value);
                beta = beta.min(best);
            }
            if beta <= alpha {
                return best;
            }
        }

        best
    }

    /// Nodes visited by the last root search.
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[inline]
    fn mover(&self, maximizing: bool) -> Color {
        if maximizing {
            self.color
        } else {
            self.opponent
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_floor() {
        assert_eq!(Minimax::new(Color::White, 0).depth(), 1);
        assert_eq!(Minimax::new(Color::White, 3).depth(), 3);
    }

    #[test]
    fn test_no_legal_move_gives_sentinel() {
        let mut pos = Position::from_fen("rr5k/8/8/8/8/8/8/K7 w 0 1");
        let mut bot = Minimax::new(Color::White, 2);
        let result = bot.best_move(&mut pos);
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -SENTINEL);
    }

    #[test]
    fn test_depth_one_takes_free_bishop() {
        // The rook can capture the undefended bishop on b8.
        let mut pos = Position::from_fen("1b5k/8/8/8/8/8/8/1R4K1 w 0 1");
        let mut bot = Minimax::new(Color::White, 1);
        let result = bot.best_move(&mut pos);
        assert_eq!(result.best_move.map(|m| m.to_string()), Some("b1b8".to_string()));
    }

    #[test]
    fn test_search_leaves_position_untouched() {
        let mut pos = Position::new_game("b2k3b/8/8/8/8/8/8/1R3K2 w 0 1").unwrap();
        let before = pos.clone();
        let mut bot = Minimax::new(Color::White, 3);
        let result = bot.best_move(&mut pos);
        assert!(result.best_move.is_some());
        assert!(result.nodes > 0);
        assert_eq!(pos, before);
    }
}
