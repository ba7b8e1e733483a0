use super::pst::{BISHOP_PST, BISHOP_VALUE, KING_PST, KING_VALUE, ROOK_PST, ROOK_VALUE};
use super::{Color, Piece, PlacedPiece, Position, Square};

/// Base value plus table bonus for `piece` on `sq`, always positive-is-good
/// for the piece's own side.
#[must_use]
pub fn piece_value(piece: PlacedPiece, sq: Square) -> i32 {
    let sq = match piece.color {
        Color::White => sq,
        Color::Black => sq.flip_vertical(),
    };
    let (rank, file) = (sq.rank(), sq.file());
    match piece.kind {
        Piece::King => KING_VALUE + KING_PST[rank][file],
        Piece::Rook => ROOK_VALUE + ROOK_PST[rank][file],
        Piece::Bishop => BISHOP_VALUE + BISHOP_PST[rank][file],
    }
}

impl Position {
    /// Static score from `perspective`'s point of view: material plus
    /// piece-square bonuses, own pieces counted positive, enemy negative.
    #[must_use]
    pub fn evaluate(&self, perspective: Color) -> i32 {
        self.occupied()
            .map(|(sq, piece)| {
                let value = piece_value(piece, sq);
                if piece.color == perspective {
                    value
                } else {
                    -value
                }
            })
            .sum()
    }
}
