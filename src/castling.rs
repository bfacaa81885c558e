use crate::{
    board::Board,
    color::Color,
    coord::Coord,
    piece::{Piece, PieceKind},
};

/// One of the four ways to castle, described by the squares involved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Castle {
    pub color: Color,
    pub king_origin: Coord,
    pub king_destination: Coord,
    pub rook_origin: Coord,
    pub rook_destination: Coord,
}
impl Castle {
    pub const WHITE_KINGSIDE: Self = Castle::new(Color::White, "e1", "g1", "h1", "f1");
    pub const WHITE_QUEENSIDE: Self = Castle::new(Color::White, "e1", "c1", "a1", "d1");
    pub const BLACK_KINGSIDE: Self = Castle::new(Color::Black, "e8", "g8", "h8", "f8");
    pub const BLACK_QUEENSIDE: Self = Castle::new(Color::Black, "e8", "c8", "a8", "d8");

    pub const ALL: [Self; 4] = [
        Castle::WHITE_KINGSIDE,
        Castle::WHITE_QUEENSIDE,
        Castle::BLACK_KINGSIDE,
        Castle::BLACK_QUEENSIDE,
    ];

    const fn new(
        color: Color,
        king_origin: &str,
        king_destination: &str,
        rook_origin: &str,
        rook_destination: &str,
    ) -> Self {
        Castle {
            color,
            king_origin: Coord::from_literal(king_origin),
            king_destination: Coord::from_literal(king_destination),
            rook_origin: Coord::from_literal(rook_origin),
            rook_destination: Coord::from_literal(rook_destination),
        }
    }
    /// The castle whose king lands on `destination`.
    pub fn by_destination(destination: Coord) -> Option<Self> {
        Castle::ALL
            .into_iter()
            .find(|castle| castle.king_destination == destination)
    }
    /// The castle a king of `color` performs by going from `from` to `to`.
    pub fn matching(from: Coord, to: Coord, color: Color) -> Option<Self> {
        Castle::ALL.into_iter().find(|castle| {
            castle.color == color && castle.king_origin == from && castle.king_destination == to
        })
    }
    /// Squares that must not be attacked by the opponent.
    pub fn guarded(self) -> [Coord; 3] {
        [self.king_origin, self.king_destination, self.rook_destination]
    }
    pub fn can_castle(self, board: &Board, from: Coord, to: Coord, color: Color) -> bool {
        self.color == color
            && from == self.king_origin
            && to == self.king_destination
            && board.castling().get(self)
            && board.get(self.rook_origin) == Some(Piece::new(PieceKind::Rook, color))
            && board.nothing_on_row_between(self.king_origin, self.rook_origin)
            && self
                .guarded()
                .into_iter()
                .all(|square| !board.square_attacked_by(square, !color))
    }
    fn bit(self) -> u8 {
        let kingside = self.rook_origin.col() == 7;
        match (self.color, kingside) {
            (Color::White, true) => 0b_0001,
            (Color::White, false) => 0b_0010,
            (Color::Black, true) => 0b_0100,
            (Color::Black, false) => 0b_1000,
        }
    }
}

/// Which of the four castles are still available.
///
/// Rights are only ever removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CastlingRights(u8);
impl CastlingRights {
    pub fn all() -> Self {
        CastlingRights(0b_1111)
    }
    pub fn get(self, castle: Castle) -> bool {
        self.0 & castle.bit() != 0
    }
    pub fn remove(&mut self, castle: Castle) {
        self.0 &= !castle.bit();
    }
    /// Removes every right that a move from `from` to `to` forfeits: the
    /// king or rook leaving its origin, or the rook being captured on it.
    pub fn remove_for_move(&mut self, from: Coord, to: Coord) {
        for castle in Castle::ALL {
            if castle.king_origin == from || castle.rook_origin == from || castle.rook_origin == to
            {
                self.remove(castle);
            }
        }
    }
    /// Whether every right held by `self` is also held by `other`.
    pub fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }
}
