use std::fmt::{self, Display, Formatter};

use crate::{board::Board, castling::Castle, color::Color, coord::Coord};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    King,
    Queen,
}
impl PieceKind {
    /// Back rank from file a to file h.
    pub const STARTING_CONFIGURATION: [Self; 8] = [
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
    ];

    /// Letter used for this kind in board diagrams. Knights are `C`.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'C',
            PieceKind::Bishop => 'B',
            PieceKind::King => 'K',
            PieceKind::Queen => 'Q',
        }
    }
}
impl Display for PieceKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            PieceKind::Pawn => write!(f, "pawn")?,
            PieceKind::Rook => write!(f, "rook")?,
            PieceKind::Knight => write!(f, "knight")?,
            PieceKind::Bishop => write!(f, "bishop")?,
            PieceKind::King => write!(f, "king")?,
            PieceKind::Queen => write!(f, "queen")?,
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}
impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }
    /// Two-letter diagram code, color first: `WP`, `BC`, ...
    pub fn code(self) -> [char; 2] {
        [self.color.letter(), self.kind.letter()]
    }
    /// Whether the geometry of this piece allows going from `from` to `to` on
    /// `board`.
    ///
    /// The caller has already checked that `from` holds this piece and that
    /// `to` is on the board and holds neither a friendly piece nor a king.
    /// Whether the move exposes the mover's king is not considered here.
    pub fn is_valid_move(self, board: &Board, from: Coord, to: Coord) -> bool {
        match self.kind {
            PieceKind::Pawn => self.is_valid_pawn_move(board, from, to),
            PieceKind::Rook => is_valid_rook_move(board, from, to),
            PieceKind::Knight => is_knight_jump(from, to),
            PieceKind::Bishop => is_valid_bishop_move(board, from, to),
            PieceKind::King => {
                to.is_in_square_around(from)
                    || Castle::ALL
                        .iter()
                        .any(|castle| castle.can_castle(board, from, to, self.color))
            }
            PieceKind::Queen => {
                is_valid_bishop_move(board, from, to) || is_valid_rook_move(board, from, to)
            }
        }
    }
    /// Whether this piece standing on `from` threatens `target`.
    ///
    /// Pawns threaten both forward diagonals, occupied or not, and never
    /// threaten the square they could push to. Kings threaten their
    /// neighbourhood only.
    pub fn attacks(self, board: &Board, from: Coord, target: Coord) -> bool {
        if from == target {
            return false;
        }
        match self.kind {
            PieceKind::Pawn => {
                target.is_adjacent_column(from) && target.is_next_row_from(from, self.color)
            }
            PieceKind::King => target.is_in_square_around(from),
            _ => self.is_valid_move(board, from, target),
        }
    }
    fn is_valid_pawn_move(self, board: &Board, from: Coord, to: Coord) -> bool {
        if self.is_valid_pawn_capture(board, from, to) {
            true
        } else if board.get(to).is_none() {
            let one_in_front = from.one_in_front_of(self.color);
            to == one_in_front
                || (board.get(one_in_front).is_none()
                    && to.is_one_in_front_of(one_in_front, self.color)
                    && from.is_pawn_start(self.color))
        } else {
            false
        }
    }
    fn is_valid_pawn_capture(self, board: &Board, from: Coord, to: Coord) -> bool {
        to.is_adjacent_column(from)
            && to.is_next_row_from(from, self.color)
            && (board.get(to).is_some()
                || (board.can_en_passant(to) && from.is_en_passant_start(self.color)))
    }
}
impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.color, self.kind)?;
        Ok(())
    }
}
fn is_valid_rook_move(board: &Board, from: Coord, to: Coord) -> bool {
    (from.is_same_row_as(to) && board.nothing_on_row_between(from, to))
        || (from.is_same_col_as(to) && board.nothing_on_col_between(from, to))
}
fn is_valid_bishop_move(board: &Board, from: Coord, to: Coord) -> bool {
    from.is_same_diagonal_as(to) && board.nothing_on_diagonal_between(from, to)
}
fn is_knight_jump(from: Coord, to: Coord) -> bool {
    let rows = (to.row() - from.row()).abs();
    let cols = (to.col() - from.col()).abs();
    (rows == 1 && cols == 2) || (rows == 2 && cols == 1)
}
#[cfg(test)]
mod test {
    use crate::{
        board::Board,
        color::Color,
        coord,
        piece::{Piece, PieceKind},
    };

    #[test]
    fn diagram_codes() {
        assert_eq!(Piece::new(PieceKind::Knight, Color::White).code(), ['W', 'C']);
        assert_eq!(Piece::new(PieceKind::Queen, Color::Black).code(), ['B', 'Q']);
    }
    #[test]
    fn knight_jumps_over_pieces() {
        let board = Board::starting_position();
        let knight = Piece::new(PieceKind::Knight, Color::White);
        assert!(knight.is_valid_move(&board, coord!("b1"), coord!("a3")));
        assert!(knight.is_valid_move(&board, coord!("b1"), coord!("c3")));
        assert!(!knight.is_valid_move(&board, coord!("b1"), coord!("b3")));
        assert!(!knight.is_valid_move(&board, coord!("b1"), coord!("a4")));
    }
    #[test]
    fn sliders_are_blocked() {
        let board = Board::starting_position();
        let rook = Piece::new(PieceKind::Rook, Color::White);
        let bishop = Piece::new(PieceKind::Bishop, Color::White);
        let queen = Piece::new(PieceKind::Queen, Color::White);
        assert!(!rook.is_valid_move(&board, coord!("a1"), coord!("a3")));
        assert!(!bishop.is_valid_move(&board, coord!("c1"), coord!("e3")));
        assert!(!queen.is_valid_move(&board, coord!("d1"), coord!("d3")));
        assert!(!queen.is_valid_move(&board, coord!("d1"), coord!("e3")));
        assert!(rook.is_valid_move(&board, coord!("a1"), coord!("a2")));
    }
    #[test]
    fn pawn_pushes_from_start() {
        let board = Board::starting_position();
        let pawn = Piece::new(PieceKind::Pawn, Color::White);
        assert!(pawn.is_valid_move(&board, coord!("e2"), coord!("e3")));
        assert!(pawn.is_valid_move(&board, coord!("e2"), coord!("e4")));
        assert!(!pawn.is_valid_move(&board, coord!("e2"), coord!("e5")));
        assert!(!pawn.is_valid_move(&board, coord!("e2"), coord!("d3")));
        let pawn = Piece::new(PieceKind::Pawn, Color::Black);
        assert!(pawn.is_valid_move(&board, coord!("d7"), coord!("d5")));
        assert!(!pawn.is_valid_move(&board, coord!("d7"), coord!("d8")));
    }
    #[test]
    fn pawns_attack_empty_diagonals() {
        let board = Board::starting_position();
        let pawn = Piece::new(PieceKind::Pawn, Color::Black);
        assert!(pawn.attacks(&board, coord!("g7"), coord!("f6")));
        assert!(pawn.attacks(&board, coord!("g7"), coord!("h6")));
        assert!(!pawn.attacks(&board, coord!("g7"), coord!("g6")));
        assert!(!pawn.is_valid_move(&board, coord!("g7"), coord!("f6")));
    }
    #[test]
    fn king_attacks_only_neighbours() {
        let board = Board::starting_position();
        let king = Piece::new(PieceKind::King, Color::White);
        assert!(king.attacks(&board, coord!("e1"), coord!("f2")));
        assert!(!king.attacks(&board, coord!("e1"), coord!("g1")));
        assert!(!king.attacks(&board, coord!("e1"), coord!("e1")));
    }
}
