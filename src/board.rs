use std::{iter::successors, ops::Index};

use crate::{
    board_display::IndexableBoard,
    castling::{Castle, CastlingRights},
    color::Color,
    coord,
    coord::{Coord, ParseCoordError},
    game_state::GameState,
    lan::Lan,
    piece::{Piece, PieceKind},
};

/// A chess position together with everything needed to judge the next move:
/// side to move, en passant file, castling rights and where the kings are.
///
/// Cloning a board yields a fully independent position, which is how moves are
/// tried out before being committed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    turn: Color,
    en_passant_file: Option<i8>,
    kings: [Coord; 2],
    castling: CastlingRights,
}
impl Board {
    pub fn starting_position() -> Self {
        let mut squares = [[None; 8]; 8];
        for (color, back_rank, pawn_rank) in [(Color::White, 0, 1), (Color::Black, 7, 6)] {
            for (col, kind) in PieceKind::STARTING_CONFIGURATION.into_iter().enumerate() {
                squares[back_rank][col] = Some(Piece::new(kind, color));
                squares[pawn_rank][col] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        Board {
            squares,
            turn: Color::White,
            en_passant_file: None,
            kings: [coord!("e1"), coord!("e8")],
            castling: CastlingRights::all(),
        }
    }
    pub fn turn(&self) -> Color {
        self.turn
    }
    /// File on which an en passant capture is currently possible.
    pub fn en_passant_file(&self) -> Option<i8> {
        self.en_passant_file
    }
    pub fn can_en_passant(&self, to: Coord) -> bool {
        self.en_passant_file == Some(to.col())
    }
    pub fn king_position(&self, color: Color) -> Coord {
        self.kings[color.index()]
    }
    pub fn castling(&self) -> CastlingRights {
        self.castling
    }
    /// Whether castling onto `destination` is still allowed as far as piece
    /// movement history goes.
    pub fn can_castle_to(&self, destination: Coord) -> bool {
        Castle::by_destination(destination).is_some_and(|castle| self.castling.get(castle))
    }
    /// The piece on `position`, or `None` when it is empty or off the board.
    pub fn get(&self, position: Coord) -> Option<Piece> {
        let (row, col) = position.indices()?;
        self.squares[row][col]
    }
    fn set(&mut self, position: Coord, piece: Option<Piece>) {
        debug_assert!(position.is_valid(), "{position} is outside of the board");
        if let Some((row, col)) = position.indices() {
            self.squares[row][col] = piece;
        }
    }
    pub fn pieces(&self) -> impl Iterator<Item = (Coord, Piece)> + '_ {
        Coord::all().filter_map(|position| self.get(position).map(|piece| (position, piece)))
    }
    /// # Panics
    /// Panics if `from` and `to` are not on the same row.
    pub fn nothing_on_row_between(&self, from: Coord, to: Coord) -> bool {
        assert!(
            from.is_same_row_as(to),
            "{from} and {to} are not on the same row"
        );
        let low = Ord::min(from.col(), to.col());
        let high = Ord::max(from.col(), to.col());
        (low + 1..high).all(|col| self.get(Coord::new(from.row(), col)).is_none())
    }
    /// # Panics
    /// Panics if `from` and `to` are not on the same column.
    pub fn nothing_on_col_between(&self, from: Coord, to: Coord) -> bool {
        assert!(
            from.is_same_col_as(to),
            "{from} and {to} are not on the same column"
        );
        let low = Ord::min(from.row(), to.row());
        let high = Ord::max(from.row(), to.row());
        (low + 1..high).all(|row| self.get(Coord::new(row, from.col())).is_none())
    }
    /// # Panics
    /// Panics if `from` and `to` are not two distinct squares of one diagonal.
    pub fn nothing_on_diagonal_between(&self, from: Coord, to: Coord) -> bool {
        assert!(
            from != to && from.is_same_diagonal_as(to),
            "{from} and {to} are not on the same diagonal"
        );
        let (row_direction, col_direction) = from.direction_to(to);
        successors(Some(from.next(row_direction, col_direction)), |position| {
            Some(position.next(row_direction, col_direction))
        })
        .take_while(|position| *position != to)
        .all(|position| self.get(position).is_none())
    }
    /// Whether any piece of `color` threatens `square`. Check safety of the
    /// attackers is not considered.
    pub fn square_attacked_by(&self, square: Coord, color: Color) -> bool {
        self.pieces()
            .any(|(from, piece)| piece.color == color && piece.attacks(self, from, square))
    }
    pub fn is_in_check(&self, color: Color) -> bool {
        self.square_attacked_by(self.king_position(color), !color)
    }
    /// Whether the side to move may play `from` to `to`. Has no side effects.
    pub fn is_legal_move(&self, from: Coord, to: Coord) -> bool {
        if !from.is_valid() || !to.is_valid() || from == to {
            return false;
        }
        let Some(piece) = self.get(from) else {
            return false;
        };
        if piece.color != self.turn {
            return false;
        }
        if self
            .get(to)
            .is_some_and(|target| target.color == piece.color || target.kind == PieceKind::King)
        {
            return false;
        }
        piece.is_valid_move(self, from, to) && !self.exposes_king(from, to)
    }
    fn exposes_king(&self, from: Coord, to: Coord) -> bool {
        let mover = self.turn;
        let mut scratch = self.clone();
        scratch.commit(from, to);
        scratch.is_in_check(mover)
    }
    /// Plays `from` to `to` if it is legal and reports the state of the game
    /// afterwards. An illegal move leaves the board untouched.
    pub fn move_piece(&mut self, from: Coord, to: Coord) -> GameState {
        if !self.is_legal_move(from, to) {
            return GameState::IllegalMove;
        }
        self.commit(from, to);
        self.game_state()
    }
    /// Same as [`Board::move_piece`] with squares written like `e2`.
    pub fn move_notation(&mut self, from: &str, to: &str) -> Result<GameState, ParseCoordError> {
        let from = from.parse()?;
        let to = to.parse()?;
        Ok(self.move_piece(from, to))
    }
    pub fn move_lan(&mut self, lan: Lan) -> GameState {
        self.move_piece(lan.origin, lan.destination)
    }
    pub fn legal_destinations(&self, origin: Coord) -> impl Iterator<Item = Coord> + '_ {
        Coord::all().filter(move |destination| self.is_legal_move(origin, *destination))
    }
    /// Every legal move of the side to move, found by trying every pair of
    /// squares.
    pub fn legal_moves(&self) -> impl Iterator<Item = Lan> + '_ {
        Coord::all().flat_map(move |origin| {
            self.legal_destinations(origin)
                .map(move |destination| Lan {
                    origin,
                    destination,
                })
        })
    }
    pub fn game_state(&self) -> GameState {
        if self.legal_moves().next().is_some() {
            GameState::Playing
        } else if self.is_in_check(self.turn) {
            GameState::win(!self.turn)
        } else {
            GameState::Stalemate
        }
    }
    fn commit(&mut self, from: Coord, to: Coord) {
        let Some(piece) = self.get(from) else {
            unreachable!("no piece to move on {from}");
        };
        let mover = piece.color;
        let is_pawn = piece.kind == PieceKind::Pawn;

        // en passant
        if is_pawn && !from.is_same_col_as(to) && self.get(to).is_none() {
            self.set(to.one_in_front_of(!mover), None);
        }
        if piece.kind == PieceKind::King {
            self.kings[mover.index()] = to;
        }
        self.en_passant_file =
            (is_pawn && to.is_one_in_front_of(from.one_in_front_of(mover), mover))
                .then_some(from.col());

        self.castling.remove_for_move(from, to);
        let castle = Castle::matching(from, to, mover).filter(|_| piece.kind == PieceKind::King);
        if let Some(castle) = castle {
            let rook = self.get(castle.rook_origin);
            self.set(castle.rook_origin, None);
            self.set(castle.rook_destination, rook);
        }

        self.set(from, None);
        let piece = if is_pawn && to.is_last_rank(mover) {
            Piece::new(PieceKind::Queen, mover)
        } else {
            piece
        };
        self.set(to, Some(piece));
        self.turn = !self.turn;
    }
}
impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}
impl Index<Coord> for Board {
    type Output = Option<Piece>;

    fn index(&self, position: Coord) -> &Self::Output {
        let Some((row, col)) = position.indices() else {
            panic!("{position} is outside of the board");
        };
        &self.squares[row][col]
    }
}
impl IndexableBoard for Board {
    fn piece_at(&self, position: Coord) -> Option<Piece> {
        self.get(position)
    }
}
