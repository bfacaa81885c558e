use chess::{BoardStatus, ChessMove, File, MoveGen, Rank, Square};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use rustc_hash::FxHashSet;

use crate::{
    board::Board,
    board_display::Diagram,
    color::Color,
    coord::Coord,
    game_state::GameState,
    lan::Lan,
    piece::{Piece, PieceKind},
};

impl From<Square> for Coord {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_possible_wrap,
        reason = "rank and file indices are below 8"
    )]
    fn from(value: Square) -> Self {
        Coord::new(
            value.get_rank().to_index() as i8,
            value.get_file().to_index() as i8,
        )
    }
}
impl From<ChessMove> for Lan {
    fn from(value: ChessMove) -> Self {
        Lan {
            origin: value.get_source().into(),
            destination: value.get_dest().into(),
        }
    }
}
fn square(position: Coord) -> Square {
    let (row, col) = position.indices().unwrap();
    Square::make_square(Rank::from_index(row), File::from_index(col))
}
fn reference_move(board: &Board, lan: Lan) -> ChessMove {
    let promotion = board
        .get(lan.origin)
        .filter(|piece| piece.kind == PieceKind::Pawn && lan.destination.is_last_rank(piece.color))
        .map(|_| chess::Piece::Queen);
    ChessMove::new(square(lan.origin), square(lan.destination), promotion)
}
fn reference_state(reference: &chess::Board, mover: Color) -> GameState {
    match reference.status() {
        BoardStatus::Ongoing => GameState::Playing,
        BoardStatus::Stalemate => GameState::Stalemate,
        BoardStatus::Checkmate => GameState::win(mover),
    }
}
fn scanned_king(board: &Board, color: Color) -> Coord {
    let kings: Vec<_> = board
        .pieces()
        .filter(|(_, piece)| *piece == Piece::new(PieceKind::King, color))
        .map(|(position, _)| position)
        .collect();
    assert_eq!(kings.len(), 1, "expected one {color} king\n{}", Diagram::new(board));
    kings[0]
}
fn check_commit(before: &Board, after: &Board, lan: Lan) {
    assert_eq!(after.turn(), !before.turn());
    assert!(after.castling().is_subset_of(before.castling()));
    let double_step = before.get(lan.origin).map(|piece| piece.kind) == Some(PieceKind::Pawn)
        && (lan.destination.row() - lan.origin.row()).abs() == 2;
    assert_eq!(
        after.en_passant_file(),
        double_step.then_some(lan.origin.col()),
        "after {lan}\n{}",
        Diagram::new(after)
    );
    for color in Color::ALL {
        assert_eq!(after.king_position(color), scanned_king(after, color));
    }
}
fn check_rejections(board: &Board, legal: &FxHashSet<Lan>, rng: &mut SmallRng) {
    for _ in 0..16 {
        let origin = Coord::new(rng.random_range(0..8), rng.random_range(0..8));
        let destination = Coord::new(rng.random_range(0..8), rng.random_range(0..8));
        if legal.contains(&Lan {
            origin,
            destination,
        }) {
            continue;
        }
        let mut copy = board.clone();
        assert_eq!(copy.move_piece(origin, destination), GameState::IllegalMove);
        assert_eq!(&copy, board, "rejected {origin}{destination} changed the board");
    }
}
fn play_random_game(rng: &mut SmallRng, max_plies: usize) {
    let mut board = Board::starting_position();
    let mut reference = chess::Board::default();
    for _ in 0..max_plies {
        let ordered: Vec<Lan> = board.legal_moves().collect();
        let moves: FxHashSet<Lan> = ordered.iter().copied().collect();
        let expected: FxHashSet<Lan> = MoveGen::new_legal(&reference).map(Into::into).collect();
        if let Some(lan) = moves.difference(&expected).next() {
            panic!("found {lan} but it's not a legal move\n{}", Diagram::new(&board));
        }
        if let Some(lan) = expected.difference(&moves).next() {
            panic!("{lan} not found\n{}", Diagram::new(&board));
        }
        check_rejections(&board, &moves, rng);
        if ordered.is_empty() {
            break;
        }
        let lan = ordered[rng.random_range(0..ordered.len())];
        let before = board.clone();
        let state = board.move_lan(lan);
        check_commit(&before, &board, lan);
        reference = reference.make_move_new(reference_move(&before, lan));
        assert_eq!(
            state,
            reference_state(&reference, before.turn()),
            "after {lan}\n{}",
            Diagram::new(&board)
        );
        if state.is_over() {
            break;
        }
    }
}
#[test]
fn agrees_with_reference_move_generator() {
    let mut rng = SmallRng::seed_from_u64(0x5eed);
    for _ in 0..8 {
        play_random_game(&mut rng, 200);
    }
}
