use rand::random_range;
use rustc_hash::FxHashSet;

use crate::{
    board::Board,
    board_display::Diagram,
    color::Color,
    coord::Coord,
    game_state::GameState,
    lan::{Lan, ParseLanError},
};
use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    io::{self, BufRead, Write, stderr, stdin, stdout},
    str::FromStr,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Input {
    Help,
    Flip,
    Restart,
    Quit,
    Random,
    Coord(Coord),
    Move(Lan),
}
impl FromStr for Input {
    type Err = ParseInputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "help" => Ok(Input::Help),
            "flip" => Ok(Input::Flip),
            "restart" => Ok(Input::Restart),
            "quit" => Ok(Input::Quit),
            "random" => Ok(Input::Random),
            s => {
                if let Ok(position) = s.parse() {
                    Ok(Input::Coord(position))
                } else {
                    Ok(Input::Move(s.parse()?))
                }
            }
        }
    }
}
/// Runs an interactive two-player game on stdin and stdout until `quit` or
/// end of input.
pub fn repl() -> io::Result<()> {
    let input = stdin().lock();
    let mut output = stdout().lock();
    let mut error = stderr().lock();

    let mut lines = input.lines();

    let mut board = Board::starting_position();
    let mut legal_moves = FxHashSet::default();
    let mut state = GameState::Playing;
    let mut update = true;
    let mut view = Color::White;
    let mut first_time = true;
    loop {
        if update {
            legal_moves.clear();
            legal_moves.extend(board.legal_moves());
            state = board.game_state();
        }
        update = false;
        write!(output, "{}", Diagram { board: &board, view })?;
        if let Some(winner) = state.winner() {
            writeln!(output, "checkmate, {winner} wins")?;
        } else if state == GameState::Playing {
            writeln!(output, "{} plays", board.turn())?;
        } else {
            writeln!(output, "{state}")?;
        }
        if first_time {
            writeln!(output, "type `help` for instructions")?;
            first_time = false;
        }
        loop {
            write!(output, "> ")?;
            output.flush()?;
            let Some(text) = lines.next() else {
                return Ok(());
            };
            let input = match text?.trim().parse() {
                Ok(input) => input,
                Err(err) => {
                    writeln!(error, "Error: {err}")?;
                    writeln!(error, "for available command, enter `help`")?;
                    continue;
                }
            };
            match input {
                Input::Help => {
                    writeln!(output, "flip    - flip the board")?;
                    writeln!(output, "restart - reset to starting position")?;
                    writeln!(output, "quit    - quit the game")?;
                    writeln!(output, "random  - play a random move")?;
                    writeln!(output, "e2      - view legal moves")?;
                    writeln!(output, "e2e4    - play the move")?;
                    writeln!(output, "e1g1    - perform castling")?;
                    continue;
                }
                Input::Flip => {
                    view = !view;
                }
                Input::Restart => {
                    board = Board::starting_position();
                    update = true;
                }
                Input::Quit => return Ok(()),
                Input::Random => {
                    if legal_moves.is_empty() {
                        writeln!(error, "Error: the game is over ({state})")?;
                        continue;
                    }
                    let index = random_range(0..legal_moves.len());
                    let Some(lan) = legal_moves.iter().copied().nth(index) else {
                        continue;
                    };
                    board.move_lan(lan);
                    writeln!(output, "{} played {lan}", !board.turn())?;
                    update = true;
                }
                Input::Coord(position) => {
                    let Some(piece) = board.get(position) else {
                        writeln!(error, "Error: No piece found on {position}")?;
                        continue;
                    };
                    if piece.color != board.turn() {
                        writeln!(error, "Error: It is {}'s turn", board.turn())?;
                        continue;
                    }
                    write!(output, "{piece} on {position}:")?;
                    let mut destinations = board.legal_destinations(position).peekable();
                    if destinations.peek().is_none() {
                        write!(output, " no legal moves")?;
                    }
                    for destination in destinations {
                        write!(output, " {destination}")?;
                    }
                    writeln!(output)?;
                    continue;
                }
                Input::Move(lan) => {
                    if !legal_moves.contains(&lan) {
                        writeln!(error, "Error: {lan} is an invalid move")?;
                        continue;
                    }
                    board.move_lan(lan);
                    update = true;
                }
            }
            break;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseInputError {
    Move(ParseLanError),
}
impl From<ParseLanError> for ParseInputError {
    fn from(value: ParseLanError) -> Self {
        ParseInputError::Move(value)
    }
}
impl Display for ParseInputError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseInputError::Move(err) => write!(f, "{err}")?,
        }
        Ok(())
    }
}
impl Error for ParseInputError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseInputError::Move(err) => Some(err),
        }
    }
}
