use std::fmt::{self, Display, Formatter};

use crate::{color::Color, coord::Coord, piece::Piece};

const BORDER: &str = "-------------------------";

/// Read-only access to the pieces of a position.
pub trait IndexableBoard {
    fn piece_at(&self, position: Coord) -> Option<Piece>;
}
/// Plain text diagram of a position, as seen by `view`.
pub struct Diagram<'a, T: ?Sized> {
    pub board: &'a T,
    pub view: Color,
}
impl<'a, T: ?Sized> Diagram<'a, T> {
    pub fn new(board: &'a T) -> Self {
        Diagram {
            board,
            view: Color::White,
        }
    }
}
impl<T> Display for Diagram<'_, T>
where
    T: IndexableBoard + ?Sized,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.view {
            Color::White => writeln!(f, " a  b  c  d  e  f  g  h")?,
            Color::Black => writeln!(f, " h  g  f  e  d  c  b  a")?,
        }
        writeln!(f, "{BORDER}")?;
        for y in 0..8 {
            let row = match self.view {
                Color::White => 7 - y,
                Color::Black => y,
            };
            write!(f, "|")?;
            for x in 0..8 {
                let col = match self.view {
                    Color::White => x,
                    Color::Black => 7 - x,
                };
                let [first, second] = self
                    .board
                    .piece_at(Coord::new(row, col))
                    .map_or([' ', ' '], Piece::code);
                write!(f, "{first}{second}|")?;
            }
            writeln!(f, " {}", row + 1)?;
        }
        writeln!(f, "{BORDER}")?;
        Ok(())
    }
}
