use std::{
    error::Error,
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use crate::color::Color;

/// Builds a [`Coord`] from a square literal such as `"e4"`, checked at
/// compile time.
#[macro_export]
macro_rules! coord {
    ($notation:literal) => {{
        const COORD: $crate::coord::Coord = $crate::coord::Coord::from_literal($notation);
        COORD
    }};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseCoordError {
    InvalidFile(char),
    InvalidRank(char),
    NotEnoughCharacters(u8),
    Unexpected(char),
}
impl Display for ParseCoordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseCoordError::InvalidFile(file) => write!(
                f,
                "found `{file}`, characters from `a` to `h` were expected instead"
            )?,
            ParseCoordError::InvalidRank(rank) => write!(
                f,
                "found `{rank}`, characters from `1` to `8` were expected instead"
            )?,
            ParseCoordError::NotEnoughCharacters(len) => write!(
                f,
                "provided string have length of {len} characters, 2 were expected"
            )?,
            ParseCoordError::Unexpected(c) => write!(f, "unexpected `{c}`")?,
        }
        Ok(())
    }
}
impl Error for ParseCoordError {}

/// A square as (row, column), row 0 being rank 1 and column 0 being file a.
///
/// Values outside of `0..8` are representable on purpose: they are how a step
/// off the edge of the board is expressed, and [`Coord::is_valid`] tells them
/// apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    row: i8,
    col: i8,
}
impl Coord {
    pub const fn new(row: i8, col: i8) -> Self {
        Coord { row, col }
    }
    /// Parses a square literal in const context, panicking on malformed input.
    #[allow(
        clippy::cast_possible_wrap,
        reason = "both differences are below 8 after the checks"
    )]
    pub const fn from_literal(notation: &str) -> Self {
        let bytes = notation.as_bytes();
        assert!(bytes.len() == 2, "square literal must be 2 characters long");
        assert!(
            matches!(bytes[0], b'a'..=b'h'),
            "file of a square literal must be from `a` to `h`"
        );
        assert!(
            matches!(bytes[1], b'1'..=b'8'),
            "rank of a square literal must be from `1` to `8`"
        );
        Coord::new((bytes[1] - b'1') as i8, (bytes[0] - b'a') as i8)
    }
    #[allow(
        clippy::cast_possible_wrap,
        reason = "both values are below 8 after matching"
    )]
    pub fn from_chars(file: char, rank: char) -> Result<Self, ParseCoordError> {
        let col = match file.to_ascii_lowercase() {
            file @ 'a'..='h' => file as u8 - b'a',
            _ => return Err(ParseCoordError::InvalidFile(file)),
        };
        let row = match rank {
            '1'..='8' => rank as u8 - b'1',
            _ => return Err(ParseCoordError::InvalidRank(rank)),
        };
        Ok(Coord::new(row as i8, col as i8))
    }
    /// Every square of the board, rank 1 first, file a first within a rank.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..8).flat_map(|row| (0..8).map(move |col| Coord::new(row, col)))
    }
    pub fn row(self) -> i8 {
        self.row
    }
    pub fn col(self) -> i8 {
        self.col
    }
    pub fn is_valid(self) -> bool {
        (0..8).contains(&self.row) && (0..8).contains(&self.col)
    }
    /// Grid indices of a valid square.
    pub fn indices(self) -> Option<(usize, usize)> {
        if self.is_valid() {
            Some((self.row.unsigned_abs().into(), self.col.unsigned_abs().into()))
        } else {
            None
        }
    }
    pub fn is_same_row_as(self, other: Self) -> bool {
        self.row == other.row
    }
    pub fn is_same_col_as(self, other: Self) -> bool {
        self.col == other.col
    }
    pub fn is_same_diagonal_as(self, other: Self) -> bool {
        (other.row - self.row).abs() == (other.col - self.col).abs()
    }
    pub fn is_adjacent_column(self, other: Self) -> bool {
        (self.col - other.col).abs() == 1
    }
    /// Whether `self` is within the 3x3 square centered on `other`.
    pub fn is_in_square_around(self, other: Self) -> bool {
        (other.row - self.row).abs() <= 1 && (other.col - self.col).abs() <= 1
    }
    /// Unit step (per axis) leading from `self` toward `to`.
    pub fn direction_to(self, to: Self) -> (i8, i8) {
        ((to.row - self.row).signum(), (to.col - self.col).signum())
    }
    pub fn next(self, row_direction: i8, col_direction: i8) -> Self {
        Coord::new(self.row + row_direction, self.col + col_direction)
    }
    pub fn one_in_front_of(self, color: Color) -> Self {
        self.next(color.forward(), 0)
    }
    pub fn is_one_in_front_of(self, other: Self, color: Color) -> bool {
        self == other.one_in_front_of(color)
    }
    /// Whether `self` is on the row directly ahead of `other`, from the point
    /// of view of `color`.
    pub fn is_next_row_from(self, other: Self, color: Color) -> bool {
        self.row == other.row + color.forward()
    }
    pub fn is_pawn_start(self, color: Color) -> bool {
        match color {
            Color::White => self.row == 1,
            Color::Black => self.row == 6,
        }
    }
    /// Rank a pawn must stand on to capture en passant.
    pub fn is_en_passant_start(self, color: Color) -> bool {
        match color {
            Color::White => self.row == 4,
            Color::Black => self.row == 3,
        }
    }
    pub fn is_last_rank(self, color: Color) -> bool {
        match color {
            Color::White => self.row == 7,
            Color::Black => self.row == 0,
        }
    }
}
impl Display for Coord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some((row, col)) = self.indices() {
            #[allow(
                clippy::cast_possible_truncation,
                reason = "indices of a valid square are below 8"
            )]
            let file = (col as u8 + b'a') as char;
            write!(f, "{file}{}", row + 1)?;
        } else {
            write!(f, "({}, {})", self.row, self.col)?;
        }
        Ok(())
    }
}
impl FromStr for Coord {
    type Err = ParseCoordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let Some(file) = chars.next() else {
            return Err(ParseCoordError::NotEnoughCharacters(0));
        };
        let Some(rank) = chars.next() else {
            return Err(ParseCoordError::NotEnoughCharacters(1));
        };
        if let Some(c) = chars.next() {
            return Err(ParseCoordError::Unexpected(c));
        }
        Coord::from_chars(file, rank)
    }
}
#[cfg(test)]
mod test {
    use crate::{
        color::Color,
        coord,
        coord::{Coord, ParseCoordError},
    };

    #[test]
    fn validity_is_strictly_inside_the_board() {
        assert!(Coord::new(0, 0).is_valid());
        assert!(Coord::new(7, 7).is_valid());
        assert!(!Coord::new(-1, 0).is_valid());
        assert!(!Coord::new(8, 0).is_valid());
        assert!(!Coord::new(0, 8).is_valid());
    }
    #[test]
    fn notation_maps_rank_to_row_and_file_to_column() {
        assert_eq!(coord!("a1"), Coord::new(0, 0));
        assert_eq!(coord!("e4"), Coord::new(3, 4));
        assert_eq!(coord!("h8"), Coord::new(7, 7));
        assert_eq!("E2".parse(), Ok(coord!("e2")));
        assert_eq!(coord!("c7").to_string(), "c7");
    }
    #[test]
    fn malformed_notation_is_rejected() {
        assert_eq!("".parse::<Coord>(), Err(ParseCoordError::NotEnoughCharacters(0)));
        assert_eq!("e".parse::<Coord>(), Err(ParseCoordError::NotEnoughCharacters(1)));
        assert_eq!("e44".parse::<Coord>(), Err(ParseCoordError::Unexpected('4')));
        assert_eq!("i1".parse::<Coord>(), Err(ParseCoordError::InvalidFile('i')));
        assert_eq!("a9".parse::<Coord>(), Err(ParseCoordError::InvalidRank('9')));
    }
    #[test]
    fn front_depends_on_color() {
        assert_eq!(coord!("e2").one_in_front_of(Color::White), coord!("e3"));
        assert_eq!(coord!("e7").one_in_front_of(Color::Black), coord!("e6"));
        assert!(coord!("e4").is_one_in_front_of(coord!("e3"), Color::White));
        assert!(!coord!("e4").is_one_in_front_of(coord!("e3"), Color::Black));
        assert!(coord!("d6").is_next_row_from(coord!("e7"), Color::Black));
    }
    #[test]
    fn lines_and_neighbourhood() {
        assert!(coord!("a1").is_same_diagonal_as(coord!("h8")));
        assert!(!coord!("a1").is_same_diagonal_as(coord!("h7")));
        assert!(coord!("a4").is_same_row_as(coord!("h4")));
        assert!(coord!("c1").is_same_col_as(coord!("c8")));
        assert!(coord!("e1").is_in_square_around(coord!("f2")));
        assert!(!coord!("e1").is_in_square_around(coord!("g1")));
        assert_eq!(coord!("c1").direction_to(coord!("f4")), (1, 1));
        assert_eq!(coord!("f4").direction_to(coord!("f1")), (-1, 0));
    }
    #[test]
    fn off_board_steps_stay_representable() {
        let outside = coord!("h1").next(0, 1);
        assert!(!outside.is_valid());
        assert_eq!(outside.indices(), None);
        assert_eq!(Coord::all().count(), 64);
        assert!(Coord::all().all(Coord::is_valid));
    }
}
