use std::fmt::{self, Display, Formatter};

use crate::color::Color;

/// Outcome of a move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameState {
    Playing,
    WhiteWins,
    BlackWins,
    Stalemate,
    /// The move was rejected and the board is unchanged.
    IllegalMove,
}
impl GameState {
    pub fn win(color: Color) -> Self {
        match color {
            Color::White => GameState::WhiteWins,
            Color::Black => GameState::BlackWins,
        }
    }
    pub fn winner(self) -> Option<Color> {
        match self {
            GameState::WhiteWins => Some(Color::White),
            GameState::BlackWins => Some(Color::Black),
            _ => None,
        }
    }
    pub fn is_over(self) -> bool {
        matches!(
            self,
            GameState::WhiteWins | GameState::BlackWins | GameState::Stalemate
        )
    }
}
impl Display for GameState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GameState::Playing => write!(f, "playing")?,
            GameState::WhiteWins => write!(f, "white wins")?,
            GameState::BlackWins => write!(f, "black wins")?,
            GameState::Stalemate => write!(f, "stalemate")?,
            GameState::IllegalMove => write!(f, "illegal move")?,
        }
        Ok(())
    }
}
