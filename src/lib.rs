#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

pub mod board;
pub mod board_display;
pub mod castling;
pub mod color;
pub mod coord;
#[cfg(test)]
mod fuzz;
pub mod game_state;
pub mod lan;
pub mod piece;
pub mod repl;
