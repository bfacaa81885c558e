#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]

use std::io;

fn main() -> io::Result<()> {
    arbiter::repl::repl()
}
