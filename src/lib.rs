//! Cat Maze: drag a chain-shaped cat through a maze of walls to the exit.
//!
//! [`core`] holds the tile and field codecs and the movement rules,
//! [`levels`] the built-in and JSON levels, and [`console_interface`] the
//! text board format and the terminal front end.

pub mod console_interface;
pub mod core;
pub mod levels;
pub mod models;

#[cfg(test)]
mod test;
