//! The terminal front end for playing Othello against the csar engine.

pub mod agents;
pub mod cli;

mod game;

pub use game::run_game;
