//! Chess rules: board representation, legal move generation, move
//! application with exact take-back, and game-end detection.

pub mod board;
pub mod error;
pub mod game;
pub mod movegen;
pub mod notation;
pub mod perft;
pub mod rules;
pub mod situation;
pub mod types;
pub mod zobrist;

pub use board::*;
pub use error::*;
pub use game::Game;
pub use movegen::*;
pub use notation::*;
pub use perft::{perft, perft_divide};
pub use rules::RulesEngine;
pub use situation::GameSituation;
pub use types::*;
pub use zobrist::ZOBRIST;
