//! Minimax chess AI
//!
//! Fixed-depth minimax with alpha-beta pruning over any
//! [`chess_core::RulesEngine`], scored by material plus piece-square tables.
//! The search mutates the rules engine in place and restores it exactly.

pub mod config;
pub mod eval;
pub mod pst;
pub mod search;
pub mod time_control;

pub use config::{AiConfig, ConfigError, ConfigResult, parse_depth};
pub use eval::{evaluate, piece_value};
pub use search::{MinimaxAi, SearchResult};
pub use time_control::TimeControl;
