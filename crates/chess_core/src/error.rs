//! Error types for the rules engine.

use thiserror::Error;

/// Errors raised while parsing positions or applying moves.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// Malformed Forsyth-Edwards Notation
    #[error("Invalid FEN: {reason}")]
    InvalidFen { reason: String },

    /// Square name outside a1..h8
    #[error("Invalid square: {square}")]
    InvalidSquare { square: String },

    /// Move text that is not coordinate notation (e.g. "e2e4", "e7e8q")
    #[error("Invalid move text: {text}")]
    InvalidMoveText { text: String },

    /// Move not legal in the current position
    #[error("Illegal move: {mv}")]
    IllegalMove { mv: String },
}

impl RulesError {
    pub(crate) fn fen(reason: impl Into<String>) -> Self {
        RulesError::InvalidFen {
            reason: reason.into(),
        }
    }
}

/// Result type alias for rules engine operations
pub type RulesResult<T> = Result<T, RulesError>;
