use chess_core::RulesError;
use thiserror::Error;

/// Why a session refused a request.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("it is the AI's turn to move")]
    AiTurn,

    #[error("the game is over")]
    GameOver,

    #[error(transparent)]
    Rules(#[from] RulesError),
}

pub type SessionResult<T> = Result<T, SessionError>;
