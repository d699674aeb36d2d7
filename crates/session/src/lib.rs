//! Human versus AI chess session built on the rules engine and the minimax AI.

pub mod error;
pub mod session;

pub use error::{SessionError, SessionResult};
pub use session::{AI_COLOR, Player, Session, TurnReport};
