//! The contract a move searcher needs from a chess rules implementation.

use crate::board::BoardSnapshot;
use crate::error::RulesResult;
use crate::types::{Color, Move, Square};

/// A mutable chess position that can enumerate, apply and take back moves.
///
/// Every successful [`apply`](RulesEngine::apply) must be undone by exactly
/// one [`reverse`](RulesEngine::reverse) to get back the previous position,
/// including side to move, castling rights and en-passant square.
pub trait RulesEngine {
    /// Legal moves for the side to move, optionally only those starting on
    /// `from`. The order is deterministic for a given position.
    fn legal_moves(&self, from: Option<Square>) -> Vec<Move>;

    /// Plays `mv`. Fails without touching the position if it is not legal.
    fn apply(&mut self, mv: Move) -> RulesResult<()>;

    /// Takes back the most recently applied move, if any.
    fn reverse(&mut self) -> Option<Move>;

    fn side_to_move(&self) -> Color;

    fn board_snapshot(&self) -> BoardSnapshot;
}

impl<R: RulesEngine + ?Sized> RulesEngine for &mut R {
    fn legal_moves(&self, from: Option<Square>) -> Vec<Move> {
        (**self).legal_moves(from)
    }

    fn apply(&mut self, mv: Move) -> RulesResult<()> {
        (**self).apply(mv)
    }

    fn reverse(&mut self) -> Option<Move> {
        (**self).reverse()
    }

    fn side_to_move(&self) -> Color {
        (**self).side_to_move()
    }

    fn board_snapshot(&self) -> BoardSnapshot {
        (**self).board_snapshot()
    }
}
