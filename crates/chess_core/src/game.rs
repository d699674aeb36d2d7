//! A position together with the moves that led to it.

use crate::board::{BoardSnapshot, Position, Undo};
use crate::error::{RulesError, RulesResult};
use crate::movegen::{legal_moves, legal_moves_from};
use crate::notation::parse_uci_move;
use crate::rules::RulesEngine;
use crate::situation::GameSituation;
use crate::types::{Color, Move, Square};

#[derive(Clone, Debug)]
struct Played {
    mv: Move,
    undo: Undo,
    /// Key of the position before `mv` was played
    key: u64,
}

/// The in-memory rules engine: a mutable position with an undo stack.
#[derive(Clone, Debug, Default)]
pub struct Game {
    pos: Position,
    history: Vec<Played>,
}

impl Game {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_fen(fen: &str) -> RulesResult<Self> {
        Ok(Self {
            pos: Position::from_fen(fen)?,
            history: Vec::new(),
        })
    }

    pub fn position(&self) -> &Position {
        &self.pos
    }

    pub fn fen(&self) -> String {
        self.pos.to_fen()
    }

    /// Back to the standard starting position with an empty history.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Replaces the game with `fen`. On error the current game is kept.
    pub fn load_fen(&mut self, fen: &str) -> RulesResult<()> {
        *self = Self::from_fen(fen)?;
        Ok(())
    }

    /// Moves played so far, oldest first.
    pub fn moves_played(&self) -> impl ExactSizeIterator<Item = Move> + '_ {
        self.history.iter().map(|p| p.mv)
    }

    /// Parses coordinate notation and applies the move.
    pub fn play_uci(&mut self, text: &str) -> RulesResult<Move> {
        let mv = parse_uci_move(&self.pos, text)?;
        self.apply(mv)?;
        Ok(mv)
    }

    pub fn in_check(&self) -> bool {
        self.pos.in_check(self.pos.side_to_move)
    }

    fn has_legal_moves(&self) -> bool {
        !legal_moves(&self.pos).is_empty()
    }

    pub fn is_checkmate(&self) -> bool {
        self.in_check() && !self.has_legal_moves()
    }

    pub fn is_stalemate(&self) -> bool {
        !self.in_check() && !self.has_legal_moves()
    }

    /// True once the current position has occurred three times in this game.
    pub fn is_threefold_repetition(&self) -> bool {
        let key = self.pos.position_hash();
        let earlier = self.history.iter().filter(|p| p.key == key).count();
        earlier + 1 >= 3
    }

    pub fn is_insufficient_material(&self) -> bool {
        self.pos.is_insufficient_material()
    }

    pub fn is_draw(&self) -> bool {
        self.pos.is_fifty_move_draw()
            || self.is_stalemate()
            || self.is_insufficient_material()
            || self.is_threefold_repetition()
    }

    pub fn is_game_over(&self) -> bool {
        self.is_checkmate() || self.is_draw()
    }

    pub fn situation(&self) -> GameSituation {
        let mut s = GameSituation::NONE;
        let in_check = self.in_check();
        let stuck = !self.has_legal_moves();
        if in_check {
            s |= GameSituation::CHECK;
        }
        if in_check && stuck {
            s |= GameSituation::CHECKMATE;
        }
        if !in_check && stuck {
            s |= GameSituation::STALEMATE;
        }
        if self.is_threefold_repetition() {
            s |= GameSituation::THREEFOLD;
        }
        if self.is_insufficient_material() {
            s |= GameSituation::INSUFFICIENT_MATERIAL;
        }
        if self.pos.is_fifty_move_draw()
            || s.contains(GameSituation::STALEMATE)
            || s.contains(GameSituation::THREEFOLD)
            || s.contains(GameSituation::INSUFFICIENT_MATERIAL)
        {
            s |= GameSituation::DRAW;
        }
        if s.contains(GameSituation::CHECKMATE) || s.contains(GameSituation::DRAW) {
            s |= GameSituation::GAME_OVER;
        }
        s
    }
}

impl RulesEngine for Game {
    fn legal_moves(&self, from: Option<Square>) -> Vec<Move> {
        match from {
            Some(sq) => legal_moves_from(&self.pos, sq),
            None => legal_moves(&self.pos),
        }
    }

    fn apply(&mut self, mv: Move) -> RulesResult<()> {
        let legal = legal_moves_from(&self.pos, mv.from)
            .into_iter()
            .find(|m| m.to == mv.to && m.promo == mv.promo)
            .ok_or_else(|| RulesError::IllegalMove { mv: mv.to_string() })?;
        let key = self.pos.position_hash();
        let undo = self.pos.make_move(legal);
        self.history.push(Played {
            mv: legal,
            undo,
            key,
        });
        Ok(())
    }

    fn reverse(&mut self) -> Option<Move> {
        let played = self.history.pop()?;
        self.pos.unmake_move(played.mv, played.undo);
        Some(played.mv)
    }

    fn side_to_move(&self) -> Color {
        self.pos.side_to_move
    }

    fn board_snapshot(&self) -> BoardSnapshot {
        self.pos.snapshot()
    }
}

#[cfg(test)]
#[path = "game_tests.rs"]
mod game_tests;
