//! A game between a human and, optionally, the minimax AI.
//!
//! The AI always plays Black: its search scores leaves as
//! `-evaluate(board)`, which is Black's point of view. When the AI is
//! enabled, every legal human move is answered before `play` returns.

use chess_core::{Color, Game, GameSituation, Move, RulesEngine};
use minimax_engine::{AiConfig, MinimaxAi};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{SessionError, SessionResult};

/// The side the AI plays.
pub const AI_COLOR: Color = Color::Black;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Human,
    Ai,
}

/// One applied move and the state of the game right after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    pub mv: Move,
    pub player: Player,
    pub situation: GameSituation,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    game: Game,
    config: AiConfig,
}

impl Session {
    /// Starts from the initial position. White moves first, so the AI
    /// never moves here.
    pub fn new(config: AiConfig) -> Self {
        Self::with_game(Game::new(), config)
    }

    /// Wraps an existing game as is. If the AI is on move, nothing happens
    /// until [`Session::process_ai_move`] is called.
    pub fn with_game(game: Game, config: AiConfig) -> Self {
        Self { game, config }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> &AiConfig {
        &self.config
    }

    pub fn fen(&self) -> String {
        self.game.fen()
    }

    pub fn turn(&self) -> Color {
        self.game.side_to_move()
    }

    pub fn situation(&self) -> GameSituation {
        self.game.situation()
    }

    pub fn is_ai_turn(&self) -> bool {
        self.config.enabled && self.turn() == AI_COLOR
    }

    /// Changes the AI settings. If the AI is enabled and Black is on move it
    /// moves at once; a disabled AI never moves.
    pub fn enable_ai(&mut self, enabled: bool, depth: u8) -> SessionResult<Option<TurnReport>> {
        self.config.enabled = enabled;
        self.config.depth = depth;
        info!(enabled, depth, "AI settings changed");
        if self.is_ai_turn() {
            self.process_ai_move()
        } else {
            Ok(None)
        }
    }

    /// Plays a human move in UCI notation (`e2e4`, `e7e8q`).
    ///
    /// Returns the report for the human move followed by the AI's reply,
    /// if it made one.
    pub fn play(&mut self, uci: &str) -> SessionResult<Vec<TurnReport>> {
        if self.game.is_game_over() {
            return Err(SessionError::GameOver);
        }
        if self.is_ai_turn() {
            return Err(SessionError::AiTurn);
        }

        let mv = self.game.play_uci(uci)?;
        let mut reports = vec![self.report(mv, Player::Human)];
        if self.is_ai_turn() {
            reports.extend(self.process_ai_move()?);
        }
        Ok(reports)
    }

    /// Lets the AI move for Black. Does nothing when the game is over, when
    /// White is on move, or when the search finds no move.
    pub fn process_ai_move(&mut self) -> SessionResult<Option<TurnReport>> {
        if self.game.is_game_over() || self.turn() != AI_COLOR {
            return Ok(None);
        }

        let tc = self.config.time_control();
        let result = MinimaxAi::new(&mut self.game, self.config.depth).search(&tc);
        let Some(mv) = result.best_move else {
            return Ok(None);
        };
        debug!(
            %mv,
            depth = result.depth,
            nodes = result.nodes,
            score = result.score,
            stopped = result.stopped,
            "AI move"
        );

        self.game.apply(mv)?;
        Ok(Some(self.report(mv, Player::Ai)))
    }

    /// Takes back the last move. With the AI enabled and White on move the
    /// AI's reply is taken back too, so the human is on move again.
    /// Returns the undone moves, most recent first.
    pub fn undo(&mut self) -> Vec<Move> {
        let count = if self.config.enabled && self.turn() != AI_COLOR {
            2
        } else {
            1
        };
        let undone: Vec<Move> = (0..count).map_while(|_| self.game.reverse()).collect();
        debug!(undone = undone.len(), "undo");
        undone
    }

    pub fn reset(&mut self) {
        self.game.reset();
        info!("new game");
    }

    /// Replaces the game with the position in `fen`. An invalid FEN leaves
    /// the current game untouched. If the AI is on move it moves at once.
    pub fn load_fen(&mut self, fen: &str) -> SessionResult<Option<TurnReport>> {
        self.game.load_fen(fen)?;
        info!(fen, "position loaded");
        if self.is_ai_turn() {
            self.process_ai_move()
        } else {
            Ok(None)
        }
    }

    fn report(&self, mv: Move, player: Player) -> TurnReport {
        let situation = self.game.situation();
        let mover = self.turn().other();
        if situation.contains(GameSituation::CHECKMATE) {
            info!(%mv, winner = ?mover, "checkmate");
        } else if situation.contains(GameSituation::DRAW) {
            info!(%mv, reason = %situation, "game drawn");
        } else if situation.contains(GameSituation::CHECK) {
            debug!(%mv, checked = ?self.turn(), "check");
        } else {
            debug!(%mv, ?player, "move played");
        }
        TurnReport {
            mv,
            player,
            situation,
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
