//! Fixed-depth minimax search with alpha-beta pruning.
//!
//! The search drives a [`RulesEngine`] in place: every move it applies is
//! reversed before the call that applied it returns, so the engine's
//! position is the same before and after a search.
//!
//! Scores follow the side that moves at the root. The depth-0 base case
//! returns `-evaluate(board)`: the evaluator is White-positive, and the
//! root's children are scored for the player who just moved, so the
//! negation makes a Black root maximize Black's material and position.

use std::time::Duration;

use chess_core::{Move, RulesEngine};
use tracing::{debug, trace, warn};

use crate::config::AiConfig;
use crate::eval::evaluate;
use crate::time_control::TimeControl;

/// Initial value for a maximizing node; returned unchanged when the node
/// has no legal moves.
pub const MAX_SENTINEL: f64 = -9999.0;
/// Initial value for a minimizing node; returned unchanged when the node
/// has no legal moves.
pub const MIN_SENTINEL: f64 = 9999.0;

/// Outcome of one call to [`MinimaxAi::search`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// None only if the side to move has no legal moves.
    pub best_move: Option<Move>,
    /// Value of `best_move`, or `-inf` if no root move was fully searched.
    pub score: f64,
    pub depth: u8,
    pub nodes: u64,
    /// Whether the time control cut the search short.
    pub stopped: bool,
}

/// Minimax player over a rules engine it owns or borrows (`&mut R`).
#[derive(Debug, Clone)]
pub struct MinimaxAi<R> {
    rules: R,
    depth: u8,
    nodes: u64,
}

impl<R: RulesEngine> MinimaxAi<R> {
    pub fn new(rules: R, depth: u8) -> Self {
        Self {
            rules,
            depth,
            nodes: 0,
        }
    }

    pub fn from_config(rules: R, config: &AiConfig) -> Self {
        Self::new(rules, config.depth)
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Takes effect on the next search.
    pub fn set_depth(&mut self, depth: u8) {
        self.depth = depth;
    }

    pub fn rules(&self) -> &R {
        &self.rules
    }

    pub fn rules_mut(&mut self) -> &mut R {
        &mut self.rules
    }

    pub fn into_inner(self) -> R {
        self.rules
    }

    /// Best move for the side to move, or None on checkmate or stalemate.
    pub fn find_best_move(&mut self) -> Option<Move> {
        self.search(&TimeControl::default()).best_move
    }

    /// Searches the current position under `tc`.
    ///
    /// If `tc` stops the search, the root move in progress is discarded and
    /// the best fully searched root move is returned, or the first legal
    /// move if none finished.
    pub fn search(&mut self, tc: &TimeControl) -> SearchResult {
        self.nodes = 0;
        tc.start();

        let moves = self.rules.legal_moves(None);
        let mut best_move = None;
        let mut best_score = f64::NEG_INFINITY;

        for &mv in &moves {
            if tc.check_time() {
                break;
            }
            self.apply(mv);
            let score = self.minimax_inner(
                self.depth.saturating_sub(1),
                f64::NEG_INFINITY,
                f64::INFINITY,
                false,
                tc,
            );
            self.reverse();

            if tc.is_stopped() {
                break;
            }
            trace!(%mv, score, "root move");
            // Equal scores go to the later move in enumeration order
            if score >= best_score {
                best_score = score;
                best_move = Some(mv);
            }
        }

        let stopped = tc.is_stopped();
        if stopped {
            warn!(
                depth = self.depth,
                nodes = self.nodes,
                elapsed_ms = duration_ms(tc.elapsed()),
                "search stopped before completing"
            );
        }
        let best_move = best_move.or_else(|| moves.first().copied());

        debug!(
            depth = self.depth,
            nodes = self.nodes,
            elapsed_ms = duration_ms(tc.elapsed()),
            best_move = ?best_move.map(|m| m.to_string()),
            score = best_score,
            "search finished"
        );

        SearchResult {
            best_move,
            score: best_score,
            depth: self.depth,
            nodes: self.nodes,
            stopped,
        }
    }

    /// Value of the current position searched `depth` plies deep, with no
    /// time limit. `minimax(0, ..)` is `-evaluate(board)`.
    pub fn minimax(&mut self, depth: u8, alpha: f64, beta: f64, maximizing: bool) -> f64 {
        self.minimax_inner(depth, alpha, beta, maximizing, &TimeControl::default())
    }

    fn minimax_inner(
        &mut self,
        depth: u8,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
        tc: &TimeControl,
    ) -> f64 {
        self.nodes += 1;
        if tc.should_check_time(self.nodes) && tc.check_time() {
            // The root discards whatever a stopped subtree returns
            return 0.0;
        }

        if depth == 0 {
            return -evaluate(&self.rules.board_snapshot());
        }

        // No legal moves leaves the sentinel in place: mate and stalemate
        // both score as an extreme value rather than being told apart.
        let moves = self.rules.legal_moves(None);
        if maximizing {
            let mut best = MAX_SENTINEL;
            for mv in moves {
                self.apply(mv);
                let value = self.minimax_inner(depth - 1, alpha, beta, false, tc);
                self.reverse();
                if tc.is_stopped() {
                    return best;
                }
                best = best.max(value);
                alpha = alpha.max(best);
                if beta <= alpha {
                    return best;
                }
            }
            best
        } else {
            let mut best = MIN_SENTINEL;
            for mv in moves {
                self.apply(mv);
                let value = self.minimax_inner(depth - 1, alpha, beta, true, tc);
                self.reverse();
                if tc.is_stopped() {
                    return best;
                }
                best = best.min(value);
                beta = beta.min(best);
                if beta <= alpha {
                    return best;
                }
            }
            best
        }
    }

    fn apply(&mut self, mv: Move) {
        // Every move comes from the engine's own enumeration
        if let Err(err) = self.rules.apply(mv) {
            panic!("rules engine refused its own legal move {mv}: {err}");
        }
    }

    fn reverse(&mut self) {
        if self.rules.reverse().is_none() {
            panic!("rules engine had no move to reverse during search");
        }
    }
}

fn duration_ms(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
