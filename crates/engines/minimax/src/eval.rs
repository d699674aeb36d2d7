//! Static evaluation: material plus piece-square bonuses.
//!
//! Scores are White-positive. Black pieces contribute the negation of their
//! absolute value.

use chess_core::{BoardSnapshot, Color, Piece, PieceKind};

use crate::pst::{self, Table};

/// Base material value of a piece kind.
pub fn material(kind: PieceKind) -> f64 {
    match kind {
        PieceKind::Pawn => 10.0,
        PieceKind::Knight => 30.0,
        PieceKind::Bishop => 30.0,
        PieceKind::Rook => 50.0,
        PieceKind::Queen => 90.0,
        PieceKind::King => 900.0,
    }
}

fn table(piece: Piece) -> &'static Table {
    let white = piece.color == Color::White;
    match piece.kind {
        PieceKind::Pawn if white => &pst::WHITE_PAWN,
        PieceKind::Pawn => &pst::BLACK_PAWN,
        PieceKind::Knight => &pst::KNIGHT,
        PieceKind::Bishop if white => &pst::WHITE_BISHOP,
        PieceKind::Bishop => &pst::BLACK_BISHOP,
        PieceKind::Rook if white => &pst::WHITE_ROOK,
        PieceKind::Rook => &pst::BLACK_ROOK,
        PieceKind::Queen => &pst::QUEEN,
        PieceKind::King if white => &pst::WHITE_KING,
        PieceKind::King => &pst::BLACK_KING,
    }
}

/// Signed contribution of whatever stands on snapshot square (`row`, `col`).
///
/// `row` 0 is rank 8, matching [`BoardSnapshot`]; the tables are laid out in
/// the same orientation.
pub fn piece_value(piece: Option<Piece>, row: usize, col: usize) -> f64 {
    let Some(piece) = piece else {
        return 0.0;
    };
    let absolute = material(piece.kind) + table(piece)[row][col];
    match piece.color {
        Color::White => absolute,
        Color::Black => -absolute,
    }
}

/// Evaluates a board snapshot, White-positive.
pub fn evaluate(board: &BoardSnapshot) -> f64 {
    let mut total = 0.0;
    for (row, rank) in board.iter().enumerate() {
        for (col, &square) in rank.iter().enumerate() {
            total += piece_value(square, row, col);
        }
    }
    total
}

#[cfg(test)]
#[path = "eval_tests.rs"]
mod eval_tests;
