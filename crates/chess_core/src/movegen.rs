//! Legal move generation in a fixed, documented order.

use crate::board::{DIAGONALS, KING_DELTAS, KNIGHT_DELTAS, ORTHOGONALS, Position};
use crate::types::*;

const PROMOTION_KINDS: [PieceKind; 4] = [
    PieceKind::Queen,
    PieceKind::Rook,
    PieceKind::Bishop,
    PieceKind::Knight,
];

/// Generate all legal moves, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`, cloning the position only once.
///
/// Moves come out in a fixed order: origin squares from a1 up to h8, then the
/// per-piece order of the generators below.
pub fn legal_moves(pos: &Position) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(64);
    legal_moves_into(&mut tmp, &mut out);
    out
}

/// Generate all legal moves into the provided buffer, reusing it across calls.
pub fn legal_moves_into(pos: &mut Position, out: &mut Vec<Move>) {
    out.clear();
    for from in 0..64u8 {
        pseudo_moves_from(pos, from, out);
    }
    retain_legal(pos, out);
}

/// Legal moves of the piece standing on `from` (empty if the square is empty
/// or holds a piece of the side not to move).
pub fn legal_moves_from(pos: &Position, from: Square) -> Vec<Move> {
    let mut tmp = pos.clone();
    let mut out = Vec::with_capacity(32);
    pseudo_moves_from(&tmp, from, &mut out);
    retain_legal(&mut tmp, &mut out);
    out
}

fn retain_legal(pos: &mut Position, out: &mut Vec<Move>) {
    let mover = pos.side_to_move;
    // Filter illegal moves in-place by playing them on the mutable position.
    out.retain(|&mv| {
        let undo = pos.make_move(mv);
        let illegal = pos.in_check(mover);
        pos.unmake_move(mv, undo);
        !illegal
    });
}

fn pseudo_moves_from(pos: &Position, from: Square, out: &mut Vec<Move>) {
    let pc = match pos.piece_at(from) {
        Some(p) if p.color == pos.side_to_move => p,
        _ => return,
    };
    match pc.kind {
        PieceKind::Pawn => gen_pawn(pos, from, pc.color, out),
        PieceKind::Knight => gen_steps(pos, from, pc, &KNIGHT_DELTAS, out),
        PieceKind::Bishop => gen_slider(pos, from, pc, &DIAGONALS, out),
        PieceKind::Rook => gen_slider(pos, from, pc, &ORTHOGONALS, out),
        PieceKind::Queen => {
            gen_slider(pos, from, pc, &DIAGONALS, out);
            gen_slider(pos, from, pc, &ORTHOGONALS, out);
        }
        PieceKind::King => {
            gen_steps(pos, from, pc, &KING_DELTAS, out);
            gen_castle(pos, from, pc.color, out);
        }
    }
}

/// Quiet move or capture of whatever stands on `to`.
fn step(pos: &Position, from: Square, to: Square, kind: PieceKind) -> Move {
    let mut mv = Move::new(from, to, kind);
    if let Some(victim) = pos.piece_at(to) {
        mv.captured = Some(victim.kind);
        mv.flags |= MoveFlags::CAPTURE;
    }
    mv
}

fn push_pawn_move(out: &mut Vec<Move>, mv: Move, promo_rank: i8) {
    if rank_of(mv.to) == promo_rank {
        for pk in PROMOTION_KINDS {
            let mut promo = mv;
            promo.promo = Some(pk);
            promo.flags |= MoveFlags::PROMOTION;
            out.push(promo);
        }
    } else {
        out.push(mv);
    }
}

fn gen_pawn(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);

    let (dir, start_rank, promo_rank): (i8, i8, i8) = match c {
        Color::White => (1, 1, 7),
        Color::Black => (-1, 6, 0),
    };

    // forward 1
    if let Some(to) = sq(f, r + dir)
        && pos.piece_at(to).is_none()
    {
        push_pawn_move(out, Move::new(from, to, PieceKind::Pawn), promo_rank);

        // forward 2 from start
        if r == start_rank
            && let Some(to2) = sq(f, r + 2 * dir)
            && pos.piece_at(to2).is_none()
        {
            let mut mv = Move::new(from, to2, PieceKind::Pawn);
            mv.flags |= MoveFlags::BIG_PAWN;
            out.push(mv);
        }
    }

    // captures + en-passant
    for df in [-1, 1] {
        let Some(to) = sq(f + df, r + dir) else {
            continue;
        };
        match pos.piece_at(to) {
            Some(tpc) if tpc.color != c => {
                push_pawn_move(out, step(pos, from, to, PieceKind::Pawn), promo_rank);
            }
            None if pos.en_passant == Some(to) => {
                let mut mv = Move::new(from, to, PieceKind::Pawn);
                mv.captured = Some(PieceKind::Pawn);
                mv.flags |= MoveFlags::EN_PASSANT;
                out.push(mv);
            }
            _ => {}
        }
    }
}

fn gen_steps(pos: &Position, from: Square, pc: Piece, deltas: &[(i8, i8)], out: &mut Vec<Move>) {
    let f = file_of(from);
    let r = rank_of(from);
    for (df, dr) in deltas {
        if let Some(to) = sq(f + df, r + dr) {
            match pos.piece_at(to) {
                Some(other) if other.color == pc.color => {}
                _ => out.push(step(pos, from, to, pc.kind)),
            }
        }
    }
}

fn gen_slider(pos: &Position, from: Square, pc: Piece, dirs: &[(i8, i8)], out: &mut Vec<Move>) {
    let f0 = file_of(from);
    let r0 = rank_of(from);
    for (df, dr) in dirs {
        let mut f = f0 + df;
        let mut r = r0 + dr;
        while let Some(to) = sq(f, r) {
            match pos.piece_at(to) {
                None => out.push(Move::new(from, to, pc.kind)),
                Some(other) if other.color != pc.color => {
                    out.push(step(pos, from, to, pc.kind));
                    break;
                }
                _ => break,
            }
            f += df;
            r += dr;
        }
    }
}

fn gen_castle(pos: &Position, from: Square, c: Color, out: &mut Vec<Move>) {
    let (king_from, kingside, queenside) = match c {
        Color::White => (4u8, pos.castling.wk, pos.castling.wq),
        Color::Black => (60u8, pos.castling.bk, pos.castling.bq),
    };
    if from != king_from {
        return;
    }

    // Can't castle out of/through check: check squares must not be attacked.
    if pos.in_check(c) {
        return;
    }

    let enemy = c.other();
    let rook = Some(Piece::new(c, PieceKind::Rook));

    // King side: e->g, f and g empty and not attacked, rook on h
    if kingside
        && pos.piece_at(from + 3) == rook
        && pos.piece_at(from + 1).is_none()
        && pos.piece_at(from + 2).is_none()
        && !pos.is_square_attacked(from + 1, enemy)
        && !pos.is_square_attacked(from + 2, enemy)
    {
        let mut mv = Move::new(from, from + 2, PieceKind::King);
        mv.flags |= MoveFlags::KINGSIDE_CASTLE;
        out.push(mv);
    }

    // Queen side: e->c, d, c and b empty; d and c not attacked, rook on a
    if queenside
        && pos.piece_at(from - 4) == rook
        && pos.piece_at(from - 1).is_none()
        && pos.piece_at(from - 2).is_none()
        && pos.piece_at(from - 3).is_none()
        && !pos.is_square_attacked(from - 1, enemy)
        && !pos.is_square_attacked(from - 2, enemy)
    {
        let mut mv = Move::new(from, from - 2, PieceKind::King);
        mv.flags |= MoveFlags::QUEENSIDE_CASTLE;
        out.push(mv);
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
