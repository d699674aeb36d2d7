//! Board state, FEN, and move application with exact take-back.

use std::str::FromStr;

use crate::error::{RulesError, RulesResult};
use crate::types::*;
use crate::zobrist::ZOBRIST;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// 8x8 grid of the board indexed `[row][col]`.
///
/// Row 0 is rank 8 (Black's home rank) and row 7 is rank 1; column 0 is
/// file a. Piece-square tables are laid out in this orientation.
pub type BoardSnapshot = [[Option<Piece>; 8]; 8];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CastlingRights {
    pub wk: bool,
    pub wq: bool,
    pub bk: bool,
    pub bq: bool,
}

impl CastlingRights {
    pub fn none() -> Self {
        Self {
            wk: false,
            wq: false,
            bk: false,
            bq: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Position {
    pub board: [Option<Piece>; 64],
    pub side_to_move: Color,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>, // square behind a pawn that just advanced 2
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

#[derive(Clone, Debug)]
pub struct Undo {
    pub captured: Option<Piece>,
    pub castling: CastlingRights,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
    pub moved_piece: Piece,
    pub rook_move: Option<(Square, Square)>, // (rook_from, rook_to) for castling
    pub ep_captured_sq: Option<Square>,      // square actually captured in en-passant
}

impl Position {
    pub fn startpos() -> Self {
        let mut p = Position {
            board: [None; 64],
            side_to_move: Color::White,
            castling: CastlingRights {
                wk: true,
                wq: true,
                bk: true,
                bq: true,
            },
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        };

        for f in 0..8 {
            p.board[8 + f] = Some(Piece::new(Color::White, PieceKind::Pawn));
            p.board[48 + f] = Some(Piece::new(Color::Black, PieceKind::Pawn));
        }
        let back = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (f, &kind) in back.iter().enumerate() {
            p.board[f] = Some(Piece::new(Color::White, kind));
            p.board[56 + f] = Some(Piece::new(Color::Black, kind));
        }
        p
    }

    /// Parses Forsyth-Edwards Notation. The halfmove and fullmove fields are
    /// optional and default to 0 and 1.
    pub fn from_fen(fen: &str) -> RulesResult<Self> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 || parts.len() > 6 {
            return Err(RulesError::fen("expected 4 to 6 fields"));
        }

        let board_part = parts[0];
        let stm_part = parts[1];
        let castle_part = parts[2];
        let ep_part = parts[3];
        let halfmove_part = parts.get(4).copied().unwrap_or("0");
        let fullmove_part = parts.get(5).copied().unwrap_or("1");

        let mut board = [None; 64];
        let ranks: Vec<&str> = board_part.split('/').collect();
        if ranks.len() != 8 {
            return Err(RulesError::fen("board section must have 8 ranks"));
        }

        for (rank_idx, rank_str) in ranks.iter().enumerate() {
            let mut file: i8 = 0;
            let rank: i8 = 7 - rank_idx as i8; // FEN lists rank 8 .. 1
            for ch in rank_str.chars() {
                if let Some(d) = ch.to_digit(10) {
                    if !(1..=8).contains(&d) {
                        return Err(RulesError::fen(format!("bad empty-square count '{ch}'")));
                    }
                    file += d as i8;
                } else {
                    let kind = PieceKind::from_char(ch)
                        .ok_or_else(|| RulesError::fen(format!("invalid piece char '{ch}'")))?;
                    let color = if ch.is_ascii_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let s = sq(file, rank)
                        .ok_or_else(|| RulesError::fen(format!("too many files in rank {}", rank + 1)))?;
                    board[s as usize] = Some(Piece::new(color, kind));
                    file += 1;
                }
                if file > 8 {
                    return Err(RulesError::fen(format!("too many files in rank {}", rank + 1)));
                }
            }
            if file != 8 {
                return Err(RulesError::fen(format!("not enough files in rank {}", rank + 1)));
            }
        }

        let side_to_move = match stm_part {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(RulesError::fen(format!("invalid side to move '{stm_part}'"))),
        };

        let mut castling = CastlingRights::none();
        if castle_part != "-" {
            for c in castle_part.chars() {
                match c {
                    'K' => castling.wk = true,
                    'Q' => castling.wq = true,
                    'k' => castling.bk = true,
                    'q' => castling.bq = true,
                    _ => return Err(RulesError::fen(format!("invalid castling char '{c}'"))),
                }
            }
        }

        let en_passant = if ep_part == "-" {
            None
        } else {
            let ep = coord_to_sq(ep_part)
                .ok_or_else(|| RulesError::fen(format!("invalid en-passant square '{ep_part}'")))?;
            // Behind a pawn of the side that just moved.
            let expected_rank = match side_to_move {
                Color::White => 5,
                Color::Black => 2,
            };
            if rank_of(ep) != expected_rank {
                return Err(RulesError::fen(format!("invalid en-passant square '{ep_part}'")));
            }
            Some(ep)
        };

        let halfmove_clock: u32 = halfmove_part
            .parse()
            .map_err(|_| RulesError::fen(format!("invalid halfmove clock '{halfmove_part}'")))?;
        let fullmove_number: u32 = fullmove_part
            .parse()
            .map_err(|_| RulesError::fen(format!("invalid fullmove number '{fullmove_part}'")))?;

        Ok(Position {
            board,
            side_to_move,
            castling,
            en_passant,
            halfmove_clock,
            fullmove_number,
        })
    }

    pub fn to_fen(&self) -> String {
        let mut out = String::with_capacity(90);
        for rank in (0..8).rev() {
            let mut empty = 0;
            for file in 0..8 {
                match self.board[rank * 8 + file] {
                    Some(pc) => {
                        if empty > 0 {
                            out.push_str(&empty.to_string());
                            empty = 0;
                        }
                        out.push(pc.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push_str(&empty.to_string());
            }
            if rank > 0 {
                out.push('/');
            }
        }

        out.push(' ');
        out.push(match self.side_to_move {
            Color::White => 'w',
            Color::Black => 'b',
        });

        out.push(' ');
        let c = &self.castling;
        if !(c.wk || c.wq || c.bk || c.bq) {
            out.push('-');
        } else {
            for (flag, ch) in [(c.wk, 'K'), (c.wq, 'Q'), (c.bk, 'k'), (c.bq, 'q')] {
                if flag {
                    out.push(ch);
                }
            }
        }

        out.push(' ');
        match self.en_passant {
            Some(ep) => out.push_str(&sq_to_coord(ep)),
            None => out.push('-'),
        }

        out.push_str(&format!(" {} {}", self.halfmove_clock, self.fullmove_number));
        out
    }

    pub fn king_sq(&self, c: Color) -> Option<Square> {
        (0..64u8).find(|&i| self.board[i as usize] == Some(Piece::new(c, PieceKind::King)))
    }

    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.board[sq as usize]
    }
    pub fn set_piece(&mut self, sq: Square, pc: Option<Piece>) {
        self.board[sq as usize] = pc;
    }

    /// Board as an 8x8 grid, row 0 = rank 8.
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut grid = [[None; 8]; 8];
        for (row, cells) in grid.iter_mut().enumerate() {
            let rank = 7 - row;
            for (col, cell) in cells.iter_mut().enumerate() {
                *cell = self.board[rank * 8 + col];
            }
        }
        grid
    }

    pub fn in_check(&self, c: Color) -> bool {
        let ksq = match self.king_sq(c) {
            Some(s) => s,
            None => return false,
        };
        self.is_square_attacked(ksq, c.other())
    }

    pub fn is_square_attacked(&self, target: Square, by: Color) -> bool {
        let tf = file_of(target);
        let tr = rank_of(target);

        // A white pawn attacks upward, so it sits one rank below its target.
        let pawn_dirs: &[(i8, i8)] = match by {
            Color::White => &[(-1, -1), (1, -1)],
            Color::Black => &[(-1, 1), (1, 1)],
        };
        for (df, dr) in pawn_dirs {
            if let Some(s) = sq(tf + df, tr + dr)
                && self.piece_at(s) == Some(Piece::new(by, PieceKind::Pawn))
            {
                return true;
            }
        }

        for (df, dr) in KNIGHT_DELTAS {
            if let Some(s) = sq(tf + df, tr + dr)
                && self.piece_at(s) == Some(Piece::new(by, PieceKind::Knight))
            {
                return true;
            }
        }

        for (df, dr) in KING_DELTAS {
            if let Some(s) = sq(tf + df, tr + dr)
                && self.piece_at(s) == Some(Piece::new(by, PieceKind::King))
            {
                return true;
            }
        }

        for (dirs, slider) in [(DIAGONALS, PieceKind::Bishop), (ORTHOGONALS, PieceKind::Rook)] {
            for (df, dr) in dirs {
                let mut f = tf + df;
                let mut r = tr + dr;
                while let Some(s) = sq(f, r) {
                    if let Some(pc) = self.piece_at(s) {
                        if pc.color == by && (pc.kind == slider || pc.kind == PieceKind::Queen) {
                            return true;
                        }
                        break;
                    }
                    f += df;
                    r += dr;
                }
            }
        }

        false
    }

    /// Zobrist key over placement, side to move, castling rights and the
    /// en-passant file. Move clocks are not part of the key.
    pub fn position_hash(&self) -> u64 {
        let mut h = 0u64;
        for (i, pc) in self.board.iter().enumerate() {
            if let Some(pc) = pc {
                h ^= ZOBRIST.piece_key(*pc, i as u8);
            }
        }
        if self.side_to_move == Color::Black {
            h ^= ZOBRIST.side_to_move;
        }
        let c = &self.castling;
        for (i, flag) in [c.wk, c.wq, c.bk, c.bq].into_iter().enumerate() {
            if flag {
                h ^= ZOBRIST.castling_key(i);
            }
        }
        if let Some(ep) = self.en_passant {
            h ^= ZOBRIST.ep_key(file_of(ep) as u8);
        }
        h
    }

    pub fn is_fifty_move_draw(&self) -> bool {
        self.halfmove_clock >= 100
    }

    /// Bare kings, a single minor piece, or only bishops that all stand on
    /// squares of one color.
    pub fn is_insufficient_material(&self) -> bool {
        let mut pieces = 0;
        let mut knights = 0;
        let mut bishops = 0;
        let mut bishop_square_colors = [0; 2];
        for (i, pc) in self.board.iter().enumerate() {
            let Some(pc) = pc else { continue };
            pieces += 1;
            match pc.kind {
                PieceKind::Knight => knights += 1,
                PieceKind::Bishop => {
                    bishops += 1;
                    let s = i as u8;
                    bishop_square_colors[((file_of(s) + rank_of(s)) % 2) as usize] += 1;
                }
                _ => {}
            }
        }

        if pieces == 2 {
            return true;
        }
        if pieces == 3 && (knights == 1 || bishops == 1) {
            return true;
        }
        pieces == bishops + 2 && (bishop_square_colors[0] == 0 || bishop_square_colors[1] == 0)
    }

    pub fn make_move(&mut self, mv: Move) -> Undo {
        let from = mv.from;
        let to = mv.to;
        let moved = self.piece_at(from).expect("no piece on from-square");
        let mut captured = self.piece_at(to);
        let prev_castling = self.castling.clone();
        let prev_ep = self.en_passant;
        let prev_hmc = self.halfmove_clock;
        let prev_fmn = self.fullmove_number;

        self.en_passant = None;

        let mut reset_hmc = moved.kind == PieceKind::Pawn || captured.is_some();

        let mut ep_captured_sq = None;
        if mv.is_en_passant() {
            let dir = match moved.color {
                Color::White => -1,
                Color::Black => 1,
            };
            if let Some(cs) = sq(file_of(to), rank_of(to) + dir) {
                captured = self.piece_at(cs);
                self.set_piece(cs, None);
                ep_captured_sq = Some(cs);
                reset_hmc = true;
            }
        }

        self.set_piece(from, None);
        self.set_piece(to, Some(moved));

        if moved.kind == PieceKind::Pawn {
            let r = rank_of(to);
            if (moved.color == Color::White && r == 7) || (moved.color == Color::Black && r == 0) {
                let promo = mv.promo.unwrap_or(PieceKind::Queen);
                self.set_piece(to, Some(Piece::new(moved.color, promo)));
            }
        }

        // Rook squares follow from the king's destination:
        // g-file castle moves h->f, c-file castle moves a->d.
        let mut rook_move = None;
        if mv.is_castle() && moved.kind == PieceKind::King {
            let (rf, rt) = if mv.flags.contains(MoveFlags::KINGSIDE_CASTLE) {
                (to + 1, to - 1)
            } else {
                (to - 2, to + 1)
            };
            let rook = self.piece_at(rf);
            self.set_piece(rf, None);
            self.set_piece(rt, rook);
            rook_move = Some((rf, rt));
        }

        if moved.kind == PieceKind::King {
            match moved.color {
                Color::White => {
                    self.castling.wk = false;
                    self.castling.wq = false;
                }
                Color::Black => {
                    self.castling.bk = false;
                    self.castling.bq = false;
                }
            }
        }
        // Any move touching a rook home square (rook leaving or being captured)
        for corner in [from, to] {
            match corner {
                0 => self.castling.wq = false,
                7 => self.castling.wk = false,
                56 => self.castling.bq = false,
                63 => self.castling.bk = false,
                _ => {}
            }
        }

        if mv.flags.contains(MoveFlags::BIG_PAWN) {
            self.en_passant = sq(file_of(from), (rank_of(from) + rank_of(to)) / 2);
        }

        self.halfmove_clock = if reset_hmc {
            0
        } else {
            self.halfmove_clock + 1
        };

        if self.side_to_move == Color::Black {
            self.fullmove_number += 1;
        }
        self.side_to_move = self.side_to_move.other();

        Undo {
            captured,
            castling: prev_castling,
            en_passant: prev_ep,
            halfmove_clock: prev_hmc,
            fullmove_number: prev_fmn,
            moved_piece: moved,
            rook_move,
            ep_captured_sq,
        }
    }

    pub fn unmake_move(&mut self, mv: Move, undo: Undo) {
        self.side_to_move = self.side_to_move.other();
        self.castling = undo.castling;
        self.en_passant = undo.en_passant;
        self.halfmove_clock = undo.halfmove_clock;
        self.fullmove_number = undo.fullmove_number;

        if let Some((rf, rt)) = undo.rook_move {
            let rook = self.piece_at(rt);
            self.set_piece(rt, None);
            self.set_piece(rf, rook);
        }

        // The moved piece goes back as it was, which also reverts promotions.
        self.set_piece(mv.to, None);
        self.set_piece(mv.from, Some(undo.moved_piece));

        match undo.ep_captured_sq {
            Some(cs) => self.set_piece(cs, undo.captured),
            None => self.set_piece(mv.to, undo.captured),
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}

impl FromStr for Position {
    type Err = RulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

pub(crate) const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (-1, 2),
    (-2, 1),
    (1, -2),
    (2, -1),
    (-1, -2),
    (-2, -1),
];

pub(crate) const KING_DELTAS: [(i8, i8); 8] = [
    (1, 1),
    (1, 0),
    (1, -1),
    (0, 1),
    (0, -1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
];

pub(crate) const DIAGONALS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const ORTHOGONALS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

#[cfg(test)]
#[path = "board_tests.rs"]
mod board_tests;
