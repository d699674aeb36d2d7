//! Zobrist keys used to recognise repeated positions.
//!
//! A position key XORs one value per (piece, square), one for Black to move,
//! one per castling right still held and one per en-passant file.

use crate::types::{Piece, Square};

pub struct ZobristKeys {
    /// Indexed by [color][piece_kind][square]
    pub pieces: [[[u64; 64]; 6]; 2],
    pub side_to_move: u64,
    /// [wk, wq, bk, bq]
    pub castling: [u64; 4],
    pub en_passant: [u64; 8],
}

/// splitmix64 step: returns the next state and its output.
const fn splitmix64(state: u64) -> (u64, u64) {
    let state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    (state, z ^ (z >> 31))
}

impl ZobristKeys {
    /// Keys from a fixed seed so hashes are stable across runs.
    pub const fn new() -> Self {
        let mut state = 0x5EED_C4E5_5B0A_4D00u64;
        let mut keys = ZobristKeys {
            pieces: [[[0; 64]; 6]; 2],
            side_to_move: 0,
            castling: [0; 4],
            en_passant: [0; 8],
        };

        let mut i = 0;
        while i < 2 * 6 * 64 {
            let (next, key) = splitmix64(state);
            state = next;
            keys.pieces[i / 384][(i / 64) % 6][i % 64] = key;
            i += 1;
        }

        let (next, key) = splitmix64(state);
        state = next;
        keys.side_to_move = key;

        let mut i = 0;
        while i < 4 {
            let (next, key) = splitmix64(state);
            state = next;
            keys.castling[i] = key;
            i += 1;
        }

        let mut i = 0;
        while i < 8 {
            let (next, key) = splitmix64(state);
            state = next;
            keys.en_passant[i] = key;
            i += 1;
        }

        keys
    }

    #[inline(always)]
    pub fn piece_key(&self, piece: Piece, sq: Square) -> u64 {
        self.pieces[piece.color.idx()][piece.kind.idx()][sq as usize]
    }

    /// Key for castling right index (0=wk, 1=wq, 2=bk, 3=bq).
    #[inline(always)]
    pub fn castling_key(&self, index: usize) -> u64 {
        self.castling[index]
    }

    #[inline(always)]
    pub fn ep_key(&self, file: u8) -> u64 {
        self.en_passant[file as usize]
    }
}

impl Default for ZobristKeys {
    fn default() -> Self {
        Self::new()
    }
}

pub static ZOBRIST: ZobristKeys = ZobristKeys::new();

#[cfg(test)]
#[path = "zobrist_tests.rs"]
mod zobrist_tests;
