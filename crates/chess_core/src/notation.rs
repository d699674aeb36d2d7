use crate::board::Position;
use crate::error::{RulesError, RulesResult};
use crate::movegen::legal_moves_from;
use crate::types::*;

pub fn move_to_uci(mv: Move) -> String {
    mv.to_string()
}

/// Parses coordinate notation ("e2e4", "e7e8q") into the matching legal
/// move, so flags and captured piece come from move generation. A promotion
/// written without a piece letter resolves to a queen.
pub fn parse_uci_move(pos: &Position, txt: &str) -> RulesResult<Move> {
    let txt = txt.trim();
    if !txt.is_ascii() || !(4..=5).contains(&txt.len()) {
        return Err(RulesError::InvalidMoveText {
            text: txt.to_string(),
        });
    }
    let square = |s: &str| {
        coord_to_sq(s).ok_or_else(|| RulesError::InvalidSquare {
            square: s.to_string(),
        })
    };
    let from = square(&txt[0..2])?;
    let to = square(&txt[2..4])?;
    let promo = match txt.chars().nth(4) {
        None => None,
        Some(c) => match PieceKind::from_char(c) {
            Some(k @ (PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight)) => {
                Some(k)
            }
            _ => {
                return Err(RulesError::InvalidMoveText {
                    text: txt.to_string(),
                });
            }
        },
    };

    // Promotions are generated queen first.
    legal_moves_from(pos, from)
        .into_iter()
        .find(|m| m.to == to && (promo.is_none() || m.promo == promo))
        .ok_or_else(|| RulesError::IllegalMove {
            mv: txt.to_string(),
        })
}
