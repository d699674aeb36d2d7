use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use serde::{Deserialize, Serialize};

/// Bitmask describing the state of a game after a move.
///
/// Several flags can be set at once: a checkmate is also a check and
/// ends the game, a stalemate is also a draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameSituation(u8);

impl GameSituation {
    pub const NONE: GameSituation = GameSituation(0);
    pub const CHECK: GameSituation = GameSituation(1);
    pub const CHECKMATE: GameSituation = GameSituation(2);
    pub const DRAW: GameSituation = GameSituation(4);
    pub const STALEMATE: GameSituation = GameSituation(8);
    pub const THREEFOLD: GameSituation = GameSituation(16);
    pub const INSUFFICIENT_MATERIAL: GameSituation = GameSituation(32);
    pub const GAME_OVER: GameSituation = GameSituation(64);

    pub fn contains(self, other: GameSituation) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_none(self) -> bool {
        self.0 == 0
    }

    /// The most significant event, in the order a player would want to hear
    /// about it.
    pub fn headline(self) -> Option<&'static str> {
        [
            (GameSituation::CHECKMATE, "checkmate"),
            (GameSituation::INSUFFICIENT_MATERIAL, "insufficient material"),
            (GameSituation::CHECK, "check"),
            (GameSituation::THREEFOLD, "threefold repetition"),
            (GameSituation::STALEMATE, "stalemate"),
            (GameSituation::DRAW, "draw"),
        ]
        .into_iter()
        .find(|(flag, _)| self.contains(*flag))
        .map(|(_, name)| name)
    }
}

impl BitOr for GameSituation {
    type Output = GameSituation;
    fn bitor(self, rhs: GameSituation) -> GameSituation {
        GameSituation(self.0 | rhs.0)
    }
}

impl BitOrAssign for GameSituation {
    fn bitor_assign(&mut self, rhs: GameSituation) {
        self.0 |= rhs.0;
    }
}

impl fmt::Display for GameSituation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.headline().unwrap_or("none"))
    }
}
