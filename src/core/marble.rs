//! Marble kinds.
//!
//! A cell on the board holds `Option<Marble>`: `None` is an empty cell,
//! `Some(..)` one of the three marble kinds. White and Black are owned by
//! the two players; Red is neutral and is what players capture to win.

use serde::{Deserialize, Serialize};

/// One of the three marble kinds on a Kuba board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Marble {
    White,
    Black,
    Red,
}

impl Marble {
    /// Is this a kind a player may own?
    #[must_use]
    pub const fn is_player_kind(self) -> bool {
        matches!(self, Marble::White | Marble::Black)
    }

    /// The other player-owned kind. Red has no counterpart.
    #[must_use]
    pub const fn other_player_kind(self) -> Option<Marble> {
        match self {
            Marble::White => Some(Marble::Black),
            Marble::Black => Some(Marble::White),
            Marble::Red => None,
        }
    }
}

impl std::fmt::Display for Marble {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Marble::White => "W",
            Marble::Black => "B",
            Marble::Red => "R",
        };
        write!(f, "{}", s)
    }
}
