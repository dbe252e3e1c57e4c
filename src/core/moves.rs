//! Move representation and history records.
//!
//! A `Move` is the pair a player submits: which cell to push from and in
//! which direction. A `MoveRecord` is the completed-move entry kept in the
//! session history, used for replay/debugging and for the anti-reversal
//! bookkeeping exposed to hosts.

use serde::{Deserialize, Serialize};

use super::coord::{Coord, Direction};
use super::marble::Marble;
use super::player::PlayerId;

/// A push request: origin cell plus direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The cell being pushed from.
    pub origin: Coord,
    /// The push direction.
    pub direction: Direction,
}

impl Move {
    /// Create a move.
    #[must_use]
    pub const fn new(origin: Coord, direction: Direction) -> Self {
        Self { origin, direction }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?}", self.origin, self.direction)
    }
}

/// A successfully applied move, as stored in the session history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The player who pushed.
    pub player: PlayerId,
    /// The move that was applied.
    pub mv: Move,
    /// The marble pushed off the board by this move, if any.
    pub captured: Option<Marble>,
}

impl MoveRecord {
    /// Create a new move record.
    #[must_use]
    pub const fn new(player: PlayerId, mv: Move, captured: Option<Marble>) -> Self {
        Self {
            player,
            mv,
            captured,
        }
    }
}
