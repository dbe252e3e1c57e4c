//! The session facade: named players over the core engine.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::{Board, Coord, Direction, GameState, Marble, Move, PlayerId, PlayerMap};
use crate::error::GameError;
use crate::rules::{self, GameResult, MoveOutcome, RejectReason};

/// A complete game of Kuba between two named players.
///
/// The facade owns one [`GameState`], maps external player names to the
/// engine's [`PlayerId`]s, and exposes the call surface a presentation
/// layer drives: `make_move` plus read-only accessors. All mutation goes
/// through `make_move`/`try_move`.
///
/// ## Example
///
/// ```
/// use kuba_engine::{Direction, KubaGame, Marble};
///
/// let mut game = KubaGame::new(("ann", Marble::White), ("bob", Marble::Black)).unwrap();
/// assert!(game.make_move("ann", (0, 0), Direction::Right));
/// assert_eq!(game.current_turn(), Some("bob"));
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct KubaGame {
    state: GameState,
    names: PlayerMap<String>,
    by_name: FxHashMap<String, PlayerId>,
}

impl KubaGame {
    /// Create a session from two `(name, color)` pairs.
    ///
    /// Fails if either color is Red, the colors are equal, or the names
    /// are equal.
    pub fn new(
        first: (impl Into<String>, Marble),
        second: (impl Into<String>, Marble),
    ) -> Result<Self, GameError> {
        let (first_name, first_color) = (first.0.into(), first.1);
        let (second_name, second_color) = (second.0.into(), second.1);

        for color in [first_color, second_color] {
            if !color.is_player_kind() {
                return Err(GameError::NotAPlayerColor(color));
            }
        }
        if first_color == second_color {
            return Err(GameError::DuplicateColor);
        }
        if first_name == second_name {
            return Err(GameError::DuplicateName(first_name));
        }

        let mut by_name = FxHashMap::default();
        by_name.insert(first_name.clone(), PlayerId::ONE);
        by_name.insert(second_name.clone(), PlayerId::TWO);

        Ok(Self {
            state: GameState::new(first_color),
            names: PlayerMap::new(|p| {
                if p == PlayerId::ONE {
                    first_name.clone()
                } else {
                    second_name.clone()
                }
            }),
            by_name,
        })
    }

    /// Submit a move; `true` if it applied, `false` if it was illegal.
    ///
    /// Equivalent to [`try_move`](Self::try_move) with the outcome
    /// collapsed to a boolean; the state is untouched on `false`.
    pub fn make_move(&mut self, name: &str, coord: (usize, usize), direction: Direction) -> bool {
        self.try_move(name, coord, direction).is_applied()
    }

    /// Submit a move and observe the full outcome, including the reject
    /// reason or the capture/winner produced.
    pub fn try_move(
        &mut self,
        name: &str,
        coord: (usize, usize),
        direction: Direction,
    ) -> MoveOutcome {
        let Some(player) = self.player_id(name) else {
            return MoveOutcome::Rejected(RejectReason::UnknownPlayer);
        };
        let Some(origin) = Coord::new(coord.0, coord.1) else {
            return MoveOutcome::Rejected(RejectReason::OutOfBounds);
        };
        rules::execute(&mut self.state, player, Move::new(origin, direction))
    }

    // === Read accessors ===

    /// The id behind a player name.
    #[must_use]
    pub fn player_id(&self, name: &str) -> Option<PlayerId> {
        self.by_name.get(name).copied()
    }

    /// The name of a player.
    #[must_use]
    pub fn name(&self, player: PlayerId) -> &str {
        &self.names[player]
    }

    /// Name of the player to move, or `None` before the first move.
    #[must_use]
    pub fn current_turn(&self) -> Option<&str> {
        self.state.current_turn().map(|p| self.name(p))
    }

    /// Name of the winner, once decided.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.state.winner().map(|p| self.name(p))
    }

    /// How the game ended, once decided.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        rules::game_result(&self.state)
    }

    /// Red marbles captured by the named player, or `None` for an
    /// unknown name.
    #[must_use]
    pub fn captured(&self, name: &str) -> Option<u8> {
        self.player_id(name).map(|p| self.state.captured(p))
    }

    /// The marble at a cell; `None` for an empty cell or an out-of-range
    /// coordinate.
    #[must_use]
    pub fn marble_at(&self, coord: (usize, usize)) -> Option<Marble> {
        Coord::new(coord.0, coord.1).and_then(|c| self.state.marble_at(c))
    }

    /// Counts of (White, Black, Red) marbles on the board.
    #[must_use]
    pub fn marble_count(&self) -> (usize, usize, usize) {
        self.state.board().marble_count()
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// The underlying session state, for hosts driving `rules` directly
    /// (legal-move enumeration, history inspection).
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Every legal move for the named player; empty for an unknown name
    /// or a finished game.
    #[must_use]
    pub fn legal_moves(&self, name: &str) -> Vec<Move> {
        match self.player_id(name) {
            Some(player) => rules::legal_moves(&self.state, player),
            None => Vec::new(),
        }
    }
}
