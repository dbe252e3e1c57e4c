//! Session state: the single owner of everything a game of Kuba tracks.
//!
//! `GameState` is a pure data holder. It exposes read accessors for the
//! board, turn, winner, capture counters, and live marble counts, plus
//! crate-private mutators used exclusively by the move executor in
//! `rules`. No legality logic lives here.
//!
//! Live counts for White and Black start at 8 each and only ever
//! decrease; the 13 Red marbles are not tracked this way (captured Reds
//! are counted per player instead).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::Board;
use super::coord::Coord;
use super::marble::Marble;
use super::moves::MoveRecord;
use super::player::{PlayerId, PlayerMap};

/// Starting number of owned marbles per player.
pub const STARTING_OWNED_MARBLES: u8 = 8;

/// Number of captured Red marbles that wins the game.
pub const CAPTURES_TO_WIN: u8 = 7;

/// Complete state of one Kuba session.
///
/// Created once with the fixed starting board, mutated only through the
/// move executor, and frozen once a winner is set. Independent sessions
/// are independent values; cloning is cheap (the history is a persistent
/// `im::Vector`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    /// The marble color each player owns.
    colors: PlayerMap<Marble>,
    /// Red marbles captured per player.
    captured: PlayerMap<u8>,
    /// Owned marbles still on the board, per player.
    live: PlayerMap<u8>,
    /// Whose turn it is. `None` until the first move; then alternates.
    turn: Option<PlayerId>,
    winner: Option<PlayerId>,
    /// Origin cell of the most recently applied move.
    last_origin: Option<Coord>,
    history: Vector<MoveRecord>,
}

impl GameState {
    /// Create a fresh session with the fixed starting board.
    ///
    /// `first_color` is the color owned by `PlayerId::ONE`; `PlayerId::TWO`
    /// owns the other player color. Panics if given `Marble::Red` — callers
    /// validate player specs before constructing state.
    #[must_use]
    pub fn new(first_color: Marble) -> Self {
        let second_color = first_color
            .other_player_kind()
            .expect("player color must be White or Black");

        Self {
            board: Board::starting_position(),
            colors: PlayerMap::new(|p| {
                if p == PlayerId::ONE {
                    first_color
                } else {
                    second_color
                }
            }),
            captured: PlayerMap::with_value(0),
            live: PlayerMap::with_value(STARTING_OWNED_MARBLES),
            turn: None,
            winner: None,
            last_origin: None,
            history: Vector::new(),
        }
    }

    // === Read accessors ===

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The marble at a cell, or `None` if empty.
    #[must_use]
    pub fn marble_at(&self, coord: Coord) -> Option<Marble> {
        self.board.get(coord)
    }

    /// The color a player owns.
    #[must_use]
    pub fn color(&self, player: PlayerId) -> Marble {
        self.colors[player]
    }

    /// The player owning a color, or `None` for Red.
    #[must_use]
    pub fn owner_of(&self, marble: Marble) -> Option<PlayerId> {
        PlayerId::all().find(|&p| self.colors[p] == marble)
    }

    /// Whose turn it is. `None` before the first move, when either player
    /// may move.
    #[must_use]
    pub fn current_turn(&self) -> Option<PlayerId> {
        self.turn
    }

    /// The winner, once decided.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    /// Red marbles captured by a player.
    #[must_use]
    pub fn captured(&self, player: PlayerId) -> u8 {
        self.captured[player]
    }

    /// Owned marbles a player still has on the board.
    #[must_use]
    pub fn live_count(&self, player: PlayerId) -> u8 {
        self.live[player]
    }

    /// Origin cell of the most recently applied move, if any. The next
    /// move may not push a line whose destination end lands here.
    #[must_use]
    pub fn last_origin(&self) -> Option<Coord> {
        self.last_origin
    }

    /// Every successfully applied move, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    // === Mutators (move executor only) ===

    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Credit a captured Red to `player`; returns the new count.
    pub(crate) fn add_capture(&mut self, player: PlayerId) -> u8 {
        self.captured[player] += 1;
        self.captured[player]
    }

    /// An owned marble of `owner` left the board.
    pub(crate) fn remove_live(&mut self, owner: PlayerId) {
        debug_assert!(self.live[owner] > 0);
        self.live[owner] -= 1;
    }

    pub(crate) fn set_last_origin(&mut self, origin: Coord) {
        self.last_origin = Some(origin);
    }

    pub(crate) fn set_turn(&mut self, player: PlayerId) {
        self.turn = Some(player);
    }

    pub(crate) fn set_winner(&mut self, player: PlayerId) {
        debug_assert!(self.winner.is_none());
        self.winner = Some(player);
    }

    pub(crate) fn push_record(&mut self, record: MoveRecord) {
        self.history.push_back(record);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = GameState::new(Marble::White);

        assert_eq!(state.color(PlayerId::ONE), Marble::White);
        assert_eq!(state.color(PlayerId::TWO), Marble::Black);
        assert_eq!(state.current_turn(), None);
        assert_eq!(state.winner(), None);
        assert_eq!(state.last_origin(), None);
        assert_eq!(state.captured(PlayerId::ONE), 0);
        assert_eq!(state.captured(PlayerId::TWO), 0);
        assert_eq!(state.live_count(PlayerId::ONE), STARTING_OWNED_MARBLES);
        assert_eq!(state.live_count(PlayerId::TWO), STARTING_OWNED_MARBLES);
        assert!(state.history().is_empty());
        assert_eq!(state.board().marble_count(), (8, 8, 13));
    }

    #[test]
    fn test_color_assignment_black_first() {
        let state = GameState::new(Marble::Black);
        assert_eq!(state.color(PlayerId::ONE), Marble::Black);
        assert_eq!(state.color(PlayerId::TWO), Marble::White);
    }

    #[test]
    fn test_owner_of() {
        let state = GameState::new(Marble::White);
        assert_eq!(state.owner_of(Marble::White), Some(PlayerId::ONE));
        assert_eq!(state.owner_of(Marble::Black), Some(PlayerId::TWO));
        assert_eq!(state.owner_of(Marble::Red), None);
    }

    #[test]
    #[should_panic(expected = "player color must be White or Black")]
    fn test_red_first_color_panics() {
        let _ = GameState::new(Marble::Red);
    }

    #[test]
    fn test_capture_bookkeeping() {
        let mut state = GameState::new(Marble::White);

        assert_eq!(state.add_capture(PlayerId::ONE), 1);
        assert_eq!(state.add_capture(PlayerId::ONE), 2);
        assert_eq!(state.captured(PlayerId::ONE), 2);
        assert_eq!(state.captured(PlayerId::TWO), 0);

        state.remove_live(PlayerId::TWO);
        assert_eq!(state.live_count(PlayerId::TWO), 7);
        assert_eq!(state.live_count(PlayerId::ONE), 8);
    }

    #[test]
    fn test_serialization_round_trip() {
        let state = GameState::new(Marble::White);
        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(back.board(), state.board());
        assert_eq!(back.current_turn(), state.current_turn());
        assert_eq!(back.live_count(PlayerId::ONE), 8);
    }
}
