//! Move validation and execution.
//!
//! The validator is a pure predicate over `(player, origin, direction)`.
//! The executor performs the line shift, applies edge captures, updates
//! counters, evaluates win conditions, and flips the turn. Every rejected
//! move, whether by the validator or by the anti-reversal check, leaves
//! the state untouched: a move either fully applies or has no effect.
//!
//! ## The push algorithm
//!
//! All four directions run the same routine, parameterized by the
//! direction vector:
//!
//! 1. Walk from the origin toward the push direction to the *destination
//!    end*: the first empty cell, or the boundary cell, whichever comes
//!    first. This delimits the contiguous line that will shift.
//! 2. If the destination end equals the previous move's origin, the move
//!    would exactly undo the opponent's last push and is rejected.
//! 3. If the destination end sits on the boundary, the marble there (if
//!    any) is pushed off: a Red scores the pusher, an owned marble
//!    shrinks its owner's live count.
//! 4. Every cell in the line takes the marble of its neighbor toward the
//!    origin; the origin empties into the space the validator proved open
//!    behind it.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{
    Board, Coord, Direction, GameState, Marble, Move, MoveRecord, PlayerId, CAPTURES_TO_WIN,
};

/// Why a move was rejected. Rejection never mutates state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RejectReason {
    /// The submitted coordinate is outside the 7×7 range.
    OutOfBounds,
    /// The submitted name does not belong to either player of the session.
    UnknownPlayer,
    /// The game already has a winner.
    GameOver,
    /// The origin cell does not hold the mover's color.
    NotYourMarble,
    /// It is the other player's turn.
    OutOfTurn,
    /// The cell behind the origin is occupied, so the line has nowhere
    /// to recoil from.
    BlockedBehind,
    /// The push would exactly reverse the previous move.
    WouldReverse,
}

/// Result of submitting a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The move was illegal; nothing changed.
    Rejected(RejectReason),
    /// The move was applied.
    Applied {
        /// The marble pushed off the board, if the line reached the edge.
        captured: Option<Marble>,
        /// The winner, if this move decided the game.
        winner: Option<PlayerId>,
    },
}

impl MoveOutcome {
    /// Did the move apply?
    #[must_use]
    pub const fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}

/// How a game was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// The winner captured seven Red marbles.
    CapturedSevenReds,
    /// The opponent has no marbles left on the board.
    OpponentEliminated,
}

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: PlayerId,
    pub reason: WinReason,
}

/// Check whether a game has ended, and how.
#[must_use]
pub fn game_result(state: &GameState) -> Option<GameResult> {
    let winner = state.winner()?;
    let reason = if state.captured(winner) >= CAPTURES_TO_WIN {
        WinReason::CapturedSevenReds
    } else {
        WinReason::OpponentEliminated
    };
    Some(GameResult { winner, reason })
}

/// Validate a move without touching state.
///
/// Everything that depends only on the origin cell is checked here; the
/// anti-reversal rule depends on the walk result and is checked by
/// [`execute`].
pub fn validate(state: &GameState, player: PlayerId, mv: Move) -> Result<(), RejectReason> {
    if state.winner().is_some() {
        return Err(RejectReason::GameOver);
    }
    if state.marble_at(mv.origin) != Some(state.color(player)) {
        return Err(RejectReason::NotYourMarble);
    }
    if let Some(turn) = state.current_turn() {
        if turn != player {
            return Err(RejectReason::OutOfTurn);
        }
    }
    // The cell the line recoils from must be open: either off the board
    // (pushing from an edge) or empty. A mid-line push only looks at this
    // one cell, never further back.
    if let Some(behind) = mv.origin.step(mv.direction.opposite()) {
        if state.marble_at(behind).is_some() {
            return Err(RejectReason::BlockedBehind);
        }
    }
    Ok(())
}

/// The boundary-ward terminus of the line pushed by `mv`: the first empty
/// cell past the line, or the boundary cell if the line runs to the edge.
fn destination_end(board: &Board, mv: Move) -> Coord {
    let mut end = mv.origin;
    while let Some(next) = end.step(mv.direction) {
        end = next;
        if board.get(end).is_none() {
            break;
        }
    }
    end
}

/// Would `mv` recreate the previous move's origin as its destination end?
fn reverses_previous(state: &GameState, mv: Move) -> bool {
    state.last_origin() == Some(destination_end(state.board(), mv))
}

/// Is `mv` fully legal for `player`, anti-reversal included?
#[must_use]
pub fn is_legal(state: &GameState, player: PlayerId, mv: Move) -> bool {
    validate(state, player, mv).is_ok() && !reverses_previous(state, mv)
}

/// Enumerate every legal move for a player in the current state.
#[must_use]
pub fn legal_moves(state: &GameState, player: PlayerId) -> Vec<Move> {
    let mut moves = Vec::new();
    for origin in Coord::all() {
        for direction in Direction::ALL {
            let mv = Move::new(origin, direction);
            if is_legal(state, player, mv) {
                moves.push(mv);
            }
        }
    }
    moves
}

/// Does the player have any legal move?
#[must_use]
pub fn has_legal_move(state: &GameState, player: PlayerId) -> bool {
    Coord::all().any(|origin| {
        Direction::ALL
            .into_iter()
            .any(|direction| is_legal(state, player, Move::new(origin, direction)))
    })
}

/// Apply a move for `player`.
///
/// Validates first; an illegal move returns `Rejected` with zero
/// mutation. On success the pushed line shifts one step, edge captures
/// are credited, the move is recorded, win conditions are evaluated in
/// fixed order, and the turn passes to the opponent.
pub fn execute(state: &mut GameState, player: PlayerId, mv: Move) -> MoveOutcome {
    if let Err(reason) = validate(state, player, mv) {
        return MoveOutcome::Rejected(reason);
    }

    let end = destination_end(state.board(), mv);
    if state.last_origin() == Some(end) {
        return MoveOutcome::Rejected(RejectReason::WouldReverse);
    }

    // Edge capture: the line ran all the way to the boundary, so whatever
    // occupies the boundary cell leaves the board.
    let mut captured = None;
    if end.step(mv.direction).is_none() {
        if let Some(marble) = state.board().get(end) {
            captured = Some(marble);
            match state.owner_of(marble) {
                Some(owner) => state.remove_live(owner),
                None => {
                    state.add_capture(player);
                }
            }
        }
    }

    shift_line(state.board_mut(), mv, end);

    state.set_last_origin(mv.origin);
    state.push_record(MoveRecord::new(player, mv, captured));

    let winner = evaluate_win(state, player);
    state.set_turn(player.opponent());

    MoveOutcome::Applied { captured, winner }
}

/// Shift the line from `origin` to `end` one step toward `end`.
///
/// Each cell takes the marble of its neighbor toward the origin; the
/// origin cell becomes empty. At most 7 cells participate.
fn shift_line(board: &mut Board, mv: Move, end: Coord) {
    let mut line: SmallVec<[Coord; 7]> = SmallVec::new();
    let mut cur = mv.origin;
    line.push(cur);
    while cur != end {
        // `end` lies in the push direction, so every step stays on board.
        match cur.step(mv.direction) {
            Some(next) => {
                line.push(next);
                cur = next;
            }
            None => break,
        }
    }

    for pair in line.windows(2).rev() {
        let value = board.get(pair[0]);
        board.set(pair[1], value);
    }
    board.set(mv.origin, None);
}

/// Evaluate win conditions after a successful push, in fixed order:
/// seven captured Reds first, then an eliminated color. At most one
/// winner is ever set and it is never overwritten.
fn evaluate_win(state: &mut GameState, pusher: PlayerId) -> Option<PlayerId> {
    if state.captured(pusher) >= CAPTURES_TO_WIN {
        state.set_winner(pusher);
    } else if let Some(loser) = PlayerId::all().find(|&p| state.live_count(p) == 0) {
        state.set_winner(loser.opponent());
    }
    state.winner()
}
