//! # kuba-engine
//!
//! A rules engine for Kuba, a two-player abstract strategy game on a 7×7
//! grid. Each player owns eight marbles (White or Black); thirteen
//! neutral Red marbles sit in the middle. A move pushes a contiguous line
//! of marbles one step toward a board edge; marbles pushed past the edge
//! leave the game, and pushing off a Red marble scores the pusher. First
//! to seven Reds wins, as does a player whose opponent has no marbles
//! left.
//!
//! ## Design
//!
//! - **Pure engine**: no I/O, no UI, no clock. Presentation layers drive
//!   the engine through [`KubaGame`] and read state back out.
//! - **Atomic moves**: every mutating path either fully applies or has no
//!   effect. Illegal moves are data ([`MoveOutcome::Rejected`]), never
//!   errors or panics.
//! - **Single owner**: a session's grid, counters, turn, and winner live
//!   in one [`GameState`] value; concurrent sessions are independent
//!   values. The engine itself does no locking — hosts serialize calls
//!   per session.
//!
//! ## Modules
//!
//! - `core`: marbles, coordinates, players, the board, session state
//! - `rules`: move validation, the push executor, win detection
//! - `game`: the named-player session facade
//! - `error`: construction-time errors

pub mod core;
pub mod error;
pub mod game;
pub mod rules;

// Re-export commonly used types
pub use crate::core::{
    Board, Coord, Direction, GameState, Marble, Move, MoveRecord, PlayerId, PlayerMap,
    BOARD_SIZE, CAPTURES_TO_WIN, STARTING_OWNED_MARBLES,
};

pub use crate::error::GameError;

pub use crate::game::KubaGame;

pub use crate::rules::{GameResult, MoveOutcome, RejectReason, WinReason};
