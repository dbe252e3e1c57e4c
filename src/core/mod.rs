//! Core engine types: marbles, coordinates, players, the board, and state.
//!
//! These are the fundamental building blocks shared by the move validator
//! and executor in `rules` and by the `game` session facade.

pub mod board;
pub mod coord;
pub mod marble;
pub mod moves;
pub mod player;
pub mod state;

pub use board::Board;
pub use coord::{Coord, Direction, BOARD_SIZE};
pub use marble::Marble;
pub use moves::{Move, MoveRecord};
pub use player::{PlayerId, PlayerMap, PLAYER_COUNT};
pub use state::{GameState, CAPTURES_TO_WIN, STARTING_OWNED_MARBLES};
