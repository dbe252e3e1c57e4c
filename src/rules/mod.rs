//! Move legality and execution over `GameState`.

pub mod engine;

pub use engine::{
    execute, game_result, has_legal_move, is_legal, legal_moves, validate, GameResult,
    MoveOutcome, RejectReason, WinReason,
};
