//! Construction-time errors.
//!
//! Move rejection is not an error: illegal moves are reported as
//! [`MoveOutcome::Rejected`](crate::rules::MoveOutcome) with no mutation.
//! `GameError` covers the one fallible operation, building a session from
//! player specs.

use thiserror::Error;

use crate::core::Marble;

/// Errors raised while constructing a session.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("{0} is not a playable color; players own White or Black")]
    NotAPlayerColor(Marble),

    #[error("both players were given the same color")]
    DuplicateColor,

    #[error("both players were given the name {0:?}")]
    DuplicateName(String),
}
