//! Error types for table operations.
//!
//! These are rejections, not faults: the table's own click handling swallows
//! them, and they exist so programmatic callers can see why nothing happened.

use thiserror::Error;

/// Errors that can occur while adjusting the bet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BetError {
    /// Invalid game phase for betting.
    #[error("invalid game phase for betting")]
    InvalidState,
    /// No preset bet at this index.
    #[error("no preset bet at index {0}")]
    NoSuchPreset(usize),
}

/// Errors that can occur when dealing a new round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid game phase for dealing.
    #[error("invalid game phase for dealing")]
    InvalidState,
    /// The bet exceeds the chip balance.
    #[error("bet of {bet} exceeds chip balance of {chips}")]
    InsufficientChips {
        /// The rejected bet.
        bet: usize,
        /// The balance at the time of the deal.
        chips: usize,
    },
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid game phase for this action.
    #[error("invalid game phase for this action")]
    InvalidState,
}
