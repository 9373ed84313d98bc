//! Error types for deck, round, and input operations.

use alloc::string::String;

use thiserror::Error;

/// Errors that can occur when drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// The deck has no cards left.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

/// Errors that can occur during the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DealError {
    /// Invalid round state for dealing.
    #[error("invalid round state for dealing")]
    InvalidState,
    /// Not enough cards in the deck for the initial deal.
    #[error("not enough cards in the deck")]
    NotEnoughCards,
}

/// Errors that can occur during player actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// Invalid round state for this action.
    #[error("invalid round state for this action")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<DeckError> for ActionError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::EmptyDeck => Self::EmptyDeck,
        }
    }
}

/// Errors that can occur while the dealer plays and the round is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ShowdownError {
    /// Invalid round state for the dealer's turn.
    #[error("invalid round state for the dealer's turn")]
    InvalidState,
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
}

impl From<DeckError> for ShowdownError {
    fn from(err: DeckError) -> Self {
        match err {
            DeckError::EmptyDeck => Self::EmptyDeck,
        }
    }
}

/// Errors that can occur while parsing console input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The answer was neither hit nor stand.
    #[error("unrecognized choice {0:?}, enter 'h' to hit or 's' to stand")]
    UnrecognizedDecision(String),
}
