//! Round state types.

use crate::result::Outcome;

/// Round state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    /// Waiting for the initial deal.
    Dealing,
    /// Waiting for the player to hit or stand.
    PlayerTurn,
    /// Dealer plays out their hand.
    DealerTurn,
    /// Round is over.
    Resolved(Outcome),
}

impl RoundState {
    /// Returns whether the round is over.
    #[must_use]
    pub const fn is_resolved(self) -> bool {
        matches!(self, Self::Resolved(_))
    }

    /// Returns the outcome once the round is over.
    #[must_use]
    pub const fn outcome(self) -> Option<Outcome> {
        match self {
            Self::Resolved(outcome) => Some(outcome),
            _ => None,
        }
    }
}
