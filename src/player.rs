//! Round participants.

use alloc::string::String;

use crate::card::Card;
use crate::hand::{Hand, HandView};

/// Which side of the table a participant sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    /// The human player.
    Player,
    /// The house.
    Dealer,
}

impl Role {
    /// Display name of the role.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Player => "Player",
            Self::Dealer => "Dealer",
        }
    }
}

/// A named participant holding one hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    name: String,
    hand: Hand,
}

impl Player {
    /// Creates a participant with an empty hand.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hand: Hand::new(),
        }
    }

    /// Creates the participant for `role`.
    #[must_use]
    pub fn for_role(role: Role) -> Self {
        Self::new(role.name())
    }

    /// Returns the participant's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the participant's hand.
    #[must_use]
    pub const fn hand(&self) -> &Hand {
        &self.hand
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.hand.add_card(card);
    }

    /// Current score of the hand.
    #[must_use]
    pub fn score(&self) -> u8 {
        self.hand.score()
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.hand.is_bust()
    }

    /// Builds a display view of the hand. See [`Hand::render`].
    #[must_use]
    pub fn render(&self, reveal_all: bool) -> HandView<'_> {
        self.hand.render(&self.name, reveal_all)
    }
}
