//! Hand representation, scoring, and the render model used by front ends.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;

/// Highest score that is not a bust.
pub const BLACKJACK: u8 = 21;

fn evaluate_cards(cards: &[Card]) -> (u8, bool) {
    let blackjack = usize::from(BLACKJACK);
    let mut value: usize = 0;
    let mut aces: usize = 0;

    for card in cards {
        if card.is_ace() {
            aces += 1;
        }
        value += usize::from(card.value());
    }

    while value > blackjack && aces > 0 {
        value -= 10;
        aces -= 1;
    }

    let is_soft = aces > 0 && value <= blackjack;
    // Anything past u8::MAX is a bust either way.
    (u8::try_from(value).unwrap_or(u8::MAX), is_soft)
}

/// An ordered, append-only hand of cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hand {
    /// Cards in deal order.
    cards: Vec<Card>,
}

impl Hand {
    /// Creates a new empty hand.
    #[must_use]
    pub const fn new() -> Self {
        Self { cards: Vec::new() }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand, in deal order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Calculates the score of the hand.
    ///
    /// Every ace starts at 11; while the total exceeds 21, aces are
    /// downgraded to 1 one at a time.
    #[must_use]
    pub fn score(&self) -> u8 {
        evaluate_cards(&self.cards).0
    }

    /// Returns whether the hand is soft (contains an ace counted as 11).
    #[must_use]
    pub fn is_soft(&self) -> bool {
        evaluate_cards(&self.cards).1
    }

    /// Returns whether the hand is bust (over 21).
    #[must_use]
    pub fn is_bust(&self) -> bool {
        self.score() > BLACKJACK
    }

    /// Returns whether the hand is a natural: two cards totalling 21.
    #[must_use]
    pub fn is_natural(&self) -> bool {
        self.cards.len() == 2 && self.score() == BLACKJACK
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Builds a view of the hand for display under `name`.
    ///
    /// When `reveal_all` is false the first dealt card (the hole card) is
    /// hidden and the total is withheld.
    #[must_use]
    pub fn render<'a>(&self, name: &'a str, reveal_all: bool) -> HandView<'a> {
        let cards = self
            .cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                if !reveal_all && index == HOLE_CARD_INDEX {
                    CardFace::Hidden
                } else {
                    CardFace::Up(*card)
                }
            })
            .collect();

        HandView {
            name,
            cards,
            total: reveal_all.then(|| self.score()),
        }
    }
}

/// Index of the concealed card in a hand dealt face down.
pub const HOLE_CARD_INDEX: usize = 0;

/// A card as it should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardFace {
    /// Face up.
    Up(Card),
    /// Face down.
    Hidden,
}

impl fmt::Display for CardFace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up(card) => write!(f, "{card}"),
            Self::Hidden => f.write_str("Hidden card"),
        }
    }
}

/// What a front end may show of a hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandView<'a> {
    /// Owner of the hand.
    pub name: &'a str,
    /// Cards in deal order, with concealment applied.
    pub cards: Vec<CardFace>,
    /// Total score, present only when every card is revealed.
    pub total: Option<u8>,
}

impl fmt::Display for HandView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}'s hand:", self.name)?;
        for card in &self.cards {
            writeln!(f, "{card}")?;
        }
        if let Some(total) = self.total {
            writeln!(f, "Total: {total}")?;
        }
        Ok(())
    }
}
