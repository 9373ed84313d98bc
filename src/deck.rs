//! A single 52-card deck with its own random source.

use alloc::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;

/// An ordered deck of cards. Cards are dealt from the front.
///
/// The deck owns its random number generator, so two decks built from the
/// same seed shuffle identically.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Remaining cards, top of the deck first.
    cards: VecDeque<Card>,
    /// Random number generator used by [`Deck::shuffle`].
    rng: ChaCha8Rng,
}

impl Deck {
    /// Creates a full, unshuffled deck.
    ///
    /// Cards are laid out suit-major (hearts, diamonds, clubs, spades) and
    /// rank-minor (2 through ace).
    #[must_use]
    pub fn new(seed: u64) -> Self {
        let mut cards = VecDeque::with_capacity(DECK_SIZE);

        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(suit, rank));
            }
        }

        Self {
            cards,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a stacked deck. The first card yielded is dealt first.
    ///
    /// No uniqueness check is made; this is meant for scripted rounds.
    #[must_use]
    pub fn from_cards<I>(cards: I, seed: u64) -> Self
    where
        I: IntoIterator<Item = Card>,
    {
        Self {
            cards: cards.into_iter().collect(),
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Shuffles the remaining cards in place (Fisher–Yates).
    pub fn shuffle(&mut self) {
        for i in (1..self.cards.len()).rev() {
            let j = self.rng.random_range(0..=i);
            self.cards.swap(i, j);
        }
        log::debug!("shuffled deck of {} cards", self.cards.len());
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if no cards remain. The deck is left
    /// untouched.
    pub fn deal_card(&mut self) -> Result<Card, DeckError> {
        let Some(card) = self.cards.pop_front() else {
            log::warn!("attempted to deal from an empty deck");
            return Err(DeckError::EmptyDeck);
        };
        log::trace!("dealt {card}, {} left", self.cards.len());
        Ok(card)
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterates over the remaining cards, top first.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }
}
