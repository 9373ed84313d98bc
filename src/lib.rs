//! A single-player blackjack rules engine with optional `no_std` support.
//!
//! The crate provides a [`Round`] type that runs one hand of blackjack
//! against a dealer who stands on 17: the initial deal, the player's
//! hit/stand turn, the dealer's turn, and resolution. A console front end is
//! available as the `twentyone` binary behind the `cli` feature.
//!
//! # Example
//!
//! ```no_run
//! use twentyone::{GameOptions, Round};
//!
//! let mut round = Round::new(GameOptions::default(), 42);
//! round.deal().unwrap();
//! println!("{}", round.player_view());
//! println!("{}", round.dealer_view());
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod game;
pub mod hand;
pub mod input;
pub mod options;
pub mod player;
pub mod result;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::Deck;
pub use error::{ActionError, DealError, DeckError, InputError, ShowdownError};
pub use game::{Round, RoundState};
pub use hand::{BLACKJACK, CardFace, HOLE_CARD_INDEX, Hand, HandView};
pub use input::{Decision, play_again};
pub use options::{DealOrder, GameOptions};
pub use player::{Player, Role};
pub use result::{Outcome, RoundResult};
