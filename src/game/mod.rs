//! Round engine and state management.

use crate::card::Card;
use crate::deck::Deck;
use crate::error::DeckError;
use crate::hand::HandView;
use crate::options::GameOptions;
use crate::player::{Player, Role};
use crate::result::{Outcome, RoundResult};

mod actions;
mod deal;
mod dealer;
pub mod state;

pub use state::RoundState;

/// A single round of blackjack between one player and the dealer.
///
/// The round owns its deck and both participants. It is built fresh for each
/// round and dropped once resolved; nothing carries over.
///
/// # Example
///
/// ```
/// use twentyone::{Decision, GameOptions, Round, RoundState};
///
/// let mut round = Round::new(GameOptions::default(), 42);
/// round.deal().unwrap();
/// round.act(Decision::Stand).unwrap();
/// assert_eq!(round.state(), RoundState::DealerTurn);
///
/// round.dealer_play().unwrap();
/// assert!(round.outcome().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Round {
    /// Cards not yet dealt.
    deck: Deck,
    /// Round options.
    options: GameOptions,
    /// Current round state.
    state: RoundState,
    /// The human player.
    player: Player,
    /// The dealer.
    dealer: Player,
}

impl Round {
    /// Creates a round with a freshly shuffled deck.
    #[must_use]
    pub fn new(options: GameOptions, seed: u64) -> Self {
        let mut deck = Deck::new(seed);
        deck.shuffle();
        Self::with_deck(options, deck)
    }

    /// Creates a round that deals from `deck` as given, without shuffling.
    #[must_use]
    pub fn with_deck(options: GameOptions, deck: Deck) -> Self {
        Self {
            deck,
            options,
            state: RoundState::Dealing,
            player: Player::for_role(Role::Player),
            dealer: Player::for_role(Role::Dealer),
        }
    }

    /// Deals the top card to `role`.
    fn draw_to(&mut self, role: Role) -> Result<Card, DeckError> {
        let card = self.deck.deal_card()?;
        self.participant_mut(role).add_card(card);
        Ok(card)
    }

    const fn participant_mut(&mut self, role: Role) -> &mut Player {
        match role {
            Role::Player => &mut self.player,
            Role::Dealer => &mut self.dealer,
        }
    }

    fn transition(&mut self, next: RoundState) {
        log::debug!("round state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    fn resolve(&mut self, outcome: Outcome) {
        self.transition(RoundState::Resolved(outcome));
        log::debug!(
            "round resolved: {outcome:?} (player {}, dealer {})",
            self.player.score(),
            self.dealer.score()
        );
    }

    /// Returns the current round state.
    #[must_use]
    pub const fn state(&self) -> RoundState {
        self.state
    }

    /// Returns the outcome once the round is resolved.
    #[must_use]
    pub const fn outcome(&self) -> Option<Outcome> {
        self.state.outcome()
    }

    /// Returns the outcome with both final scores once the round is resolved.
    #[must_use]
    pub fn result(&self) -> Option<RoundResult> {
        self.outcome().map(|outcome| RoundResult {
            outcome,
            player_score: self.player.score(),
            dealer_score: self.dealer.score(),
        })
    }

    /// Returns the human player.
    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &Player {
        &self.dealer
    }

    /// Returns the number of cards remaining in the deck.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.deck.len()
    }

    /// Returns whether the dealer's hole card is still face down.
    ///
    /// The hole card stays hidden until the player's turn ends.
    #[must_use]
    pub const fn hole_card_hidden(&self) -> bool {
        matches!(self.state, RoundState::Dealing | RoundState::PlayerTurn)
    }

    /// Returns the player's hand as it should be shown.
    #[must_use]
    pub fn player_view(&self) -> HandView<'_> {
        self.player.render(true)
    }

    /// Returns the dealer's hand as it should be shown.
    #[must_use]
    pub fn dealer_view(&self) -> HandView<'_> {
        self.dealer.render(!self.hole_card_hidden())
    }
}
