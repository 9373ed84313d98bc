use crate::error::DealError;
use crate::hand::CardFace;
use crate::options::DealOrder;
use crate::player::Role;

use super::{Round, RoundState};

/// Cards needed for the initial deal.
const INITIAL_CARDS: usize = 4;

impl Round {
    /// Deals two cards each to the player and the dealer.
    ///
    /// The order follows [`GameOptions::deal_order`](crate::GameOptions).
    /// On success the round moves to [`RoundState::PlayerTurn`].
    ///
    /// # Errors
    ///
    /// Returns an error if the round is not waiting for the deal, or the deck
    /// holds fewer than four cards. No card is dealt in either case.
    pub fn deal(&mut self) -> Result<(), DealError> {
        if self.state != RoundState::Dealing {
            return Err(DealError::InvalidState);
        }

        if self.deck.len() < INITIAL_CARDS {
            return Err(DealError::NotEnoughCards);
        }

        let order = match self.options.deal_order {
            DealOrder::PlayerFirst => [Role::Player, Role::Player, Role::Dealer, Role::Dealer],
            DealOrder::Alternating => [Role::Player, Role::Dealer, Role::Player, Role::Dealer],
        };

        for role in order {
            // Deck size was checked above.
            self.draw_to(role).map_err(|_| DealError::NotEnoughCards)?;
        }

        if log::log_enabled!(log::Level::Debug) {
            let up_card = self.dealer_view().cards.into_iter().find_map(|face| match face {
                CardFace::Up(card) => Some(card),
                CardFace::Hidden => None,
            });
            if let Some(up_card) = up_card {
                let score = self.player.score();
                log::debug!("initial deal: player {score}, dealer shows {up_card}");
            }
        }

        self.transition(RoundState::PlayerTurn);
        Ok(())
    }
}
