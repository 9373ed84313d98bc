use alloc::vec::Vec;

use crate::card::Card;
use crate::error::ShowdownError;
use crate::player::Role;
use crate::result::Outcome;

use super::{Round, RoundState};

impl Round {
    /// Plays one step of the dealer's turn.
    ///
    /// While the dealer's score is below
    /// [`GameOptions::dealer_stands_on`](crate::GameOptions) one card is drawn
    /// and returned; if it busts the dealer the round resolves as
    /// [`Outcome::PlayerWinsByDealerBust`]. Once the dealer stands, scores are
    /// compared, the round resolves, and `None` is returned.
    ///
    /// Front ends call this in a loop while the state is
    /// [`RoundState::DealerTurn`] to pace the dealer's draws.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the dealer must
    /// draw from an empty deck. The round is unchanged on error.
    pub fn dealer_step(&mut self) -> Result<Option<Card>, ShowdownError> {
        if self.state != RoundState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        if self.dealer.score() >= self.options.dealer_stands_on {
            let outcome = Outcome::compare(self.player.score(), self.dealer.score());
            self.resolve(outcome);
            return Ok(None);
        }

        let card = self.draw_to(Role::Dealer)?;
        log::debug!("dealer draws {card}, now {}", self.dealer.score());

        if self.dealer.is_bust() {
            self.resolve(Outcome::PlayerWinsByDealerBust);
        }

        Ok(Some(card))
    }

    /// Dealer plays their hand to completion and the round is resolved.
    ///
    /// Returns the cards drawn by the dealer.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the dealer's turn or the deck runs out
    /// while the dealer must draw. The round is unchanged on error, including
    /// any cards the dealer drew before the deck ran out.
    pub fn dealer_play(&mut self) -> Result<Vec<Card>, ShowdownError> {
        if self.state != RoundState::DealerTurn {
            return Err(ShowdownError::InvalidState);
        }

        let mut played = self.clone();
        let mut drawn_cards = Vec::new();
        while played.state == RoundState::DealerTurn {
            if let Some(card) = played.dealer_step()? {
                drawn_cards.push(card);
            }
        }

        *self = played;
        Ok(drawn_cards)
    }
}
