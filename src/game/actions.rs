use crate::card::Card;
use crate::error::ActionError;
use crate::input::Decision;
use crate::player::Role;
use crate::result::Outcome;

use super::{Round, RoundState};

impl Round {
    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        if self.state == RoundState::PlayerTurn {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    /// Player action: Hit (draw a card).
    ///
    /// If the card takes the player over 21 the round resolves immediately as
    /// [`Outcome::DealerWinsByPlayerBust`] and the dealer does not play.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn or the deck is empty.
    /// The round is unchanged on error.
    pub fn hit(&mut self) -> Result<Card, ActionError> {
        self.ensure_player_turn()?;

        let card = self.draw_to(Role::Player)?;

        if self.player.is_bust() {
            self.resolve(Outcome::DealerWinsByPlayerBust);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// Hands the turn to the dealer, whose hole card is revealed from here on.
    ///
    /// # Errors
    ///
    /// Returns an error if it is not the player's turn.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        self.transition(RoundState::DealerTurn);
        Ok(())
    }

    /// Applies a parsed player decision.
    ///
    /// # Errors
    ///
    /// See [`Round::hit`] and [`Round::stand`].
    pub fn act(&mut self, decision: Decision) -> Result<(), ActionError> {
        match decision {
            Decision::Hit => self.hit().map(|_| ()),
            Decision::Stand => self.stand(),
        }
    }
}
