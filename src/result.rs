//! Round outcome types.

/// How a round ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// Player scored higher than the dealer.
    PlayerWins,
    /// Dealer scored higher than the player.
    DealerWins,
    /// Scores were equal.
    Push,
    /// Dealer went over 21.
    PlayerWinsByDealerBust,
    /// Player went over 21; the dealer's hand was not played.
    DealerWinsByPlayerBust,
}

impl Outcome {
    /// Compares final scores of two hands that did not bust.
    #[must_use]
    pub const fn compare(player_score: u8, dealer_score: u8) -> Self {
        if player_score > dealer_score {
            Self::PlayerWins
        } else if player_score < dealer_score {
            Self::DealerWins
        } else {
            Self::Push
        }
    }

    /// Returns whether the player won.
    #[must_use]
    pub const fn is_player_win(self) -> bool {
        matches!(self, Self::PlayerWins | Self::PlayerWinsByDealerBust)
    }

    /// Returns whether the dealer won.
    #[must_use]
    pub const fn is_dealer_win(self) -> bool {
        matches!(self, Self::DealerWins | Self::DealerWinsByPlayerBust)
    }

    /// End-of-round message.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::PlayerWins => "You win!",
            Self::DealerWins => "Dealer wins!",
            Self::Push => "It's a tie!",
            Self::PlayerWinsByDealerBust => "Dealer busts! You win!",
            Self::DealerWinsByPlayerBust => "You bust! Dealer wins.",
        }
    }
}

/// Summary of a resolved round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundResult {
    /// How the round ended.
    pub outcome: Outcome,
    /// The player's final score.
    pub player_score: u8,
    /// The dealer's final score.
    pub dealer_score: u8,
}
