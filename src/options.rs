//! Round configuration options.

/// Order of the four cards in the initial deal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DealOrder {
    /// Player receives two cards, then the dealer receives two.
    #[default]
    PlayerFirst,
    /// Player, dealer, player, dealer.
    Alternating,
}

/// Configuration options for a round.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use twentyone::{DealOrder, GameOptions};
///
/// let options = GameOptions::default()
///     .with_dealer_stands_on(17)
///     .with_deal_order(DealOrder::Alternating);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// The dealer draws while below this score and stands at or above it.
    pub dealer_stands_on: u8,
    /// Order of the initial deal.
    pub deal_order: DealOrder,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            dealer_stands_on: 17,
            deal_order: DealOrder::PlayerFirst,
        }
    }
}

impl GameOptions {
    /// Sets the score at which the dealer stands.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_stands_on(18);
    /// assert_eq!(options.dealer_stands_on, 18);
    /// ```
    #[must_use]
    pub const fn with_dealer_stands_on(mut self, score: u8) -> Self {
        self.dealer_stands_on = score;
        self
    }

    /// Sets the order of the initial deal.
    ///
    /// # Example
    ///
    /// ```
    /// use twentyone::{DealOrder, GameOptions};
    ///
    /// let options = GameOptions::default().with_deal_order(DealOrder::Alternating);
    /// assert_eq!(options.deal_order, DealOrder::Alternating);
    /// ```
    #[must_use]
    pub const fn with_deal_order(mut self, order: DealOrder) -> Self {
        self.deal_order = order;
        self
    }
}
