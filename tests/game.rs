//! Round integration tests.

use twentyone::{
    ActionError, Card, CardFace, DealError, DealOrder, Deck, Decision, GameOptions, Outcome,
    Rank, Round, RoundResult, RoundState, ShowdownError, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

fn round_from_draws(options: GameOptions, draws: &[Card]) -> Round {
    Round::with_deck(options, Deck::from_cards(draws.iter().copied(), 0))
}

fn dealt_round(draws: &[Card]) -> Round {
    let mut round = round_from_draws(GameOptions::default(), draws);
    round.deal().unwrap();
    round
}

#[test]
fn deal_gives_player_two_then_dealer_two() {
    let round = dealt_round(&[
        card(Suit::Hearts, Rank::Two),   // player
        card(Suit::Hearts, Rank::Three), // player
        card(Suit::Hearts, Rank::Four),  // dealer hole
        card(Suit::Hearts, Rank::Five),  // dealer up
    ]);

    assert_eq!(round.state(), RoundState::PlayerTurn);
    assert_eq!(
        round.player().hand().cards(),
        &[card(Suit::Hearts, Rank::Two), card(Suit::Hearts, Rank::Three)]
    );
    assert_eq!(
        round.dealer().hand().cards(),
        &[card(Suit::Hearts, Rank::Four), card(Suit::Hearts, Rank::Five)]
    );
    assert_eq!(round.player().name(), "Player");
    assert_eq!(round.dealer().name(), "Dealer");
    assert_eq!(round.cards_remaining(), 0);
}

#[test]
fn alternating_deal_order() {
    let options = GameOptions::default().with_deal_order(DealOrder::Alternating);
    let mut round = round_from_draws(
        options,
        &[
            card(Suit::Hearts, Rank::Two),   // player
            card(Suit::Hearts, Rank::Three), // dealer hole
            card(Suit::Hearts, Rank::Four),  // player
            card(Suit::Hearts, Rank::Five),  // dealer up
        ],
    );
    round.deal().unwrap();

    assert_eq!(
        round.player().hand().cards(),
        &[card(Suit::Hearts, Rank::Two), card(Suit::Hearts, Rank::Four)]
    );
    assert_eq!(
        round.dealer().hand().cards(),
        &[card(Suit::Hearts, Rank::Three), card(Suit::Hearts, Rank::Five)]
    );
}

#[test]
fn deal_errors() {
    let mut short = round_from_draws(
        GameOptions::default(),
        &[
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Diamonds, Rank::Seven),
        ],
    );
    assert_eq!(short.deal().unwrap_err(), DealError::NotEnoughCards);
    assert_eq!(short.state(), RoundState::Dealing);
    assert_eq!(short.cards_remaining(), 3);
    assert!(short.player().hand().is_empty());
    assert!(short.dealer().hand().is_empty());

    let mut round = Round::new(GameOptions::default(), 1);
    round.deal().unwrap();
    assert_eq!(round.deal().unwrap_err(), DealError::InvalidState);
}

#[test]
fn fresh_round_deals_from_a_shuffled_full_deck() {
    let mut first = Round::new(GameOptions::default(), 2024);
    let mut second = Round::new(GameOptions::default(), 2024);
    first.deal().unwrap();
    second.deal().unwrap();

    assert_eq!(first.cards_remaining(), 48);
    assert_eq!(first.player().hand(), second.player().hand());
    assert_eq!(first.dealer().hand(), second.dealer().hand());
}

#[test]
fn actions_rejected_outside_player_turn() {
    let mut round = Round::new(GameOptions::default(), 3);
    assert_eq!(round.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(round.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(round.dealer_step().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(round.dealer_play().unwrap_err(), ShowdownError::InvalidState);

    round.deal().unwrap();
    assert_eq!(round.dealer_step().unwrap_err(), ShowdownError::InvalidState);
    assert!(!round.state().is_resolved());
    assert_eq!(round.outcome(), None);
    assert_eq!(round.result(), None);
}

#[test]
fn hit_then_stand_player_wins() {
    let mut round = dealt_round(&[
        card(Suit::Hearts, Rank::Ten),   // player
        card(Suit::Clubs, Rank::Seven),  // player
        card(Suit::Diamonds, Rank::Nine), // dealer hole
        card(Suit::Spades, Rank::Nine),  // dealer up
        card(Suit::Hearts, Rank::Three), // player hit
    ]);

    let hit_card = round.hit().unwrap();
    assert_eq!(hit_card, card(Suit::Hearts, Rank::Three));
    assert_eq!(round.player().score(), 20);
    assert_eq!(round.state(), RoundState::PlayerTurn);

    round.stand().unwrap();
    assert_eq!(round.state(), RoundState::DealerTurn);

    let drawn = round.dealer_play().unwrap();
    assert!(drawn.is_empty());
    assert_eq!(round.dealer().score(), 18);
    assert_eq!(round.state(), RoundState::Resolved(Outcome::PlayerWins));
    assert_eq!(
        round.result(),
        Some(RoundResult {
            outcome: Outcome::PlayerWins,
            player_score: 20,
            dealer_score: 18,
        })
    );
}

#[test]
fn player_bust_skips_dealer_turn() {
    let mut round = dealt_round(&[
        card(Suit::Hearts, Rank::Ten),   // player
        card(Suit::Clubs, Rank::Six),    // player
        card(Suit::Diamonds, Rank::Nine), // dealer hole
        card(Suit::Spades, Rank::Seven), // dealer up
        card(Suit::Hearts, Rank::King),  // player hit
        card(Suit::Clubs, Rank::Two),    // never dealt
    ]);

    round.hit().unwrap();
    assert_eq!(round.player().score(), 26);
    assert_eq!(round.state(), RoundState::Resolved(Outcome::DealerWinsByPlayerBust));
    assert_eq!(round.dealer().hand().len(), 2);
    assert_eq!(round.cards_remaining(), 1);

    assert!(round.state().is_resolved());
    assert_eq!(round.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(round.dealer_play().unwrap_err(), ShowdownError::InvalidState);
}

#[test]
fn dealer_bust_player_wins() {
    let mut round = dealt_round(&[
        card(Suit::Hearts, Rank::Ten),  // player
        card(Suit::Clubs, Rank::Nine),  // player
        card(Suit::Diamonds, Rank::Ten), // dealer hole
        card(Suit::Spades, Rank::Six),  // dealer up
        card(Suit::Hearts, Rank::Eight), // dealer draw
    ]);

    round.stand().unwrap();
    let drawn = round.dealer_play().unwrap();
    assert_eq!(drawn, vec![card(Suit::Hearts, Rank::Eight)]);
    assert_eq!(round.dealer().score(), 24);
    assert_eq!(round.outcome(), Some(Outcome::PlayerWinsByDealerBust));
}

#[test]
fn dealer_higher_score_wins() {
    let mut round = dealt_round(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Seven),
        card(Suit::Diamonds, Rank::Ten),
        card(Suit::Spades, Rank::Nine),
    ]);

    round.act(Decision::Stand).unwrap();
    round.dealer_play().unwrap();
    assert_eq!(round.outcome(), Some(Outcome::DealerWins));
}

#[test]
fn equal_scores_push() {
    let mut round = dealt_round(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Eight),
        card(Suit::Diamonds, Rank::Nine),
        card(Suit::Spades, Rank::Nine),
    ]);

    round.act(Decision::Stand).unwrap();
    round.dealer_play().unwrap();
    assert_eq!(round.outcome(), Some(Outcome::Push));
}

#[test]
fn natural_gets_no_special_treatment() {
    let mut round = dealt_round(&[
        card(Suit::Hearts, Rank::Ace),
        card(Suit::Clubs, Rank::King),
        card(Suit::Diamonds, Rank::Ten),
        card(Suit::Spades, Rank::Nine),
    ]);

    assert!(round.player().hand().is_natural());
    assert_eq!(round.state(), RoundState::PlayerTurn);

    round.stand().unwrap();
    round.dealer_play().unwrap();
    assert_eq!(round.outcome(), Some(Outcome::PlayerWins));
}

#[test]
fn dealer_draws_until_seventeen() {
    let mut round = dealt_round(&[
        card(Suit::Hearts, Rank::Ten),    // player
        card(Suit::Clubs, Rank::Eight),   // player
        card(Suit::Diamonds, Rank::Two),  // dealer hole
        card(Suit::Spades, Rank::Three),  // dealer up
        card(Suit::Hearts, Rank::Four),   // dealer 9
        card(Suit::Clubs, Rank::Five),    // dealer 14
        card(Suit::Diamonds, Rank::Three), // dealer 17
        card(Suit::Spades, Rank::Nine),   // left in deck
    ]);

    round.stand().unwrap();
    let drawn = round.dealer_play().unwrap();
    assert_eq!(
        drawn,
        vec![
            card(Suit::Hearts, Rank::Four),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Diamonds, Rank::Three),
        ]
    );
    assert_eq!(round.dealer().score(), 17);
    assert_eq!(round.cards_remaining(), 1);
    assert_eq!(round.outcome(), Some(Outcome::PlayerWins));
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    let mut round = dealt_round(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Eight),
        card(Suit::Diamonds, Rank::Ace),
        card(Suit::Spades, Rank::Six),
        card(Suit::Hearts, Rank::Five),
    ]);

    round.stand().unwrap();
    assert!(round.dealer().hand().is_soft());

    let drawn = round.dealer_play().unwrap();
    assert!(drawn.is_empty());
    assert_eq!(round.cards_remaining(), 1);
    assert_eq!(round.outcome(), Some(Outcome::PlayerWins));
}

#[test]
fn dealer_stand_threshold_is_configurable() {
    let options = GameOptions::default().with_dealer_stands_on(18);
    let mut round = round_from_draws(
        options,
        &[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Eight),
            card(Suit::Diamonds, Rank::Ten),
            card(Suit::Spades, Rank::Seven),
            card(Suit::Hearts, Rank::Two),
        ],
    );
    round.deal().unwrap();
    round.stand().unwrap();

    let drawn = round.dealer_play().unwrap();
    assert_eq!(drawn.len(), 1);
    assert_eq!(round.outcome(), Some(Outcome::DealerWins));
}

#[test]
fn dealer_step_draws_one_card_at_a_time() {
    let mut round = dealt_round(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Diamonds, Rank::Ten),
        card(Suit::Spades, Rank::Four),
        card(Suit::Hearts, Rank::Three),
        card(Suit::Clubs, Rank::Two),
    ]);
    round.stand().unwrap();

    assert_eq!(round.dealer_step().unwrap(), Some(card(Suit::Hearts, Rank::Three)));
    assert_eq!(round.state(), RoundState::DealerTurn);
    assert_eq!(round.dealer().score(), 17);

    assert_eq!(round.dealer_step().unwrap(), None);
    assert_eq!(round.outcome(), Some(Outcome::PlayerWins));
    assert_eq!(round.cards_remaining(), 1);
}

#[test]
fn hit_with_empty_deck_returns_error() {
    let mut round = dealt_round(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Six),
        card(Suit::Diamonds, Rank::Nine),
        card(Suit::Spades, Rank::Seven),
    ]);

    assert_eq!(round.hit().unwrap_err(), ActionError::EmptyDeck);
    assert_eq!(round.state(), RoundState::PlayerTurn);
    assert_eq!(round.player().hand().len(), 2);
}

#[test]
fn dealer_draw_with_empty_deck_returns_error() {
    let mut round = dealt_round(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Diamonds, Rank::Two),
        card(Suit::Spades, Rank::Three),
    ]);

    round.stand().unwrap();
    assert_eq!(round.dealer_play().unwrap_err(), ShowdownError::EmptyDeck);
    assert_eq!(round.state(), RoundState::DealerTurn);
    assert_eq!(round.dealer().hand().len(), 2);
}

#[test]
fn dealer_play_leaves_round_untouched_when_deck_runs_out() {
    let mut round = dealt_round(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Diamonds, Rank::Two),
        card(Suit::Spades, Rank::Three),
        card(Suit::Hearts, Rank::Four), // dealer 9, then the deck is empty
    ]);
    round.stand().unwrap();

    assert_eq!(round.dealer_play().unwrap_err(), ShowdownError::EmptyDeck);
    assert_eq!(round.state(), RoundState::DealerTurn);
    assert_eq!(round.dealer().hand().len(), 2);
    assert_eq!(round.dealer().score(), 5);
    assert_eq!(round.cards_remaining(), 1);
    assert_eq!(round.dealer_view().total, Some(5));
}

#[test]
fn hole_card_hidden_until_player_stands() {
    let mut round = dealt_round(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Seven),
        card(Suit::Diamonds, Rank::Queen),
        card(Suit::Spades, Rank::Eight),
    ]);

    assert!(round.hole_card_hidden());
    let view = round.dealer_view();
    assert_eq!(view.name, "Dealer");
    assert_eq!(view.cards, vec![CardFace::Hidden, CardFace::Up(card(Suit::Spades, Rank::Eight))]);
    assert_eq!(view.total, None);

    let player_view = round.player_view();
    assert_eq!(player_view.total, Some(17));
    assert!(!player_view.cards.contains(&CardFace::Hidden));

    round.stand().unwrap();
    assert!(!round.hole_card_hidden());
    let view = round.dealer_view();
    assert_eq!(view.cards[0], CardFace::Up(card(Suit::Diamonds, Rank::Queen)));
    assert_eq!(view.total, Some(18));
}

#[test]
fn act_dispatches_decisions() {
    let mut round = dealt_round(&[
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Three),
        card(Suit::Diamonds, Rank::Ten),
        card(Suit::Spades, Rank::Eight),
        card(Suit::Hearts, Rank::Four),
    ]);

    round.act(Decision::Hit).unwrap();
    assert_eq!(round.player().hand().len(), 3);
    assert_eq!(round.player().score(), 9);

    round.act(Decision::Stand).unwrap();
    assert_eq!(round.state(), RoundState::DealerTurn);
    round.dealer_play().unwrap();
    assert_eq!(round.outcome(), Some(Outcome::DealerWins));
}

#[test]
fn outcome_messages_and_winners() {
    assert!(Outcome::PlayerWins.is_player_win());
    assert!(Outcome::PlayerWinsByDealerBust.is_player_win());
    assert!(Outcome::DealerWins.is_dealer_win());
    assert!(Outcome::DealerWinsByPlayerBust.is_dealer_win());
    assert!(!Outcome::Push.is_player_win());
    assert!(!Outcome::Push.is_dealer_win());

    assert_eq!(Outcome::compare(20, 18), Outcome::PlayerWins);
    assert_eq!(Outcome::compare(17, 19), Outcome::DealerWins);
    assert_eq!(Outcome::compare(18, 18), Outcome::Push);
    assert_eq!(Outcome::Push.message(), "It's a tie!");
}
