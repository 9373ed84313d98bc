//! Console blackjack against a dealer who stands on 17.

use core::time::Duration;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{ArgAction, Parser, ValueEnum};
use colored::{ColoredString, Colorize};
use dialoguer::Input;
use log::LevelFilter;
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use thiserror::Error;

use twentyone::{
    ActionError, Card, CardFace, DealError, DealOrder, Decision, GameOptions, HandView, Outcome,
    Round, RoundState, ShowdownError, Suit, play_again,
};

/// Play blackjack against the dealer.
#[derive(Debug, Parser)]
#[command(name = "twentyone", version, about)]
struct Args {
    /// Session seed. Each round derives its own shuffle from it.
    #[arg(long)]
    seed: Option<u64>,
    /// Pause before each dealer draw, in milliseconds.
    #[arg(long, default_value_t = 750)]
    dealer_delay_ms: u64,
    /// Order of the initial deal.
    #[arg(long, value_enum, default_value_t = DealOrderArg::PlayerFirst)]
    deal_order: DealOrderArg,
    /// Disable coloured output.
    #[arg(long)]
    no_color: bool,
    /// Log more (-v info, -vv debug, -vvv trace). `RUST_LOG` overrides.
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum DealOrderArg {
    PlayerFirst,
    Alternating,
}

impl From<DealOrderArg> for DealOrder {
    fn from(arg: DealOrderArg) -> Self {
        match arg {
            DealOrderArg::PlayerFirst => Self::PlayerFirst,
            DealOrderArg::Alternating => Self::Alternating,
        }
    }
}

/// Anything that ends a round early.
#[derive(Debug, Error)]
enum RoundError {
    #[error(transparent)]
    Deal(#[from] DealError),
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error(transparent)]
    Showdown(#[from] ShowdownError),
    #[error("could not read input: {0}")]
    Prompt(#[from] dialoguer::Error),
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    if args.no_color {
        colored::control::set_override(false);
    }

    let seed = args.seed.unwrap_or_else(clock_seed);
    log::info!("session seed {seed}");
    let mut seeds = ChaCha8Rng::seed_from_u64(seed);

    let options = GameOptions::default().with_deal_order(args.deal_order.into());
    let delay = Duration::from_millis(args.dealer_delay_ms);

    println!("{}", "Welcome to Blackjack!".bold());

    loop {
        let round = Round::new(options, seeds.next_u64());
        if let Err(err) = play_round(round, delay) {
            log::error!("round aborted: {err}");
            println!("{} {err}", "Round aborted:".red());
            if matches!(err, RoundError::Prompt(_)) {
                break;
            }
        }

        match prompt_play_again() {
            Ok(true) => println!(),
            Ok(false) => break,
            Err(err) => {
                log::error!("could not read input: {err}");
                break;
            }
        }
    }

    println!("Thanks for playing!");
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_secs()
}

fn play_round(mut round: Round, delay: Duration) -> Result<(), RoundError> {
    round.deal()?;
    print_hand(&round.player_view());
    print_hand(&round.dealer_view());

    while round.state() == RoundState::PlayerTurn {
        match prompt_decision()? {
            Decision::Hit => {
                let card = round.hit()?;
                println!("You draw {}.\n", paint(CardFace::Up(card)));
                print_hand(&round.player_view());
            }
            Decision::Stand => round.stand()?,
        }
    }

    if round.state() == RoundState::DealerTurn {
        println!("Dealer reveals the hole card.\n");
        print_hand(&round.dealer_view());

        while !round.state().is_resolved() {
            if let Some(card) = round.dealer_step()? {
                thread::sleep(delay);
                println!("Dealer draws {}.\n", paint(CardFace::Up(card)));
                print_hand(&round.dealer_view());
            }
        }
    } else {
        print_hand(&round.dealer_view());
    }

    if let Some(outcome) = round.outcome() {
        println!("{}", announce(outcome));
    }

    Ok(())
}

fn prompt_decision() -> dialoguer::Result<Decision> {
    Input::<Decision>::new()
        .with_prompt("Hit or stand? (h/s)")
        .report(false)
        .interact_text()
}

fn prompt_play_again() -> dialoguer::Result<bool> {
    let answer = Input::<String>::new()
        .with_prompt("Play again? (y/n)")
        .allow_empty(true)
        .report(false)
        .interact_text()?;
    Ok(play_again(&answer))
}

fn print_hand(view: &HandView<'_>) {
    println!("{}", format!("{}'s hand:", view.name).as_str().bold());
    for face in &view.cards {
        println!("{}", paint(*face));
    }
    if let Some(total) = view.total {
        println!("Total: {}", total.to_string().as_str().bold());
    }
    println!();
}

fn paint(face: CardFace) -> ColoredString {
    match face {
        CardFace::Up(card) => paint_card(card),
        CardFace::Hidden => face.to_string().as_str().dimmed(),
    }
}

fn paint_card(card: Card) -> ColoredString {
    let text = card.to_string();
    let text = text.as_str();
    match card.suit {
        Suit::Hearts | Suit::Diamonds => text.red(),
        Suit::Clubs | Suit::Spades => text.normal(),
    }
}

fn announce(outcome: Outcome) -> ColoredString {
    let message = outcome.message();
    if outcome.is_player_win() {
        message.green().bold()
    } else if outcome.is_dealer_win() {
        message.red().bold()
    } else {
        message.yellow().bold()
    }
}
