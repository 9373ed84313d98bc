//! Parsing of console answers.

use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::error::InputError;

/// A player's choice during their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Decision {
    /// Take another card.
    Hit,
    /// Keep the current hand.
    Stand,
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hit => f.write_str("hit"),
            Self::Stand => f.write_str("stand"),
        }
    }
}

impl FromStr for Decision {
    type Err = InputError;

    /// Accepts `h`/`hit` and `s`/`stand` in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let answer = s.trim();
        if answer.eq_ignore_ascii_case("h") || answer.eq_ignore_ascii_case("hit") {
            Ok(Self::Hit)
        } else if answer.eq_ignore_ascii_case("s") || answer.eq_ignore_ascii_case("stand") {
            Ok(Self::Stand)
        } else {
            Err(InputError::UnrecognizedDecision(answer.to_string()))
        }
    }
}

/// Interprets the answer to "play again?". Only `y`/`yes` continue.
#[must_use]
pub fn play_again(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
