/*!
 * Round Count
 * Validated number of rounds a game plays
 */

use crate::core::errors::GameError;
use crate::core::limits::{MAX_ROUNDS, MIN_ROUNDS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of rounds in a game, always within `MIN_ROUNDS..=MAX_ROUNDS`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Rounds(u32);

impl Rounds {
    pub const MIN: Rounds = Rounds(MIN_ROUNDS);
    pub const MAX: Rounds = Rounds(MAX_ROUNDS);

    /// Validate a round count
    pub fn new(count: u32) -> Result<Self, GameError> {
        if (MIN_ROUNDS..=MAX_ROUNDS).contains(&count) {
            Ok(Self(count))
        } else {
            Err(GameError::InvalidRounds(i64::from(count)))
        }
    }

    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for Rounds {
    type Error = GameError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Rounds::new(count)
    }
}

impl From<Rounds> for u32 {
    fn from(rounds: Rounds) -> Self {
        rounds.0
    }
}

impl FromStr for Rounds {
    type Err = GameError;

    /// Parses surrounding whitespace away; negative numbers are out of range,
    /// anything else that is not an integer is unparsable
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let count: i64 = trimmed
            .parse()
            .map_err(|_| GameError::UnparsableRounds(trimmed.to_string()))?;
        u32::try_from(count)
            .map_err(|_| GameError::InvalidRounds(count))
            .and_then(Rounds::new)
    }
}

impl fmt::Display for Rounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
