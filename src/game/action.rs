/*!
 * Actions
 * The three symbols a player can throw and the beats-relation between them
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// A symbol thrown by one player in one round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    Rock,
    Paper,
    Scissors,
}

impl Action {
    /// Every action, in a fixed order
    pub const ALL: [Action; 3] = [Action::Rock, Action::Paper, Action::Scissors];

    /// The action this one defeats
    #[inline]
    #[must_use]
    pub const fn defeats(self) -> Action {
        match self {
            Action::Rock => Action::Scissors,
            Action::Scissors => Action::Paper,
            Action::Paper => Action::Rock,
        }
    }

    /// Whether `self` wins the pair against `other`
    #[inline]
    #[must_use]
    pub fn beats(self, other: Action) -> bool {
        self.defeats() == other
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Rock => "rock",
            Action::Paper => "paper",
            Action::Scissors => "scissors",
        };
        f.write_str(name)
    }
}
