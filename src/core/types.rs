/*!
 * Core Types
 * Common types used across the game
 */

use super::limits::PLAYER_COUNT;

/// Seat index of a player (0..PLAYER_COUNT)
pub type PlayerId = usize;

/// Zero-based index of a round within a game
pub type RoundIndex = u32;

/// Running score of every seat, indexed by `PlayerId`
pub type Scores = [u32; PLAYER_COUNT];

/// Common result type for game operations
pub type GameResult<T> = Result<T, super::errors::GameError>;
