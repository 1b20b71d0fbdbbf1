/*!
 * Game Limits and Constants
 *
 * Centralized location for the fixed population and round bounds.
 */

// =============================================================================
// POPULATION
// =============================================================================

/// Number of concurrent players in a game
/// Scoring rules and reports are laid out for exactly this many seats
pub const PLAYER_COUNT: usize = 3;

// =============================================================================
// ROUND BOUNDS
// =============================================================================

/// Fewest rounds a game may be configured with
pub const MIN_ROUNDS: u32 = 1;

/// Most rounds a game may be configured with
pub const MAX_ROUNDS: u32 = 100;
