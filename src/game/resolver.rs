/*!
 * Round Resolver
 *
 * Pairwise-sum scoring: for every ordered pair of seats `(i, j)` with
 * `i != j`, seat `i` gains one point when its action beats seat `j`'s.
 *
 * With three seats this yields:
 * - all equal: nobody scores
 * - two-one split: either the singleton sweeps (+2) or the pair each take +1
 * - all distinct (a cycle): every seat scores exactly 1
 */

use super::action::Action;

/// Score deltas for one round of `N` simultaneous actions
#[must_use]
pub fn resolve<const N: usize>(actions: &[Action; N]) -> [u32; N] {
    let mut deltas = [0u32; N];
    for (i, mine) in actions.iter().enumerate() {
        deltas[i] = actions
            .iter()
            .enumerate()
            .filter(|&(j, theirs)| i != j && mine.beats(*theirs))
            .count() as u32;
    }
    deltas
}
