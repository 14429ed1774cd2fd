use crate::{Lane, Placement};
use itertools::Itertools;

/// Iterate over all ordered selections of the rack letters: every permutation of every
/// combination of 1 up to `letters.len()` letters.
///
/// Equal letters are separate tokens, so a rack with duplicate letters yields duplicate selections.
/// The number of selections for `n` letters is `sum(C(n, r) * r!)` for `r` in `1..=n`.
/// ## Examples
/// ```
/// use scrabble_solver::selections;
/// let res: Vec<String> = selections(&['a', 'b'])
///     .map(|s| s.into_iter().collect())
///     .collect();
/// assert_eq!(res, vec!["a", "b", "ab", "ba"]);
/// assert_eq!(selections(&['a'; 7]).count(), 13699);
/// ```
pub fn selections(letters: &[char]) -> impl Iterator<Item = Vec<char>> {
    let letters = letters.to_vec();
    (1..=letters.len()).flat_map(move |r| {
        letters
            .clone()
            .into_iter()
            .combinations(r)
            .flat_map(move |combination| combination.into_iter().permutations(r))
    })
}

/// Iterate over all placements of the rack `letters` on the open squares of `lane`.
/// See [`selections`] and [`Lane::place`].
pub fn placements<'a>(letters: &[char], lane: &'a Lane) -> impl Iterator<Item = Placement> + 'a {
    selections(letters).map(move |selection| lane.place(&selection))
}

/// Number of selections [`selections`] yields for `n` letters.
pub fn selection_count(n: usize) -> usize {
    (1..=n)
        .map(|r| {
            // C(n, r) * r! == n! / (n - r)!
            (n - r + 1..=n).product::<usize>()
        })
        .sum()
}
