use crate::lane::Marker::{self, DoubleLetter, DoubleWord, NoBonus, TripleLetter, TripleWord};
use crate::{Error, Lane, TileSet};

/// The letters of a word, each paired with the bonus of the square it is aligned to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignedRow {
    pub letters: Vec<char>,
    pub markers: Vec<Marker>,
}

/// Align `word` with the squares of `lane`.
///
/// The first letter of `word` is put on the first square of the fragment. Letters that
/// would fall beyond the end of the lane are dropped.
/// ## Errors
/// If the fragment can not be found in `lane`.
/// ## Examples
/// ```
/// # use std::collections::BTreeMap;
/// # use scrabble_solver::{align, Error, Lane, Marker};
/// let after: BTreeMap<_, _> = vec![(0, Marker::TripleLetter)].into_iter().collect();
/// let lane = Lane::new("a", 2, 1, &BTreeMap::new(), &after)?;
/// let row = align("abcd", &lane)?;
/// assert_eq!(row.letters, vec!['a', 'b']);
/// assert_eq!(row.markers, vec![Marker::NoBonus, Marker::TripleLetter]);
/// # Ok::<(), Error>(())
/// ```
pub fn align(word: &str, lane: &Lane) -> Result<AlignedRow, Error> {
    let offset = lane.fragment_offset()?;
    let mut padded: Vec<Option<char>> = vec![None; offset];
    padded.extend(word.chars().map(Some));
    padded.resize(lane.len(), None);

    let (letters, markers): (Vec<char>, Vec<Marker>) = padded
        .into_iter()
        .zip(lane.markers())
        .filter_map(|(letter, marker)| letter.map(|letter| (letter, marker)))
        .unzip();
    Ok(AlignedRow { letters, markers })
}

/// Calculate the points of an aligned row.
///
/// Letter bonuses multiply the letter value, word bonuses multiply the total.
/// Letters not in `tileset` are worth 0.
pub fn score_row(row: &AlignedRow, tileset: &TileSet) -> u32 {
    let mut word_multiplicator = 1;
    let mut word_points = 0;
    for (&letter, &marker) in row.letters.iter().zip(&row.markers) {
        let letter_points = tileset.points(letter);
        match marker {
            DoubleLetter => word_points += 2 * letter_points,
            TripleLetter => word_points += 3 * letter_points,
            DoubleWord => {
                word_points += letter_points;
                word_multiplicator *= 2;
            }
            TripleWord => {
                word_points += letter_points;
                word_multiplicator *= 3;
            }
            NoBonus => word_points += letter_points,
        }
    }
    word_points * word_multiplicator
}

/// Align `word` with `lane` and calculate its points.
/// ## Errors
/// If the fragment can not be found in `lane`.
pub fn score(word: &str, lane: &Lane, tileset: &TileSet) -> Result<u32, Error> {
    Ok(score_row(&align(word, lane)?, tileset))
}
