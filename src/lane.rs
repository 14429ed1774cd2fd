use crate::tiles::encode;
use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Bonus of an open square.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Marker {
    #[cfg_attr(feature = "serde", serde(rename = "--"))]
    NoBonus,
    #[cfg_attr(feature = "serde", serde(rename = "2l"))]
    DoubleLetter,
    #[cfg_attr(feature = "serde", serde(rename = "3l"))]
    TripleLetter,
    #[cfg_attr(feature = "serde", serde(rename = "2w"))]
    DoubleWord,
    #[cfg_attr(feature = "serde", serde(rename = "3w"))]
    TripleWord,
}

use Marker::{DoubleLetter, DoubleWord, NoBonus, TripleLetter, TripleWord};

impl Default for Marker {
    fn default() -> Self {
        NoBonus
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            NoBonus => write!(f, "--"),
            DoubleLetter => write!(f, "2l"),
            TripleLetter => write!(f, "3l"),
            DoubleWord => write!(f, "2w"),
            TripleWord => write!(f, "3w"),
        }
    }
}

impl FromStr for Marker {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "--" => Ok(NoBonus),
            "2l" => Ok(DoubleLetter),
            "3l" => Ok(TripleLetter),
            "2w" => Ok(DoubleWord),
            "3w" => Ok(TripleWord),
            _ => Err(Error::MarkerParseError(String::from(s))),
        }
    }
}

/// A square in the lane: either open, with a bonus, or holding a letter of the fragment.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Square {
    Open(Marker),
    Fixed(char),
}

impl Square {
    /// Bonus of the square. Fragment squares have no bonus.
    pub fn marker(&self) -> Marker {
        match self {
            Square::Open(marker) => *marker,
            Square::Fixed(_) => NoBonus,
        }
    }

    pub fn letter(&self) -> Option<char> {
        match self {
            Square::Open(_) => None,
            Square::Fixed(letter) => Some(*letter),
        }
    }
}

/// Build `len` open squares, with bonus squares from `markers`.
/// Markers with an index outside `0..len` are dropped.
fn open_squares(len: usize, markers: &BTreeMap<usize, Marker>, region: &str) -> Vec<Square> {
    let mut squares = vec![Square::Open(NoBonus); len];
    for (&pos, &marker) in markers {
        if pos < len {
            squares[pos] = Square::Open(marker);
        } else {
            log::debug!(
                "ignoring {} bonus at {} position {} (only {} squares)",
                marker,
                region,
                pos,
                len
            );
        }
    }
    squares
}

/// One row of the board: open squares before the fragment, the fragment, and open squares after it.
///
/// Bonus positions are counted from the left edge of their region:
/// `012345fragment012345`.
/// ## Examples
/// ```
/// # use std::collections::BTreeMap;
/// # use scrabble_solver::{Error, Lane, Marker};
/// let before: BTreeMap<_, _> = vec![(2, Marker::TripleWord)].into_iter().collect();
/// let after: BTreeMap<_, _> = vec![(1, Marker::DoubleLetter), (9, Marker::DoubleWord)]
///     .into_iter()
///     .collect();
/// let lane = Lane::new("a", 5, 8, &before, &after)?;
/// assert_eq!(lane.len(), 14);
/// assert_eq!(lane.to_string(), "-- -- 3w -- -- a -- 2l -- -- -- -- -- --");
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane {
    squares: Vec<Square>,
    fragment: Vec<char>,
    open: Vec<usize>,
}

impl fmt::Display for Lane {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let squares = self
            .squares
            .iter()
            .map(|square| match square {
                Square::Open(marker) => marker.to_string(),
                Square::Fixed(letter) => letter.to_string(),
            })
            .collect::<Vec<String>>()
            .join(" ");
        write!(f, "{}", squares)
    }
}

impl Lane {
    /// Create a lane around `fragment`, with `before` and `after` open squares.
    /// ## Errors
    /// If `fragment` contains something other than letters `a`..`z`.
    pub fn new(
        fragment: &str,
        before: usize,
        after: usize,
        before_markers: &BTreeMap<usize, Marker>,
        after_markers: &BTreeMap<usize, Marker>,
    ) -> Result<Lane, Error> {
        let fragment = encode(fragment, "fragment")?;
        let mut squares = open_squares(before, before_markers, "before");
        squares.extend(fragment.iter().map(|&letter| Square::Fixed(letter)));
        squares.extend(open_squares(after, after_markers, "after"));
        let open = squares
            .iter()
            .enumerate()
            .filter(|(_, square)| square.letter().is_none())
            .map(|(i, _)| i)
            .collect();
        Ok(Lane {
            squares,
            fragment,
            open,
        })
    }

    /// Number of squares in the lane.
    pub fn len(&self) -> usize {
        self.squares.len()
    }

    pub fn is_empty(&self) -> bool {
        self.squares.is_empty()
    }

    pub fn squares(&self) -> &[Square] {
        &self.squares
    }

    pub fn fragment(&self) -> &[char] {
        &self.fragment
    }

    /// Indices of the open squares, left to right.
    pub fn open_squares(&self) -> &[usize] {
        &self.open
    }

    /// Bonus of every square, left to right.
    pub fn markers(&self) -> impl Iterator<Item = Marker> + '_ {
        self.squares.iter().map(Square::marker)
    }

    /// Index of the first square where `letters` occur contiguously.
    /// Open squares never match a letter. An empty `letters` matches at 0.
    pub fn find(&self, letters: &[char]) -> Option<usize> {
        if letters.len() > self.len() {
            return None;
        }
        (0..=self.len() - letters.len()).find(|&i| {
            self.squares[i..i + letters.len()]
                .iter()
                .zip(letters)
                .all(|(square, &letter)| square.letter() == Some(letter))
        })
    }

    /// Index of the first square of the fragment.
    /// ## Errors
    /// If the fragment is not in the lane.
    pub fn fragment_offset(&self) -> Result<usize, Error> {
        self.find(&self.fragment)
            .ok_or_else(|| Error::FragmentNotFound(self.fragment.iter().collect()))
    }

    /// Place `letters` on the open squares, left to right.
    ///
    /// Only `min(open squares, letters)` letters are placed: extra letters are dropped,
    /// extra open squares stay empty.
    /// ## Examples
    /// ```
    /// # use std::collections::BTreeMap;
    /// # use scrabble_solver::{Error, Lane};
    /// let lane = Lane::new("a", 1, 2, &BTreeMap::new(), &BTreeMap::new())?;
    /// assert_eq!(lane.place(&['c', 't']).word(), "cat");
    /// assert_eq!(lane.place(&['b', 'r', 'n', 'x']).word(), "barn");
    /// # Ok::<(), Error>(())
    /// ```
    pub fn place(&self, letters: &[char]) -> Placement {
        let mut cells: Vec<Option<char>> = self.squares.iter().map(Square::letter).collect();
        let n = self.open.len().min(letters.len());
        for (&pos, &letter) in self.open[..n].iter().zip(&letters[..n]) {
            cells[pos] = Some(letter);
        }
        Placement(cells)
    }
}

/// The lane with letters placed on (some of) its open squares.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement(Vec<Option<char>>);

impl Placement {
    /// Content of every square, `None` for an empty square.
    pub fn cells(&self) -> &[Option<char>] {
        &self.0
    }

    /// The letters in the lane, with empty squares left out.
    pub fn word(&self) -> String {
        self.0.iter().flatten().collect()
    }
}
