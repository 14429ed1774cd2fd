//! Basic types for working with scrabble letters.
use crate::Error;
use std::convert::TryFrom;
use std::fmt;
use std::ops::Deref;
use tinyvec::ArrayVec;

/// Maximum number of letters on a rack
pub const RACK_SIZE: usize = 7;

/// Lowercase `input` and check that every char is a letter `a`..`z`.
/// `field` names the input in the error.
pub(crate) fn encode(input: &str, field: &'static str) -> Result<Vec<char>, Error> {
    input
        .chars()
        .map(|ch| ch.to_ascii_lowercase())
        .map(|letter| {
            if letter.is_ascii_lowercase() {
                Ok(letter)
            } else {
                Err(Error::InvalidLetter { field, letter })
            }
        })
        .collect()
}

/// The letters a player can place, up to [`RACK_SIZE`].
///
/// Letter order is kept as given, and equal letters stay separate tokens.
/// ## Examples
/// ```
/// # use std::convert::TryFrom;
/// # use scrabble_solver::{Error, Rack};
/// let rack = Rack::try_from("AtbCdro")?;
/// assert_eq!(rack.to_string(), "atbcdro");
/// assert!(Rack::try_from("abcdefgh").is_err());
/// # Ok::<(), Error>(())
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct Rack(ArrayVec<[char; RACK_SIZE]>);

impl Deref for Rack {
    type Target = [char];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl TryFrom<&str> for Rack {
    type Error = Error;
    fn try_from(letters: &str) -> Result<Self, Self::Error> {
        let letters = encode(letters, "rack")?;
        if letters.len() > RACK_SIZE {
            return Err(Error::RackTooLong(letters.len()));
        }
        Ok(Rack(letters.into_iter().collect()))
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.iter().collect::<String>())
    }
}
