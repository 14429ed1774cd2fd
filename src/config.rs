use crate::{Error, Lane, Marker, Rack};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::convert::TryFrom;

/// The input for a search: the rack, the fragment on the board, and the open squares around it.
///
/// Bonus square positions are counted from the left edge of their region, see [`Lane`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// Letters on the rack, in any order
    pub rack: String,
    /// Letters on the board to extend, in order
    pub fragment: String,
    /// Number of open squares before the fragment
    pub squares_before: usize,
    /// Number of open squares after the fragment
    pub squares_after: usize,
    #[cfg_attr(feature = "serde", serde(default))]
    pub before_markers: BTreeMap<usize, Marker>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub after_markers: BTreeMap<usize, Marker>,
}

impl Config {
    /// Validate the rack letters.
    /// ## Errors
    /// If the rack has more than 7 letters, or a character that is not a letter.
    pub fn rack(&self) -> Result<Rack, Error> {
        Rack::try_from(self.rack.as_str())
    }

    /// Build the lane. Bonus squares outside their region are ignored.
    /// ## Errors
    /// If the fragment has a character that is not a letter.
    pub fn lane(&self) -> Result<Lane, Error> {
        Lane::new(
            &self.fragment,
            self.squares_before,
            self.squares_after,
            &self.before_markers,
            &self.after_markers,
        )
    }
}

/// Parse a bonus square assignment like `"2=3w"` into position and marker.
///
/// The position may be negative; such bonus squares lie outside the lane and are dropped by
/// [`markers_from_assignments`].
/// ## Errors
/// If there is no `=`, the position is not a number, or the bonus is not a valid [`Marker`].
/// ## Examples
/// ```
/// use scrabble_solver::{parse_marker_assignment, Marker};
/// assert_eq!(parse_marker_assignment("2=3w").unwrap(), (2, Marker::TripleWord));
/// assert_eq!(parse_marker_assignment("-1=2l").unwrap(), (-1, Marker::DoubleLetter));
/// assert!(parse_marker_assignment("x=3w").is_err());
/// ```
pub fn parse_marker_assignment(s: &str) -> Result<(i64, Marker), Error> {
    let (pos, marker) = s
        .split_once('=')
        .ok_or_else(|| Error::MarkerAssignmentError(String::from(s)))?;
    let pos = pos
        .trim()
        .parse()
        .map_err(|_| Error::MarkerAssignmentError(String::from(s)))?;
    Ok((pos, marker.trim().parse()?))
}

/// Collect parsed assignments for one region into a marker map.
/// Negative positions are dropped, a later assignment to the same position wins.
pub fn markers_from_assignments(
    assignments: &[(i64, Marker)],
    region: &str,
) -> BTreeMap<usize, Marker> {
    assignments
        .iter()
        .filter_map(|&(pos, marker)| match usize::try_from(pos) {
            Ok(pos) => Some((pos, marker)),
            Err(_) => {
                log::debug!("ignoring {} bonus at {} position {}", marker, region, pos);
                None
            }
        })
        .collect()
}
