//! A scrabble word finder for Rust.
//! <br>
//! This crate finds all words you can make by extending a fragment of letters on a scrabble
//! board with the letters on your rack, and ranks them by score.
//! It only looks along one row: a number of open squares before the fragment, the fragment,
//! and a number of open squares after it. Some of the open squares may be bonus squares.
//! It can use the `rayon` crate to check the placements in parallel.
//!
//! # How to use `scrabble_solver`
//! Start by creating a [`Lane`] (or a [`Config`]), then specify the wordlist to be used.
//! The wordlist file must be in utf-8 and contain one word per line, or be a csv file with
//! a `name` column.
//!
//! The letters of the rack are placed on the open squares from left to right: first the
//! squares before the fragment, then the squares after it.
//!
//! # Basic usage
//!  ```
//! # use std::collections::BTreeMap;
//! use scrabble_solver::{Error, Lane, Marker, Solver};
//!
//! let after: BTreeMap<_, _> = vec![(1, Marker::DoubleLetter)].into_iter().collect();
//! let lane = Lane::new("a", 5, 8, &BTreeMap::new(), &after)?;
//! let solver = Solver::new(lane).with_wordlist_from_words(&["boa", "cobra", "taco"]);
//! let results = solver.calc_all_word_scores("atbcdro")?;
//! assert_eq!(results.len(), 2);
//! for score in results {
//!     println!("{} {}", score.word, score.score);
//! }
//! # Ok::<(), Error>(())
//! ```
mod config;
mod error;
mod generator;
mod lane;
mod scorer;
mod solver;
mod tiles;
mod tilesets;
mod wordlist;

pub use crate::config::{markers_from_assignments, parse_marker_assignment, Config};
pub use crate::error::Error;
pub use crate::generator::{placements, selection_count, selections};
pub use crate::lane::{Lane, Marker, Placement, Square};
pub use crate::scorer::{align, score, score_row, AlignedRow};
pub use crate::solver::{Score, Solver};
pub use crate::tiles::{Rack, RACK_SIZE};
pub use crate::tilesets::TileSet;
pub use crate::wordlist::Wordlist;
