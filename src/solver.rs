use crate::generator::{placements, selection_count};
use crate::scorer::score;
use crate::{Config, Error, Lane, Rack, TileSet, Wordlist};
#[cfg(feature = "rayon")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::Serialize;
use std::collections::HashSet;
use std::convert::TryFrom;
use std::fmt;

/// A legal word and its points.
#[cfg_attr(feature = "serde", derive(Serialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    /// word as String
    pub word: String,
    /// score for this word
    pub score: u32,
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.word, self.score)
    }
}

/// Finds and scores the words that can be made on a [`Lane`].
/// * The lane: the fragment on the board with open (bonus) squares around it,
/// * The letter values,
/// * The wordlist with the legal words.
#[derive(Debug, Clone)]
pub struct Solver {
    lane: Lane,
    tileset: TileSet,
    wordlist: Wordlist,
}

impl Solver {
    /// Create a new solver for `lane`, with an empty wordlist.
    ///
    /// ## Examples
    ///```
    /// # use std::collections::BTreeMap;
    /// use scrabble_solver::{Error, Lane, Solver};
    ///
    /// let lane = Lane::new("a", 2, 2, &BTreeMap::new(), &BTreeMap::new())?;
    /// let solver = Solver::new(lane).with_wordlist_from_words(&["cat", "tab"]);
    /// # Ok::<(), Error>(())
    ///```
    /// See also:
    /// - [`with_wordlist_from_file`](Solver::with_wordlist_from_file)
    /// - [`from_config`](Solver::from_config)
    #[must_use]
    pub fn new(lane: Lane) -> Solver {
        Solver {
            lane,
            tileset: TileSet::default(),
            wordlist: Wordlist::default(),
        }
    }

    /// Create a new solver with the lane from `config`.
    /// ## Errors
    /// If the fragment in `config` is not valid.
    pub fn from_config(config: &Config) -> Result<Solver, Error> {
        Ok(Solver::new(config.lane()?))
    }

    /// Specify the wordlist by reading it from `wordfile`, and returns the modified solver.
    /// See [`Wordlist::from_file`](crate::Wordlist::from_file).
    /// ## Errors
    /// This function will give an error if the `wordfile` can not be read.
    pub fn with_wordlist_from_file(mut self, wordfile: &str) -> Result<Solver, Error> {
        self.wordlist = Wordlist::from_file(wordfile)?;
        Ok(self)
    }

    /// Specify the wordlist by a list of words, and returns the modified solver.
    pub fn with_wordlist_from_words(mut self, words: &[&str]) -> Solver {
        self.wordlist = Wordlist::from_words(words);
        self
    }

    #[cfg(feature = "bincode")]
    /// Specify the wordlist by deserializing it from the `wordfile`, and returns the modified solver.
    /// ## Errors
    /// This function will give an error if the `wordfile` does not exist, or cannot be decoded.
    pub fn with_wordlist_deserialize_from(mut self, wordfile: &str) -> Result<Solver, Error> {
        self.wordlist = Wordlist::deserialize_from(wordfile)?;
        Ok(self)
    }

    /// Specify the wordlist, and returns the modified solver.
    pub fn with_wordlist(mut self, wordlist: Wordlist) -> Solver {
        self.wordlist = wordlist;
        self
    }

    /// Return reference to our wordlist
    pub fn wordlist(&self) -> &Wordlist {
        &self.wordlist
    }

    /// Return reference to our lane
    pub fn lane(&self) -> &Lane {
        &self.lane
    }

    /// Return tileset
    pub fn tileset(&self) -> &TileSet {
        &self.tileset
    }

    /// Return all words in the wordlist that can be made by placing `rack` on the lane,
    /// without duplicates, in the order they are first found.
    /// ## Examples
    /// ```
    /// # use std::collections::BTreeMap;
    /// # use std::convert::TryFrom;
    /// use scrabble_solver::{Error, Lane, Rack, Solver};
    /// let lane = Lane::new("a", 1, 2, &BTreeMap::new(), &BTreeMap::new())?;
    /// let solver = Solver::new(lane).with_wordlist_from_words(&["cat", "tab", "at"]);
    /// let words = solver.legal_words(&Rack::try_from("tcb")?);
    /// assert_eq!(words, vec!["cat", "tab"]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn legal_words(&self, rack: &Rack) -> Vec<String> {
        log::debug!(
            "placing {} letters on {} open squares: {} placements",
            rack.len(),
            self.lane.open_squares().len(),
            selection_count(rack.len())
        );
        let is_legal = |word: &String| self.wordlist.is_word(word);

        // Both branches keep placement order, the dedupe below relies on it.
        #[cfg(feature = "rayon")]
        let words: Vec<String> = {
            let placements: Vec<_> = placements(rack, &self.lane).collect();
            placements
                .par_iter()
                .map(|placement| placement.word())
                .filter(is_legal)
                .collect()
        };
        #[cfg(not(feature = "rayon"))]
        let words: Vec<String> = placements(rack, &self.lane)
            .map(|placement| placement.word())
            .filter(is_legal)
            .collect();

        let mut seen = HashSet::new();
        let words: Vec<String> = words
            .into_iter()
            .filter(|word| seen.insert(word.clone()))
            .collect();
        log::debug!("found {} legal words", words.len());
        words
    }

    /// Calculates the score of `word` on the lane.
    ///
    /// The word is aligned with its first letter on the first square of the fragment.
    /// ## Errors
    /// If the fragment is not found in the lane.
    /// ## Examples
    /// ```
    /// # use std::collections::BTreeMap;
    /// # use scrabble_solver::{Error, Lane, Marker, Solver};
    /// let after: BTreeMap<_, _> = vec![(0, Marker::DoubleWord)].into_iter().collect();
    /// let lane = Lane::new("c", 0, 2, &BTreeMap::new(), &after)?;
    /// let solver = Solver::new(lane);
    /// assert_eq!(solver.calc_word_points("cat")?, 10);
    /// # Ok::<(), Error>(())
    /// ```
    /// The `a` is on a 2x word bonus: `2 x (3 + 1 + 1) = 10`.
    pub fn calc_word_points(&self, word: &str) -> Result<u32, Error> {
        score(word, &self.lane, &self.tileset)
    }

    /// Find and score all legal words that can be made with the `letters` on the rack.
    /// Return the scores sorted by points (highest first), then by word.
    /// ## Errors
    /// - If `letters` is not a valid rack.
    /// - If the fragment is not found in the lane.
    /// ## Examples
    /// ```
    /// # use std::collections::BTreeMap;
    /// # use scrabble_solver::{Error, Lane, Marker, Solver};
    /// let after: BTreeMap<_, _> = vec![(1, Marker::TripleLetter)].into_iter().collect();
    /// let lane = Lane::new("a", 1, 2, &BTreeMap::new(), &after)?;
    /// let solver = Solver::new(lane).with_wordlist_from_words(&["cat", "bat", "tab", "at"]);
    /// let res = solver.calc_all_word_scores("tbcx")?;
    /// let res: Vec<_> = res.iter().map(|s| (s.word.as_str(), s.score)).collect();
    /// assert_eq!(res, vec![("tab", 11), ("bat", 7), ("cat", 7)]);
    /// # Ok::<(), Error>(())
    /// ```
    pub fn calc_all_word_scores(&self, letters: &str) -> Result<Vec<Score>, Error> {
        let rack = Rack::try_from(letters)?;
        self.word_scores(&rack)
    }

    /// Same as [`calc_all_word_scores`](Solver::calc_all_word_scores) for a validated rack.
    /// ## Errors
    /// If the fragment is not found in the lane.
    pub fn word_scores(&self, rack: &Rack) -> Result<Vec<Score>, Error> {
        let mut scores = self
            .legal_words(rack)
            .into_iter()
            .map(|word| {
                let score = self.calc_word_points(&word)?;
                Ok(Score { word, score })
            })
            .collect::<Result<Vec<Score>, Error>>()?;
        scores.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.word.cmp(&b.word)));
        Ok(scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lane::Marker::{DoubleLetter, TripleWord};
    use std::collections::BTreeMap;

    type Result<T> = std::result::Result<T, Error>;

    fn scenario_config(rack: &str) -> Config {
        Config {
            rack: String::from(rack),
            fragment: String::from("a"),
            squares_before: 5,
            squares_after: 8,
            before_markers: vec![(2, TripleWord)].into_iter().collect(),
            after_markers: vec![(1, DoubleLetter), (4, DoubleLetter)]
                .into_iter()
                .collect(),
        }
    }

    fn as_pairs(scores: &[Score]) -> Vec<(&str, u32)> {
        scores.iter().map(|s| (s.word.as_str(), s.score)).collect()
    }

    #[test]
    fn test_legal_words_placement_order() -> Result<()> {
        let config = Config {
            rack: String::from("aatcs"),
            fragment: String::from("t"),
            squares_before: 3,
            squares_after: 3,
            ..Config::default()
        };
        let solver = Solver::from_config(&config)?
            .with_wordlist_from_words(&["cat", "at", "ta", "tat", "act", "cats", "scat", "tas"]);
        let rack = config.rack()?;

        let mut expected: Vec<String> = Vec::new();
        for placement in placements(&rack, solver.lane()) {
            let word = placement.word();
            if solver.wordlist().is_word(&word) && !expected.contains(&word) {
                expected.push(word);
            }
        }
        assert!(expected.len() > 2);
        assert_eq!(solver.legal_words(&rack), expected);
        Ok(())
    }

    #[cfg(feature = "bincode")]
    #[test]
    fn test_serialize_score() {
        let score = Score {
            word: String::from("cobra"),
            score: 12,
        };
        let bytes = bincode::serialize(&score).unwrap();
        let (word, points): (String, u32) = bincode::deserialize(&bytes).unwrap();
        assert_eq!((word.as_str(), points), ("cobra", 12));
    }

    #[test]
    fn test_scenario_a() -> Result<()> {
        let config = scenario_config("atbcdro");
        let solver = Solver::from_config(&config)?
            .with_wordlist_from_words(&["boa", "cobra", "broadcasta", "cart", "taco"]);
        let res = solver.word_scores(&config.rack()?)?;
        // the five squares before the fragment fill first, so "cart" and "taco" never show up
        // boa: b on the fragment square, a on the 2l square
        // cobra: 3 + 1 + 6 + 1 + 1
        assert_eq!(as_pairs(&res), vec![("cobra", 12), ("boa", 6)]);
        Ok(())
    }

    #[test]
    fn test_scenario_a_long_word() -> Result<()> {
        // six letters: five before the fragment, one after it
        let config = scenario_config("abcdrot");
        let solver = Solver::from_config(&config)?.with_wordlist_from_words(&["cobrdat"]);
        let res = solver.word_scores(&config.rack()?)?;
        // aligned from the fragment square: c(5) o(6) b(7, 2l) r(8) d(9) a(10, 2l) t(11)
        assert_eq!(as_pairs(&res), vec![("cobrdat", 3 + 1 + 6 + 1 + 2 + 2 + 1)]);
        Ok(())
    }

    #[test]
    fn test_empty_rack() -> Result<()> {
        let solver = Solver::from_config(&scenario_config(""))?
            .with_wordlist_from_words(&["a", "ba", "cat"]);
        assert!(solver.calc_all_word_scores("")?.is_empty());
        Ok(())
    }

    #[test]
    fn test_no_bonus_scores_letter_sum() -> Result<()> {
        let lane = Lane::new("", 4, 0, &BTreeMap::new(), &BTreeMap::new())?;
        let solver = Solver::new(lane).with_wordlist_from_words(&["jinx"]);
        let res = solver.calc_all_word_scores("xinj")?;
        assert_eq!(as_pairs(&res), vec![("jinx", 8 + 1 + 1 + 8)]);
        Ok(())
    }

    #[test]
    fn test_duplicate_words() -> Result<()> {
        // two `c` tiles make "ca" from two different placements
        let lane = Lane::new("t", 2, 2, &BTreeMap::new(), &BTreeMap::new())?;
        let solver = Solver::new(lane).with_wordlist_from_words(&["cat", "at"]);
        let rack = Rack::try_from("caca")?;
        let words: Vec<String> = placements(&rack, solver.lane())
            .map(|placement| placement.word())
            .filter(|word| word == "cat")
            .collect();
        assert!(words.len() > 1);
        let res = solver.calc_all_word_scores("caca")?;
        assert_eq!(as_pairs(&res), vec![("cat", 5), ("at", 2)]);
        Ok(())
    }

    #[test]
    fn test_sort_order() -> Result<()> {
        let lane = Lane::new("", 3, 0, &BTreeMap::new(), &BTreeMap::new())?;
        let solver = Solver::new(lane).with_wordlist_from_words(&["tea", "eat", "ate", "at", "z"]);
        let res = solver.calc_all_word_scores("teaz")?;
        assert_eq!(
            as_pairs(&res),
            vec![("z", 10), ("ate", 3), ("eat", 3), ("tea", 3), ("at", 2)]
        );
        Ok(())
    }

    #[test]
    fn test_no_open_squares() -> Result<()> {
        let lane = Lane::new("at", 0, 0, &BTreeMap::new(), &BTreeMap::new())?;
        let solver = Solver::new(lane).with_wordlist_from_words(&["at", "cat"]);
        assert_eq!(as_pairs(&solver.calc_all_word_scores("c")?), vec![("at", 2)]);
        Ok(())
    }

    #[test]
    #[should_panic(expected = "RackTooLong(8)")]
    fn test_rack_too_long() {
        let lane = Lane::new("a", 1, 1, &BTreeMap::new(), &BTreeMap::new()).unwrap();
        Solver::new(lane).calc_all_word_scores("abcdefgh").unwrap();
    }
}
