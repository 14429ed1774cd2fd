use crate::Error;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs::read_to_string;

/// Name of the column with the words in a csv wordfile
const CSV_COLUMN: &str = "name";

#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
/// The set of all legal words, in lowercase.
pub struct Wordlist {
    words: HashSet<String>,
    /// Path of the wordfile used to build the wordlist.
    /// Empty if the wordlist is not build from a file.
    pub wordfile: String,
}

impl fmt::Display for Wordlist {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<Wordlist: {} words from '{}'>",
            self.word_count(),
            self.wordfile
        )
    }
}

/// Trim and lowercase `word`, `None` for an empty line.
fn normalize(word: &str) -> Option<String> {
    let word = word.trim().trim_matches('"');
    if word.is_empty() {
        None
    } else {
        Some(word.to_lowercase())
    }
}

impl Wordlist {
    /// Read the wordlist from a file.
    ///
    /// A file with extension `.csv` must have a header line. The words are taken from the
    /// `name` column, or from the first column if there is no such column.
    /// Any other file must be encoded in utf-8 and have one word per line.
    /// ## Errors
    /// Fails if the wordlist can not be read, or a csv wordlist can not be parsed.
    pub fn from_file(wordfile: &str) -> Result<Wordlist, Error> {
        let contents = read_to_string(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let mut wordlist = if wordfile.to_lowercase().ends_with(".csv") {
            Wordlist::from_csv_str(&contents)?
        } else {
            Wordlist::from_lines(contents.lines())
        };
        wordlist.wordfile = String::from(wordfile);
        log::info!("{}", wordlist);
        Ok(wordlist)
    }

    /// Build a wordlist from a list of words.
    /// ## Examples
    /// ```
    /// use scrabble_solver::Wordlist;
    /// let wordlist = Wordlist::from_words(&["Cart", "bat", ""]);
    /// assert_eq!(wordlist.word_count(), 2);
    /// assert!(wordlist.is_word("cart"));
    /// ```
    pub fn from_words(words: &[&str]) -> Wordlist {
        Wordlist::from_lines(words.iter().copied())
    }

    fn from_lines<'a, I: Iterator<Item = &'a str>>(lines: I) -> Wordlist {
        Wordlist {
            words: lines.filter_map(normalize).collect(),
            wordfile: String::new(),
        }
    }

    /// Build a wordlist from csv `contents`, see [`from_file`](Wordlist::from_file).
    /// ## Errors
    /// If `contents` is not valid csv, e.g. a row with another number of fields than the header.
    /// ## Examples
    /// ```
    /// # use scrabble_solver::{Error, Wordlist};
    /// let wordlist = Wordlist::from_csv_str("definition,name\n\"a pet, small\",cat\n")?;
    /// assert!(wordlist.is_word("cat"));
    /// # Ok::<(), Error>(())
    /// ```
    pub fn from_csv_str(contents: &str) -> Result<Wordlist, Error> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_reader(contents.as_bytes());
        let column = reader
            .headers()?
            .iter()
            .position(|name| name.trim() == CSV_COLUMN)
            .unwrap_or(0);
        let mut words = HashSet::new();
        for record in reader.records() {
            if let Some(word) = record?.get(column).and_then(normalize) {
                words.insert(word);
            }
        }
        Ok(Wordlist {
            words,
            wordfile: String::new(),
        })
    }

    #[cfg(feature = "bincode")]
    /// Deserialize the wordlist from a bincoded file.
    /// ## Errors
    /// - If the wordlist can not be read.
    /// - If the contents can not be deserialized
    pub fn deserialize_from(wordfile: &str) -> Result<Wordlist, Error> {
        use std::fs::File;
        use std::io::BufReader;
        let file = File::open(wordfile).map_err(|source| Error::ReadError {
            path: String::from(wordfile),
            source,
        })?;
        let reader = BufReader::new(file);
        let mut wordlist: Wordlist = bincode::deserialize_from(reader)
            .map_err(|_| Error::WordfileDeserializeError(String::from(wordfile)))?;
        wordlist.wordfile = String::from(wordfile);
        Ok(wordlist)
    }

    #[cfg(feature = "bincode")]
    /// Serialize the wordlist to a bincoded file.
    /// ## Errors
    /// If the file can not be written.
    pub fn serialize_into(&self, wordfile: &str) -> Result<(), Error> {
        use std::fs::File;
        use std::io::BufWriter;
        let file = File::create(wordfile)
            .map_err(|_| Error::WordfileSerializeError(String::from(wordfile)))?;
        bincode::serialize_into(BufWriter::new(file), self)
            .map_err(|_| Error::WordfileSerializeError(String::from(wordfile)))
    }

    /// Returns true if `word` is in wordlist. `word` must be lowercase.
    pub fn is_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// The number of words in the wordlist
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use std::env::temp_dir;
    use std::fs;

    const WORDS: &[&str] = &[
        "af", "ah", "al", "aar", "aas", "bi", "bo", "bar", "bes", "bel", "belt",
    ];

    #[test]
    fn test_is_word() {
        let wordlist = Wordlist::from_words(WORDS);
        assert_eq!(wordlist.word_count(), 11);
        for &word in WORDS {
            assert!(wordlist.is_word(word));
        }
        assert!(!wordlist.is_word("be"));
    }

    #[test]
    fn test_normalize() {
        let wordlist = Wordlist::from_words(&[" Bar ", "BAR", "", "  "]);
        assert_eq!(wordlist.word_count(), 1);
        assert!(wordlist.is_word("bar"));
    }

    #[test]
    fn test_from_csv_str() -> Result<(), Error> {
        let wordlist = Wordlist::from_csv_str("count,name\n1,Aardvark\n2,\"zebra\"\n3,\n")?;
        assert_eq!(wordlist.word_count(), 2);
        assert!(wordlist.is_word("aardvark"));
        assert!(wordlist.is_word("zebra"));

        let wordlist = Wordlist::from_csv_str("word\ncat\n")?;
        assert!(wordlist.is_word("cat"));
        assert!(!wordlist.is_word("word"));
        Ok(())
    }

    #[test]
    fn test_csv_quoted_comma() -> Result<(), Error> {
        let wordlist = Wordlist::from_csv_str("definition,name\n\"a pet, small\",cat\n")?;
        assert_eq!(wordlist.word_count(), 1);
        assert!(wordlist.is_word("cat"));
        assert!(!wordlist.is_word("small"));
        Ok(())
    }

    #[test]
    #[should_panic(expected = "CsvError")]
    fn test_csv_error() {
        Wordlist::from_csv_str("name\ncat,dog\n").unwrap();
    }

    #[test]
    fn test_from_file() -> Result<(), Error> {
        let dir = temp_dir();
        let txt = dir.join("scrabble_solver_test_words.txt");
        let csv = dir.join("scrabble_solver_test_words.csv");
        fs::write(&txt, "cart\nBoa\n\n").unwrap();
        fs::write(&csv, "name\ncart\nboa\ntab\n").unwrap();

        let wordlist = Wordlist::from_file(txt.to_str().unwrap())?;
        assert_eq!(wordlist.word_count(), 2);
        assert!(wordlist.is_word("boa"));
        assert!(wordlist.to_string().contains("2 words"));

        let wordlist = Wordlist::from_file(csv.to_str().unwrap())?;
        assert_eq!(wordlist.word_count(), 3);
        assert!(wordlist.is_word("tab"));
        Ok(())
    }

    #[cfg(feature = "bincode")]
    #[test]
    fn test_bincode() -> Result<(), Error> {
        let path = temp_dir().join("scrabble_solver_test_words.bin");
        let path = path.to_str().unwrap();
        Wordlist::from_words(WORDS).serialize_into(path)?;
        let wordlist = Wordlist::deserialize_from(path)?;
        assert_eq!(wordlist.word_count(), WORDS.len());
        assert_eq!(wordlist.wordfile, path);
        Ok(())
    }

    #[test]
    #[should_panic(expected = "ReadError")]
    fn test_read_error() {
        Wordlist::from_file("no/such/wordfile.txt").unwrap();
    }
}
