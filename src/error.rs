use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// Error reading wordfile
    #[error("Wordfile \"{path}\" could not be read")]
    ReadError {
        path: String,
        source: std::io::Error,
    },

    /// Error parsing a csv wordfile
    #[error("Csv wordlist could not be parsed")]
    CsvError(#[from] csv::Error),

    /// Error deserializing bincoded wordfile
    #[cfg(feature = "bincode")]
    #[error("Wordfile {0} could not be deserialized")]
    WordfileDeserializeError(String),

    /// Error writing bincoded wordfile
    #[cfg(feature = "bincode")]
    #[error("Wordfile {0} could not be serialized")]
    WordfileSerializeError(String),

    /// Rack or fragment contains something other than `a`..`z`
    #[error("Invalid letter '{letter}' in {field}")]
    InvalidLetter { field: &'static str, letter: char },

    /// A rack holds at most 7 letters
    #[error("Rack has {0} letters (expect at most 7)")]
    RackTooLong(usize),

    /// Error parsing a bonus square
    #[error("Invalid bonus square: \"{0}\"")]
    MarkerParseError(String),

    /// Error parsing an `index=bonus` assignment
    #[error("Invalid bonus square assignment \"{0}\" (expect e.g. \"2=3w\")")]
    MarkerAssignmentError(String),

    /// The fragment does not occur in the lane it should have been built into
    #[error("Fragment \"{0}\" not found in lane")]
    FragmentNotFound(String),
}
