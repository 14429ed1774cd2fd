//! Point values of the scrabble tiles.
/// letter, points
type TileInfo = (char, u32);

const TILESET: &[TileInfo] = &[
    ('a', 1),
    ('b', 3),
    ('c', 3),
    ('d', 2),
    ('e', 1),
    ('f', 4),
    ('g', 2),
    ('h', 4),
    ('i', 1),
    ('j', 8),
    ('k', 5),
    ('l', 1),
    ('m', 3),
    ('n', 1),
    ('o', 1),
    ('p', 3),
    ('q', 10),
    ('r', 1),
    ('s', 1),
    ('t', 1),
    ('u', 1),
    ('v', 4),
    ('w', 4),
    ('x', 8),
    ('y', 4),
    ('z', 10),
];

/// The letter values of the standard english scrabble tileset.
#[derive(Debug, Clone)]
pub struct TileSet {
    tiles: &'static [TileInfo],
}

impl Default for TileSet {
    fn default() -> Self {
        TileSet { tiles: TILESET }
    }
}

impl TileSet {
    /// Return the points for `letter`, or 0 if not found
    pub fn points(&self, letter: char) -> u32 {
        self.tiles
            .iter()
            .find(|&&(label, _)| label == letter)
            .map_or(0, |&(_, points)| points)
    }

    /// Sum of the points of all letters in `word`, without any bonus.
    pub fn word_points(&self, word: &str) -> u32 {
        word.chars().map(|letter| self.points(letter)).sum()
    }
}
