use std::io;

/// Everything that can go wrong while compressing, decompressing or
/// solving a board.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot build a Huffman tree from empty input")]
    EmptyInput,

    #[error("symbol {symbol:?} at position {position} has no code")]
    MissingCode { symbol: char, position: usize },

    #[error("malformed encoding: {0}")]
    Malformed(#[from] MalformedEncoding),

    #[error("invalid frequency table: {0}")]
    InvalidTable(String),

    #[error("malformed container: {0}")]
    Container(String),

    #[error("board size {0} is too small, need at least 4")]
    BoardTooSmall(usize),

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Why a bitstring could not be walked through a tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedEncoding {
    #[error("unexpected character {found:?} at bit {position}")]
    InvalidBit { position: usize, found: char },

    /// The tree has no child on the side the bit selects.
    #[error("bit {position} selects a branch the tree does not have")]
    NoBranch { position: usize },

    #[error("input ends {dangling} bit(s) into an unfinished code")]
    Truncated { dangling: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
