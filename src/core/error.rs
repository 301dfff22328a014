use crate::core::Vec2;

/// Problems found while building a [`crate::core::Field`] from its encoded or textual form.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("field data needs a trailing width and height, got {len} values")]
    MissingTrailer { len: usize },
    #[error("invalid field: expected {expected} values for the declared size, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },
    #[error("a {width}x{height} field has one empty side; only 0x0 may be empty")]
    DegenerateSize { width: usize, height: usize },
    #[error("invalid height: expected {expected} rows, got {actual}")]
    InvalidHeight { expected: usize, actual: usize },
    #[error("invalid width: row {row} has {actual} tiles, expected {expected}")]
    InvalidWidth { row: usize, expected: usize, actual: usize },
    #[error("tile at {at:?} has {what} {value}, which does not fit in a nibble")]
    IdOutOfRange { at: Vec2, what: &'static str, value: u8 },
    #[error("nibble value {value} is not a valid {what}")]
    InvalidNibble { what: &'static str, value: u8 },
    #[error("cannot read {token:?} as a number")]
    InvalidNumber { token: String },
    #[error("cannot follow chain {letter:?} starting at {at:?}")]
    AmbiguousChain { letter: char, at: Vec2 },
    #[error("chain {id} must be a path of at least two adjacent cells")]
    InvalidChain { id: u8 },
    #[error("unknown tile symbol {symbol:?} at {at:?}")]
    UnknownSymbol { symbol: char, at: Vec2 },
}

/// A chain whose direction pointers do not lead from one endpoint to the other.
///
/// This never happens on a field that was valid when loaded and only modified
/// through [`crate::core::Game::move_cat`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("chain at {at:?} leads off the grid")]
    PointsOffGrid { at: Vec2 },
    #[error("chain {id} is broken between {at:?} and {next:?}")]
    Broken { id: u8, at: Vec2, next: Vec2 },
    #[error("chain {id} starting at {start:?} does not end within {limit} steps")]
    TooLong { id: u8, start: Vec2, limit: usize },
}
