//! Error types for move application and search.

/// Error that can occur when applying a move.
///
/// All variants are recoverable from the caller's point of view: the
/// board is left untouched and another cell may be tried.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The cell is already taken.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] usize),

    /// The cell index is not on the board.
    #[display("Cell {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),

    /// A transition postcondition failed.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(#[error(not(source))] String),
}

/// Error raised by the search.
///
/// Both variants are programming errors rather than game conditions and
/// must not be swallowed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SearchError {
    /// The searched board was already won or drawn.
    #[display("negamax found no legal move; the game is not running")]
    #[from(ignore)]
    NoLegalMove,

    /// Applying a free cell failed its postcondition.
    #[display("search produced an illegal transition: {}", _0)]
    IllegalTransition(MoveError),
}
