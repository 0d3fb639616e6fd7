//! Error types shared across the crate.
//!
//! Table lookups fail with [`DomainError`], notation parsing with
//! [`ParseError`], and chord operations whose preconditions are not met
//! with [`InvalidOperation`]. Configuration has its own error type in
//! [`crate::config`].

use thiserror::Error;

/// Errors from pitch table construction and lookups.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A pitch class outside `0..=11` was passed to a lookup.
    #[error("pitch class {0} is out of range 0..=11")]
    PitchClassOutOfRange(i32),

    /// A symbol with no entry in the table was passed to a lookup.
    #[error("unknown sur symbol '{0}'")]
    UnknownSymbol(String),

    /// The symbols and markers given do not form a valid table.
    #[error("invalid pitch table: {0}")]
    InvalidTable(String),
}

/// Errors from parsing a sur notation string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input was empty. Playback treats an empty sur as a rest, but
    /// that convention lives at the playback boundary, not in parsing.
    #[error("empty notation string")]
    Empty,

    /// After stripping the saptak marker run, no sur in the table matches
    /// what remains.
    #[error("unrecognized base sur in '{input}'")]
    UnknownBaseSur {
        input: String,
        #[source]
        source: DomainError,
    },

    /// Upper and lower saptak markers appeared in the same notation.
    #[error("notation '{0}' mixes upper and lower saptak markers")]
    MixedSaptakMarkers(String),
}

/// Errors from chord operations or chord data whose preconditions are
/// not met.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidOperation {
    /// Inversion rotates intervals, which needs at least two notes.
    #[error("cannot invert a chord with {0} notes (need at least 2)")]
    ChordTooSmall(usize),

    /// Deserialized chord fields contradict each other.
    #[error("invalid chord data: {0}")]
    InvalidChord(String),
}
