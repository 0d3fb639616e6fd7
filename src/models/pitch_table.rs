//! The sur table: a bijection between the 12 pitch classes and their
//! notation symbols, plus the saptak markers appended when a note leaves
//! the middle octave.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::DomainError;

/// Number of pitch classes in a saptak.
pub const PITCH_CLASSES: usize = 12;

/// Symbols of the standard sargam table, indexed by pitch class.
/// Komal variants carry a trailing dot, tivra Ma a star.
pub(crate) const STANDARD_SYMBOLS: [&str; PITCH_CLASSES] = [
    "s", "r.", "r", "g.", "g", "m", "m*", "p", "d.", "d", "n.", "n",
];

/// Marker appended once per saptak above the middle one.
pub(crate) const STANDARD_UPPER_MARKER: char = '+';

/// Marker appended once per saptak below the middle one.
pub(crate) const STANDARD_LOWER_MARKER: char = '-';

static STANDARD: Lazy<PitchTable> = Lazy::new(|| {
    let symbols = STANDARD_SYMBOLS.iter().map(|s| s.to_string()).collect();
    match PitchTable::new(symbols, STANDARD_UPPER_MARKER, STANDARD_LOWER_MARKER) {
        Ok(table) => table,
        Err(err) => unreachable!("standard pitch table is well formed: {}", err),
    }
});

/// Bidirectional mapping between pitch classes `0..=11` and sur symbols.
///
/// Both lookup directions are built together at construction, the only
/// point where the table is validated. Instances are immutable afterwards,
/// so the two directions cannot drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchTable {
    symbols: Vec<String>,
    classes: HashMap<String, u8>,
    upper_marker: char,
    lower_marker: char,
}

impl PitchTable {
    /// Builds a table from symbols indexed by pitch class.
    ///
    /// Fails unless there are exactly [`PITCH_CLASSES`] symbols, all
    /// distinct and non-empty, none containing a saptak marker, and the
    /// two markers differ.
    pub fn new(
        symbols: Vec<String>,
        upper_marker: char,
        lower_marker: char,
    ) -> Result<PitchTable, DomainError> {
        if symbols.len() != PITCH_CLASSES {
            return Err(DomainError::InvalidTable(format!(
                "expected {} symbols, got {}",
                PITCH_CLASSES,
                symbols.len()
            )));
        }
        if upper_marker == lower_marker {
            return Err(DomainError::InvalidTable(format!(
                "upper and lower saptak markers are both '{}'",
                upper_marker
            )));
        }

        let mut classes = HashMap::with_capacity(PITCH_CLASSES);
        for (pitch_class, symbol) in symbols.iter().enumerate() {
            if symbol.is_empty() {
                return Err(DomainError::InvalidTable(format!(
                    "pitch class {} has an empty symbol",
                    pitch_class
                )));
            }
            if symbol.contains(upper_marker) || symbol.contains(lower_marker) {
                return Err(DomainError::InvalidTable(format!(
                    "symbol '{}' contains a saptak marker",
                    symbol
                )));
            }
            if classes.insert(symbol.clone(), pitch_class as u8).is_some() {
                return Err(DomainError::InvalidTable(format!(
                    "symbol '{}' is mapped twice",
                    symbol
                )));
            }
        }

        log::debug!("built pitch table with {} sur symbols", symbols.len());
        Ok(PitchTable {
            symbols,
            classes,
            upper_marker,
            lower_marker,
        })
    }

    /// The standard sargam table with `+`/`-` saptak markers.
    pub fn standard() -> &'static PitchTable {
        &STANDARD
    }

    /// Symbol for a pitch class, failing outside `0..=11`.
    pub fn symbol_of(&self, pitch_class: i32) -> Result<&str, DomainError> {
        if !(0..PITCH_CLASSES as i32).contains(&pitch_class) {
            return Err(DomainError::PitchClassOutOfRange(pitch_class));
        }
        Ok(&self.symbols[pitch_class as usize])
    }

    /// Pitch class for a bare symbol (no saptak markers).
    pub fn pitch_class_of(&self, symbol: &str) -> Result<u8, DomainError> {
        self.classes
            .get(symbol)
            .copied()
            .ok_or_else(|| DomainError::UnknownSymbol(symbol.to_string()))
    }

    /// Symbol lookup for an already-folded pitch class.
    pub(crate) fn symbol_at(&self, pitch_class: u8) -> &str {
        &self.symbols[pitch_class as usize]
    }

    pub fn upper_marker(&self) -> char {
        self.upper_marker
    }

    pub fn lower_marker(&self) -> char {
        self.lower_marker
    }
}
