//! A single sur, stored as its signed semitone distance from the tonic Sa.

use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::models::chord::Chord;
use crate::models::pitch_table::{PitchTable, PITCH_CLASSES};

/// A pitched note relative to Sa. `Note::from_value(0)` is Sa itself,
/// positive values climb toward higher saptaks, negative values descend.
///
/// Notes are immutable values: arithmetic returns new notes. Equality,
/// ordering, and hashing all follow the semitone value, so a note built
/// from a value and one parsed from its notation are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Note {
    value: i32,
}

impl Note {
    /// Note at a signed semitone distance from Sa.
    pub fn from_value(value: i32) -> Note {
        Note { value }
    }

    /// Parses notation: a base sur symbol followed by a uniform run of
    /// saptak markers, e.g. `"g"`, `"g+"`, `"n.--"`.
    ///
    /// Fails on an empty string, a base symbol the table does not know,
    /// or a marker run mixing both directions.
    pub fn from_notation(text: &str, table: &PitchTable) -> Result<Note, ParseError> {
        if text.is_empty() {
            return Err(ParseError::Empty);
        }

        let upper = table.upper_marker();
        let lower = table.lower_marker();
        let base = text.trim_end_matches(|c| c == upper || c == lower);
        let run = &text[base.len()..];
        let ups = run.chars().filter(|&c| c == upper).count() as i32;
        let downs = run.chars().filter(|&c| c == lower).count() as i32;
        if ups > 0 && downs > 0 {
            return Err(ParseError::MixedSaptakMarkers(text.to_string()));
        }

        let pitch_class = table.pitch_class_of(base).map_err(|source| {
            ParseError::UnknownBaseSur {
                input: text.to_string(),
                source,
            }
        })?;
        let saptak = ups - downs;
        Ok(Note::from_value(
            pitch_class as i32 + saptak * PITCH_CLASSES as i32,
        ))
    }

    /// Signed semitone distance from Sa.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Pitch class in `0..=11`, folding saptaks away. Euclidean remainder,
    /// so negative values fold upward: `Note::from_value(-1)` is class 11.
    pub fn pitch_class(&self) -> u8 {
        self.value.rem_euclid(PITCH_CLASSES as i32) as u8
    }

    /// Saptak index relative to the middle saptak: 0 for values `0..=11`,
    /// 1 for the next saptak up, -1 for the first one down.
    pub fn saptak(&self) -> i32 {
        self.value.div_euclid(PITCH_CLASSES as i32)
    }

    /// The same sur folded into the middle saptak.
    pub fn base_note(&self) -> Note {
        Note::from_value(self.pitch_class() as i32)
    }

    /// The bare sur symbol, without saptak markers.
    pub fn base_notation<'t>(&self, table: &'t PitchTable) -> &'t str {
        table.symbol_at(self.pitch_class())
    }

    /// Full notation: base symbol plus one marker per saptak of distance
    /// from the middle saptak.
    pub fn notation(&self, table: &PitchTable) -> String {
        let base = self.base_notation(table);
        let saptak = self.saptak();
        let marker = if saptak >= 0 {
            table.upper_marker()
        } else {
            table.lower_marker()
        };
        let mut out = String::with_capacity(base.len() + saptak.unsigned_abs() as usize);
        out.push_str(base);
        for _ in 0..saptak.unsigned_abs() {
            out.push(marker);
        }
        out
    }

    /// The same sur moved `saptaks` octaves up (negative moves down).
    pub fn shift_saptak(&self, saptaks: i32) -> Note {
        Note::from_value(self.value + saptaks * PITCH_CLASSES as i32)
    }

    /// Absolute distance to another note, in semitones.
    pub fn distance(&self, other: Note) -> u32 {
        self.value.abs_diff(other.value)
    }

    /// Chord rooted at this note with the given intervals above it.
    pub fn generate_chord(&self, intervals: &[i32]) -> Chord {
        Chord::from_root_and_intervals(*self, intervals.to_vec())
    }
}

impl Add<i32> for Note {
    type Output = Note;

    fn add(self, semitones: i32) -> Note {
        Note::from_value(self.value + semitones)
    }
}

impl Sub<i32> for Note {
    type Output = Note;

    fn sub(self, semitones: i32) -> Note {
        Note::from_value(self.value - semitones)
    }
}

impl fmt::Display for Note {
    /// Notation against the standard sargam table.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.notation(PitchTable::standard()))
    }
}

impl FromStr for Note {
    type Err = ParseError;

    /// Parses notation against the standard sargam table.
    fn from_str(s: &str) -> Result<Note, ParseError> {
        Note::from_notation(s, PitchTable::standard())
    }
}
