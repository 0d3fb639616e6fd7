//! Raags: the notes a melodic framework admits, plus its aroh and avroh.

use serde::{Deserialize, Serialize};

use crate::error::ParseError;
use crate::models::chord::Chord;
use crate::models::note::Note;
use crate::models::pitch_table::PitchTable;

/// A raag: its admitted notes and the idiomatic ascending (aroh) and
/// descending (avroh) sequences.
///
/// `notes` is kept sorted ascending. `aroh` and `avroh` keep the order the
/// caller gave, since they describe melodic movement rather than a set.
/// All three are fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRaag")]
pub struct Raag {
    notes: Vec<Note>,
    aroh: Vec<Note>,
    avroh: Vec<Note>,
}

/// Wire form of a raag; construction re-sorts the note set.
#[derive(Deserialize)]
struct RawRaag {
    notes: Vec<Note>,
    aroh: Vec<Note>,
    avroh: Vec<Note>,
}

impl From<RawRaag> for Raag {
    fn from(raw: RawRaag) -> Raag {
        Raag::new(raw.notes, raw.aroh, raw.avroh)
    }
}

impl Raag {
    pub fn new(mut notes: Vec<Note>, aroh: Vec<Note>, avroh: Vec<Note>) -> Raag {
        notes.sort();
        Raag { notes, aroh, avroh }
    }

    /// Raag from semitone values relative to Sa.
    pub fn from_values(notes: &[i32], aroh: &[i32], avroh: &[i32]) -> Raag {
        fn to_notes(values: &[i32]) -> Vec<Note> {
            values.iter().copied().map(Note::from_value).collect()
        }
        Raag::new(to_notes(notes), to_notes(aroh), to_notes(avroh))
    }

    /// Raag from notation strings, parsed against the given table.
    pub fn from_notation(
        table: &PitchTable,
        notes: &[&str],
        aroh: &[&str],
        avroh: &[&str],
    ) -> Result<Raag, ParseError> {
        fn parse_all(table: &PitchTable, texts: &[&str]) -> Result<Vec<Note>, ParseError> {
            texts
                .iter()
                .map(|text| Note::from_notation(text, table))
                .collect()
        }
        Ok(Raag::new(
            parse_all(table, notes)?,
            parse_all(table, aroh)?,
            parse_all(table, avroh)?,
        ))
    }

    /// Admitted notes, sorted ascending.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Ascending sequence, in the order given at construction.
    pub fn aroh(&self) -> &[Note] {
        &self.aroh
    }

    /// Descending sequence, in the order given at construction.
    pub fn avroh(&self) -> &[Note] {
        &self.avroh
    }

    /// True when the note's base note is one of the raag's notes, so
    /// membership ignores which saptak the note sounds in. The stored
    /// notes are compared as given.
    pub fn contains_note(&self, note: Note) -> bool {
        self.notes.contains(&note.base_note())
    }

    /// True when the note's base note appears in the aroh.
    pub fn aroh_contains_note(&self, note: Note) -> bool {
        self.aroh.contains(&note.base_note())
    }

    /// True when the note's base note appears in the avroh.
    pub fn avroh_contains_note(&self, note: Note) -> bool {
        self.avroh.contains(&note.base_note())
    }

    /// True when every chord note belongs to the raag. An empty chord
    /// belongs vacuously.
    pub fn contains_chord(&self, chord: &Chord) -> bool {
        chord.notes().iter().all(|&note| self.contains_note(note))
    }

    /// True when every chord note appears in the aroh.
    pub fn aroh_contains_chord(&self, chord: &Chord) -> bool {
        chord
            .notes()
            .iter()
            .all(|&note| self.aroh_contains_note(note))
    }

    /// True when every chord note appears in the avroh.
    pub fn avroh_contains_chord(&self, chord: &Chord) -> bool {
        chord
            .notes()
            .iter()
            .all(|&note| self.avroh_contains_note(note))
    }
}
