//! Chords: note collections with a root and the intervals above it.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::InvalidOperation;
use crate::models::note::Note;
use crate::models::pitch_table::PITCH_CLASSES;

/// A chord built either from explicit notes or from a root plus intervals.
///
/// The two paths are not symmetric. [`Chord::from_notes`] sorts the notes
/// and derives canonical intervals from the lowest one, while
/// [`Chord::from_root_and_intervals`] preserves the caller's interval order
/// verbatim, voicing included. Equality, ordering, and hashing consider the
/// note sequence only, so the two paths still compare equal whenever they
/// produce the same notes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "RawChord")]
pub struct Chord {
    notes: Vec<Note>,
    root: Option<Note>,
    intervals: Vec<i32>,
}

/// Wire form of a chord, checked before it becomes a [`Chord`].
#[derive(Deserialize)]
struct RawChord {
    notes: Vec<Note>,
    root: Option<Note>,
    intervals: Vec<i32>,
}

impl TryFrom<RawChord> for Chord {
    type Error = InvalidOperation;

    /// Wire data must hold what the constructors guarantee. Every note
    /// needs a matching interval and must sit at that interval above the
    /// root, which can only be absent when no notes are present.
    fn try_from(raw: RawChord) -> Result<Chord, InvalidOperation> {
        if raw.notes.len() != raw.intervals.len() {
            return Err(InvalidOperation::InvalidChord(format!(
                "{} notes but {} intervals",
                raw.notes.len(),
                raw.intervals.len()
            )));
        }
        match raw.root {
            Some(root) => {
                for (&note, &interval) in raw.notes.iter().zip(&raw.intervals) {
                    if note != root + interval {
                        return Err(InvalidOperation::InvalidChord(format!(
                            "note {} is not root {} plus interval {}",
                            note.value(),
                            root.value(),
                            interval
                        )));
                    }
                }
            }
            None => {
                if !raw.notes.is_empty() {
                    return Err(InvalidOperation::InvalidChord(
                        "notes present but no root".to_string(),
                    ));
                }
            }
        }
        Ok(Chord {
            notes: raw.notes,
            root: raw.root,
            intervals: raw.intervals,
        })
    }
}

impl Chord {
    /// Chord from explicit notes. The notes are sorted ascending, the
    /// lowest becomes the root, and intervals are measured from it, so
    /// `intervals()[0] == 0` whenever the chord is non-empty.
    pub fn from_notes(mut notes: Vec<Note>) -> Chord {
        notes.sort();
        let root = notes.first().copied();
        let intervals = match root {
            Some(root) => notes.iter().map(|note| note.value() - root.value()).collect(),
            None => Vec::new(),
        };
        Chord {
            notes,
            root,
            intervals,
        }
    }

    /// Chord from semitone values, sorted and rooted like [`Chord::from_notes`].
    pub fn from_values(values: &[i32]) -> Chord {
        Chord::from_notes(values.iter().copied().map(Note::from_value).collect())
    }

    /// Chord from a root and the intervals above it, one note per interval
    /// in the order given. The sequence is not re-sorted, so a descending
    /// or open voicing survives construction.
    pub fn from_root_and_intervals(root: Note, intervals: Vec<i32>) -> Chord {
        let notes = intervals.iter().map(|&interval| root + interval).collect();
        Chord {
            notes,
            root: Some(root),
            intervals,
        }
    }

    /// The notes, in construction order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The root note. `None` only for a chord built from an empty note
    /// list; the root-and-intervals path always records its root.
    pub fn root(&self) -> Option<Note> {
        self.root
    }

    /// Intervals above the root, parallel to `notes()`.
    pub fn intervals(&self) -> &[i32] {
        &self.intervals
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Iterates over the notes in stored order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Note>> {
        self.notes.iter().copied()
    }

    /// The chord inverted `times` times. Each step moves the bottom
    /// interval up a saptak and rebases the result so the new lowest
    /// interval is zero; the root is kept. Inversion needs at least two
    /// notes, even when `times` is zero.
    pub fn invert(&self, times: usize) -> Result<Chord, InvalidOperation> {
        if self.notes.len() < 2 {
            return Err(InvalidOperation::ChordTooSmall(self.notes.len()));
        }
        let root = match self.root {
            Some(root) => root,
            None => unreachable!("a chord with notes always has a root"),
        };
        let mut intervals = self.intervals.clone();
        for _ in 0..times {
            intervals = rotate_intervals(&intervals);
        }
        Ok(Chord::from_root_and_intervals(root, intervals))
    }
}

/// One inversion step: the first interval moves up a saptak, then the
/// whole list is rebased so its new first entry is zero.
fn rotate_intervals(intervals: &[i32]) -> Vec<i32> {
    let mut rotated: Vec<i32> = intervals[1..].to_vec();
    rotated.push(intervals[0] + PITCH_CLASSES as i32);
    let lowest = rotated[0];
    for interval in &mut rotated {
        *interval -= lowest;
    }
    rotated
}

impl PartialEq for Chord {
    fn eq(&self, other: &Chord) -> bool {
        self.notes == other.notes
    }
}

impl Eq for Chord {}

impl Hash for Chord {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.notes.hash(state);
    }
}

impl Ord for Chord {
    /// Chords compare by their note sequences read highest-first.
    fn cmp(&self, other: &Chord) -> Ordering {
        self.notes.iter().rev().cmp(other.notes.iter().rev())
    }
}

impl PartialOrd for Chord {
    fn partial_cmp(&self, other: &Chord) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Index<usize> for Chord {
    type Output = Note;

    fn index(&self, index: usize) -> &Note {
        &self.notes[index]
    }
}

impl IntoIterator for Chord {
    type Item = Note;
    type IntoIter = std::vec::IntoIter<Note>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.into_iter()
    }
}

impl<'a> IntoIterator for &'a Chord {
    type Item = Note;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Note>>;

    fn into_iter(self) -> Self::IntoIter {
        self.notes.iter().copied()
    }
}

impl fmt::Display for Chord {
    /// `Chord([s, g, p])`, notes in the standard sargam notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Chord([")?;
        for (i, note) in self.notes.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", note)?;
        }
        write!(f, "])")
    }
}
