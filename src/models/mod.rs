//! Data models for the music theory core.
//!
//! This module contains the sur table and the note, chord, and raag
//! value types built on top of it.

pub mod chord;
pub mod note;
pub mod pitch_table;
pub mod raag;

// Re-export commonly used types
pub use chord::Chord;
pub use note::Note;
pub use pitch_table::{PitchTable, PITCH_CLASSES};
pub use raag::Raag;
