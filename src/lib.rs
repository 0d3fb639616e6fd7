//! Indian classical music theory primitives.
//!
//! Notes are signed semitone distances from the tonic Sa, written in sur
//! notation ("g", "n.-", "s+"). Chords and raags build on notes, and the
//! playback module translates all of them into MIDI events for an
//! external engine. Notation is configurable; the standard sargam table
//! is built in.

pub mod config;
pub mod error;
pub mod models;
pub mod playback;

// Re-export commonly used types
pub use config::{ConfigError, NotationConfig, SaptakMarkers};
pub use error::{DomainError, InvalidOperation, ParseError};
pub use models::{Chord, Note, PitchTable, Raag, PITCH_CLASSES};
pub use playback::{Instrument, PlaybackSink};
