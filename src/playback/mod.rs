//! Translation from notes to MIDI events for an external playback engine.
//!
//! The engine itself (sampler, synth, DAW bridge) lives outside this
//! crate. It implements [`PlaybackSink`] and receives absolute MIDI
//! pitches; [`Instrument`] owns the translation, anchoring Sa at a
//! configurable MIDI note and offsetting every other sur from there.

pub mod defaults;

pub use defaults::{DEFAULT_DURATION_SECS, DEFAULT_SA_MIDI_NOTE, DEFAULT_VOLUME};

use crate::error::ParseError;
use crate::models::chord::Chord;
use crate::models::note::Note;
use crate::models::pitch_table::PitchTable;

/// Receiver for translated playback events.
///
/// A `None` pitch is a rest held for the given duration. Volume is on the
/// engine's `0.0..=1.0` scale and duration is in seconds; both pass
/// through untouched.
pub trait PlaybackSink {
    fn play_note(&mut self, midi_pitch: Option<i32>, volume: f64, duration_secs: f64);
    fn play_chord(&mut self, midi_pitches: &[i32], volume: f64, duration_secs: f64);
}

/// An instrument bound to a sink, with Sa anchored at a MIDI note.
///
/// Every note lands at `sa_midi_note + note.value()`, so moving the anchor
/// transposes the whole instrument.
#[derive(Debug)]
pub struct Instrument<S> {
    sink: S,
    sa_midi_note: i32,
    table: PitchTable,
}

impl<S: PlaybackSink> Instrument<S> {
    /// Instrument with the default Sa anchor and the standard sargam table.
    pub fn new(sink: S) -> Instrument<S> {
        Instrument::with_config(sink, DEFAULT_SA_MIDI_NOTE, PitchTable::standard().clone())
    }

    /// Instrument with an explicit Sa anchor and notation table.
    pub fn with_config(sink: S, sa_midi_note: i32, table: PitchTable) -> Instrument<S> {
        Instrument {
            sink,
            sa_midi_note,
            table,
        }
    }

    /// MIDI note where Sa sounds.
    pub fn sa_midi_note(&self) -> i32 {
        self.sa_midi_note
    }

    /// Moves the Sa anchor, transposing everything played afterwards.
    pub fn set_sa_midi_note(&mut self, sa_midi_note: i32) {
        self.sa_midi_note = sa_midi_note;
    }

    /// The notation table this instrument reads sur strings with.
    pub fn table(&self) -> &PitchTable {
        &self.table
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Releases the sink, e.g. to inspect what was recorded.
    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Absolute MIDI pitch for a note on this instrument.
    pub fn midi_pitch(&self, note: Note) -> i32 {
        self.sa_midi_note + note.value()
    }

    /// Plays a note, or a rest when `note` is `None`.
    pub fn play_note(&mut self, note: Option<Note>, volume: f64, duration_secs: f64) {
        let midi_pitch = note.map(|n| self.midi_pitch(n));
        log::trace!(
            "play note midi={:?} volume={} duration={}s",
            midi_pitch,
            volume,
            duration_secs
        );
        self.sink.play_note(midi_pitch, volume, duration_secs);
    }

    /// Plays all notes of a chord together.
    pub fn play_chord(&mut self, chord: &Chord, volume: f64, duration_secs: f64) {
        let midi_pitches: Vec<i32> = chord
            .notes()
            .iter()
            .map(|&note| self.midi_pitch(note))
            .collect();
        log::trace!(
            "play chord midi={:?} volume={} duration={}s",
            midi_pitches,
            volume,
            duration_secs
        );
        self.sink.play_chord(&midi_pitches, volume, duration_secs);
    }

    /// MIDI pitch for a sur notation string. The empty string is the rest
    /// convention, and this boundary is the one place it is not an error.
    pub fn sur_to_midi(&self, sur: &str) -> Result<Option<i32>, ParseError> {
        if sur.is_empty() {
            return Ok(None);
        }
        let note = Note::from_notation(sur, &self.table)?;
        Ok(Some(self.midi_pitch(note)))
    }

    /// Parses and plays a sur string, resting on the empty string.
    pub fn play_sur(&mut self, sur: &str, volume: f64, duration_secs: f64) -> Result<(), ParseError> {
        let midi_pitch = self.sur_to_midi(sur)?;
        self.sink.play_note(midi_pitch, volume, duration_secs);
        Ok(())
    }
}

/// MIDI note number (possibly fractional) for a frequency in hertz,
/// anchored at A4 = 440 Hz = 69.
pub fn frequency_to_midi(frequency: f64) -> f64 {
    12.0 * (frequency / 440.0).log2() + 69.0
}

/// Frequency in hertz for a (possibly fractional) MIDI note number.
pub fn midi_to_frequency(midi: f64) -> f64 {
    440.0 * ((midi - 69.0) / 12.0).exp2()
}
