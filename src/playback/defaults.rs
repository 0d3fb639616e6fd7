//! Default values for playback translation.

/// MIDI note sounding Sa when an instrument is not told otherwise (C#4).
pub const DEFAULT_SA_MIDI_NOTE: i32 = 61;

/// Default playing volume, on the engine's `0.0..=1.0` scale.
pub const DEFAULT_VOLUME: f64 = 1.0;

/// Default duration of a played note, in seconds.
pub const DEFAULT_DURATION_SECS: f64 = 1.0;
