// Chord construction paths and the inversion cycle.

use saaj::{Chord, InvalidOperation, Note};

#[test]
fn test_triad_inversion_cycle() {
    let triad = Chord::from_values(&[0, 4, 7]);

    let first = triad.invert(1).unwrap();
    assert_eq!(first.intervals(), &[0, 3, 8]);

    let second = triad.invert(2).unwrap();
    assert_eq!(second.intervals(), &[0, 5, 9]);

    // A triad has three voicings; the cycle closes after three steps.
    assert_eq!(triad.invert(3).unwrap(), triad);
    assert_eq!(first.invert(2).unwrap(), triad);
}

#[test]
fn test_seventh_chord_inversion() {
    let seventh = Chord::from_values(&[0, 4, 7, 10]);

    let first = seventh.invert(1).unwrap();
    assert_eq!(first.intervals(), &[0, 3, 6, 8]);
    assert_eq!(seventh.invert(4).unwrap(), seventh);
}

#[test]
fn test_inversion_keeps_the_root_anchor() {
    let root = Note::from_value(7);
    let chord = root.generate_chord(&[0, 4, 7]);
    let inverted = chord.invert(1).unwrap();

    assert_eq!(inverted.root(), Some(root));
    assert_eq!(
        inverted.notes(),
        &[
            Note::from_value(7),
            Note::from_value(10),
            Note::from_value(15),
        ]
    );
}

#[test]
fn test_voicing_survives_interval_construction() {
    // The note list path canonicalizes; the interval path does not.
    let open = Chord::from_root_and_intervals(Note::from_value(0), vec![7, 0, 4]);
    assert_eq!(
        open.notes(),
        &[
            Note::from_value(7),
            Note::from_value(0),
            Note::from_value(4),
        ]
    );

    let closed = Chord::from_values(&[7, 0, 4]);
    assert_eq!(closed.intervals(), &[0, 4, 7]);
    // Equality follows the note sequence, so the voicings stay distinct.
    assert_ne!(open, closed);
}

#[test]
fn test_inversion_preconditions() {
    assert_eq!(
        Chord::from_notes(Vec::new()).invert(1),
        Err(InvalidOperation::ChordTooSmall(0))
    );
    assert_eq!(
        Chord::from_values(&[5]).invert(0),
        Err(InvalidOperation::ChordTooSmall(1))
    );
}

#[test]
fn test_chords_sort_by_highest_note_first() {
    let mut chords = vec![
        Chord::from_values(&[0, 5]),
        Chord::from_values(&[0, 4, 7]),
        Chord::from_values(&[0, 4]),
    ];
    chords.sort();
    assert_eq!(
        chords,
        vec![
            Chord::from_values(&[0, 4]),
            Chord::from_values(&[0, 5]),
            Chord::from_values(&[0, 4, 7]),
        ]
    );
}
