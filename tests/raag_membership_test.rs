// Raag membership for notes and chords, with raags built from notation.

use saaj::{Chord, Note, PitchTable, Raag};

/// Yaman: all shuddha surs except tivra Ma in place of shuddha Ma.
fn yaman() -> Raag {
    let table = PitchTable::standard();
    Raag::from_notation(
        table,
        &["s", "r", "g", "m*", "p", "d", "n"],
        &["s", "r", "g", "m*", "p", "d", "n", "s+"],
        &["s+", "n", "d", "p", "m*", "g", "r", "s"],
    )
    .unwrap()
}

#[test]
fn test_yaman_admits_tivra_ma_only() {
    let raag = yaman();
    let tivra_ma = Note::from_value(6);
    let shuddha_ma = Note::from_value(5);

    assert!(raag.contains_note(tivra_ma));
    assert!(!raag.contains_note(shuddha_ma));

    // Membership ignores the saptak.
    assert!(raag.contains_note(tivra_ma.shift_saptak(2)));
    assert!(raag.contains_note(tivra_ma.shift_saptak(-1)));
    assert!(!raag.contains_note(shuddha_ma.shift_saptak(1)));
}

#[test]
fn test_chord_membership_in_yaman() {
    let raag = yaman();

    let in_raag = Chord::from_values(&[0, 4, 7]); // s g p
    assert!(raag.contains_chord(&in_raag));

    // The same shape a saptak higher still belongs.
    let higher = Chord::from_values(&[12, 16, 19]);
    assert!(raag.contains_chord(&higher));

    // Shuddha Ma pulls the chord out of the raag.
    let with_ma = Chord::from_values(&[0, 5, 7]);
    assert!(!raag.contains_chord(&with_ma));
}

#[test]
fn test_empty_chord_belongs_to_any_raag() {
    let empty = Chord::from_notes(Vec::new());
    assert!(yaman().contains_chord(&empty));
    assert!(yaman().aroh_contains_chord(&empty));
    assert!(yaman().avroh_contains_chord(&empty));
}

#[test]
fn test_aroh_avroh_can_differ_from_the_note_set() {
    // Ascent skips komal Ni; descent uses it instead of shuddha Ni.
    let table = PitchTable::standard();
    let raag = Raag::from_notation(
        table,
        &["s", "g", "m", "p", "n.", "n"],
        &["s", "g", "m", "p", "n", "s+"],
        &["s+", "n.", "p", "m", "g", "s"],
    )
    .unwrap();

    let komal_ni = Note::from_notation("n.", table).unwrap();
    assert!(raag.contains_note(komal_ni));
    assert!(!raag.aroh_contains_note(komal_ni));
    assert!(raag.avroh_contains_note(komal_ni));

    let descent_phrase = Chord::from_values(&[10, 7, 4]); // n. p g
    assert!(raag.avroh_contains_chord(&descent_phrase));
    assert!(!raag.aroh_contains_chord(&descent_phrase));
}

#[test]
fn test_sequences_keep_melodic_order() {
    let raag = yaman();
    let first_of_avroh = raag.avroh()[0];
    let last_of_avroh = raag.avroh()[raag.avroh().len() - 1];

    assert_eq!(first_of_avroh, Note::from_value(12)); // s+
    assert_eq!(last_of_avroh, Note::from_value(0)); // s
    assert!(first_of_avroh > last_of_avroh, "avroh descends");

    // The admitted notes themselves are kept sorted.
    let mut sorted = raag.notes().to_vec();
    sorted.sort();
    assert_eq!(raag.notes(), sorted.as_slice());
}
