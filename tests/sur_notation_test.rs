// Sur notation parsing and rendering against the standard sargam table,
// exercised through the public API.

use saaj::{Note, ParseError, PitchTable};

#[test]
fn test_known_notations() {
    let table = PitchTable::standard();
    let cases = [
        (0, "s"),
        (1, "r."),
        (4, "g"),
        (6, "m*"),
        (7, "p"),
        (11, "n"),
        (12, "s+"),
        (16, "g+"),
        (-1, "n-"),
        (-12, "s-"),
        (-14, "n.--"),
        (26, "r++"),
    ];
    for (value, text) in cases {
        let note = Note::from_value(value);
        assert_eq!(note.notation(table), text, "rendering {}", value);
        assert_eq!(
            Note::from_notation(text, table).unwrap(),
            note,
            "parsing {}",
            text
        );
    }
}

#[test]
fn test_every_sur_round_trips_across_saptaks() {
    let table = PitchTable::standard();
    for value in -36..=36 {
        let note = Note::from_value(value);
        let text = note.notation(table);
        let parsed = Note::from_notation(&text, table).unwrap();
        assert_eq!(parsed, note, "'{}' should parse back to {}", text, value);
        assert_eq!(parsed.pitch_class(), note.pitch_class());
        assert_eq!(parsed.saptak(), note.saptak());
        // pitch class and saptak decompose the value exactly.
        assert_eq!(parsed.pitch_class() as i32 + 12 * parsed.saptak(), value);
    }
}

#[test]
fn test_rejects_malformed_notation() {
    let table = PitchTable::standard();

    assert_eq!(Note::from_notation("", table), Err(ParseError::Empty));
    assert!(matches!(
        Note::from_notation("s+-", table),
        Err(ParseError::MixedSaptakMarkers(_))
    ));
    assert!(matches!(
        Note::from_notation("x", table),
        Err(ParseError::UnknownBaseSur { .. })
    ));
    // Markers belong after the symbol, not before or inside it.
    assert!(Note::from_notation("+s", table).is_err());
    assert!(Note::from_notation("++", table).is_err());
}

#[test]
fn test_parsed_notes_interoperate_with_value_arithmetic() {
    let table = PitchTable::standard();
    let ga_upper = Note::from_notation("g+", table).unwrap();

    assert_eq!(ga_upper + 3, Note::from_notation("p+", table).unwrap());
    assert_eq!(ga_upper - 12, Note::from_notation("g", table).unwrap());
    assert_eq!(ga_upper.shift_saptak(-2), Note::from_notation("g-", table).unwrap());
    assert_eq!(ga_upper.base_note().notation(table), "g");
    assert_eq!(ga_upper.distance(Note::from_value(4)), 12);
}
