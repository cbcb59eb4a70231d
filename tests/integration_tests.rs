//! Integration tests for fretlab
//!
//! Exercises the public API end to end: catalog, tunings, grids and
//! formatting.

use fretlab::catalog::{all_definitions, Kind, PSEUDO_CATEGORY};
use fretlab::note::{note_index, note_name, Notation};
use fretlab::tuning::{InstrumentKind, INSTRUMENTS, MAX_FRET};
use fretlab::{engine_from_preset, TheoryEngine};

#[test]
fn test_every_definition_in_c_is_its_reduced_intervals() {
    for (category, definition) in all_definitions() {
        if category.id == PSEUDO_CATEGORY {
            continue;
        }
        let mut engine = TheoryEngine::new();
        engine.set_key("C");
        engine.set_category(category.id);
        engine.set_item(definition.id);

        let expected: Vec<u8> = definition.intervals.iter().map(|i| i % 12).collect();
        assert_eq!(
            engine.selected_note_set(),
            expected,
            "{}/{}",
            category.id,
            definition.id
        );
    }
}

#[test]
fn test_every_fretted_tuning_grid_shape_and_open_strings() {
    for instrument in INSTRUMENTS.iter().filter(|i| i.kind == InstrumentKind::Fretted) {
        for tuning in instrument.tunings {
            for layout in tuning.layouts {
                let mut engine = TheoryEngine::new();
                engine.set_instrument(instrument.id);
                engine.set_tuning(tuning.id);
                engine.set_string_count(layout.count());

                let board = engine.generate_fretboard();
                let open = layout.open_strings();
                assert_eq!(board.len(), layout.count() as usize, "{}", tuning.id);
                for (string, open) in board.iter().zip(&open) {
                    assert_eq!(string.len(), MAX_FRET + 1);
                    assert_eq!(string[0].note_value, open.note);
                    assert_eq!(string[0].octave, open.octave);
                }
            }
        }
    }
}

#[test]
fn test_every_keyboard_layout_matches_key_count() {
    let piano = INSTRUMENTS.iter().find(|i| i.id == "piano").unwrap();
    for tuning in piano.tunings {
        let mut engine = TheoryEngine::new();
        engine.set_instrument("piano");
        engine.set_tuning(tuning.id);
        let count = tuning.layouts[0].count();
        engine.set_string_count(count);

        let keys = engine.generate_keyboard();
        assert_eq!(keys.len(), count as usize);
        let open = tuning.layouts[0].open_strings();
        assert_eq!((keys[0].note_value, keys[0].octave), (open[0].note, open[0].octave));
    }
}

#[test]
fn test_is_root_exact_for_every_key() {
    for (index, key) in Notation::Sharps.chromatic().iter().enumerate() {
        let mut engine = TheoryEngine::new();
        engine.set_instrument("guitar");
        engine.set_key(key);
        for cell in engine.generate_fretboard().iter().flatten() {
            assert_eq!(cell.is_root, cell.note_value as usize == index);
        }
    }
}

#[test]
fn test_instrument_change_defaults() {
    for instrument in INSTRUMENTS {
        let mut engine = TheoryEngine::new();
        engine.set_tuning("somethingElse");
        engine.set_string_count(3);
        engine.set_instrument(instrument.id);

        let state = engine.state();
        if instrument.id == "piano" {
            assert_eq!(state.tuning, "standard61");
            assert_eq!(state.string_count, 61);
        } else {
            assert_eq!(state.tuning, instrument.default_tuning);
            assert_eq!(state.string_count, instrument.supported_counts[0]);
        }
    }
}

#[test]
fn test_should_use_sharps_matrix() {
    let cases = [
        ("F", "diatonicModes", "ionian", false),
        ("F#", "diatonicModes", "ionian", true),
        ("C", "diatonicModes", "aeolian", false),
        ("C", "diatonicModes", "ionian", true),
        ("Db", "triads", "major", false),
        ("C#", "fretboardNotes", "flats", false),
        ("Gb", "fretboardNotes", "allNotesSharp", true),
        ("G", "triads", "minor", true),
    ];
    for (key, category, item, expected) in cases {
        let mut engine = TheoryEngine::new();
        engine.set_key(key);
        engine.set_category(category);
        engine.set_item(item);
        assert_eq!(engine.should_use_sharps(), expected, "{} {} {}", key, category, item);
    }
}

#[test]
fn test_note_name_round_trip() {
    for notation in [Notation::Sharps, Notation::Flats, Notation::Combined] {
        for name in notation.chromatic() {
            assert_eq!(note_name(note_index(name).unwrap(), notation), *name);
        }
    }
}

#[test]
fn test_a_dorian_end_to_end() {
    let mut engine = TheoryEngine::new();
    engine.set_key("A");
    engine.set_category("diatonicModes");
    engine.set_item("dorian");

    assert_eq!(engine.selected_note_set(), vec![9, 11, 0, 2, 4, 6, 7]);
    assert_eq!(engine.formula_as_degree_numbers(), "1 - 2 - b3 - 4 - 5 - 6 - b7");
    assert_eq!(engine.display_name(), "Dorian");
}

#[test]
fn test_chord_display_names() {
    for (category, definition) in all_definitions().filter(|(c, _)| c.kind == Kind::Chord) {
        let symbol = definition.symbol.unwrap();
        let mut engine = TheoryEngine::new();
        engine.set_key("G");
        engine.set_category(category.id);
        engine.set_item(definition.id);
        assert_eq!(engine.display_name(), format!("G{}", symbol));
    }
}

#[test]
fn test_preset_drives_engine() {
    let engine = engine_from_preset(
        r#"
instrument: guitar
tuning: openGGuitar
category: pentatonicScales
item: minorPentatonic
key: E
"#,
    )
    .unwrap();

    let board = engine.generate_fretboard();
    assert_eq!(board.len(), 6);
    // Open G, highest string first: D B G D G D
    assert_eq!(board[0][0].note_name, "D");
    assert!(board[0][0].is_in_set); // D is the b7 of E minor pentatonic
    assert_eq!(engine.formula_as_note_names(), "E - G - A - B - D");
}
