//! # Pitch Classes and Spelling
//!
//! Twelve-tone equal temperament with `0 = C`. A pitch class can be spelled
//! three ways, each backed by a fixed chromatic table:
//!
//! | Index | Sharps | Flats | Combined |
//! |-------|--------|-------|----------|
//! | 1     | `C#`   | `Db`  | `C#/Db`  |
//! | 6     | `F#`   | `Gb`  | `F#/Gb`  |
//!
//! Scale degrees are written in Nashville style: `1`, `b3`, `#4/b5`, ...

use serde::{Deserialize, Serialize};

/// Pitch class in `0..12`, `0 = C`.
pub type PitchClass = u8;

pub const SEMITONES: u8 = 12;

pub const CHROMATIC_COMBINED: [&str; 12] = [
    "C", "C#/Db", "D", "D#/Eb", "E", "F", "F#/Gb", "G", "G#/Ab", "A", "A#/Bb", "B",
];

pub const CHROMATIC_SHARPS: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

pub const CHROMATIC_FLATS: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

/// Degree label for each semitone distance from the root.
pub const DEGREE_LABELS: [&str; 12] = [
    "1", "b2", "2", "b3", "3", "4", "#4/b5", "5", "b6", "6", "b7", "7",
];

/// Keys conventionally written with flats.
pub const FLAT_KEYS: [&str; 7] = ["F", "Bb", "Eb", "Ab", "Db", "Gb", "Cb"];

/// Which chromatic table note names are drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Notation {
    Sharps,
    Flats,
    Combined,
}

impl Notation {
    pub fn from_sharps(use_sharps: bool) -> Self {
        if use_sharps {
            Notation::Sharps
        } else {
            Notation::Flats
        }
    }

    pub fn chromatic(self) -> &'static [&'static str; 12] {
        match self {
            Notation::Sharps => &CHROMATIC_SHARPS,
            Notation::Flats => &CHROMATIC_FLATS,
            Notation::Combined => &CHROMATIC_COMBINED,
        }
    }
}

/// Resolve a note name to its pitch class.
///
/// Names containing `/` are looked up in the combined table only; plain
/// names are tried against the sharp table first, then the flat table.
/// Returns `None` when no table has the name.
///
/// # Examples
/// ```
/// use fretlab::note::note_index;
///
/// assert_eq!(note_index("C#/Db"), Some(1));
/// assert_eq!(note_index("Bb"), Some(10));
/// assert_eq!(note_index("H"), None);
/// ```
pub fn note_index(name: &str) -> Option<PitchClass> {
    let position = |table: &[&str; 12]| table.iter().position(|n| *n == name);

    let index = if name.contains('/') {
        position(&CHROMATIC_COMBINED)
    } else {
        position(&CHROMATIC_SHARPS).or_else(|| position(&CHROMATIC_FLATS))
    };
    index.map(|i| i as PitchClass)
}

/// Spell a pitch class. Values above 11 wrap.
pub fn note_name(index: PitchClass, notation: Notation) -> &'static str {
    notation.chromatic()[(index % SEMITONES) as usize]
}

/// Pitch class reached by moving `interval` semitones up from `root`.
pub fn transpose(root: PitchClass, interval: u8) -> PitchClass {
    ((root as u16 + interval as u16) % SEMITONES as u16) as PitchClass
}

/// Degree label of `note` relative to `key`, e.g. `b7` for Bb in C.
pub fn degree_label(note: PitchClass, key: PitchClass) -> &'static str {
    let distance = (note % SEMITONES + SEMITONES - key % SEMITONES) % SEMITONES;
    DEGREE_LABELS[distance as usize]
}

/// Degree label of a formula interval.
///
/// Simple intervals map straight onto [`DEGREE_LABELS`]. Compound intervals
/// used by extended chords are written as extensions (`14` is `9`, `17` is
/// `11`); anything else above the octave falls back to its reduced label.
pub fn interval_label(interval: u8) -> &'static str {
    match interval {
        0..=11 => DEGREE_LABELS[interval as usize],
        13 => "b9",
        14 => "9",
        15 => "#9",
        17 => "11",
        18 => "#11",
        20 => "b13",
        21 => "13",
        _ => DEGREE_LABELS[(interval % SEMITONES) as usize],
    }
}

pub fn is_flat_key(key: &str) -> bool {
    FLAT_KEYS.contains(&key)
}

/// Accidental-bearing pitch classes, i.e. the black keys of a piano.
pub fn is_accidental(note: PitchClass) -> bool {
    matches!(note % SEMITONES, 1 | 3 | 6 | 8 | 10)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_index_all_spellings() {
        assert_eq!(note_index("C"), Some(0));
        assert_eq!(note_index("C#"), Some(1));
        assert_eq!(note_index("Db"), Some(1));
        assert_eq!(note_index("C#/Db"), Some(1));
        assert_eq!(note_index("A#/Bb"), Some(10));
        assert_eq!(note_index("B"), Some(11));
    }

    #[test]
    fn test_note_index_unknown() {
        assert_eq!(note_index(""), None);
        assert_eq!(note_index("Cb"), None);
        assert_eq!(note_index("E#"), None);
        // Slash names only resolve in the combined table
        assert_eq!(note_index("Db/C#"), None);
    }

    #[test]
    fn test_round_trip_every_notation() {
        for notation in [Notation::Sharps, Notation::Flats, Notation::Combined] {
            for name in notation.chromatic() {
                let index = note_index(name).unwrap();
                assert_eq!(note_name(index, notation), *name);
            }
        }
    }

    #[test]
    fn test_transpose_wraps() {
        assert_eq!(transpose(9, 3), 0); // A + m3 = C
        assert_eq!(transpose(7, 14), 9); // G + 9th = A
        assert_eq!(transpose(11, 21), 8);
    }

    #[test]
    fn test_degree_labels() {
        assert_eq!(degree_label(0, 0), "1");
        assert_eq!(degree_label(10, 0), "b7");
        assert_eq!(degree_label(0, 9), "b3"); // C in A
        assert_eq!(degree_label(6, 0), "#4/b5");
    }

    #[test]
    fn test_interval_labels() {
        assert_eq!(interval_label(7), "5");
        assert_eq!(interval_label(13), "b9");
        assert_eq!(interval_label(14), "9");
        assert_eq!(interval_label(17), "11");
        assert_eq!(interval_label(21), "13");
        assert_eq!(interval_label(12), "1");
    }

    #[test]
    fn test_flat_keys_and_accidentals() {
        assert!(is_flat_key("Bb"));
        assert!(is_flat_key("F"));
        assert!(!is_flat_key("F#"));
        assert!(!is_flat_key("C"));

        let black: Vec<u8> = (0..12).filter(|n| is_accidental(*n)).collect();
        assert_eq!(black, vec![1, 3, 6, 8, 10]);
    }
}
