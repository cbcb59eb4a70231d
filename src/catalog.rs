//! # Scale and Chord Catalog
//!
//! Every scale, mode and chord the engine knows, grouped into categories.
//! All tables are `'static` and never change at runtime.
//!
//! ## Layout
//! ```text
//! CATEGORIES
//!   ├── fretboardNotes      (scale, pseudo-scales that ignore the key)
//!   ├── diatonicModes ... bebopScales   (scale)
//!   └── triads ... alterations          (chord)
//! ```
//!
//! Intervals are semitones above the root and may run past the octave
//! (`14` is a 9th). They are kept in formula order; duplicates are allowed.

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::note::PitchClass;

/// Category holding the key-independent "Fretboard Notes" items.
pub const PSEUDO_CATEGORY: &str = "fretboardNotes";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    Scale,
    Chord,
}

/// A scale, mode or chord formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Definition {
    pub id: &'static str,
    pub name: &'static str,
    pub intervals: &'static [u8],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefer_sharps: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<&'static str>,
    #[serde(rename = "type")]
    pub kind: Kind,
}

impl Definition {
    const fn scale(id: &'static str, name: &'static str, intervals: &'static [u8], prefer_sharps: bool) -> Self {
        Self {
            id,
            name,
            intervals,
            prefer_sharps: Some(prefer_sharps),
            symbol: None,
            kind: Kind::Scale,
        }
    }

    const fn chord(id: &'static str, name: &'static str, intervals: &'static [u8], symbol: &'static str) -> Self {
        Self {
            id,
            name,
            intervals,
            prefer_sharps: None,
            symbol: Some(symbol),
            kind: Kind::Chord,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: Kind,
    pub items: &'static [Definition],
}

// Hand-written so the derived `itemLabel` travels with the category.
impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut out = serializer.serialize_struct("Category", 5)?;
        out.serialize_field("id", self.id)?;
        out.serialize_field("name", self.name)?;
        out.serialize_field("type", &self.kind)?;
        out.serialize_field("itemLabel", self.item_label())?;
        out.serialize_field("items", self.items)?;
        out.end()
    }
}

impl Category {
    /// Label shown next to the item picker.
    pub fn item_label(&self) -> &'static str {
        match self.kind {
            Kind::Scale => "Scale/Mode",
            Kind::Chord => "Chord",
        }
    }

    pub fn item(&self, id: &str) -> Option<&'static Definition> {
        self.items.iter().find(|d| d.id == id)
    }

    pub fn first_item(&self) -> Option<&'static Definition> {
        self.items.first()
    }
}

/// The "Fretboard Notes" selections. They show a fixed note collection
/// regardless of the selected key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PseudoScale {
    AllNotesSharp,
    AllNotesFlat,
    NaturalNotes,
    Sharps,
    Flats,
}

impl PseudoScale {
    /// Recognize a pseudo-scale from a category/item pair.
    pub fn from_selection(category: &str, item: &str) -> Option<Self> {
        if category != PSEUDO_CATEGORY {
            return None;
        }
        match item {
            "allNotesSharp" => Some(PseudoScale::AllNotesSharp),
            "allNotesFlat" => Some(PseudoScale::AllNotesFlat),
            "naturalNotes" => Some(PseudoScale::NaturalNotes),
            "sharps" => Some(PseudoScale::Sharps),
            "flats" => Some(PseudoScale::Flats),
            _ => None,
        }
    }

    pub fn notes(self) -> &'static [PitchClass] {
        match self {
            PseudoScale::AllNotesSharp | PseudoScale::AllNotesFlat => {
                &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]
            }
            PseudoScale::NaturalNotes => &[0, 2, 4, 5, 7, 9, 11],
            PseudoScale::Sharps | PseudoScale::Flats => &[1, 3, 6, 8, 10],
        }
    }

    /// Forced spelling, if the selection names one.
    pub fn forced_sharps(self) -> Option<bool> {
        match self {
            PseudoScale::AllNotesSharp | PseudoScale::Sharps => Some(true),
            PseudoScale::AllNotesFlat | PseudoScale::Flats => Some(false),
            PseudoScale::NaturalNotes => None,
        }
    }

    pub fn formula(self) -> &'static str {
        match self {
            PseudoScale::AllNotesSharp | PseudoScale::AllNotesFlat => {
                "All 12 notes of the chromatic scale"
            }
            PseudoScale::NaturalNotes => "C - D - E - F - G - A - B",
            PseudoScale::Sharps => "C# - D# - F# - G# - A#",
            PseudoScale::Flats => "Db - Eb - Gb - Ab - Bb",
        }
    }
}

pub static CATEGORIES: &[Category] = &[
    Category {
        id: PSEUDO_CATEGORY,
        name: "Fretboard Notes",
        kind: Kind::Scale,
        items: &[
            Definition::scale("allNotesSharp", "All Notes (Sharps)", &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11], true),
            Definition::scale("allNotesFlat", "All Notes (Flats)", &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11], false),
            Definition::scale("naturalNotes", "Natural Notes (No Sharps/Flats)", &[0, 2, 4, 5, 7, 9, 11], true),
            Definition::scale("sharps", "Sharp Notes", &[1, 3, 6, 8, 10], true),
            Definition::scale("flats", "Flat Notes", &[1, 3, 6, 8, 10], false),
        ],
    },
    Category {
        id: "diatonicModes",
        name: "Diatonic Modes",
        kind: Kind::Scale,
        items: &[
            Definition::scale("ionian", "Ionian (Major)", &[0, 2, 4, 5, 7, 9, 11], true),
            Definition::scale("dorian", "Dorian", &[0, 2, 3, 5, 7, 9, 10], false),
            Definition::scale("phrygian", "Phrygian", &[0, 1, 3, 5, 7, 8, 10], false),
            Definition::scale("lydian", "Lydian", &[0, 2, 4, 6, 7, 9, 11], true),
            Definition::scale("mixolydian", "Mixolydian", &[0, 2, 4, 5, 7, 9, 10], true),
            Definition::scale("aeolian", "Aeolian (Natural Minor)", &[0, 2, 3, 5, 7, 8, 10], false),
            Definition::scale("locrian", "Locrian", &[0, 1, 3, 5, 6, 8, 10], false),
        ],
    },
    Category {
        id: "pentatonicScales",
        name: "Pentatonic Scales",
        kind: Kind::Scale,
        items: &[
            Definition::scale("majorPentatonic", "Major Pentatonic", &[0, 2, 4, 7, 9], true),
            Definition::scale("minorPentatonic", "Minor Pentatonic", &[0, 3, 5, 7, 10], false),
        ],
    },
    Category {
        id: "bluesScales",
        name: "Blues Scales",
        kind: Kind::Scale,
        items: &[
            Definition::scale("majorBlues", "Major Blues", &[0, 2, 3, 4, 7, 9], true),
            Definition::scale("minorBlues", "Minor Blues", &[0, 3, 5, 6, 7, 10], false),
        ],
    },
    Category {
        id: "otherScales",
        name: "Other Scales",
        kind: Kind::Scale,
        items: &[
            Definition::scale("harmonicMinor", "Harmonic Minor", &[0, 2, 3, 5, 7, 8, 11], false),
            Definition::scale("melodicMinor", "Melodic Minor", &[0, 2, 3, 5, 7, 9, 11], false),
            Definition::scale("wholeTone", "Whole Tone", &[0, 2, 4, 6, 8, 10], true),
            Definition::scale("diminished", "Diminished (H-W)", &[0, 1, 3, 4, 6, 7, 9, 10], false),
            Definition::scale("augmented", "Augmented", &[0, 3, 4, 7, 8, 11], true),
        ],
    },
    Category {
        id: "exoticScales",
        name: "Exotic & World Scales",
        kind: Kind::Scale,
        items: &[
            Definition::scale("hungarianMinor", "Hungarian Minor", &[0, 2, 3, 6, 7, 8, 11], false),
            Definition::scale("hungarianMajor", "Hungarian Major", &[0, 3, 4, 6, 7, 9, 10], true),
            Definition::scale("doubleHarmonic", "Double Harmonic (Byzantine)", &[0, 1, 4, 5, 7, 8, 11], false),
            Definition::scale("phrygianDominant", "Phrygian Dominant", &[0, 1, 4, 5, 7, 8, 10], false),
            Definition::scale("neapolitanMinor", "Neapolitan Minor", &[0, 1, 3, 5, 7, 8, 11], false),
            Definition::scale("neapolitanMajor", "Neapolitan Major", &[0, 1, 3, 5, 7, 9, 11], false),
            Definition::scale("enigmatic", "Enigmatic", &[0, 1, 4, 6, 8, 10, 11], true),
            Definition::scale("persian", "Persian", &[0, 1, 4, 5, 6, 8, 11], false),
            Definition::scale("arabic", "Arabic (Major Locrian)", &[0, 2, 4, 5, 6, 8, 10], false),
            Definition::scale("japanese", "Japanese (Hirajoshi)", &[0, 2, 3, 7, 8], false),
            Definition::scale("inSen", "In-Sen", &[0, 1, 5, 7, 10], false),
            Definition::scale("iwato", "Iwato", &[0, 1, 5, 6, 10], false),
        ],
    },
    Category {
        id: "melodicMinorModes",
        name: "Melodic Minor Modes",
        kind: Kind::Scale,
        items: &[
            Definition::scale("melodicMinorMode1", "Melodic Minor", &[0, 2, 3, 5, 7, 9, 11], false),
            Definition::scale("dorianB2", "Dorian ♭2 (Phrygian #6)", &[0, 1, 3, 5, 7, 9, 10], false),
            Definition::scale("lydianAugmented", "Lydian Augmented", &[0, 2, 4, 6, 8, 9, 11], true),
            Definition::scale("lydianDominant", "Lydian Dominant", &[0, 2, 4, 6, 7, 9, 10], true),
            Definition::scale("mixolydianB6", "Mixolydian ♭6", &[0, 2, 4, 5, 7, 8, 10], true),
            Definition::scale("locrianNat2", "Locrian ♮2 (Half-Diminished)", &[0, 2, 3, 5, 6, 8, 10], false),
            Definition::scale("superLocrian", "Super Locrian (Altered)", &[0, 1, 3, 4, 6, 8, 10], false),
        ],
    },
    Category {
        id: "harmonicMinorModes",
        name: "Harmonic Minor Modes",
        kind: Kind::Scale,
        items: &[
            Definition::scale("harmonicMinorMode1", "Harmonic Minor", &[0, 2, 3, 5, 7, 8, 11], false),
            Definition::scale("locrianNat6", "Locrian ♮6", &[0, 1, 3, 5, 6, 9, 10], false),
            Definition::scale("ionianAugmented", "Ionian Augmented", &[0, 2, 4, 5, 8, 9, 11], true),
            Definition::scale("dorianSharp4", "Dorian #4 (Romanian)", &[0, 2, 3, 6, 7, 9, 10], false),
            Definition::scale("phrygianDominantMode", "Phrygian Dominant", &[0, 1, 4, 5, 7, 8, 10], false),
            Definition::scale("lydianSharp2", "Lydian #2", &[0, 3, 4, 6, 7, 9, 11], true),
            Definition::scale("ultraLocrian", "Ultra Locrian", &[0, 1, 3, 4, 6, 8, 9], false),
        ],
    },
    Category {
        id: "bebopScales",
        name: "Bebop Scales",
        kind: Kind::Scale,
        items: &[
            Definition::scale("bebopDominant", "Bebop Dominant", &[0, 2, 4, 5, 7, 9, 10, 11], true),
            Definition::scale("bebopMajor", "Bebop Major", &[0, 2, 4, 5, 7, 8, 9, 11], true),
            Definition::scale("bebopMinor", "Bebop Minor", &[0, 2, 3, 5, 7, 8, 9, 10], false),
            Definition::scale("bebopDorian", "Bebop Dorian", &[0, 2, 3, 4, 5, 7, 9, 10], false),
        ],
    },
    Category {
        id: "triads",
        name: "Triads",
        kind: Kind::Chord,
        items: &[
            Definition::chord("major", "Major", &[0, 4, 7], ""),
            Definition::chord("minor", "Minor", &[0, 3, 7], "m"),
            Definition::chord("diminished", "Diminished", &[0, 3, 6], "dim"),
            Definition::chord("augmented", "Augmented", &[0, 4, 8], "aug"),
            Definition::chord("sus2", "Suspended 2nd", &[0, 2, 7], "sus2"),
            Definition::chord("sus4", "Suspended 4th", &[0, 5, 7], "sus4"),
        ],
    },
    Category {
        id: "seventh",
        name: "Seventh Chords",
        kind: Kind::Chord,
        items: &[
            Definition::chord("major7", "Major 7th", &[0, 4, 7, 11], "maj7"),
            Definition::chord("dominant7", "Dominant 7th", &[0, 4, 7, 10], "7"),
            Definition::chord("minor7", "Minor 7th", &[0, 3, 7, 10], "m7"),
            Definition::chord("minorMajor7", "Minor Major 7th", &[0, 3, 7, 11], "mMaj7"),
            Definition::chord("diminished7", "Diminished 7th", &[0, 3, 6, 9], "dim7"),
            Definition::chord("halfDiminished7", "Half Diminished 7th", &[0, 3, 6, 10], "m7b5"),
            Definition::chord("augmented7", "Augmented 7th", &[0, 4, 8, 10], "7#5"),
            Definition::chord("augmentedMajor7", "Augmented Major 7th", &[0, 4, 8, 11], "maj7#5"),
        ],
    },
    Category {
        id: "extended",
        name: "Extended Chords",
        kind: Kind::Chord,
        items: &[
            Definition::chord("major9", "Major 9th", &[0, 4, 7, 11, 14], "maj9"),
            Definition::chord("dominant9", "Dominant 9th", &[0, 4, 7, 10, 14], "9"),
            Definition::chord("minor9", "Minor 9th", &[0, 3, 7, 10, 14], "m9"),
            Definition::chord("major11", "Major 11th", &[0, 4, 7, 11, 14, 17], "maj11"),
            Definition::chord("dominant11", "Dominant 11th", &[0, 4, 7, 10, 14, 17], "11"),
            Definition::chord("minor11", "Minor 11th", &[0, 3, 7, 10, 14, 17], "m11"),
            Definition::chord("major13", "Major 13th", &[0, 4, 7, 11, 14, 17, 21], "maj13"),
            Definition::chord("dominant13", "Dominant 13th", &[0, 4, 7, 10, 14, 17, 21], "13"),
            Definition::chord("minor13", "Minor 13th", &[0, 3, 7, 10, 14, 17, 21], "m13"),
        ],
    },
    Category {
        id: "alterations",
        name: "Altered Chords",
        kind: Kind::Chord,
        items: &[
            Definition::chord("7b9", "7th flat 9", &[0, 4, 7, 10, 13], "7b9"),
            Definition::chord("7sharp9", "7th sharp 9", &[0, 4, 7, 10, 15], "7#9"),
            Definition::chord("7b5", "7th flat 5", &[0, 4, 6, 10], "7b5"),
            Definition::chord("7sharp5", "7th sharp 5", &[0, 4, 8, 10], "7#5"),
            Definition::chord("add9", "Add 9", &[0, 4, 7, 14], "add9"),
            Definition::chord("minor_add9", "Minor Add 9", &[0, 3, 7, 14], "madd9"),
            Definition::chord("6", "6th", &[0, 4, 7, 9], "6"),
            Definition::chord("minor6", "Minor 6th", &[0, 3, 7, 9], "m6"),
        ],
    },
];

pub fn category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// Look up an item within one category. Item ids are only unique per
/// category (`diminished` is both a scale and a triad).
pub fn definition(category_id: &str, item_id: &str) -> Option<&'static Definition> {
    category(category_id)?.item(item_id)
}

/// Every definition paired with its category, in catalog order.
pub fn all_definitions() -> impl Iterator<Item = (&'static Category, &'static Definition)> {
    CATEGORIES
        .iter()
        .flat_map(|c| c.items.iter().map(move |d| (c, d)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_lookup() {
        let modes = category("diatonicModes").unwrap();
        assert_eq!(modes.kind, Kind::Scale);
        assert_eq!(modes.item_label(), "Scale/Mode");
        assert_eq!(modes.first_item().unwrap().id, "ionian");

        let triads = category("triads").unwrap();
        assert_eq!(triads.item_label(), "Chord");
        assert!(category("nonsense").is_none());
    }

    #[test]
    fn test_ids_unique_within_category() {
        for c in CATEGORIES {
            for (i, d) in c.items.iter().enumerate() {
                assert!(
                    c.items[i + 1..].iter().all(|other| other.id != d.id),
                    "duplicate id {} in {}",
                    d.id,
                    c.id
                );
            }
        }
    }

    #[test]
    fn test_scales_before_chords() {
        let first_chord = CATEGORIES.iter().position(|c| c.kind == Kind::Chord).unwrap();
        assert!(CATEGORIES[first_chord..].iter().all(|c| c.kind == Kind::Chord));
    }

    #[test]
    fn test_chords_carry_symbols() {
        for (c, d) in all_definitions() {
            match c.kind {
                Kind::Chord => assert!(d.symbol.is_some() && d.prefer_sharps.is_none()),
                Kind::Scale => assert!(d.symbol.is_none() && d.prefer_sharps.is_some()),
            }
            assert_eq!(c.kind, d.kind);
        }
    }

    #[test]
    fn test_definition_shared_id_resolves_by_category() {
        let scale = definition("otherScales", "diminished").unwrap();
        let chord = definition("triads", "diminished").unwrap();
        assert_eq!(scale.intervals.len(), 8);
        assert_eq!(chord.intervals, &[0, 3, 6]);
    }

    #[test]
    fn test_category_json_carries_item_label() {
        let json = serde_json::to_value(category("seventh").unwrap()).unwrap();
        assert_eq!(json["itemLabel"], "Chord");
        assert_eq!(json["type"], "chord");
        assert_eq!(json["items"][0]["id"], "major7");

        let json = serde_json::to_value(category("diatonicModes").unwrap()).unwrap();
        assert_eq!(json["itemLabel"], "Scale/Mode");
    }

    #[test]
    fn test_pseudo_scale_recognition() {
        assert_eq!(
            PseudoScale::from_selection(PSEUDO_CATEGORY, "flats"),
            Some(PseudoScale::Flats)
        );
        assert_eq!(PseudoScale::from_selection("diatonicModes", "flats"), None);
        assert_eq!(PseudoScale::from_selection(PSEUDO_CATEGORY, "ionian"), None);
        assert_eq!(PseudoScale::NaturalNotes.forced_sharps(), None);
        assert_eq!(PseudoScale::Sharps.formula(), "C# - D# - F# - G# - A#");
    }
}
