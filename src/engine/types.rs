//! Output cell type for fretboard and keyboard layouts

use serde::Serialize;

use crate::note::{self, PitchClass};

/// One fret of one string, or one key of a keyboard.
///
/// # Fields
/// - `fret`: fret number (0 = open string), or key index on a keyboard
/// - `note_value`: pitch class, `0 = C`
/// - `note_name`: spelling under the notation in effect when generated
/// - `octave`: scientific octave number (`C4` = middle C)
/// - `degree`: scale-degree label relative to the selected key
/// - `is_root`: the note is the selected key
/// - `is_in_set`: the note belongs to the selected scale or chord
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FretNote {
    pub fret: usize,
    pub note_value: PitchClass,
    pub note_name: String,
    pub octave: u8,
    pub degree: String,
    pub is_root: bool,
    pub is_in_set: bool,
}

impl FretNote {
    /// Black key on a piano.
    pub fn is_black_key(&self) -> bool {
        note::is_accidental(self.note_value)
    }
}
