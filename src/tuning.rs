//! # Instruments and Tunings
//!
//! Each instrument owns a table of tunings. A tuning maps a string (or key)
//! count to the ordered open notes of that layout, highest string first for
//! fretted instruments, lowest key first for keyboards.
//!
//! Keyboard layouts are not spelled out key by key; they are described by
//! their lowest key and expanded chromatically on demand.

use serde::Serialize;

use crate::note::{self, Notation, PitchClass, SEMITONES};

/// Frets per string, open string included as fret 0.
pub const MAX_FRET: usize = 15;

/// Open pitch of one string or key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OpenString {
    pub note: PitchClass,
    pub octave: u8,
    pub label: &'static str,
}

const fn s(note: PitchClass, octave: u8, label: &'static str) -> OpenString {
    OpenString { note, octave, label }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// Explicit open strings.
    Strings(&'static [OpenString]),
    /// `count` consecutive semitones starting at `start_note`/`start_octave`.
    Keys {
        count: u16,
        start_note: PitchClass,
        start_octave: u8,
    },
}

impl Layout {
    pub fn count(&self) -> u16 {
        match self {
            Layout::Strings(strings) => strings.len() as u16,
            Layout::Keys { count, .. } => *count,
        }
    }

    /// Open notes in layout order.
    pub fn open_strings(&self) -> Vec<OpenString> {
        match *self {
            Layout::Strings(strings) => strings.to_vec(),
            Layout::Keys {
                count,
                start_note,
                start_octave,
            } => (0..count as u32)
                .map(|i| {
                    let absolute = start_note as u32 + i;
                    let note = (absolute % SEMITONES as u32) as PitchClass;
                    OpenString {
                        note,
                        octave: start_octave + (absolute / SEMITONES as u32) as u8,
                        label: note::note_name(note, Notation::Sharps),
                    }
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Tuning {
    pub id: &'static str,
    pub name: &'static str,
    pub layouts: &'static [Layout],
}

impl Tuning {
    pub fn layout(&self, count: u16) -> Option<&'static Layout> {
        self.layouts.iter().find(|l| l.count() == count)
    }

    /// String or key counts this tuning has layouts for, in table order.
    pub fn counts(&self) -> impl Iterator<Item = u16> + '_ {
        self.layouts.iter().map(Layout::count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InstrumentKind {
    Fretted,
    Keyboard,
}

#[derive(Debug, Clone, Copy)]
pub struct Instrument {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: InstrumentKind,
    pub default_tuning: &'static str,
    pub supported_counts: &'static [u16],
    /// Tuning and count applied on selection when they differ from the
    /// declared default and first supported count.
    pub initial: Option<(&'static str, u16)>,
    pub tunings: &'static [Tuning],
}

impl Instrument {
    pub fn tuning(&self, id: &str) -> Option<&'static Tuning> {
        self.tunings.iter().find(|t| t.id == id)
    }

    pub fn supports(&self, count: u16) -> bool {
        self.supported_counts.contains(&count)
    }

    /// Tuning id and string/key count to land on when this instrument
    /// becomes the selection.
    pub fn initial_selection(&self) -> (&'static str, u16) {
        self.initial.unwrap_or((
            self.default_tuning,
            self.supported_counts.first().copied().unwrap_or(0),
        ))
    }
}

static GUITAR_TUNINGS: &[Tuning] = &[
    Tuning {
        id: "standardGuitar",
        name: "Standard",
        layouts: &[
            Layout::Strings(&[s(4, 4, "E"), s(11, 3, "B"), s(7, 3, "G"), s(2, 3, "D"), s(9, 2, "A"), s(4, 2, "E")]),
            Layout::Strings(&[s(4, 4, "E"), s(11, 3, "B"), s(7, 3, "G"), s(2, 3, "D"), s(9, 2, "A"), s(4, 2, "E"), s(11, 1, "B")]),
            Layout::Strings(&[s(4, 4, "E"), s(11, 3, "B"), s(7, 3, "G"), s(2, 3, "D"), s(9, 2, "A"), s(4, 2, "E"), s(11, 1, "B"), s(6, 1, "F#")]),
        ],
    },
    Tuning {
        id: "dropDGuitar",
        name: "Drop D",
        layouts: &[
            Layout::Strings(&[s(4, 4, "E"), s(11, 3, "B"), s(7, 3, "G"), s(2, 3, "D"), s(9, 2, "A"), s(2, 2, "D")]),
            Layout::Strings(&[s(4, 4, "E"), s(11, 3, "B"), s(7, 3, "G"), s(2, 3, "D"), s(9, 2, "A"), s(2, 2, "D"), s(9, 1, "A")]),
            Layout::Strings(&[s(4, 4, "E"), s(11, 3, "B"), s(7, 3, "G"), s(2, 3, "D"), s(9, 2, "A"), s(2, 2, "D"), s(9, 1, "A"), s(4, 1, "E")]),
        ],
    },
    Tuning {
        id: "halfStepGuitar",
        name: "Half Step Down",
        layouts: &[
            Layout::Strings(&[s(3, 4, "Eb"), s(10, 3, "Bb"), s(6, 3, "Gb"), s(1, 3, "Db"), s(8, 2, "Ab"), s(3, 2, "Eb")]),
            Layout::Strings(&[s(3, 4, "Eb"), s(10, 3, "Bb"), s(6, 3, "Gb"), s(1, 3, "Db"), s(8, 2, "Ab"), s(3, 2, "Eb"), s(10, 1, "Bb")]),
            Layout::Strings(&[s(3, 4, "Eb"), s(10, 3, "Bb"), s(6, 3, "Gb"), s(1, 3, "Db"), s(8, 2, "Ab"), s(3, 2, "Eb"), s(10, 1, "Bb"), s(5, 1, "F")]),
        ],
    },
    Tuning {
        id: "wholeStepGuitar",
        name: "Whole Step Down",
        layouts: &[
            Layout::Strings(&[s(2, 4, "D"), s(9, 3, "A"), s(5, 3, "F"), s(0, 3, "C"), s(7, 2, "G"), s(2, 2, "D")]),
            Layout::Strings(&[s(2, 4, "D"), s(9, 3, "A"), s(5, 3, "F"), s(0, 3, "C"), s(7, 2, "G"), s(2, 2, "D"), s(9, 1, "A")]),
            Layout::Strings(&[s(2, 4, "D"), s(9, 3, "A"), s(5, 3, "F"), s(0, 3, "C"), s(7, 2, "G"), s(2, 2, "D"), s(9, 1, "A"), s(4, 1, "E")]),
        ],
    },
    Tuning {
        id: "openDGuitar",
        name: "Open D",
        layouts: &[
            Layout::Strings(&[s(2, 4, "D"), s(9, 3, "A"), s(6, 3, "F#"), s(2, 3, "D"), s(9, 2, "A"), s(2, 2, "D")]),
            Layout::Strings(&[s(2, 4, "D"), s(9, 3, "A"), s(6, 3, "F#"), s(2, 3, "D"), s(9, 2, "A"), s(2, 2, "D"), s(9, 1, "A")]),
            Layout::Strings(&[s(2, 4, "D"), s(9, 3, "A"), s(6, 3, "F#"), s(2, 3, "D"), s(9, 2, "A"), s(2, 2, "D"), s(9, 1, "A"), s(2, 1, "D")]),
        ],
    },
    Tuning {
        id: "openGGuitar",
        name: "Open G",
        layouts: &[
            Layout::Strings(&[s(2, 4, "D"), s(11, 3, "B"), s(7, 3, "G"), s(2, 3, "D"), s(7, 2, "G"), s(2, 2, "D")]),
            Layout::Strings(&[s(2, 4, "D"), s(11, 3, "B"), s(7, 3, "G"), s(2, 3, "D"), s(7, 2, "G"), s(2, 2, "D"), s(7, 1, "G")]),
            Layout::Strings(&[s(2, 4, "D"), s(11, 3, "B"), s(7, 3, "G"), s(2, 3, "D"), s(7, 2, "G"), s(2, 2, "D"), s(7, 1, "G"), s(2, 1, "D")]),
        ],
    },
];

static BASS_TUNINGS: &[Tuning] = &[
    Tuning {
        id: "standard",
        name: "Standard",
        layouts: &[
            Layout::Strings(&[s(7, 3, "G"), s(2, 3, "D"), s(9, 2, "A"), s(4, 2, "E")]),
            Layout::Strings(&[s(7, 3, "G"), s(2, 3, "D"), s(9, 2, "A"), s(4, 2, "E"), s(11, 1, "B")]),
            Layout::Strings(&[s(0, 4, "C"), s(7, 3, "G"), s(2, 3, "D"), s(9, 2, "A"), s(4, 2, "E"), s(11, 1, "B")]),
        ],
    },
    Tuning {
        id: "dropD",
        name: "Drop D",
        layouts: &[
            Layout::Strings(&[s(7, 3, "G"), s(2, 3, "D"), s(9, 2, "A"), s(2, 2, "D")]),
            Layout::Strings(&[s(7, 3, "G"), s(2, 3, "D"), s(9, 2, "A"), s(2, 2, "D"), s(9, 2, "A")]),
            Layout::Strings(&[s(7, 3, "G"), s(2, 3, "D"), s(9, 2, "A"), s(2, 2, "D"), s(9, 2, "A"), s(4, 2, "E")]),
        ],
    },
    Tuning {
        id: "halfStep",
        name: "Half Step Down",
        layouts: &[
            Layout::Strings(&[s(6, 3, "Gb"), s(1, 3, "Db"), s(8, 2, "Ab"), s(3, 2, "Eb")]),
            Layout::Strings(&[s(6, 3, "Gb"), s(1, 3, "Db"), s(8, 2, "Ab"), s(3, 2, "Eb"), s(10, 1, "Bb")]),
            Layout::Strings(&[s(6, 3, "Gb"), s(1, 3, "Db"), s(8, 2, "Ab"), s(3, 2, "Eb"), s(10, 1, "Bb"), s(5, 2, "F")]),
        ],
    },
    Tuning {
        id: "wholeStep",
        name: "Whole Step Down",
        layouts: &[
            Layout::Strings(&[s(5, 3, "F"), s(0, 3, "C"), s(7, 2, "G"), s(2, 2, "D")]),
            Layout::Strings(&[s(5, 3, "F"), s(0, 3, "C"), s(7, 2, "G"), s(2, 2, "D"), s(9, 2, "A")]),
            Layout::Strings(&[s(5, 4, "F"), s(0, 3, "C"), s(7, 3, "G"), s(2, 2, "D"), s(9, 2, "A"), s(4, 2, "E")]),
        ],
    },
    Tuning {
        id: "fifths",
        name: "All Fifths",
        layouts: &[
            Layout::Strings(&[s(9, 2, "A"), s(2, 3, "D"), s(7, 3, "G"), s(0, 4, "C")]),
            Layout::Strings(&[s(9, 2, "A"), s(2, 3, "D"), s(7, 3, "G"), s(0, 4, "C"), s(5, 4, "F")]),
            Layout::Strings(&[s(9, 2, "A"), s(2, 3, "D"), s(7, 3, "G"), s(0, 4, "C"), s(5, 4, "F"), s(10, 4, "Bb")]),
        ],
    },
];

static PIANO_TUNINGS: &[Tuning] = &[
    Tuning {
        id: "standard88",
        name: "88 Keys (Full)",
        layouts: &[Layout::Keys { count: 88, start_note: 9, start_octave: 0 }],
    },
    Tuning {
        id: "standard61",
        name: "61 Keys",
        layouts: &[Layout::Keys { count: 61, start_note: 0, start_octave: 2 }],
    },
    Tuning {
        id: "standard49",
        name: "49 Keys",
        layouts: &[Layout::Keys { count: 49, start_note: 0, start_octave: 2 }],
    },
    Tuning {
        id: "standard37",
        name: "37 Keys",
        layouts: &[Layout::Keys { count: 37, start_note: 0, start_octave: 3 }],
    },
    Tuning {
        id: "standard25",
        name: "25 Keys",
        layouts: &[Layout::Keys { count: 25, start_note: 0, start_octave: 3 }],
    },
];

pub static INSTRUMENTS: &[Instrument] = &[
    Instrument {
        id: "guitar",
        name: "Guitar",
        kind: InstrumentKind::Fretted,
        default_tuning: "standardGuitar",
        supported_counts: &[6, 7, 8],
        initial: None,
        tunings: GUITAR_TUNINGS,
    },
    Instrument {
        id: "bassGuitar",
        name: "Bass Guitar",
        kind: InstrumentKind::Fretted,
        default_tuning: "standard",
        supported_counts: &[4, 5, 6],
        initial: None,
        tunings: BASS_TUNINGS,
    },
    Instrument {
        id: "piano",
        name: "Piano/Keyboard",
        kind: InstrumentKind::Keyboard,
        default_tuning: "standard88",
        supported_counts: &[88, 61, 49, 37, 25],
        initial: Some(("standard61", 61)),
        tunings: PIANO_TUNINGS,
    },
];

pub fn instrument(id: &str) -> Option<&'static Instrument> {
    INSTRUMENTS.iter().find(|i| i.id == id)
}
