//! The theory engine: selection setters plus every derived query

use std::fmt;

use log::debug;

use super::types::FretNote;
use crate::catalog::{self, Category, Definition, Kind, PseudoScale, CATEGORIES, PSEUDO_CATEGORY};
use crate::note::{self, Notation, PitchClass, CHROMATIC_COMBINED, SEMITONES};
use crate::state::SelectionState;
use crate::tuning::{self, Instrument, Layout, OpenString, Tuning, INSTRUMENTS, MAX_FRET};

/// Callback invoked after every accepted selection change.
pub type Listener = Box<dyn FnMut(&SelectionState)>;

/// Owns a [`SelectionState`] and answers every question a fretboard or
/// keyboard view asks about it.
///
/// Nothing is cached: grids and formulas are recomputed from the state and
/// the static tables on each call.
pub struct TheoryEngine {
    state: SelectionState,
    listeners: Vec<Listener>,
}

impl Default for TheoryEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TheoryEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TheoryEngine")
            .field("state", &self.state)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl TheoryEngine {
    pub fn new() -> Self {
        Self::with_state(SelectionState::default())
    }

    pub fn with_state(state: SelectionState) -> Self {
        Self {
            state,
            listeners: Vec::new(),
        }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn into_state(self) -> SelectionState {
        self.state
    }

    /// Register a callback run after each accepted setter call.
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&SelectionState) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    fn apply(&mut self, update: impl FnOnce(&mut SelectionState) -> bool) -> bool {
        let accepted = update(&mut self.state);
        if accepted {
            for listener in &mut self.listeners {
                listener(&self.state);
            }
        }
        accepted
    }

    // ---- setters ----------------------------------------------------------

    pub fn set_key(&mut self, key: &str) -> bool {
        self.apply(|s| s.set_key(key))
    }

    /// Unknown ids are ignored and return `false`.
    pub fn set_category(&mut self, category_id: &str) -> bool {
        self.apply(|s| s.set_category(category_id))
    }

    pub fn set_item(&mut self, item_id: &str) -> bool {
        self.apply(|s| s.set_item(item_id))
    }

    /// Unknown ids are ignored and return `false`.
    pub fn set_instrument(&mut self, instrument_id: &str) -> bool {
        self.apply(|s| s.set_instrument(instrument_id))
    }

    pub fn set_tuning(&mut self, tuning_id: &str) -> bool {
        self.apply(|s| s.set_tuning(tuning_id))
    }

    pub fn set_string_count(&mut self, count: u16) -> bool {
        self.apply(|s| s.set_string_count(count))
    }

    pub fn toggle_notation_labels(&mut self) {
        self.apply(|s| {
            s.toggle_degrees();
            true
        });
    }

    // ---- catalog views ----------------------------------------------------

    pub fn categories(&self) -> &'static [Category] {
        CATEGORIES
    }

    pub fn current_category(&self) -> Option<&'static Category> {
        catalog::category(&self.state.category)
    }

    pub fn current_items(&self) -> &'static [Definition] {
        self.current_category().map(|c| c.items).unwrap_or(&[])
    }

    pub fn current_item(&self) -> Option<&'static Definition> {
        catalog::definition(&self.state.category, &self.state.item)
    }

    pub fn is_chord_category(&self) -> bool {
        self.current_category().map(|c| c.kind) == Some(Kind::Chord)
    }

    pub fn instruments(&self) -> &'static [Instrument] {
        INSTRUMENTS
    }

    pub fn current_instrument(&self) -> Option<&'static Instrument> {
        tuning::instrument(&self.state.instrument)
    }

    /// Tunings offered for the selected instrument.
    pub fn tunings(&self) -> &'static [Tuning] {
        self.current_instrument().map(|i| i.tunings).unwrap_or(&[])
    }

    pub fn current_tuning(&self) -> Option<&'static Tuning> {
        self.current_instrument()?.tuning(&self.state.tuning)
    }

    /// Names for a key picker, with both spellings of each black key.
    pub fn chromatic_scale(&self) -> &'static [&'static str; 12] {
        &CHROMATIC_COMBINED
    }

    // ---- notes ------------------------------------------------------------

    fn pseudo_scale(&self) -> Option<PseudoScale> {
        PseudoScale::from_selection(&self.state.category, &self.state.item)
    }

    /// Pitch class of any sharp, flat or combined note name.
    pub fn note_index(&self, name: &str) -> Option<PitchClass> {
        note::note_index(name)
    }

    pub fn key_index(&self) -> Option<PitchClass> {
        note::note_index(&self.state.key)
    }

    /// Whether notes are spelled with sharps.
    ///
    /// The first rule that applies wins:
    /// 1. an explicit sharp/flat "Fretboard Notes" selection
    /// 2. a key from the flat-key list spells with flats
    /// 3. a key carrying `#` spells with sharps, one carrying `b` with flats
    /// 4. the selected definition's own preference, sharps if it has none
    ///
    /// Without a current item the answer is sharps.
    pub fn should_use_sharps(&self) -> bool {
        let Some(item) = self.current_item() else {
            return true;
        };

        if let Some(forced) = self.pseudo_scale().and_then(PseudoScale::forced_sharps) {
            return forced;
        }

        let key = self.state.key.as_str();
        if note::is_flat_key(key) {
            return false;
        }
        if key.contains('#') || key.contains('b') {
            return key.contains('#');
        }

        item.prefer_sharps.unwrap_or(true)
    }

    pub fn notation(&self) -> Notation {
        Notation::from_sharps(self.should_use_sharps())
    }

    pub fn note_name(&self, index: PitchClass) -> &'static str {
        note::note_name(index, self.notation())
    }

    /// The key picker has no effect while a "Fretboard Notes" item is shown.
    pub fn is_key_disabled(&self) -> bool {
        self.pseudo_scale().is_some()
    }

    /// Pitch classes of the selected scale or chord, in formula order.
    pub fn selected_note_set(&self) -> Vec<PitchClass> {
        if let Some(pseudo) = self.pseudo_scale() {
            return pseudo.notes().to_vec();
        }
        let Some(item) = self.current_item() else {
            return Vec::new();
        };
        let Some(key) = self.key_index() else {
            debug!("key '{}' is not a note name", self.state.key);
            return Vec::new();
        };
        item.intervals
            .iter()
            .map(|interval| note::transpose(key, *interval))
            .collect()
    }

    // ---- layouts ----------------------------------------------------------

    fn active_layout(&self) -> Option<&'static Layout> {
        let layout = self
            .current_tuning()
            .and_then(|t| t.layout(self.state.string_count));
        if layout.is_none() {
            debug!(
                "no layout for {}/{} with {} strings",
                self.state.instrument, self.state.tuning, self.state.string_count
            );
        }
        layout
    }

    fn cell(
        &self,
        fret: usize,
        note_value: PitchClass,
        octave: u8,
        notation: Notation,
        root: Option<PitchClass>,
        set: &[PitchClass],
    ) -> FretNote {
        FretNote {
            fret,
            note_value,
            note_name: note::note_name(note_value, notation).to_string(),
            octave,
            degree: root
                .map(|r| note::degree_label(note_value, r).to_string())
                .unwrap_or_default(),
            is_root: root == Some(note_value),
            is_in_set: set.contains(&note_value),
        }
    }

    /// One row per string, frets `0..=MAX_FRET` per row.
    ///
    /// Empty when the selected tuning has no layout for the selected string
    /// count.
    pub fn generate_fretboard(&self) -> Vec<Vec<FretNote>> {
        let Some(layout) = self.active_layout() else {
            return Vec::new();
        };
        let notation = self.notation();
        let root = self.key_index();
        let set = self.selected_note_set();

        layout
            .open_strings()
            .iter()
            .map(|open: &OpenString| {
                (0..=MAX_FRET)
                    .map(|fret| {
                        let absolute = open.note as usize + fret;
                        let note_value = (absolute % SEMITONES as usize) as PitchClass;
                        let octave = open.octave + (absolute / SEMITONES as usize) as u8;
                        self.cell(fret, note_value, octave, notation, root, &set)
                    })
                    .collect()
            })
            .collect()
    }

    /// One cell per key, lowest first. `fret` holds the key index.
    pub fn generate_keyboard(&self) -> Vec<FretNote> {
        let Some(layout) = self.active_layout() else {
            return Vec::new();
        };
        let notation = self.notation();
        let root = self.key_index();
        let set = self.selected_note_set();

        layout
            .open_strings()
            .iter()
            .enumerate()
            .map(|(index, key)| self.cell(index, key.note, key.octave, notation, root, &set))
            .collect()
    }

    // ---- formatting -------------------------------------------------------

    /// Note names of the selection joined by ` - `, e.g. `A - B - C`.
    ///
    /// With degree labels switched on each name is followed by its degree:
    /// `A (1) - B (2) - C (b3)`.
    pub fn formula_as_note_names(&self) -> String {
        let Some(item) = self.current_item() else {
            return String::new();
        };
        if let Some(pseudo) = self.pseudo_scale() {
            return pseudo.formula().to_string();
        }
        let Some(key) = self.key_index() else {
            return String::new();
        };

        let notation = self.notation();
        let with_degrees = self.state.show_degrees && !self.is_key_disabled();
        item.intervals
            .iter()
            .map(|interval| {
                let name = note::note_name(note::transpose(key, *interval), notation);
                if with_degrees {
                    format!("{} ({})", name, note::interval_label(*interval))
                } else {
                    name.to_string()
                }
            })
            .collect::<Vec<_>>()
            .join(" - ")
    }

    /// Degree labels of the selection, e.g. `1 - 2 - b3 - 4 - 5 - 6 - b7`.
    /// Empty for "Fretboard Notes" items.
    pub fn formula_as_degree_numbers(&self) -> String {
        let Some(item) = self.current_item() else {
            return String::new();
        };
        if self.state.category == PSEUDO_CATEGORY || self.is_key_disabled() {
            return String::new();
        }
        item.intervals
            .iter()
            .map(|interval| note::interval_label(*interval))
            .collect::<Vec<_>>()
            .join(" - ")
    }

    /// Chords read as key plus symbol (`Gmaj7`); scales read as their name.
    pub fn display_name(&self) -> String {
        let (Some(category), Some(item)) = (self.current_category(), self.current_item()) else {
            return String::new();
        };
        match (category.kind, item.symbol) {
            (Kind::Chord, Some(symbol)) => format!("{}{}", self.state.key, symbol),
            _ => item.name.to_string(),
        }
    }
}
