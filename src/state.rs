//! # Selection State
//!
//! The user's current choices. The state is a plain value owned by whoever
//! drives the UI; it is changed only through the setters below, each of
//! which keeps dependent fields consistent:
//!
//! - changing the category re-selects that category's first item
//! - changing the instrument re-selects its initial tuning and string count
//!
//! Setters return `false` and leave the state untouched when given an id
//! the catalog does not know.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::tuning;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionState {
    pub key: String,
    pub category: String,
    pub item: String,
    pub instrument: String,
    pub tuning: String,
    pub string_count: u16,
    /// Show scale-degree labels next to note names.
    pub show_degrees: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            key: "C".to_string(),
            category: "diatonicModes".to_string(),
            item: "ionian".to_string(),
            instrument: "bassGuitar".to_string(),
            tuning: "standard".to_string(),
            string_count: 4,
            show_degrees: false,
        }
    }
}

impl SelectionState {
    pub fn set_key(&mut self, key: &str) -> bool {
        trace!("key {} -> {}", self.key, key);
        self.key = key.to_string();
        true
    }

    /// Select a category and its first item.
    pub fn set_category(&mut self, category_id: &str) -> bool {
        let Some(category) = catalog::category(category_id) else {
            debug!("ignoring unknown category '{}'", category_id);
            return false;
        };
        trace!("category {} -> {}", self.category, category.id);
        self.category = category.id.to_string();
        self.item = category
            .first_item()
            .map(|d| d.id.to_string())
            .unwrap_or_default();
        true
    }

    pub fn set_item(&mut self, item_id: &str) -> bool {
        trace!("item {} -> {}", self.item, item_id);
        self.item = item_id.to_string();
        true
    }

    /// Select an instrument along with its initial tuning and string count.
    pub fn set_instrument(&mut self, instrument_id: &str) -> bool {
        let Some(instrument) = tuning::instrument(instrument_id) else {
            debug!("ignoring unknown instrument '{}'", instrument_id);
            return false;
        };
        let (tuning_id, count) = instrument.initial_selection();
        trace!(
            "instrument {} -> {} ({}, {})",
            self.instrument,
            instrument.id,
            tuning_id,
            count
        );
        self.instrument = instrument.id.to_string();
        self.tuning = tuning_id.to_string();
        self.string_count = count;
        true
    }

    pub fn set_tuning(&mut self, tuning_id: &str) -> bool {
        trace!("tuning {} -> {}", self.tuning, tuning_id);
        self.tuning = tuning_id.to_string();
        true
    }

    pub fn set_string_count(&mut self, count: u16) -> bool {
        trace!("string count {} -> {}", self.string_count, count);
        self.string_count = count;
        true
    }

    pub fn toggle_degrees(&mut self) {
        self.show_degrees = !self.show_degrees;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let state = SelectionState::default();
        assert_eq!(state.key, "C");
        assert_eq!(state.category, "diatonicModes");
        assert_eq!(state.item, "ionian");
        assert_eq!(state.instrument, "bassGuitar");
        assert_eq!(state.tuning, "standard");
        assert_eq!(state.string_count, 4);
        assert!(!state.show_degrees);
    }

    #[test]
    fn test_category_resets_item() {
        let mut state = SelectionState::default();
        assert!(state.set_category("seventh"));
        assert_eq!(state.category, "seventh");
        assert_eq!(state.item, "major7");
    }

    #[test]
    fn test_unknown_category_is_noop() {
        let mut state = SelectionState::default();
        state.set_item("dorian");
        let before = state.clone();
        assert!(!state.set_category("polkaScales"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_instrument_resets_tuning_and_count() {
        let mut state = SelectionState::default();
        state.set_tuning("dropD");
        state.set_string_count(5);

        assert!(state.set_instrument("guitar"));
        assert_eq!(state.tuning, "standardGuitar");
        assert_eq!(state.string_count, 6);

        assert!(state.set_instrument("piano"));
        assert_eq!(state.tuning, "standard61");
        assert_eq!(state.string_count, 61);
    }

    #[test]
    fn test_unknown_instrument_is_noop() {
        let mut state = SelectionState::default();
        let before = state.clone();
        assert!(!state.set_instrument("theremin"));
        assert_eq!(state, before);
    }

    #[test]
    fn test_toggle_degrees() {
        let mut state = SelectionState::default();
        state.toggle_degrees();
        assert!(state.show_degrees);
        state.toggle_degrees();
        assert!(!state.show_degrees);
    }

    #[test]
    fn test_serde_camel_case() {
        let json = serde_json::to_string(&SelectionState::default()).unwrap();
        assert!(json.contains("\"stringCount\":4"));
        assert!(json.contains("\"showDegrees\":false"));
    }
}
