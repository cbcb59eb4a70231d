//! # Scale Highlighting for Tablature
//!
//! A tab viewer can tint every note of a chosen scale or chord. This module
//! builds that configuration independently of the main selection: the
//! viewer picks its own root and definition.

use serde::Serialize;

use crate::catalog::{self, Kind};
use crate::note::{self, Notation, PitchClass};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightConfig {
    pub enabled: bool,
    pub root_note: PitchClass,
    pub intervals: Vec<u8>,
    /// e.g. `"F#/Gb Dorian"`
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Kind,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            root_note: 0,
            intervals: Vec::new(),
            name: String::new(),
            kind: Kind::Scale,
        }
    }
}

impl HighlightConfig {
    /// Highlight `item_id` from `category_id` rooted at `root`.
    ///
    /// Returns `None` when the definition does not exist.
    ///
    /// # Example
    /// ```
    /// use fretlab::highlight::HighlightConfig;
    ///
    /// let config = HighlightConfig::for_definition(9, "pentatonicScales", "minorPentatonic").unwrap();
    /// assert_eq!(config.name, "A Minor Pentatonic");
    /// assert_eq!(config.highlighted_notes(), vec![9, 0, 2, 4, 7]);
    /// ```
    pub fn for_definition(root: PitchClass, category_id: &str, item_id: &str) -> Option<Self> {
        let definition = catalog::definition(category_id, item_id)?;
        let root = root % note::SEMITONES;
        Some(Self {
            enabled: true,
            root_note: root,
            intervals: definition.intervals.to_vec(),
            name: format!("{} {}", note::note_name(root, Notation::Combined), definition.name),
            kind: definition.kind,
        })
    }

    /// Pitch classes to tint; empty while disabled.
    pub fn highlighted_notes(&self) -> Vec<PitchClass> {
        if !self.enabled {
            return Vec::new();
        }
        self.intervals
            .iter()
            .map(|interval| note::transpose(self.root_note, *interval))
            .collect()
    }

    pub fn is_highlighted(&self, note: PitchClass) -> bool {
        self.highlighted_notes().contains(&(note % note::SEMITONES))
    }
}

/// One entry of a grouped scale picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightOption {
    pub category_id: &'static str,
    pub id: &'static str,
    pub name: &'static str,
}

/// Every definition grouped under its category name, in catalog order.
pub fn grouped_options() -> Vec<(&'static str, Vec<HighlightOption>)> {
    catalog::CATEGORIES
        .iter()
        .map(|category| {
            let options = category
                .items
                .iter()
                .map(|d| HighlightOption {
                    category_id: category.id,
                    id: d.id,
                    name: d.name,
                })
                .collect();
            (category.name, options)
        })
        .collect()
}
