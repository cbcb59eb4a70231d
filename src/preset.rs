//! # Selection Presets
//!
//! A preset is a small YAML document that restores a selection:
//!
//! ```yaml
//! key: A
//! category: diatonicModes
//! item: dorian
//! instrument: guitar
//! tuning: dropDGuitar
//! strings: 7
//! show-degrees: true
//! ```
//!
//! Every field is optional. Fields are applied through the normal setters in
//! dependency order (instrument before tuning and string count, category
//! before item), so omitted fields take the same defaults interactive
//! selection would give them. Unlike interactive selection, unknown ids and
//! unknown fields are errors here. When `strings` is omitted and the chosen
//! tuning has no layout for the resulting count, the tuning's first layout is
//! used.

use serde::{Deserialize, Serialize};

use crate::catalog;
use crate::error::TheoryError;
use crate::note;
use crate::state::SelectionState;
use crate::tuning;
use crate::TheoryEngine;

#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
struct RawPreset {
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    item: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    instrument: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    tuning: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    strings: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    show_degrees: Option<bool>,
}

/// Parse a preset and apply it on top of the default selection.
pub fn load_preset(content: &str) -> Result<SelectionState, TheoryError> {
    let mut engine = TheoryEngine::new();
    apply_preset(&mut engine, content)?;
    Ok(engine.into_state())
}

/// Parse a preset and apply it to an existing engine.
///
/// The engine is only touched once the whole preset has been validated.
pub fn apply_preset(engine: &mut TheoryEngine, content: &str) -> Result<(), TheoryError> {
    let raw: RawPreset = if content.trim().is_empty() {
        RawPreset::default()
    } else {
        serde_yaml::from_str(content).map_err(|e| TheoryError::Preset(e.to_string()))?
    };
    let count = validate(engine.state(), &raw)?;

    if let Some(instrument) = &raw.instrument {
        engine.set_instrument(instrument);
    }
    if let Some(tuning) = &raw.tuning {
        engine.set_tuning(tuning);
    }
    if count != engine.state().string_count {
        engine.set_string_count(count);
    }
    if let Some(category) = &raw.category {
        engine.set_category(category);
    }
    if let Some(item) = &raw.item {
        engine.set_item(item);
    }
    if let Some(key) = &raw.key {
        engine.set_key(key);
    }
    if let Some(show) = raw.show_degrees {
        if show != engine.state().show_degrees {
            engine.toggle_notation_labels();
        }
    }
    Ok(())
}

/// Check every id in the preset and resolve the string count it implies.
fn validate(current: &SelectionState, raw: &RawPreset) -> Result<u16, TheoryError> {
    if let Some(key) = &raw.key {
        if note::note_index(key).is_none() {
            return Err(TheoryError::UnknownNote(key.clone()));
        }
    }

    let instrument_id = raw.instrument.as_deref().unwrap_or(&current.instrument);
    let instrument = tuning::instrument(instrument_id)
        .ok_or_else(|| TheoryError::UnknownInstrument(instrument_id.to_string()))?;
    let (initial_tuning, initial_count) = instrument.initial_selection();

    let tuning_id = match (&raw.tuning, &raw.instrument) {
        (Some(t), _) => t.as_str(),
        (None, Some(_)) => initial_tuning,
        (None, None) => current.tuning.as_str(),
    };
    let tuning = instrument.tuning(tuning_id).ok_or_else(|| TheoryError::UnknownTuning {
        instrument: instrument.id.to_string(),
        tuning: tuning_id.to_string(),
    })?;

    let count = match (raw.strings, &raw.instrument) {
        (Some(n), _) => n,
        (None, Some(_)) => initial_count,
        (None, None) => current.string_count,
    };
    if !instrument.supports(count) {
        return Err(TheoryError::UnsupportedStringCount {
            instrument: instrument.id.to_string(),
            count,
        });
    }
    let count = match (tuning.layout(count), raw.strings, tuning.counts().next()) {
        (Some(_), _, _) => count,
        (None, None, Some(fallback)) if instrument.supports(fallback) => fallback,
        _ => {
            return Err(TheoryError::NoLayout {
                tuning: tuning.id.to_string(),
                count,
            })
        }
    };

    let category_id = raw.category.as_deref().unwrap_or(&current.category);
    let category = catalog::category(category_id)
        .ok_or_else(|| TheoryError::UnknownCategory(category_id.to_string()))?;
    if let Some(item) = &raw.item {
        if category.item(item).is_none() {
            return Err(TheoryError::UnknownItem {
                category: category.id.to_string(),
                item: item.clone(),
            });
        }
    }
    Ok(count)
}

/// Serialize a selection in preset form.
pub fn save_preset(state: &SelectionState) -> Result<String, TheoryError> {
    let raw = RawPreset {
        key: Some(state.key.clone()),
        category: Some(state.category.clone()),
        item: Some(state.item.clone()),
        instrument: Some(state.instrument.clone()),
        tuning: Some(state.tuning.clone()),
        strings: Some(state.string_count),
        show_degrees: Some(state.show_degrees),
    };
    serde_yaml::to_string(&raw).map_err(|e| TheoryError::Preset(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_preset_is_default() {
        assert_eq!(load_preset("").unwrap(), SelectionState::default());
    }

    #[test]
    fn test_full_preset() {
        let state = load_preset(
            r#"
key: A
category: diatonicModes
item: dorian
instrument: guitar
tuning: dropDGuitar
strings: 7
show-degrees: true
"#,
        )
        .unwrap();

        assert_eq!(state.key, "A");
        assert_eq!(state.item, "dorian");
        assert_eq!(state.instrument, "guitar");
        assert_eq!(state.tuning, "dropDGuitar");
        assert_eq!(state.string_count, 7);
        assert!(state.show_degrees);
    }

    #[test]
    fn test_instrument_alone_takes_its_defaults() {
        let state = load_preset("instrument: piano").unwrap();
        assert_eq!(state.tuning, "standard61");
        assert_eq!(state.string_count, 61);
    }

    #[test]
    fn test_category_alone_takes_first_item() {
        let state = load_preset("category: bebopScales").unwrap();
        assert_eq!(state.item, "bebopDominant");
    }

    #[test]
    fn test_rejects_unknown_ids() {
        assert!(matches!(load_preset("key: H"), Err(TheoryError::UnknownNote(_))));
        assert!(matches!(
            load_preset("instrument: ukulele"),
            Err(TheoryError::UnknownInstrument(_))
        ));
        assert!(matches!(
            load_preset("tuning: openGGuitar"),
            Err(TheoryError::UnknownTuning { .. })
        ));
        assert!(matches!(
            load_preset("strings: 6\ninstrument: piano"),
            Err(TheoryError::UnsupportedStringCount { count: 6, .. })
        ));
        assert!(matches!(
            load_preset("category: triads\nitem: dorian"),
            Err(TheoryError::UnknownItem { .. })
        ));
    }

    #[test]
    fn test_rejects_unknown_fields() {
        let err = load_preset("stringCount: 7\nkye: A").unwrap_err();
        assert!(matches!(err, TheoryError::Preset(_)));
        assert!(err.to_string().contains("stringCount"));
        assert!(load_preset(r#"{"key": "A", "showDegrees": true}"#).is_err());
    }

    #[test]
    fn test_tuning_without_strings_takes_its_layout() {
        let state = load_preset("instrument: piano\ntuning: standard88").unwrap();
        assert_eq!(state.tuning, "standard88");
        assert_eq!(state.string_count, 88);

        let state = load_preset("instrument: guitar\ntuning: openGGuitar").unwrap();
        assert_eq!(state.string_count, 6);
    }

    #[test]
    fn test_supported_count_missing_from_tuning() {
        let err = load_preset("instrument: piano\ntuning: standard88\nstrings: 61").unwrap_err();
        assert!(matches!(err, TheoryError::NoLayout { count: 61, .. }));
        assert_eq!(err.to_string(), "Tuning 'standard88' has no 61-string/key layout");
    }

    #[test]
    fn test_malformed_yaml() {
        let err = load_preset("key: [unclosed").unwrap_err();
        assert!(matches!(err, TheoryError::Preset(_)));
        assert!(err.to_string().starts_with("Invalid preset:"));
    }

    #[test]
    fn test_failed_preset_leaves_engine_untouched() {
        let mut engine = TheoryEngine::new();
        engine.set_key("E");
        let before = engine.state().clone();
        assert!(apply_preset(&mut engine, "key: G\ninstrument: cello").is_err());
        assert_eq!(engine.state(), &before);
    }

    #[test]
    fn test_save_then_load() {
        let mut engine = TheoryEngine::new();
        engine.set_instrument("guitar");
        engine.set_category("triads");
        engine.set_item("sus4");
        engine.set_key("D");

        let yaml = save_preset(engine.state()).unwrap();
        assert!(yaml.contains("show-degrees: false"));
        assert_eq!(load_preset(&yaml).unwrap(), *engine.state());
    }
}
