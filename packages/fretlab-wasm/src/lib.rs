use fretlab::highlight::{self, HighlightConfig};
use fretlab::{TheoryEngine, TheoryError};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct BindingError {
    message: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Formula {
    display_name: String,
    notes: String,
    degrees: String,
    use_sharps: bool,
    key_disabled: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct InstrumentSummary {
    id: &'static str,
    name: &'static str,
    default_tuning: &'static str,
    supported_counts: &'static [u16],
    tunings: Vec<TuningSummary>,
}

#[derive(Serialize)]
struct TuningSummary {
    id: &'static str,
    name: &'static str,
}

fn to_js_error(message: String) -> JsValue {
    let body = serde_json::to_string(&BindingError { message: message.clone() }).unwrap_or(message);
    JsValue::from_str(&body)
}

fn theory_error(e: TheoryError) -> JsValue {
    to_js_error(e.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| to_js_error(e.to_string()))
}

/// Selections arrive as preset documents; JSON objects are valid YAML.
fn engine(selection: &str) -> Result<TheoryEngine, JsValue> {
    fretlab::engine_from_preset(selection).map_err(theory_error)
}

/// Fretboard grid for a selection, as JSON `FretNote[][]`
#[wasm_bindgen]
pub fn fretboard(selection: &str) -> Result<String, JsValue> {
    to_json(&engine(selection)?.generate_fretboard())
}

/// Keyboard keys for a selection, as JSON `FretNote[]`
#[wasm_bindgen]
pub fn keyboard(selection: &str) -> Result<String, JsValue> {
    to_json(&engine(selection)?.generate_keyboard())
}

/// Display name and formulas for a selection
#[wasm_bindgen]
pub fn formula(selection: &str) -> Result<String, JsValue> {
    let engine = engine(selection)?;
    to_json(&Formula {
        display_name: engine.display_name(),
        notes: engine.formula_as_note_names(),
        degrees: engine.formula_as_degree_numbers(),
        use_sharps: engine.should_use_sharps(),
        key_disabled: engine.is_key_disabled(),
    })
}

/// Full catalog of categories with their items
#[wasm_bindgen]
pub fn categories() -> Result<String, JsValue> {
    to_json(&fretlab::catalog::CATEGORIES)
}

/// Instruments with their tunings
#[wasm_bindgen]
pub fn instruments() -> Result<String, JsValue> {
    let summaries: Vec<InstrumentSummary> = fretlab::tuning::INSTRUMENTS
        .iter()
        .map(|i| InstrumentSummary {
            id: i.id,
            name: i.name,
            default_tuning: i.default_tuning,
            supported_counts: i.supported_counts,
            tunings: i
                .tunings
                .iter()
                .map(|t| TuningSummary { id: t.id, name: t.name })
                .collect(),
        })
        .collect();
    to_json(&summaries)
}

/// Highlight configuration for the tab viewer
#[wasm_bindgen]
pub fn highlight(root: u8, category_id: &str, item_id: &str) -> Result<String, JsValue> {
    let config = HighlightConfig::for_definition(root, category_id, item_id)
        .ok_or_else(|| to_js_error(format!("Unknown item '{}' in category '{}'", item_id, category_id)))?;
    to_json(&config)
}

/// Scale picker options grouped by category name
#[wasm_bindgen]
pub fn highlight_options() -> Result<String, JsValue> {
    to_json(&highlight::grouped_options())
}
