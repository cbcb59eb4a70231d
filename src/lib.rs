//! # fretlab
//!
//! Scale and chord layouts for fretboards and keyboards.
//!
//! ```rust
//! use fretlab::TheoryEngine;
//!
//! let mut engine = TheoryEngine::new();
//! engine.set_instrument("guitar");
//! engine.set_key("G");
//! engine.set_category("seventh");
//! engine.set_item("major7");
//!
//! assert_eq!(engine.display_name(), "Gmaj7");
//! assert_eq!(engine.formula_as_note_names(), "G - B - D - F#");
//!
//! let board = engine.generate_fretboard();
//! assert_eq!(board.len(), 6);
//! assert!(board[2][0].is_root); // open G string
//! ```

pub mod catalog;
pub mod engine;
pub mod error;
pub mod highlight;
pub mod note;
pub mod preset;
pub mod render;
pub mod state;
pub mod tuning;

pub use engine::{FretNote, TheoryEngine};
pub use error::*;
pub use preset::{load_preset, save_preset};
pub use state::SelectionState;

/// Build an engine from a YAML preset.
pub fn engine_from_preset(content: &str) -> Result<TheoryEngine, TheoryError> {
    Ok(TheoryEngine::with_state(load_preset(content)?))
}
