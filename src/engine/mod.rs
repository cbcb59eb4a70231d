//! # Engine Module
//!
//! Turn a selection (key, scale or chord, instrument, tuning) into the note
//! layout of a fretboard or keyboard.
//!
//! ## Sub-modules
//! - `types` - [`FretNote`], the output cell
//! - `theory` - [`TheoryEngine`], setters and queries
//!
//! ## Example
//! ```rust
//! use fretlab::TheoryEngine;
//!
//! let mut engine = TheoryEngine::new();
//! engine.set_key("A");
//! engine.set_category("diatonicModes");
//! engine.set_item("dorian");
//!
//! assert_eq!(engine.selected_note_set(), vec![9, 11, 0, 2, 4, 6, 7]);
//! // Dorian prefers flats, and "A" carries no accidental of its own
//! assert_eq!(engine.formula_as_note_names(), "A - B - C - D - E - Gb - G");
//!
//! // Default instrument is a 4-string bass: 4 strings, frets 0..=15
//! let board = engine.generate_fretboard();
//! assert_eq!(board.len(), 4);
//! assert_eq!(board[0].len(), 16);
//! ```
//!
//! ## Grid Arithmetic
//!
//! For a string whose open note is `n` in octave `o`, fret `f` holds
//! pitch class `(n + f) % 12` in octave `o + (n + f) / 12`. The octave
//! changes when the note passes B, as in scientific pitch notation.
//!
//! ## Notation
//!
//! Every note name in a grid or formula uses one spelling, picked by
//! [`TheoryEngine::should_use_sharps`].

mod theory;
mod types;


pub use theory::{Listener, TheoryEngine};
pub use types::FretNote;
