//! # Error Types
//!
//! Errors raised at the fallible edges of the crate: preset files, the CLI
//! and the wasm bindings. Interactive selection through [`TheoryEngine`]
//! setters never fails; an unknown id there is simply ignored.
//!
//! [`TheoryEngine`]: crate::TheoryEngine

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TheoryError {
    /// A note or key name that matches none of the chromatic spellings.
    ///
    /// # Example
    /// ```
    /// # use fretlab::TheoryError;
    /// let err = TheoryError::UnknownNote("H".to_string());
    /// assert_eq!(err.to_string(), "Unknown note name: H");
    /// ```
    #[error("Unknown note name: {0}")]
    UnknownNote(String),

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// The item exists nowhere in the given category.
    #[error("Unknown item '{item}' in category '{category}'")]
    UnknownItem { category: String, item: String },

    #[error("Unknown instrument: {0}")]
    UnknownInstrument(String),

    #[error("Unknown tuning '{tuning}' for instrument '{instrument}'")]
    UnknownTuning { instrument: String, tuning: String },

    /// # Example
    /// ```
    /// # use fretlab::TheoryError;
    /// let err = TheoryError::UnsupportedStringCount {
    ///     instrument: "guitar".to_string(),
    ///     count: 12,
    /// };
    /// assert_eq!(err.to_string(), "Instrument 'guitar' does not support 12 strings/keys");
    /// ```
    #[error("Instrument '{instrument}' does not support {count} strings/keys")]
    UnsupportedStringCount { instrument: String, count: u16 },

    /// The instrument supports the count, but the chosen tuning has no
    /// layout for it.
    #[error("Tuning '{tuning}' has no {count}-string/key layout")]
    NoLayout { tuning: String, count: u16 },

    /// Malformed YAML in a selection preset.
    #[error("Invalid preset: {0}")]
    Preset(String),
}
