//! # Text Rendering
//!
//! Plain-text views of fretboards, keyboards and formulas for the CLI.

use crate::engine::{FretNote, TheoryEngine};

const CELL_WIDTH: usize = 6;

/// Render a fretboard as text, one line per string.
///
/// Notes outside the selection print as `-`; the root is wrapped in
/// brackets. With `show_degrees` each note prints as its degree instead of
/// its name.
pub fn to_text_fretboard(board: &[Vec<FretNote>], show_degrees: bool) -> String {
    let mut out = String::new();
    let Some(first) = board.first() else {
        return out;
    };

    out.push_str(&" ".repeat(CELL_WIDTH));
    for cell in first {
        out.push_str(&format!("{:^width$}", cell.fret, width = CELL_WIDTH));
    }
    out.push('\n');

    for string in board {
        let open = string.first().map(|c| c.note_name.as_str()).unwrap_or("");
        out.push_str(&format!("{:<width$}", open, width = CELL_WIDTH - 1));
        out.push('|');
        for cell in string {
            out.push_str(&format!("{:^width$}", cell_label(cell, show_degrees), width = CELL_WIDTH));
        }
        out.push('\n');
    }

    out
}

/// Render a keyboard as text: every key in the selection with its octave.
pub fn to_text_keyboard(keys: &[FretNote], show_degrees: bool) -> String {
    let labels: Vec<String> = keys
        .iter()
        .filter(|k| k.is_in_set)
        .map(|k| {
            let text = if show_degrees {
                format!("{}{}({})", k.note_name, k.octave, k.degree)
            } else {
                format!("{}{}", k.note_name, k.octave)
            };
            if k.is_root {
                format!("[{}]", text)
            } else {
                text
            }
        })
        .collect();

    let mut out = labels.join(" ");
    out.push('\n');
    out
}

fn cell_label(cell: &FretNote, show_degrees: bool) -> String {
    if !cell.is_in_set {
        return "-".to_string();
    }
    let text = if show_degrees { &cell.degree } else { &cell.note_name };
    if cell.is_root {
        format!("[{}]", text)
    } else {
        text.clone()
    }
}

/// Display name, note formula and degree formula, one per line.
pub fn to_text_formula(engine: &TheoryEngine) -> String {
    let mut out = String::new();
    out.push_str(&engine.display_name());
    out.push('\n');
    out.push_str(&engine.formula_as_note_names());
    out.push('\n');

    let degrees = engine.formula_as_degree_numbers();
    if !degrees.is_empty() {
        out.push_str(&degrees);
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fretboard_text_shape() {
        let mut engine = TheoryEngine::new();
        engine.set_key("E");
        let board = engine.generate_fretboard();
        let text = to_text_fretboard(&board, false);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 5); // header + 4 strings
        assert!(lines[0].trim_start().starts_with('0'));
        assert!(lines[4].starts_with("E    |"));
        assert!(lines[4].contains("[E]"));
    }

    #[test]
    fn test_empty_board_renders_nothing() {
        assert_eq!(to_text_fretboard(&[], true), "");
    }

    #[test]
    fn test_keyboard_text() {
        let mut engine = TheoryEngine::new();
        engine.set_instrument("piano");
        engine.set_tuning("standard25");
        engine.set_string_count(25);
        engine.set_category("triads");

        let text = to_text_keyboard(&engine.generate_keyboard(), false);
        assert_eq!(text, "[C3] E3 G3 [C4] E4 G4 [C5]\n");

        let text = to_text_keyboard(&engine.generate_keyboard(), true);
        assert!(text.starts_with("[C3(1)] E3(3) G3(5)"));
    }

    #[test]
    fn test_formula_text() {
        let mut engine = TheoryEngine::new();
        engine.set_key("D");
        engine.set_category("seventh");
        engine.set_item("minor7");
        assert_eq!(
            to_text_formula(&engine),
            "Dm7\nD - F - A - C\n1 - b3 - 5 - b7\n"
        );
    }
}
