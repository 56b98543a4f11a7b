//! Formatting utilities for terminal output

use crate::core::{Hint, Verdict};
use crate::game::{Attribute, Cell};
use colored::Colorize;

/// Glyph for a directional hint
///
/// The arrow points toward the target: a guess that came in too high gets
/// a down arrow ("aim lower"), a too-low guess gets an up arrow. An
/// unresolved attribute shows a question mark.
#[must_use]
pub const fn hint_glyph(hint: Hint) -> &'static str {
    match hint {
        Hint::Higher => "↓",
        Hint::Lower => "↑",
        Hint::Unresolved => "?",
    }
}

/// Column width for one attribute, in characters
#[must_use]
pub const fn column_width(attribute: Attribute) -> usize {
    match attribute {
        Attribute::Name => 22,
        Attribute::Height | Attribute::Gender | Attribute::BirthYear => 9,
        Attribute::Species | Attribute::Homeworld => 13,
        Attribute::Films => 22,
        Attribute::Allegiances => 28,
    }
}

/// Render one cell: value plus hint glyph, padded and colored by verdict
///
/// Exact → green, close → yellow, miss → dimmed.
#[must_use]
pub fn format_cell(cell: &Cell) -> String {
    let width = column_width(cell.attribute);
    let mut text = cell.value.clone();

    if let Some(hint) = cell.comparison.hint {
        text.push(' ');
        text.push_str(hint_glyph(hint));
    }

    let text = pad_to(&text, width);

    let painted = match cell.comparison.verdict {
        Verdict::Exact => text.black().on_green(),
        Verdict::Close => text.black().on_yellow(),
        Verdict::Miss => text.dimmed(),
    };

    painted.to_string()
}

/// Truncate or pad `text` to exactly `width` display characters
#[must_use]
pub fn pad_to(text: &str, width: usize) -> String {
    let count = text.chars().count();
    if count > width {
        let mut out: String = text.chars().take(width.saturating_sub(1)).collect();
        out.push('…');
        out
    } else {
        let mut out = text.to_string();
        out.extend(std::iter::repeat_n(' ', width - count));
        out
    }
}
