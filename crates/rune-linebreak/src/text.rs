//! Inline boxes for plain text.
//!
//! Splits text into paragraphs and words and wraps each word in a [`Word`]
//! box. Widths come from a caller-supplied measure, or from the grapheme
//! count for monospace output.

use unicode_segmentation::UnicodeSegmentation;

use crate::bidi::direction_of;
use crate::inline_box::{Direction, InlineBox};
use crate::line::Line;

/// A word of text together with its measured width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Word<'t> {
    text: &'t str,
    width: f32,
    direction: Direction,
}

impl<'t> Word<'t> {
    /// Word with a known width. The direction is taken from the first strong
    /// character and defaults to left-to-right.
    pub fn new(text: &'t str, width: f32) -> Self {
        let direction = direction_of(text).unwrap_or_default();
        Self::with_direction(text, width, direction)
    }

    pub fn with_direction(text: &'t str, width: f32, direction: Direction) -> Self {
        Self {
            text,
            width,
            direction,
        }
    }

    /// Word measured in grapheme clusters, one unit each.
    pub fn monospace(text: &'t str) -> Self {
        Self::new(text, grapheme_width(text))
    }

    pub fn text(&self) -> &'t str {
        self.text
    }
}

impl InlineBox for Word<'_> {
    fn direction(&self) -> Direction {
        self.direction
    }

    fn width(&self) -> f32 {
        self.width
    }
}

/// Number of extended grapheme clusters in `text`.
pub fn grapheme_width(text: &str) -> f32 {
    text.graphemes(true).count() as f32
}

/// Split text into paragraphs on `'\n'`.
pub fn paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
}

/// Split a paragraph into words on spaces and measure each one.
///
/// Runs of spaces do not produce empty words.
pub fn words<'t, F>(paragraph: &'t str, mut measure: F) -> Vec<Word<'t>>
where
    F: FnMut(&str) -> f32,
{
    paragraph
        .split(' ')
        .filter(|w| !w.is_empty())
        .map(|w| {
            let width = measure(w);
            Word::new(w, width)
        })
        .collect()
}

/// Render broken lines as monospace text, one line per row.
///
/// Glue is rounded down to whole spaces, with at least one space between
/// two words.
pub fn format_monospace(lines: &[Line<'_, Word<'_>>]) -> String {
    let mut out = String::new();
    for line in lines {
        let spaces = (line.glue_width as usize).max(1);
        let glue = " ".repeat(spaces);
        for (i, word) in line.boxes.iter().enumerate() {
            if i > 0 {
                out.push_str(&glue);
            }
            out.push_str(word.text());
        }
        out.push('\n');
    }
    out
}
