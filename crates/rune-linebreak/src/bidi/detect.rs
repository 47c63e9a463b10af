use unicode_bidi::{BidiClass, bidi_class};

use crate::inline_box::Direction;

/// Direction of the first strong character of `text` (UAX-9 rules P2/P3,
/// without isolates).
///
/// Returns `None` when `text` has no strong character, e.g. digits or
/// punctuation only.
pub fn direction_of(text: &str) -> Option<Direction> {
    text.chars().find_map(|c| match bidi_class(c) {
        BidiClass::L => Some(Direction::LeftToRight),
        BidiClass::R | BidiClass::AL => Some(Direction::RightToLeft),
        _ => None,
    })
}

/// Dominant direction of a paragraph, or `fallback` when it has no strong
/// character.
pub fn paragraph_direction(text: &str, fallback: Direction) -> Direction {
    direction_of(text).unwrap_or(fallback)
}
