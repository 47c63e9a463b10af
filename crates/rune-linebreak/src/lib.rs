//! rune-linebreak: paragraph line breaking for inline boxes.
//!
//! Callers measure their elements (typically words) and hand them over as
//! [`InlineBox`] values together with per-paragraph [`Options`]. The
//! crate chooses the line breaks and returns [`Line`]s in visual order.
//! - greedy first-fit packing
//! - Knuth-Plass style optimal breaking over glue stretch and shrink
//! - single-level bidi reordering of every broken line

pub mod bidi;
pub mod inline_box;
pub mod layout;
pub mod line;
pub mod options;
pub mod text;

pub use bidi::{direction_of, reorder_boxes};
pub use inline_box::{Direction, InlineBox};
pub use layout::{Algorithm, Breaks, greedy, knuth_plass, optimal_breaks};
pub use line::Line;
pub use options::{Options, OptionsError};
pub use text::{Word, format_monospace};

/// Validate `opt` and break `para` into lines with `algorithm`.
///
/// [`greedy`] and [`knuth_plass`] accept any options; this entry point
/// rejects degenerate ones first.
pub fn break_paragraph<'a, B: InlineBox>(
    para: &'a [B],
    opt: &Options,
    algorithm: Algorithm,
) -> Result<Vec<Line<'a, B>>, OptionsError> {
    opt.validate()?;
    Ok(algorithm.break_lines(para, opt))
}
