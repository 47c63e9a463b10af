//! Visual ordering of mixed-direction lines.
//!
//! - Single-level reordering of the boxes of a broken line
//! - Direction detection for plain-text boxes built on `unicode-bidi`

pub mod detect;
pub mod reorder;

pub use detect::{direction_of, paragraph_direction};
pub use reorder::{reorder_boxes, reorder_line};
