use log::debug;

use crate::bidi::reorder_line;
use crate::inline_box::InlineBox;
use crate::layout::breakpoints::break_range;
use crate::line::Line;
use crate::options::Options;

/// Line ends picked by the optimizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Breaks {
    /// Index one past the last box of each line, in order. The last entry
    /// is always the paragraph length.
    pub ends: Vec<usize>,
    /// Sum of the badness of every line.
    pub badness: f32,
}

/// Find the break sequence with the lowest total badness.
///
/// The best way to lay out the boxes from a given index onwards does not
/// depend on how that index was reached, so the table is filled from the
/// end of the paragraph backwards, one entry per start index. Among
/// candidates of equal cost the tightest one (fewest boxes) wins.
pub fn optimal_breaks<B: InlineBox>(para: &[B], opt: &Options) -> Breaks {
    let len = para.len();
    // best[start] = (end of the first line, total badness from `start`)
    let mut best = vec![(len, 0.0f32); len + 1];

    for start in (0..len).rev() {
        let mut choice: Option<(usize, f32)> = None;
        for bp in break_range(para, opt, start) {
            let total = bp.badness + best[bp.index].1;
            if choice.is_none_or(|(_, badness)| total < badness) {
                choice = Some((bp.index, total));
            }
        }
        if let Some(choice) = choice {
            best[start] = choice;
        }
    }

    let mut ends = Vec::new();
    let mut start = 0;
    while start < len {
        start = best[start].0;
        ends.push(start);
    }

    Breaks {
        ends,
        badness: best[0].1,
    }
}

/// Break a paragraph with the Knuth-Plass algorithm.
///
/// Slower than [`greedy`](super::greedy::greedy) but spreads the slack
/// evenly over the whole paragraph. Every line but the last is justified
/// to `opt.text_width`; the last line and single-box lines keep the
/// nominal glue.
pub fn knuth_plass<'a, B: InlineBox>(para: &'a [B], opt: &Options) -> Vec<Line<'a, B>> {
    let breaks = optimal_breaks(para, opt);
    debug!(
        "knuth-plass: {} boxes into {} lines, total badness {}",
        para.len(),
        breaks.ends.len(),
        breaks.badness
    );

    let mut lines = Vec::with_capacity(breaks.ends.len());
    let mut start = 0;
    for &end in &breaks.ends {
        let mut line = Line::new(opt.glue_width);
        line.boxes.extend(&para[start..end]);

        let glues = line.glue_count();
        if end < para.len() && glues > 0 {
            line.glue_width = (opt.text_width - line.content_width()) / glues as f32;
        }

        reorder_line(&mut line, opt.text_direction);
        lines.push(line);
        start = end;
    }
    lines
}
