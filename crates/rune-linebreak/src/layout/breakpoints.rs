use log::{trace, warn};

use crate::inline_box::InlineBox;
use crate::options::Options;

/// A feasible place to end a line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct BreakPoint {
    /// Index one past the last box of the line.
    pub index: usize,
    /// Cost of ending the line exactly here.
    pub badness: f32,
}

/// Squared deviation of the glue needed to fill the line from the nominal
/// glue width. Lines without glue cannot be stretched and cost nothing.
pub(crate) fn line_badness(opt: &Options, boxes_width: f32, glues: usize) -> f32 {
    if glues == 0 {
        return 0.0;
    }
    let diff = opt.glue_width - (opt.text_width - boxes_width) / glues as f32;
    diff * diff
}

/// Enumerate every index where a line starting at `start` may end.
///
/// Candidates come tightest first. The first one is the last position
/// where the line still fits with fully expanded glue; the following ones
/// keep adding boxes as long as fully shrunk glue fits. A box that cannot
/// fit at all still yields a single candidate so the caller always makes
/// progress.
pub(crate) fn break_range<B: InlineBox>(
    para: &[B],
    opt: &Options,
    start: usize,
) -> Vec<BreakPoint> {
    let min_glue = opt.min_glue_width();
    let max_glue = opt.max_glue_width();

    let mut candidates = Vec::new();
    let mut min_line_width = 0.0f32;
    let mut max_line_width = 0.0f32;
    let mut boxes_width = 0.0f32;
    let mut glues = 0usize;

    let mut first = start;
    while first < para.len() {
        let box_width = para[first].width();
        if first == start {
            if box_width > opt.text_width {
                warn!(
                    "box {start} is wider than the text ({box_width} > {}), it overflows its line",
                    opt.text_width
                );
            }
            min_line_width += box_width;
            max_line_width += box_width;
            boxes_width += box_width;
        } else if max_line_width + max_glue + box_width <= opt.text_width {
            min_line_width += min_glue + box_width;
            max_line_width += max_glue + box_width;
            boxes_width += box_width;
            glues += 1;
        } else {
            candidates.push(BreakPoint {
                index: first,
                badness: line_badness(opt, boxes_width, glues),
            });
            break;
        }
        first += 1;
    }

    // The rest of the paragraph fits on this line.
    if candidates.is_empty() {
        return vec![BreakPoint {
            index: first,
            badness: 0.0,
        }];
    }

    for last in first..para.len() {
        let box_width = para[last].width();
        if min_line_width + min_glue + box_width > opt.text_width {
            break;
        }
        min_line_width += min_glue + box_width;
        boxes_width += box_width;
        glues += 1;

        // The last line is never stretched.
        let badness = if last + 1 == para.len() {
            0.0
        } else {
            line_badness(opt, boxes_width, glues)
        };
        candidates.push(BreakPoint {
            index: last + 1,
            badness,
        });
    }

    trace!("break candidates from {start}: {candidates:?}");
    candidates
}
