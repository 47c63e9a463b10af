use log::{debug, warn};

use crate::bidi::reorder_line;
use crate::inline_box::InlineBox;
use crate::line::Line;
use crate::options::Options;

/// Break a paragraph greedily, fitting as many boxes as possible in every
/// line.
///
/// A single forward pass; closed lines have their slack spread over their
/// glues, capped at the maximum glue width. The last line keeps the
/// nominal glue.
pub fn greedy<'a, B: InlineBox>(para: &'a [B], opt: &Options) -> Vec<Line<'a, B>> {
    let min_glue = opt.min_glue_width();
    let max_glue = opt.max_glue_width();

    let mut lines = Vec::new();
    let mut line = Line::new(opt.glue_width);
    let mut line_width = 0.0f32;
    let mut boxes_width = 0.0f32;
    let mut glues = 0usize;

    for b in para {
        let box_width = b.width();
        if line.is_empty() {
            line.boxes.push(b);
            line_width += box_width;
            boxes_width += box_width;
        } else if line_width + min_glue + box_width <= opt.text_width {
            line.boxes.push(b);
            line_width += min_glue + box_width;
            boxes_width += box_width;
            glues += 1;
        } else {
            if glues > 0 && boxes_width < opt.text_width {
                line.glue_width = ((opt.text_width - boxes_width) / glues as f32).min(max_glue);
            }
            reorder_line(&mut line, opt.text_direction);
            lines.push(line);

            line = Line::new(opt.glue_width);
            line.boxes.push(b);
            line_width = box_width;
            boxes_width = box_width;
            glues = 0;
        }
        if line.len() == 1 && box_width > opt.text_width {
            warn!(
                "box wider than the text ({box_width} > {}), it overflows its line",
                opt.text_width
            );
        }
    }

    if !line.is_empty() {
        reorder_line(&mut line, opt.text_direction);
        lines.push(line);
    }

    debug!("greedy: {} boxes into {} lines", para.len(), lines.len());
    lines
}
