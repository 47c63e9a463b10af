use crate::inline_box::{Direction, InlineBox};
use crate::line::Line;

/// Reorder the boxes of one line from logical to visual order.
///
/// Boxes running against `text_direction` are deferred on a stack and
/// flushed in reverse when the next box in the dominant direction (or the
/// end of the line) is reached. Each maximal opposite-direction run thus
/// reads back-to-front while dominant boxes keep their places. Nested
/// embedding levels are not resolved.
pub fn reorder_boxes<'a, B: InlineBox>(
    boxes: Vec<&'a B>,
    text_direction: Direction,
) -> Vec<&'a B> {
    let mut visual = Vec::with_capacity(boxes.len());
    let mut deferred: Vec<&'a B> = Vec::new();

    for b in boxes {
        if b.direction() != text_direction {
            deferred.push(b);
            continue;
        }
        while let Some(d) = deferred.pop() {
            visual.push(d);
        }
        visual.push(b);
    }
    while let Some(d) = deferred.pop() {
        visual.push(d);
    }

    visual
}

/// Reorder a finished line in place.
pub fn reorder_line<B: InlineBox>(line: &mut Line<'_, B>, text_direction: Direction) {
    let boxes = std::mem::take(&mut line.boxes);
    line.boxes = reorder_boxes(boxes, text_direction);
}
