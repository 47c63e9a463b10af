use crate::inline_box::InlineBox;

/// A series of boxes that share one line of text.
#[derive(Debug)]
pub struct Line<'a, B> {
    /// Boxes of the line in visual order.
    pub boxes: Vec<&'a B>,
    /// Extent of every glue between two adjacent boxes of this line.
    pub glue_width: f32,
}

impl<B> Clone for Line<'_, B> {
    fn clone(&self) -> Self {
        Self {
            boxes: self.boxes.clone(),
            glue_width: self.glue_width,
        }
    }
}

impl<'a, B> Line<'a, B> {
    pub(crate) fn new(glue_width: f32) -> Self {
        Self {
            boxes: Vec::new(),
            glue_width,
        }
    }

    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Number of glues between the boxes of the line.
    pub fn glue_count(&self) -> usize {
        self.boxes.len().saturating_sub(1)
    }
}

impl<B: InlineBox> Line<'_, B> {
    /// Sum of the box widths, without glue.
    pub fn content_width(&self) -> f32 {
        self.boxes.iter().map(|b| b.width()).sum()
    }

    /// Extent of the line once laid out with its own glue width.
    pub fn extent(&self) -> f32 {
        self.content_width() + self.glue_width * self.glue_count() as f32
    }
}
