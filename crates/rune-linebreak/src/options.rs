use thiserror::Error;

use crate::inline_box::Direction;

/// Per-paragraph settings for the line breakers.
///
/// The breakers take these values as-is. Degenerate settings (for example
/// a shrink larger than the nominal glue) only yield odd spacing; use
/// [`Options::validate`] to reject them up front.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Target extent of a line.
    pub text_width: f32,
    /// Dominant writing direction of the paragraph.
    pub text_direction: Direction,
    /// Nominal extent of the glue between two boxes.
    pub glue_width: f32,
    /// How far a glue may shrink below `glue_width`.
    pub glue_shrink: f32,
    /// How far a glue may expand above `glue_width`.
    pub glue_expand: f32,
}

/// Reasons [`Options::validate`] rejects a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OptionsError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },
    #[error("text width must be positive, got {0}")]
    NonPositiveTextWidth(f32),
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },
    #[error("glue shrink {shrink} exceeds glue width {width}")]
    ShrinkExceedsGlue { shrink: f32, width: f32 },
}

impl Default for Options {
    fn default() -> Self {
        Self {
            text_width: 40.0,
            text_direction: Direction::LeftToRight,
            glue_width: 1.0,
            glue_shrink: 0.0,
            glue_expand: 1.0,
        }
    }
}

impl Options {
    /// Options whose glue follows the width of a space: it may shrink by a
    /// fifth and expand by a third.
    pub fn proportional(text_width: f32, space_width: f32, text_direction: Direction) -> Self {
        Self {
            text_width,
            text_direction,
            glue_width: space_width,
            glue_shrink: space_width / 5.0,
            glue_expand: space_width / 3.0,
        }
    }

    /// Narrowest glue a line may use.
    pub fn min_glue_width(&self) -> f32 {
        self.glue_width - self.glue_shrink
    }

    /// Widest glue a line may use.
    pub fn max_glue_width(&self) -> f32 {
        self.glue_width + self.glue_expand
    }

    /// Check that every width is finite and in range.
    pub fn validate(&self) -> Result<(), OptionsError> {
        let fields = [
            ("text width", self.text_width),
            ("glue width", self.glue_width),
            ("glue shrink", self.glue_shrink),
            ("glue expand", self.glue_expand),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(OptionsError::NotFinite { field, value });
            }
        }
        if self.text_width <= 0.0 {
            return Err(OptionsError::NonPositiveTextWidth(self.text_width));
        }
        for &(field, value) in &fields[1..] {
            if value < 0.0 {
                return Err(OptionsError::Negative { field, value });
            }
        }
        if self.glue_shrink > self.glue_width {
            return Err(OptionsError::ShrinkExceedsGlue {
                shrink: self.glue_shrink,
                width: self.glue_width,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glue_bounds() {
        let opt = Options {
            glue_width: 4.0,
            glue_shrink: 1.0,
            glue_expand: 2.0,
            ..Options::default()
        };
        assert_eq!(opt.min_glue_width(), 3.0);
        assert_eq!(opt.max_glue_width(), 6.0);
    }

    #[test]
    fn proportional_glue_follows_space_width() {
        let opt = Options::proportional(700.0, 15.0, Direction::LeftToRight);
        assert_eq!(opt.glue_width, 15.0);
        assert_eq!(opt.glue_shrink, 3.0);
        assert_eq!(opt.glue_expand, 5.0);
        assert!(opt.validate().is_ok());
    }

    #[test]
    fn validate_rejects_degenerate_values() {
        let base = Options::default();

        let opt = Options {
            text_width: 0.0,
            ..base
        };
        assert_eq!(opt.validate(), Err(OptionsError::NonPositiveTextWidth(0.0)));

        let opt = Options {
            glue_expand: f32::NAN,
            ..base
        };
        assert!(matches!(
            opt.validate(),
            Err(OptionsError::NotFinite {
                field: "glue expand",
                ..
            })
        ));

        let opt = Options {
            glue_width: -1.0,
            ..base
        };
        assert!(matches!(
            opt.validate(),
            Err(OptionsError::Negative {
                field: "glue width",
                ..
            })
        ));

        let opt = Options {
            glue_width: 1.0,
            glue_shrink: 2.0,
            ..base
        };
        assert_eq!(
            opt.validate(),
            Err(OptionsError::ShrinkExceedsGlue {
                shrink: 2.0,
                width: 1.0
            })
        );
    }

    #[test]
    fn negative_min_glue_is_not_an_error_for_the_breakers() {
        let opt = Options {
            glue_width: 1.0,
            glue_shrink: 3.0,
            ..Options::default()
        };
        assert_eq!(opt.min_glue_width(), -2.0);
    }
}
