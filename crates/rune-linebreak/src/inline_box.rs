/// Writing direction of an inline box or of a whole paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Latin, Cyrillic, Greek, ...
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "ltr"))]
    LeftToRight,
    /// Arabic, Hebrew, ...
    #[cfg_attr(feature = "serde", serde(rename = "rtl"))]
    RightToLeft,
}

impl Direction {
    pub fn is_rtl(self) -> bool {
        matches!(self, Direction::RightToLeft)
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::LeftToRight => Direction::RightToLeft,
            Direction::RightToLeft => Direction::LeftToRight,
        }
    }
}

impl core::str::FromStr for Direction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ltr" | "left-to-right" => Ok(Direction::LeftToRight),
            "rtl" | "right-to-left" => Ok(Direction::RightToLeft),
            other => Err(format!("unknown text direction: {other}")),
        }
    }
}

/// A solid element of a paragraph (typically a word).
///
/// The line breaker never measures text itself: callers measure each
/// element up front and expose the result through this trait. Both values
/// must stay constant for the duration of a single breaking call.
pub trait InlineBox {
    /// Writing direction of the box.
    fn direction(&self) -> Direction;

    /// Extent of the box along the line, in caller units.
    fn width(&self) -> f32;
}

impl<T: InlineBox + ?Sized> InlineBox for &T {
    fn direction(&self) -> Direction {
        (**self).direction()
    }

    fn width(&self) -> f32 {
        (**self).width()
    }
}

impl<T: InlineBox + ?Sized> InlineBox for Box<T> {
    fn direction(&self) -> Direction {
        (**self).direction()
    }

    fn width(&self) -> f32 {
        (**self).width()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(f32);

    impl InlineBox for Fixed {
        fn direction(&self) -> Direction {
            Direction::RightToLeft
        }

        fn width(&self) -> f32 {
            self.0
        }
    }

    #[test]
    fn direction_parses_short_and_long_names() {
        assert_eq!("ltr".parse::<Direction>(), Ok(Direction::LeftToRight));
        assert_eq!(" RTL ".parse::<Direction>(), Ok(Direction::RightToLeft));
        assert_eq!(
            "right-to-left".parse::<Direction>(),
            Ok(Direction::RightToLeft)
        );
        assert!("up".parse::<Direction>().is_err());
    }

    #[test]
    fn opposite_flips_direction() {
        assert_eq!(Direction::LeftToRight.opposite(), Direction::RightToLeft);
        assert!(Direction::LeftToRight.opposite().is_rtl());
    }

    #[test]
    fn trait_objects_and_references_forward() {
        let boxed: Box<dyn InlineBox> = Box::new(Fixed(3.5));
        assert_eq!(boxed.width(), 3.5);
        assert!(boxed.direction().is_rtl());

        let by_ref = &Fixed(2.0);
        assert_eq!(InlineBox::width(&by_ref), 2.0);
    }
}
