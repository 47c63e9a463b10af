mod breakpoints;
pub mod greedy;
pub mod knuth_plass;

pub use greedy::greedy;
pub use knuth_plass::{Breaks, knuth_plass, optimal_breaks};

use core::fmt;
use core::str::FromStr;

use crate::inline_box::InlineBox;
use crate::line::Line;
use crate::options::Options;

/// Line breaking strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Algorithm {
    /// Fill every line as much as possible (fast).
    Greedy,
    /// Minimize the badness of the whole paragraph.
    #[default]
    KnuthPlass,
}

impl Algorithm {
    /// Break `para` into lines with this strategy.
    pub fn break_lines<'a, B: InlineBox>(self, para: &'a [B], opt: &Options) -> Vec<Line<'a, B>> {
        match self {
            Algorithm::Greedy => greedy(para, opt),
            Algorithm::KnuthPlass => knuth_plass(para, opt),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Algorithm::Greedy => f.write_str("greedy"),
            Algorithm::KnuthPlass => f.write_str("knuth-plass"),
        }
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(Algorithm::Greedy),
            "knuth-plass" | "knuth_plass" | "optimal" => Ok(Algorithm::KnuthPlass),
            other => Err(format!("unknown line breaking algorithm: {other}")),
        }
    }
}
