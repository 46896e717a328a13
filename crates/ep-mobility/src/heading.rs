//! Compass headings.

use std::fmt;

use ep_core::{AgentRng, HeadingSampling};

/// One of the 8 compass directions.  `Up` is +y.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Heading {
    Down,
    Up,
    Left,
    Right,
    LeftDown,
    LeftUp,
    RightDown,
    RightUp,
}

impl Heading {
    /// Sampling table.  Order matters: the legacy sampler never reaches the
    /// final entry.
    pub const ALL: [Heading; 8] = [
        Heading::Down,
        Heading::Up,
        Heading::Left,
        Heading::Right,
        Heading::LeftDown,
        Heading::LeftUp,
        Heading::RightDown,
        Heading::RightUp,
    ];

    /// Unit step along each axis.  Diagonals are `(±1, ±1)`, not normalised.
    #[inline]
    pub fn vector(self) -> (f64, f64) {
        match self {
            Heading::Down      => (0.0, -1.0),
            Heading::Up        => (0.0, 1.0),
            Heading::Left      => (-1.0, 0.0),
            Heading::Right     => (1.0, 0.0),
            Heading::LeftDown  => (-1.0, -1.0),
            Heading::LeftUp    => (-1.0, 1.0),
            Heading::RightDown => (1.0, -1.0),
            Heading::RightUp   => (1.0, 1.0),
        }
    }

    /// Draw a heading with the configured sampler.
    pub fn sample(sampling: HeadingSampling, rng: &mut AgentRng) -> Heading {
        let choices = match sampling {
            HeadingSampling::Legacy  => Self::ALL.len() - 1,
            HeadingSampling::Uniform => Self::ALL.len(),
        };
        Self::ALL[rng.gen_range(0..choices)]
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Heading::Down      => "S",
            Heading::Up        => "N",
            Heading::Left      => "W",
            Heading::Right     => "E",
            Heading::LeftDown  => "SW",
            Heading::LeftUp    => "NW",
            Heading::RightDown => "SE",
            Heading::RightUp   => "NE",
        };
        f.write_str(s)
    }
}
