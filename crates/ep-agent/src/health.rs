//! Health states and their display colors.

use std::fmt;

/// Disease state of one human.
///
/// `Dead` is absorbing: no transition leaves it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum HealthState {
    #[default]
    NonInfected,
    Infected,
    Immune,
    Dead,
}

impl HealthState {
    /// Display color for this state.
    #[inline]
    pub fn color(self) -> Color {
        match self {
            HealthState::NonInfected => Color::Green,
            HealthState::Infected    => Color::Red,
            HealthState::Immune      => Color::Yellow,
            HealthState::Dead        => Color::Black,
        }
    }

    #[inline]
    pub fn is_terminal(self) -> bool {
        self == HealthState::Dead
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HealthState::NonInfected => "non_infected",
            HealthState::Infected    => "infected",
            HealthState::Immune      => "immune",
            HealthState::Dead        => "dead",
        };
        f.write_str(s)
    }
}

/// Canvas color of a human.  Always computed from [`HealthState`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Black,
}

impl Color {
    /// CSS hex string used by the renderer.
    pub fn hex(self) -> &'static str {
        match self {
            Color::Red    => "#ff3300",
            Color::Green  => "#00ff00",
            Color::Yellow => "#ffff00",
            Color::Black  => "#000000",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

// Renderers consume the hex string, not the variant name.
#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.hex())
    }
}
