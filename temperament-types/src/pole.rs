use std::fmt;

use serde::{Deserialize, Serialize};

use crate::DefinitionError;

/// One of the four opposing personality dimensions.
///
/// Every axis has two poles. The second-listed pole wins ties.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// Extraversion / Introversion.
    Energy,

    /// Sensing / Intuition.
    Perception,

    /// Thinking / Feeling.
    Judgment,

    /// Judging / Perceiving.
    Lifestyle,
}

impl Axis {
    /// All axes, in type-code order.
    pub const ALL: [Axis; 4] = [
        Axis::Energy,
        Axis::Perception,
        Axis::Judgment,
        Axis::Lifestyle,
    ];

    /// The first-listed pole (E, S, T or J).
    pub fn first(self) -> Pole {
        match self {
            Self::Energy => Pole::Extraversion,
            Self::Perception => Pole::Sensing,
            Self::Judgment => Pole::Thinking,
            Self::Lifestyle => Pole::Judging,
        }
    }

    /// The second-listed pole (I, N, F or P).
    pub fn second(self) -> Pole {
        self.first().opposite()
    }

    /// Both poles, first-listed first.
    pub fn poles(self) -> [Pole; 2] {
        [self.first(), self.second()]
    }

    /// The pole an axis resolves to when both counts are equal.
    pub fn tie_break(self) -> Pole {
        self.second()
    }

    /// Position of this axis within a type code.
    pub fn position(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.first(), self.second())
    }
}

/// A single-letter trait tag carried by each answer option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Pole {
    #[serde(rename = "E")]
    Extraversion,
    #[serde(rename = "I")]
    Introversion,
    #[serde(rename = "S")]
    Sensing,
    #[serde(rename = "N")]
    Intuition,
    #[serde(rename = "T")]
    Thinking,
    #[serde(rename = "F")]
    Feeling,
    #[serde(rename = "J")]
    Judging,
    #[serde(rename = "P")]
    Perceiving,
}

impl Pole {
    /// All eight poles, grouped by axis.
    pub const ALL: [Pole; 8] = [
        Pole::Extraversion,
        Pole::Introversion,
        Pole::Sensing,
        Pole::Intuition,
        Pole::Thinking,
        Pole::Feeling,
        Pole::Judging,
        Pole::Perceiving,
    ];

    /// The tag letter, e.g. `'E'`.
    pub fn letter(self) -> char {
        match self {
            Self::Extraversion => 'E',
            Self::Introversion => 'I',
            Self::Sensing => 'S',
            Self::Intuition => 'N',
            Self::Thinking => 'T',
            Self::Feeling => 'F',
            Self::Judging => 'J',
            Self::Perceiving => 'P',
        }
    }

    /// Parse an uppercase tag letter.
    pub fn from_letter(letter: char) -> Option<Self> {
        Self::ALL.into_iter().find(|pole| pole.letter() == letter)
    }

    /// The axis this pole belongs to.
    pub fn axis(self) -> Axis {
        match self {
            Self::Extraversion | Self::Introversion => Axis::Energy,
            Self::Sensing | Self::Intuition => Axis::Perception,
            Self::Thinking | Self::Feeling => Axis::Judgment,
            Self::Judging | Self::Perceiving => Axis::Lifestyle,
        }
    }

    /// The other pole on the same axis.
    pub fn opposite(self) -> Self {
        match self {
            Self::Extraversion => Self::Introversion,
            Self::Introversion => Self::Extraversion,
            Self::Sensing => Self::Intuition,
            Self::Intuition => Self::Sensing,
            Self::Thinking => Self::Feeling,
            Self::Feeling => Self::Thinking,
            Self::Judging => Self::Perceiving,
            Self::Perceiving => Self::Judging,
        }
    }

    /// Dense index into per-pole storage.
    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Pole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl TryFrom<char> for Pole {
    type Error = DefinitionError;

    fn try_from(letter: char) -> Result<Self, Self::Error> {
        Self::from_letter(letter).ok_or(DefinitionError::UnknownTrait(letter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_stays_on_axis() {
        for pole in Pole::ALL {
            assert_eq!(pole.opposite().axis(), pole.axis());
            assert_ne!(pole.opposite(), pole);
            assert_eq!(pole.opposite().opposite(), pole);
        }
    }

    #[test]
    fn tie_break_is_second_pole() {
        let ties: String = Axis::ALL
            .iter()
            .map(|axis| axis.tie_break().letter())
            .collect();
        assert_eq!(ties, "INFP");
    }

    #[test]
    fn letters_round_trip() {
        for pole in Pole::ALL {
            assert_eq!(Pole::try_from(pole.letter()).unwrap(), pole);
        }
        assert!(matches!(
            Pole::try_from('x'),
            Err(DefinitionError::UnknownTrait('x'))
        ));
    }

    #[test]
    fn serde_uses_letters() {
        let json = serde_json::to_string(&Pole::Intuition).unwrap();
        assert_eq!(json, "\"N\"");
        let pole: Pole = serde_json::from_str("\"J\"").unwrap();
        assert_eq!(pole, Pole::Judging);
    }

    #[test]
    fn axis_display() {
        assert_eq!(Axis::Judgment.to_string(), "T/F");
    }
}
