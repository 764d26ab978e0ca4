use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{Axis, DefinitionError, Pole, ScorePair};

/// A four-letter type code such as `ESTJ`, one pole per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeCode {
    poles: [Pole; 4],
}

impl TypeCode {
    /// Build a code from one pole per axis, in type-code order.
    pub fn new(poles: [Pole; 4]) -> Result<Self, DefinitionError> {
        let in_order = poles
            .iter()
            .zip(Axis::ALL)
            .all(|(pole, axis)| pole.axis() == axis);
        if !in_order {
            let text: String = poles.iter().map(|pole| pole.letter()).collect();
            return Err(DefinitionError::MalformedTypeCode(text));
        }
        Ok(Self { poles })
    }

    /// Pick the leading pole of each pair.
    pub fn from_pairs(pairs: &[ScorePair; 4]) -> Self {
        Self {
            poles: Axis::ALL.map(|axis| pairs[axis.position()].leading()),
        }
    }

    /// The pole chosen on an axis.
    pub fn pole(&self, axis: Axis) -> Pole {
        self.poles[axis.position()]
    }

    pub fn poles(&self) -> [Pole; 4] {
        self.poles
    }

    /// All 16 codes, `ESTJ` first and `INFP` last.
    pub fn all() -> impl Iterator<Item = TypeCode> {
        (0u8..16).map(|bits| Self {
            poles: Axis::ALL.map(|axis| {
                if bits & (0b1000 >> axis.position()) == 0 {
                    axis.first()
                } else {
                    axis.second()
                }
            }),
        })
    }
}

impl fmt::Display for TypeCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pole in self.poles {
            write!(f, "{pole}")?;
        }
        Ok(())
    }
}

impl FromStr for TypeCode {
    type Err = DefinitionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || DefinitionError::MalformedTypeCode(s.to_string());
        let letters: Vec<char> = s.chars().collect();
        let letters: [char; 4] = letters.try_into().map_err(|_| malformed())?;
        let mut poles = [Pole::Extraversion; 4];
        for (slot, letter) in poles.iter_mut().zip(letters) {
            *slot = Pole::from_letter(letter.to_ascii_uppercase()).ok_or_else(malformed)?;
        }
        Self::new(poles).map_err(|_| malformed())
    }
}

impl TryFrom<String> for TypeCode {
    type Error = DefinitionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<TypeCode> for String {
    fn from(code: TypeCode) -> Self {
        code.to_string()
    }
}
