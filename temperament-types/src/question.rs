use serde::{Deserialize, Serialize};

use crate::{Axis, DefinitionError, Pole};

/// Which of a question's two options was picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    First,
    Second,
}

impl Choice {
    /// Both choices, in display order.
    pub const BOTH: [Choice; 2] = [Choice::First, Choice::Second];

    /// The 0-based ordinal of this choice.
    pub fn ordinal(self) -> usize {
        match self {
            Self::First => 0,
            Self::Second => 1,
        }
    }

    /// Convert a raw ordinal; anything but 0 or 1 is rejected.
    pub fn from_ordinal(ordinal: usize) -> Option<Self> {
        match ordinal {
            0 => Some(Self::First),
            1 => Some(Self::Second),
            _ => None,
        }
    }

    /// The other option.
    pub fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// One selectable option: a display label and the trait it scores for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    /// Text shown to the user.
    pub label: String,

    /// Trait tag credited when this option is chosen.
    #[serde(rename = "trait")]
    pub pole: Pole,
}

impl AnswerOption {
    /// Create a new option.
    pub fn new(label: impl Into<String>, pole: Pole) -> Self {
        Self {
            label: label.into(),
            pole,
        }
    }
}

/// A binary-choice question whose two options sit on opposite poles of one axis.
///
/// The invariant is checked on construction and on deserialization, so every
/// `Question` in a loaded questionnaire is well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestion", into = "RawQuestion")]
pub struct Question {
    prompt: String,
    options: [AnswerOption; 2],
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawQuestion {
    prompt: String,
    options: [AnswerOption; 2],
}

impl Question {
    /// Create a new question, checking that both options share an axis and differ in pole.
    pub fn new(
        prompt: impl Into<String>,
        first: AnswerOption,
        second: AnswerOption,
    ) -> Result<Self, DefinitionError> {
        if first.pole == second.pole {
            return Err(DefinitionError::SamePole(first.pole));
        }
        if first.pole.axis() != second.pole.axis() {
            return Err(DefinitionError::MixedAxes {
                first: first.pole,
                second: second.pole,
            });
        }
        Ok(Self {
            prompt: prompt.into(),
            options: [first, second],
        })
    }

    /// Get the prompt text.
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Get both options, in display order.
    pub fn options(&self) -> &[AnswerOption; 2] {
        &self.options
    }

    /// Get the option for a choice.
    pub fn option(&self, choice: Choice) -> &AnswerOption {
        &self.options[choice.ordinal()]
    }

    /// The trait credited for a choice.
    pub fn pole_for(&self, choice: Choice) -> Pole {
        self.option(choice).pole
    }

    /// The axis this question measures.
    pub fn axis(&self) -> Axis {
        self.options[0].pole.axis()
    }
}

impl TryFrom<RawQuestion> for Question {
    type Error = DefinitionError;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        let [first, second] = raw.options;
        Self::new(raw.prompt, first, second)
    }
}

impl From<Question> for RawQuestion {
    fn from(question: Question) -> Self {
        Self {
            prompt: question.prompt,
            options: question.options,
        }
    }
}
