use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::{DefinitionError, ProfileTable, Question};

/// The immutable definition of a test: its questions in order and the profile table.
///
/// Shared by reference between any number of sessions.
///
/// # Example
/// ```
/// use temperament_types::{AnswerOption, Pole, ProfileTable, Question, Questionnaire, TypeCode};
///
/// let question = Question::new(
///     "At a party you...",
///     AnswerOption::new("Work the room", Pole::Extraversion),
///     AnswerOption::new("Find a quiet corner", Pole::Introversion),
/// )
/// .unwrap();
/// let profiles = ProfileTable::new(TypeCode::all().map(|code| (code, code.to_string()))).unwrap();
///
/// let questionnaire = Questionnaire::new(vec![question], profiles)
///     .unwrap()
///     .with_title("Tiny test");
/// assert_eq!(questionnaire.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestionnaire", into = "RawQuestionnaire")]
pub struct Questionnaire {
    title: Option<String>,
    prelude: Option<String>,
    epilogue: Option<String>,
    questions: Vec<Question>,
    profiles: ProfileTable,
}

#[derive(Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawQuestionnaire {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prelude: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    epilogue: Option<String>,
    questions: Vec<Question>,
    profiles: ProfileTable,
}

impl Questionnaire {
    /// Create a questionnaire; at least one question is required.
    pub fn new(questions: Vec<Question>, profiles: ProfileTable) -> Result<Self, DefinitionError> {
        if questions.is_empty() {
            return Err(DefinitionError::Empty);
        }
        Ok(Self {
            title: None,
            prelude: None,
            epilogue: None,
            questions,
            profiles,
        })
    }

    /// Load a questionnaire from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a questionnaire from a JSON reader (a file, stdin, ...).
    pub fn from_json_reader(reader: impl Read) -> Result<Self, DefinitionError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serialize back to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, DefinitionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the message shown before the first question.
    pub fn with_prelude(mut self, prelude: impl Into<String>) -> Self {
        self.prelude = Some(prelude.into());
        self
    }

    /// Set the message shown after the results.
    pub fn with_epilogue(mut self, epilogue: impl Into<String>) -> Self {
        self.epilogue = Some(epilogue.into());
        self
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn prelude(&self) -> Option<&str> {
        self.prelude.as_deref()
    }

    pub fn epilogue(&self) -> Option<&str> {
        self.epilogue.as_deref()
    }

    /// Get the questions, in presentation order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// Get a single question.
    pub fn question(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    pub fn profiles(&self) -> &ProfileTable {
        &self.profiles
    }

    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Always `false` for a constructed questionnaire.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

impl TryFrom<RawQuestionnaire> for Questionnaire {
    type Error = DefinitionError;

    fn try_from(raw: RawQuestionnaire) -> Result<Self, Self::Error> {
        let mut questionnaire = Self::new(raw.questions, raw.profiles)?;
        questionnaire.title = raw.title;
        questionnaire.prelude = raw.prelude;
        questionnaire.epilogue = raw.epilogue;
        Ok(questionnaire)
    }
}

impl From<Questionnaire> for RawQuestionnaire {
    fn from(questionnaire: Questionnaire) -> Self {
        Self {
            title: questionnaire.title,
            prelude: questionnaire.prelude,
            epilogue: questionnaire.epilogue,
            questions: questionnaire.questions,
            profiles: questionnaire.profiles,
        }
    }
}
