use crate::{Pole, SessionState, TypeCode};

/// Error type for session operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// Completion was requested while some questions are unanswered.
    ///
    /// Recoverable: the presenter navigates to `first_unanswered` and asks again.
    #[error("Please answer question {} before seeing results", .first_unanswered + 1)]
    IncompleteAnswers { first_unanswered: usize },

    /// The operation is only valid while the test is in progress.
    #[error("Operation not allowed while the session is {state}")]
    NotInProgress { state: SessionState },

    /// A question index outside the questionnaire was used.
    #[error("Question index {index} is out of range (questionnaire has {len} questions)")]
    QuestionOutOfRange { index: usize, len: usize },
}

impl SessionError {
    /// The question a presenter should navigate to, if this error asks for one.
    pub fn redirect_to(&self) -> Option<usize> {
        match self {
            Self::IncompleteAnswers { first_unanswered } => Some(*first_unanswered),
            _ => None,
        }
    }

    /// Check if this error is the recoverable incomplete-answers condition.
    pub fn is_incomplete(&self) -> bool {
        matches!(self, Self::IncompleteAnswers { .. })
    }
}

/// Error type for building or loading a questionnaire definition.
#[derive(Debug, thiserror::Error)]
pub enum DefinitionError {
    #[error("A questionnaire needs at least one question")]
    Empty,

    #[error("Options '{first}' and '{second}' belong to different axes")]
    MixedAxes { first: Pole, second: Pole },

    #[error("Both options carry the same trait '{0}'")]
    SamePole(Pole),

    #[error("Unknown trait tag '{0}'")]
    UnknownTrait(char),

    #[error("Malformed type code '{0}'")]
    MalformedTypeCode(String),

    #[error("No profile for type {0}")]
    MissingProfile(TypeCode),

    #[error("Invalid questionnaire JSON: {0}")]
    Json(#[from] serde_json::Error),
}
