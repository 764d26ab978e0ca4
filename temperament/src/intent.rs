use temperament_types::{Choice, Outcome};

/// A user action a presenter forwards to a [`Session`](crate::Session).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Begin a fresh test, discarding any previous answers.
    Start,

    /// Pick an option for the displayed question and move on.
    Choose(Choice),

    /// Pick an option for a specific question without moving.
    Select { index: usize, choice: Choice },

    /// "Next" or, on the last question, "See results".
    Next,

    /// "Previous".
    Back,

    /// Show a specific question.
    JumpTo(usize),

    /// Request the results directly.
    Finish,
}

/// What applying an intent did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The session was reset and is in progress.
    Started,

    /// An answer was recorded.
    Answered {
        index: usize,
        choice: Choice,
        /// The question now displayed, if the session moved on.
        advanced_to: Option<usize>,
    },

    /// The displayed question changed.
    Moved { from: usize, to: usize },

    /// Nothing moved (e.g. "previous" on the first question).
    Stayed,

    /// All questions were answered and scored.
    Completed(Outcome),
}

impl Transition {
    /// The outcome, if this transition completed the test.
    pub fn outcome(&self) -> Option<&Outcome> {
        match self {
            Self::Completed(outcome) => Some(outcome),
            _ => None,
        }
    }
}
