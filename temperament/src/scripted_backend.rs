//! Scripted backend for driving sessions without user interaction.
//!
//! `ScriptedBackend` replays a fixed list of intents against a session. This
//! is useful for testing questionnaires and for non-interactive demos.
//!
//! # Example
//!
//! ```rust,ignore
//! use temperament::{Choice, ScriptedBackend};
//!
//! let backend = ScriptedBackend::from_choices([Choice::First; 20]);
//! let outcome = temperament::run(&questionnaire, &backend)?;
//! ```

use temperament_types::{Choice, Outcome, SessionError, SessionState};

use crate::{Intent, QuestionnaireBackend, Session};

/// A backend that replays pre-configured intents.
#[derive(Debug, Clone, Default)]
pub struct ScriptedBackend {
    intents: Vec<Intent>,
}

/// Error type for ScriptedBackend.
#[derive(Debug, thiserror::Error)]
pub enum ScriptError {
    #[error("Script ended before completion ({answered} of {total} questions answered)")]
    Exhausted { answered: usize, total: usize },

    #[error(transparent)]
    Session(#[from] SessionError),
}

impl ScriptedBackend {
    /// Create an empty script.
    pub fn new() -> Self {
        Self {
            intents: Vec::new(),
        }
    }

    /// Answer the questions in order the way a user clicking options would,
    /// then ask for the results.
    pub fn from_choices(choices: impl IntoIterator<Item = Choice>) -> Self {
        choices
            .into_iter()
            .fold(Self::new(), |script, choice| {
                script.with_intent(Intent::Choose(choice))
            })
            .with_intent(Intent::Next)
    }

    /// Append an intent.
    pub fn with_intent(mut self, intent: Intent) -> Self {
        self.intents.push(intent);
        self
    }

    /// Append several intents.
    pub fn with_intents(mut self, intents: impl IntoIterator<Item = Intent>) -> Self {
        self.intents.extend(intents);
        self
    }

    pub fn intents(&self) -> &[Intent] {
        &self.intents
    }
}

impl QuestionnaireBackend for ScriptedBackend {
    type Error = ScriptError;

    fn run(&self, session: &mut Session<'_>) -> Result<Outcome, Self::Error> {
        if session.state() == SessionState::NotStarted {
            session.start();
        }

        for &intent in &self.intents {
            match session.dispatch(intent) {
                Ok(transition) => {
                    if let Some(outcome) = transition.outcome() {
                        return Ok(*outcome);
                    }
                }
                // Redirect the way an interactive presenter would, then keep replaying.
                Err(err) => match err.redirect_to() {
                    Some(gap) if intent == Intent::Finish => {
                        session.jump_to(gap)?;
                    }
                    Some(_) => {}
                    None => return Err(err.into()),
                },
            }
        }

        Err(ScriptError::Exhausted {
            answered: session.answers().answered_count(),
            total: session.questionnaire().len(),
        })
    }
}
