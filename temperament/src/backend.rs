use temperament_types::{Outcome, Questionnaire};

use crate::Session;

/// Trait for presentation adapters that drive a session to completion.
///
/// A backend only reads [`Session::view`] and dispatches intents; all scoring
/// and navigation rules live in the session. Backends decide how questions
/// are shown (terminal prompts, TUI, scripted replay, ...).
pub trait QuestionnaireBackend {
    /// The error type for this backend.
    type Error: Into<anyhow::Error>;

    /// Drive `session` until it completes.
    ///
    /// # Returns
    /// * `Ok(outcome)` once every question is answered and scored
    /// * `Err` on cancellation or backend failure
    ///
    /// Incomplete-answer redirects are handled internally.
    fn run(&self, session: &mut Session<'_>) -> Result<Outcome, Self::Error>;
}

/// Run a fresh session over `questionnaire` with the given backend.
pub fn run<B: QuestionnaireBackend>(
    questionnaire: &Questionnaire,
    backend: &B,
) -> anyhow::Result<Outcome> {
    let mut session = Session::new(questionnaire);
    session.start();
    backend.run(&mut session).map_err(Into::into)
}
