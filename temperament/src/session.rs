//! The questionnaire engine: one explicit session object per test run.

use temperament_types::{
    Answers, Choice, Outcome, Progress, Questionnaire, Scores, SessionError, SessionState,
};
use tracing::{debug, info, warn};

use crate::{Intent, Transition};

/// Everything a presenter needs to draw the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestionView<'q> {
    /// 0-based index of the displayed question.
    pub index: usize,
    pub prompt: &'q str,
    /// Option labels in display order.
    pub labels: [&'q str; 2],
    /// The option already picked for this question, if any.
    pub selected: Option<Choice>,
    pub progress: Progress,
    /// Whether a "previous" control should be enabled.
    pub can_retreat: bool,
    /// Whether "next" means "see results".
    pub is_last: bool,
}

impl<'q> QuestionView<'q> {
    pub fn label(&self, choice: Choice) -> &'q str {
        self.labels[choice.ordinal()]
    }
}

/// A single test run over a borrowed questionnaire.
///
/// Owns the answer record and score tally exclusively. Any number of sessions
/// may share one [`Questionnaire`].
///
/// ```
/// use temperament::{Choice, Session, SessionState};
/// # use temperament::{AnswerOption, Pole, ProfileTable, Question, Questionnaire, TypeCode};
/// # let profiles = ProfileTable::new(TypeCode::all().map(|c| (c, c.to_string()))).unwrap();
/// # let question = Question::new(
/// #     "Plan or improvise?",
/// #     AnswerOption::new("Plan", Pole::Judging),
/// #     AnswerOption::new("Improvise", Pole::Perceiving),
/// # ).unwrap();
/// # let questionnaire = Questionnaire::new(vec![question], profiles).unwrap();
///
/// let mut session = Session::new(&questionnaire);
/// session.start();
/// session.select_option(0, Choice::First)?;
/// let outcome = session.finish()?;
///
/// assert_eq!(session.state(), SessionState::Completed);
/// assert_eq!(outcome.code.to_string(), "INFJ");
/// # Ok::<(), temperament::SessionError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Session<'q> {
    questionnaire: &'q Questionnaire,
    state: SessionState,
    current: usize,
    answers: Answers,
    scores: Scores,
    outcome: Option<Outcome>,
}

impl<'q> Session<'q> {
    /// Create a session that has not started yet.
    pub fn new(questionnaire: &'q Questionnaire) -> Self {
        Self {
            questionnaire,
            state: SessionState::NotStarted,
            current: 0,
            answers: Answers::unanswered(questionnaire.len()),
            scores: Scores::zero(),
            outcome: None,
        }
    }

    /// Reset position, answers and scores, and enter `InProgress`.
    ///
    /// Valid in every state; restarting discards all prior answers.
    pub fn start(&mut self) {
        self.current = 0;
        self.answers.clear();
        self.scores = Scores::zero();
        self.outcome = None;
        self.state = SessionState::InProgress;
        debug!(questions = self.questionnaire.len(), "session started");
    }

    /// Record a choice for any question, replacing an earlier one.
    ///
    /// Scores are untouched until [`Session::finish`].
    pub fn select_option(
        &mut self,
        index: usize,
        choice: Choice,
    ) -> Result<Transition, SessionError> {
        self.require_in_progress()?;
        let previous = self.answers.record(index, choice)?;
        debug!(index, ?choice, ?previous, "answer recorded");
        Ok(Transition::Answered {
            index,
            choice,
            advanced_to: None,
        })
    }

    /// Answer the current question and move on, unless it is the last one.
    pub fn choose(&mut self, choice: Choice) -> Result<Transition, SessionError> {
        self.require_in_progress()?;
        let index = self.current;
        self.answers.record(index, choice)?;
        let advanced_to = if self.is_last() {
            None
        } else {
            self.current += 1;
            Some(self.current)
        };
        debug!(index, ?choice, ?advanced_to, "answer chosen");
        Ok(Transition::Answered {
            index,
            choice,
            advanced_to,
        })
    }

    /// Move to the next question, or at the last question attempt completion.
    ///
    /// When completion is refused, the session jumps to the first unanswered
    /// question before reporting [`SessionError::IncompleteAnswers`].
    pub fn advance(&mut self) -> Result<Transition, SessionError> {
        self.require_in_progress()?;
        if !self.is_last() {
            let from = self.current;
            self.current += 1;
            debug!(from, to = self.current, "advanced");
            return Ok(Transition::Moved {
                from,
                to: self.current,
            });
        }

        match self.finish() {
            Ok(outcome) => Ok(Transition::Completed(outcome)),
            Err(err) => {
                if let Some(gap) = err.redirect_to() {
                    self.current = gap;
                }
                Err(err)
            }
        }
    }

    /// Move to the previous question. Does nothing at the first question.
    pub fn retreat(&mut self) -> Result<Transition, SessionError> {
        self.require_in_progress()?;
        if self.current == 0 {
            return Ok(Transition::Stayed);
        }
        let from = self.current;
        self.current -= 1;
        debug!(from, to = self.current, "retreated");
        Ok(Transition::Moved {
            from,
            to: self.current,
        })
    }

    /// Show an arbitrary question, e.g. the gap reported by `IncompleteAnswers`.
    pub fn jump_to(&mut self, index: usize) -> Result<Transition, SessionError> {
        self.require_in_progress()?;
        let len = self.questionnaire.len();
        if index >= len {
            return Err(SessionError::QuestionOutOfRange { index, len });
        }
        let from = self.current;
        if from == index {
            return Ok(Transition::Stayed);
        }
        self.current = index;
        debug!(from, to = index, "jumped");
        Ok(Transition::Moved { from, to: index })
    }

    /// Score all answers and derive the type code.
    ///
    /// Fails without touching the scores if any question is unanswered.
    /// Calling it again on a completed session returns the same outcome.
    pub fn finish(&mut self) -> Result<Outcome, SessionError> {
        if self.state == SessionState::NotStarted {
            return Err(SessionError::NotInProgress { state: self.state });
        }
        if let Some(first_unanswered) = self.answers.first_unanswered() {
            warn!(
                first_unanswered,
                answered = self.answers.answered_count(),
                "completion refused, unanswered questions remain"
            );
            return Err(SessionError::IncompleteAnswers { first_unanswered });
        }

        self.scores = Scores::tally(self.questionnaire.questions(), &self.answers);
        let outcome = Outcome {
            code: self.scores.type_code(),
            pairs: self.scores.pairs(),
        };
        self.outcome = Some(outcome);
        self.state = SessionState::Completed;
        info!(code = %outcome.code, "session completed");
        Ok(outcome)
    }

    /// Apply a presenter intent.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Transition, SessionError> {
        match intent {
            Intent::Start => {
                self.start();
                Ok(Transition::Started)
            }
            Intent::Choose(choice) => self.choose(choice),
            Intent::Select { index, choice } => self.select_option(index, choice),
            Intent::Next => self.advance(),
            Intent::Back => self.retreat(),
            Intent::JumpTo(index) => self.jump_to(index),
            Intent::Finish => self.finish().map(Transition::Completed),
        }
    }

    /// Snapshot of the current question for rendering.
    pub fn view(&self) -> QuestionView<'q> {
        let questionnaire: &'q Questionnaire = self.questionnaire;
        let question = &questionnaire.questions()[self.current];
        let [first, second] = question.options();
        QuestionView {
            index: self.current,
            prompt: question.prompt(),
            labels: [first.label.as_str(), second.label.as_str()],
            selected: self.answers.get(self.current),
            progress: self.progress(),
            can_retreat: self.current > 0,
            is_last: self.is_last(),
        }
    }

    /// `(current + 1) / total`.
    pub fn progress(&self) -> Progress {
        Progress {
            position: self.current + 1,
            total: self.questionnaire.len(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    /// Scores as of the last successful completion; all zero before that.
    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    /// The outcome of the last successful completion.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Description of the completed type.
    pub fn profile(&self) -> Option<&'q str> {
        let questionnaire: &'q Questionnaire = self.questionnaire;
        self.outcome
            .and_then(|outcome| questionnaire.profiles().describe(outcome.code))
    }

    pub fn questionnaire(&self) -> &'q Questionnaire {
        self.questionnaire
    }

    fn is_last(&self) -> bool {
        self.current + 1 == self.questionnaire.len()
    }

    fn require_in_progress(&self) -> Result<(), SessionError> {
        if self.state == SessionState::InProgress {
            Ok(())
        } else {
            Err(SessionError::NotInProgress { state: self.state })
        }
    }
}
