use crate::{Choice, SessionError};

/// Per-question answer record: the chosen option, or `None` while unanswered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Answers {
    slots: Vec<Option<Choice>>,
}

impl Answers {
    /// Create a record with `len` unanswered questions.
    pub fn unanswered(len: usize) -> Self {
        Self {
            slots: vec![None; len],
        }
    }

    /// Record a choice, returning the one it replaced.
    pub fn record(&mut self, index: usize, choice: Choice) -> Result<Option<Choice>, SessionError> {
        let len = self.slots.len();
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(SessionError::QuestionOutOfRange { index, len })?;
        Ok(slot.replace(choice))
    }

    /// Get the choice for a question, if answered.
    pub fn get(&self, index: usize) -> Option<Choice> {
        self.slots.get(index).copied().flatten()
    }

    /// Mark every question unanswered again.
    pub fn clear(&mut self) {
        self.slots.fill(None);
    }

    /// The lowest-numbered unanswered question.
    pub fn first_unanswered(&self) -> Option<usize> {
        self.slots.iter().position(Option::is_none)
    }

    /// Check if every question has an answer.
    pub fn is_complete(&self) -> bool {
        self.first_unanswered().is_none()
    }

    /// Number of answered questions.
    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Number of questions tracked.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if no questions are tracked.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Iterate over `(index, choice)` pairs, including unanswered ones.
    pub fn iter(&self) -> impl Iterator<Item = (usize, Option<Choice>)> + '_ {
        self.slots.iter().copied().enumerate()
    }
}
