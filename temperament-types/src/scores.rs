use crate::{Answers, Axis, Pole, Question, TypeCode};

/// Per-trait tally of chosen options.
///
/// Never updated while the user navigates; always rebuilt from scratch with [`Scores::tally`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Scores {
    counts: [u32; 8],
}

impl Scores {
    /// All counts at zero.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Fold over the answer record, crediting one point to the trait of each chosen option.
    ///
    /// Unanswered questions contribute nothing.
    pub fn tally(questions: &[Question], answers: &Answers) -> Self {
        questions
            .iter()
            .zip(answers.iter())
            .filter_map(|(question, (_, choice))| choice.map(|c| question.pole_for(c)))
            .fold(Self::zero(), |mut scores, pole| {
                scores.counts[pole.slot()] += 1;
                scores
            })
    }

    /// Count for one trait.
    pub fn get(&self, pole: Pole) -> u32 {
        self.counts[pole.slot()]
    }

    /// Both counts for one axis.
    pub fn pair(&self, axis: Axis) -> ScorePair {
        ScorePair {
            axis,
            first: self.get(axis.first()),
            second: self.get(axis.second()),
        }
    }

    /// Score pairs for all four axes, in type-code order.
    pub fn pairs(&self) -> [ScorePair; 4] {
        Axis::ALL.map(|axis| self.pair(axis))
    }

    /// Resolve each axis to its leading pole.
    pub fn type_code(&self) -> TypeCode {
        TypeCode::from_pairs(&self.pairs())
    }

    /// Sum over all traits.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// Check if nothing has been counted.
    pub fn is_zero(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }
}

/// Both poles' counts on a single axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScorePair {
    pub axis: Axis,
    /// Count for the first-listed pole (E, S, T or J).
    pub first: u32,
    /// Count for the second-listed pole (I, N, F or P).
    pub second: u32,
}

impl ScorePair {
    /// The pole with the strictly higher count; ties go to the second-listed pole.
    pub fn leading(&self) -> Pole {
        if self.first > self.second {
            self.axis.first()
        } else {
            self.axis.tie_break()
        }
    }

    /// Count for one pole of this axis, or `None` for a pole on another axis.
    pub fn count(&self, pole: Pole) -> Option<u32> {
        if pole == self.axis.first() {
            Some(self.first)
        } else if pole == self.axis.second() {
            Some(self.second)
        } else {
            None
        }
    }

    pub fn total(&self) -> u32 {
        self.first + self.second
    }

    /// Bar widths in percent for the first and second pole.
    ///
    /// `None` when the axis received no answers.
    pub fn percentages(&self) -> Option<(f64, f64)> {
        let total = self.total();
        if total == 0 {
            return None;
        }
        let total = f64::from(total);
        Some((
            f64::from(self.first) / total * 100.0,
            f64::from(self.second) / total * 100.0,
        ))
    }
}
