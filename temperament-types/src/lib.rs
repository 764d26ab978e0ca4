//! Core types for the temperament crate.
//!
//! This crate provides the foundational types for defining and scoring a
//! binary-choice type questionnaire:
//! - `Pole` and `Axis` - The eight trait tags and the four axes they pair up on
//! - `Question`, `AnswerOption` and `Choice` - Individual questions and picks
//! - `Questionnaire` and `ProfileTable` - Immutable definitions, loadable from JSON
//! - `Answers`, `Scores` and `TypeCode` - Session data and the derived result

mod pole;
pub use pole::{Axis, Pole};

mod question;
pub use question::{AnswerOption, Choice, Question};

mod answers;
pub use answers::Answers;

mod scores;
pub use scores::{ScorePair, Scores};

mod type_code;
pub use type_code::TypeCode;

mod profile;
pub use profile::ProfileTable;

mod questionnaire;
pub use questionnaire::Questionnaire;

mod outcome;
pub use outcome::{Outcome, Progress, SessionState};

mod error;
pub use error::{DefinitionError, SessionError};
