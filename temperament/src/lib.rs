//! # temperament
//!
//! Binary-choice type questionnaires (MBTI-style) for Rust. Presentation-agnostic.
//!
//! A [`Questionnaire`] is immutable configuration: an ordered list of
//! two-option questions, each option tagged with one of the eight traits
//! `E I S N T F J P`, plus a description for each of the 16 type codes.
//! A [`Session`] walks one user through it and scores the answers.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use temperament::{Questionnaire, Session, Intent, Choice};
//!
//! let questionnaire = Questionnaire::from_json_str(json)?;
//! let mut session = Session::new(&questionnaire);
//! session.start();
//!
//! // A presenter renders `session.view()` and forwards user input:
//! session.dispatch(Intent::Choose(Choice::First))?;
//! session.dispatch(Intent::Back)?;
//! session.dispatch(Intent::Next)?;
//!
//! // On the last question `Intent::Next` scores the test, or reports the
//! // first unanswered question and jumps there.
//! let outcome = session.finish()?;
//! println!("{}: {:?}", outcome.code, session.profile());
//! ```
//!
//! ## Scoring
//!
//! Each chosen option credits one point to its trait. Per axis, the pole with
//! the strictly higher count wins; ties resolve to `I`, `N`, `F` and `P`.
//!
//! ## Backends
//!
//! Backends implement [`QuestionnaireBackend`]:
//! - [`ScriptedBackend`] - replays fixed intents (tests, demos)
//! - `temperament-dialoguer` - interactive terminal prompts

// Re-export all types from temperament-types
pub use temperament_types::*;

mod intent;
pub use intent::{Intent, Transition};

mod session;
pub use session::{QuestionView, Session};

mod backend;
pub use backend::{QuestionnaireBackend, run};

// Scripted backend for driving sessions without user interaction
mod scripted_backend;
pub use scripted_backend::{ScriptError, ScriptedBackend};
