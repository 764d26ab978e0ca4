//! # temperament-dialoguer
//!
//! Dialoguer backend for temperament.
//!
//! This crate runs a questionnaire in the terminal using the `dialoguer`
//! library: one question per screen, a progress bar, free back-and-forth
//! navigation, and a results screen with the type code, its profile and a
//! bar per axis.
//!
//! ## Example
//!
//! ```rust,ignore
//! use temperament_dialoguer::DialoguerBackend;
//!
//! fn main() -> anyhow::Result<()> {
//!     let questionnaire = example_questionnaires::mbti()?;
//!     let outcome = temperament::run(&questionnaire, &DialoguerBackend::new())?;
//!     println!("You are {}", outcome.code);
//!     Ok(())
//! }
//! ```

mod backend;

pub use backend::{DialoguerBackend, DialoguerError, render_outcome};
