//! Dialoguer backend implementation for the QuestionnaireBackend trait.

use dialoguer::{Select, theme::ColorfulTheme};
use temperament::{
    Choice, Intent, Outcome, QuestionView, QuestionnaireBackend, ScorePair, Session, SessionError,
    SessionState, Transition,
};
use thiserror::Error;

/// Width of the progress and score bars, in characters.
const BAR_WIDTH: usize = 20;

/// Error type for the Dialoguer backend.
#[derive(Debug, Error)]
pub enum DialoguerError {
    /// User cancelled the test (e.g., pressed Ctrl+C or Escape).
    #[error("Questionnaire cancelled by user")]
    Cancelled,

    /// An I/O error occurred during prompting.
    #[error("Dialoguer error: {0}")]
    Dialoguer(#[from] dialoguer::Error),

    /// The session rejected an intent.
    #[error("Session error: {0}")]
    Session(#[from] SessionError),
}

/// Helper to check if a dialoguer error is a cancellation (Ctrl+C / Escape)
fn is_cancelled(err: &dialoguer::Error) -> bool {
    matches!(err, dialoguer::Error::IO(io_err) if io_err.kind() == std::io::ErrorKind::Interrupted)
}

/// One entry in the per-question menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Option(Choice),
    Back,
    Next,
}

impl MenuItem {
    fn intent(self) -> Intent {
        match self {
            Self::Option(choice) => Intent::Choose(choice),
            Self::Back => Intent::Back,
            Self::Next => Intent::Next,
        }
    }
}

/// Menu entries and labels for a view: both options, then navigation.
fn menu(view: &QuestionView<'_>) -> Vec<(MenuItem, String)> {
    let mut items: Vec<(MenuItem, String)> = Choice::BOTH
        .iter()
        .map(|&choice| (MenuItem::Option(choice), view.label(choice).to_string()))
        .collect();
    if view.can_retreat {
        items.push((MenuItem::Back, "← Previous".to_string()));
    }
    let next = if view.is_last {
        "See results"
    } else {
        "Next →"
    };
    items.push((MenuItem::Next, next.to_string()));
    items
}

/// Fill `filled` of `BAR_WIDTH` cells.
fn bar(filled: usize) -> String {
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

/// Progress line shown above each question.
fn render_progress(view: &QuestionView<'_>) -> String {
    let filled = (view.progress.fraction() * BAR_WIDTH as f64).round() as usize;
    format!("{} {}", bar(filled), view.progress)
}

/// One score bar, e.g. `E   3 ████████████░░░░░░░░ 2   I`.
fn render_pair(pair: &ScorePair) -> String {
    let cells = match pair.percentages() {
        Some((first, _)) => bar((first / 100.0 * BAR_WIDTH as f64).round() as usize),
        None => "·".repeat(BAR_WIDTH),
    };
    format!(
        "{} {:>3} {} {:<3} {}",
        pair.axis.first(),
        pair.first,
        cells,
        pair.second,
        pair.axis.second()
    )
}

/// The results screen: type code, profile and the four score bars.
pub fn render_outcome(outcome: &Outcome, profile: Option<&str>) -> String {
    let mut lines = vec![format!("Your type: {}", outcome.code)];
    if let Some(profile) = profile {
        lines.push(String::new());
        lines.push(profile.to_string());
    }
    lines.push(String::new());
    lines.extend(outcome.pairs.iter().map(render_pair));
    lines.join("\n")
}

/// Dialoguer backend for interactive CLI questionnaires.
///
/// Shows one question at a time with a progress bar. Picking an option
/// records it and moves on; "Previous" and "Next" navigate freely, and
/// "See results" on the last question scores the test or jumps back to the
/// first unanswered question.
#[derive(Debug, Clone)]
pub struct DialoguerBackend {
    /// Use colorful theme for prompts.
    colorful: bool,
}

impl Default for DialoguerBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl DialoguerBackend {
    /// Create a new Dialoguer backend with default (colorful) theme.
    pub fn new() -> Self {
        Self { colorful: true }
    }

    /// Create a backend with plain (no color) theme.
    pub fn plain() -> Self {
        Self { colorful: false }
    }

    /// Show the current question and return the picked intent.
    fn ask(&self, view: &QuestionView<'_>) -> Result<Intent, DialoguerError> {
        let items = menu(view);
        let labels: Vec<&str> = items.iter().map(|(_, label)| label.as_str()).collect();
        let default = view.selected.map_or(0, Choice::ordinal);

        let mut builder: Select;
        let _theme;
        if self.colorful {
            _theme = ColorfulTheme::default();
            builder = Select::with_theme(&_theme);
        } else {
            builder = Select::new();
        }

        builder = builder
            .with_prompt(view.prompt)
            .items(&labels)
            .default(default);

        let selection = match builder.interact() {
            Ok(idx) => idx,
            Err(e) if is_cancelled(&e) => return Err(DialoguerError::Cancelled),
            Err(e) => return Err(DialoguerError::Dialoguer(e)),
        };

        Ok(items[selection].0.intent())
    }
}

impl QuestionnaireBackend for DialoguerBackend {
    type Error = DialoguerError;

    fn run(&self, session: &mut Session<'_>) -> Result<Outcome, Self::Error> {
        if session.state() != SessionState::InProgress {
            session.start();
        }

        let questionnaire = session.questionnaire();
        if let Some(title) = questionnaire.title() {
            println!("{title}");
            println!();
        }
        if let Some(prelude) = questionnaire.prelude() {
            println!("{prelude}");
            println!();
        }

        let outcome = loop {
            let view = session.view();
            println!("{}", render_progress(&view));

            match session.dispatch(self.ask(&view)?) {
                Ok(Transition::Completed(outcome)) => break outcome,
                Ok(_) => {}
                Err(SessionError::IncompleteAnswers { first_unanswered }) => {
                    println!(
                        "Please answer question {} before seeing results.",
                        first_unanswered + 1
                    );
                }
                Err(err) => return Err(err.into()),
            }
            println!();
        };

        println!();
        println!("{}", render_outcome(&outcome, session.profile()));

        if let Some(epilogue) = questionnaire.epilogue() {
            println!();
            println!("{epilogue}");
        }

        Ok(outcome)
    }
}
