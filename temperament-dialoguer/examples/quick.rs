//! A four-question test with a plain theme, restartable.
//!
//! Run with: cargo run -p temperament-dialoguer --example quick

use dialoguer::Confirm;
use temperament::{QuestionnaireBackend, Session};
use temperament_dialoguer::DialoguerBackend;

fn main() -> anyhow::Result<()> {
    let questionnaire = example_questionnaires::quick_four()?;
    let backend = DialoguerBackend::plain();
    let mut session = Session::new(&questionnaire);

    loop {
        session.start();
        backend.run(&mut session)?;

        let again = Confirm::new()
            .with_prompt("Take the test again?")
            .default(false)
            .interact()?;
        if !again {
            break;
        }
    }
    Ok(())
}
