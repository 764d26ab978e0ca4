//! The 20-question MBTI test in the terminal.
//!
//! Run with: cargo run -p temperament-dialoguer --example mbti [questionnaire.json]
//!
//! Without an argument the bundled questionnaire is used. Set `RUST_LOG=debug`
//! to trace session transitions on stderr.

use std::fs::File;

use anyhow::Context;
use temperament::Questionnaire;
use temperament_dialoguer::DialoguerBackend;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let questionnaire = match std::env::args().nth(1) {
        Some(path) => {
            let file = File::open(&path).with_context(|| format!("opening {path}"))?;
            Questionnaire::from_json_reader(file).with_context(|| format!("loading {path}"))?
        }
        None => example_questionnaires::mbti()?,
    };

    let outcome = temperament::run(&questionnaire, &DialoguerBackend::new())?;
    println!();
    println!("Result code: {}", outcome.code);
    Ok(())
}
