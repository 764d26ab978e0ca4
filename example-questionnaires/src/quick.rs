use temperament_types::{
    AnswerOption, DefinitionError, Pole, ProfileTable, Question, Questionnaire, TypeCode,
};

/// A four-question test, one question per axis, built in code.
///
/// Shares its profile texts with the embedded MBTI bank.
pub fn quick_four() -> Result<Questionnaire, DefinitionError> {
    let questions = vec![
        Question::new(
            "Friday night:",
            AnswerOption::new("A crowded party", Pole::Extraversion),
            AnswerOption::new("A book at home", Pole::Introversion),
        )?,
        Question::new(
            "You trust:",
            AnswerOption::new("What you have seen work", Pole::Sensing),
            AnswerOption::new("What could work", Pole::Intuition),
        )?,
        Question::new(
            "A friend's plan has a flaw. You:",
            AnswerOption::new("Point it out", Pole::Thinking),
            AnswerOption::new("Ask how they feel about it", Pole::Feeling),
        )?,
        Question::new(
            "Holiday packing:",
            AnswerOption::new("A checklist, a week ahead", Pole::Judging),
            AnswerOption::new("Whatever fits, an hour before", Pole::Perceiving),
        )?,
    ];

    let mbti = crate::mbti()?;
    let profiles = ProfileTable::new(TypeCode::all().map(|code| {
        let text = mbti.profiles().describe(code).unwrap_or_default();
        (code, text.to_string())
    }))?;

    Ok(Questionnaire::new(questions, profiles)?.with_title("Quick four"))
}
