//! Integration tests for the questionnaire engine.

use example_questionnaires::{mbti, quick_four};
use temperament::{
    AnswerOption, Axis, Choice, Intent, Pole, ProfileTable, Question, Questionnaire,
    QuestionnaireBackend, ScriptError, ScriptedBackend, Session, SessionError, SessionState,
    Transition, TypeCode,
};

/// One question per entry; the first option carries the given pole.
fn questionnaire_with_firsts(firsts: &[Pole]) -> Questionnaire {
    let questions = firsts
        .iter()
        .enumerate()
        .map(|(index, &pole)| {
            Question::new(
                format!("Question {}", index + 1),
                AnswerOption::new(format!("Option {pole}"), pole),
                AnswerOption::new(format!("Option {}", pole.opposite()), pole.opposite()),
            )
            .unwrap()
        })
        .collect();
    let profiles =
        ProfileTable::new(TypeCode::all().map(|code| (code, format!("{code} profile")))).unwrap();
    Questionnaire::new(questions, profiles).unwrap()
}

fn answer_all(session: &mut Session<'_>, choice: Choice) {
    for index in 0..session.questionnaire().len() {
        session.select_option(index, choice).unwrap();
    }
}

#[test]
fn start_resets_scores_and_answers() {
    let questionnaire = mbti().unwrap();
    let mut session = Session::new(&questionnaire);
    session.start();
    answer_all(&mut session, Choice::First);
    session.finish().unwrap();

    session.start();
    assert!(session.scores().is_zero());
    assert_eq!(session.answers().len(), 20);
    assert!(session.answers().iter().all(|(_, choice)| choice.is_none()));
    assert_eq!(session.state(), SessionState::InProgress);
    assert_eq!(session.current_index(), 0);
}

#[test]
fn selection_counts_exactly_once() {
    let questionnaire = mbti().unwrap();
    let mut session = Session::new(&questionnaire);
    session.start();
    answer_all(&mut session, Choice::First);
    session.select_option(3, Choice::Second).unwrap();

    let outcome = session.finish().unwrap();
    let lifestyle = outcome.pair(Axis::Lifestyle);
    assert_eq!(lifestyle.first, 4);
    assert_eq!(lifestyle.second, 1);
    assert_eq!(session.scores().get(Pole::Perceiving), 1);
    assert_eq!(session.scores().total(), 20);
}

#[test]
fn finish_is_idempotent() {
    let questionnaire = mbti().unwrap();
    let mut session = Session::new(&questionnaire);
    session.start();
    for index in 0..20 {
        let choice = if index % 3 == 0 {
            Choice::Second
        } else {
            Choice::First
        };
        session.select_option(index, choice).unwrap();
    }

    let first = session.finish().unwrap();
    let scores = *session.scores();
    let second = session.finish().unwrap();
    assert_eq!(first, second);
    assert_eq!(*session.scores(), scores);
    assert_eq!(session.outcome(), Some(&first));
}

#[test]
fn ties_resolve_to_second_pole() {
    // Two questions per axis, one answer for each pole.
    let questionnaire = questionnaire_with_firsts(&[
        Pole::Extraversion,
        Pole::Introversion,
        Pole::Sensing,
        Pole::Intuition,
        Pole::Thinking,
        Pole::Feeling,
        Pole::Judging,
        Pole::Perceiving,
    ]);
    let mut session = Session::new(&questionnaire);
    session.start();
    answer_all(&mut session, Choice::First);

    let outcome = session.finish().unwrap();
    assert_eq!(outcome.code.to_string(), "INFP");
    for pair in outcome.pairs {
        assert_eq!((pair.first, pair.second), (1, 1));
    }
}

#[test]
fn incomplete_finish_reports_lowest_gap_and_keeps_scores() {
    let questionnaire = mbti().unwrap();
    let mut session = Session::new(&questionnaire);
    session.start();
    answer_all(&mut session, Choice::First);
    session.finish().unwrap();
    let completed_scores = *session.scores();

    session.start();
    for index in (0..20).filter(|index| ![4, 11].contains(index)) {
        session.select_option(index, Choice::Second).unwrap();
    }
    session.jump_to(7).unwrap();

    let err = session.finish().unwrap_err();
    assert_eq!(
        err,
        SessionError::IncompleteAnswers {
            first_unanswered: 4
        }
    );
    assert_eq!(err.to_string(), "Please answer question 5 before seeing results");
    assert!(session.scores().is_zero());
    assert_ne!(*session.scores(), completed_scores);
    assert_eq!(session.state(), SessionState::InProgress);
    assert_eq!(session.current_index(), 7);
}

#[test]
fn strict_majorities_yield_estj() {
    // 3xE 5xS 4xT 6xJ against 2xI 0xN 1xF 0xP, every answer the first option.
    let mut firsts = Vec::new();
    for (pole, count) in [
        (Pole::Extraversion, 3),
        (Pole::Sensing, 5),
        (Pole::Thinking, 4),
        (Pole::Judging, 6),
        (Pole::Introversion, 2),
        (Pole::Feeling, 1),
    ] {
        firsts.extend(std::iter::repeat_n(pole, count));
    }
    let questionnaire = questionnaire_with_firsts(&firsts);
    let mut session = Session::new(&questionnaire);
    session.start();
    answer_all(&mut session, Choice::First);

    let outcome = session.finish().unwrap();
    assert_eq!(outcome.code.to_string(), "ESTJ");
    let counts: Vec<(u32, u32)> = outcome
        .pairs
        .iter()
        .map(|pair| (pair.first, pair.second))
        .collect();
    assert_eq!(counts, vec![(3, 2), (5, 0), (4, 1), (6, 0)]);
    assert_eq!(session.profile(), Some("ESTJ profile"));
}

#[test]
fn one_question_per_axis_answered_infp() {
    let questionnaire = quick_four().unwrap();
    let mut session = Session::new(&questionnaire);
    session.start();
    for _ in 0..4 {
        session.choose(Choice::Second).unwrap();
    }

    let outcome = session.finish().unwrap();
    assert_eq!(outcome.code.to_string(), "INFP");
    for pair in outcome.pairs {
        assert_eq!((pair.first, pair.second), (0, 1));
    }
    assert!(
        session
            .profile()
            .is_some_and(|text| text.starts_with("Idealistic and loyal"))
    );
}

#[test]
fn reanswering_counts_only_the_last_choice() {
    let questionnaire = quick_four().unwrap();
    let mut session = Session::new(&questionnaire);
    session.start();
    session.select_option(0, Choice::Second).unwrap();
    session.select_option(0, Choice::First).unwrap();
    for index in 1..4 {
        session.select_option(index, Choice::First).unwrap();
    }

    let outcome = session.finish().unwrap();
    assert_eq!(outcome.code.to_string(), "ESTJ");
    assert_eq!(session.scores().get(Pole::Introversion), 0);
    assert_eq!(session.scores().get(Pole::Extraversion), 1);
}

#[test]
fn mbti_all_first_and_all_second() {
    let questionnaire = mbti().unwrap();

    let outcome = temperament::run(
        &questionnaire,
        &ScriptedBackend::from_choices([Choice::First; 20]),
    )
    .unwrap();
    assert_eq!(outcome.code.to_string(), "ESTJ");

    let outcome = temperament::run(
        &questionnaire,
        &ScriptedBackend::from_choices([Choice::Second; 20]),
    )
    .unwrap();
    assert_eq!(outcome.code.to_string(), "INFP");
    assert!(outcome.pairs.iter().all(|pair| pair.second == 5));
}

#[test]
fn navigation_walkthrough() {
    let questionnaire = quick_four().unwrap();
    let mut session = Session::new(&questionnaire);

    let steps = [
        (Intent::Start, Transition::Started),
        (
            Intent::Choose(Choice::First),
            Transition::Answered {
                index: 0,
                choice: Choice::First,
                advanced_to: Some(1),
            },
        ),
        (Intent::Back, Transition::Moved { from: 1, to: 0 }),
        (Intent::Back, Transition::Stayed),
        (Intent::Next, Transition::Moved { from: 0, to: 1 }),
        (Intent::Next, Transition::Moved { from: 1, to: 2 }),
        (Intent::Next, Transition::Moved { from: 2, to: 3 }),
    ];
    for (intent, expected) in steps {
        assert_eq!(session.dispatch(intent).unwrap(), expected, "{intent:?}");
    }

    // "See results" with questions 2 and 3 open jumps back to question 2.
    assert_eq!(
        session.dispatch(Intent::Next),
        Err(SessionError::IncompleteAnswers {
            first_unanswered: 1
        })
    );
    assert_eq!(session.current_index(), 1);

    session.dispatch(Intent::Choose(Choice::Second)).unwrap();
    session.dispatch(Intent::Choose(Choice::Second)).unwrap();
    session.dispatch(Intent::Choose(Choice::First)).unwrap();
    assert_eq!(session.current_index(), 3);

    let transition = session.dispatch(Intent::Next).unwrap();
    let outcome = transition.outcome().copied().unwrap();
    assert_eq!(outcome.code.to_string(), "ENFJ");
}

#[test]
fn select_out_of_range_is_rejected() {
    let questionnaire = quick_four().unwrap();
    let mut session = Session::new(&questionnaire);
    session.start();
    assert_eq!(
        session.select_option(4, Choice::First),
        Err(SessionError::QuestionOutOfRange { index: 4, len: 4 })
    );
    assert_eq!(session.answers().answered_count(), 0);
}

#[test]
fn sessions_share_a_questionnaire() {
    let questionnaire = quick_four().unwrap();
    let mut alice = Session::new(&questionnaire);
    let mut bob = Session::new(&questionnaire);
    alice.start();
    bob.start();
    answer_all(&mut alice, Choice::First);
    answer_all(&mut bob, Choice::Second);

    assert_eq!(alice.finish().unwrap().code.to_string(), "ESTJ");
    assert_eq!(bob.finish().unwrap().code.to_string(), "INFP");
}

#[test]
fn scripted_backend_redirects_on_finish() {
    let questionnaire = quick_four().unwrap();
    let backend = ScriptedBackend::new().with_intents([
        Intent::Select {
            index: 0,
            choice: Choice::First,
        },
        Intent::Finish,
        Intent::Choose(Choice::First),
        Intent::Choose(Choice::First),
        Intent::Choose(Choice::Second),
        Intent::Finish,
    ]);

    let mut session = Session::new(&questionnaire);
    let outcome = backend.run(&mut session).unwrap();
    assert_eq!(outcome.code.to_string(), "ESTP");
}

#[test]
fn scripted_backend_reports_exhaustion() {
    let questionnaire = quick_four().unwrap();
    let backend = ScriptedBackend::from_choices([Choice::First; 2]);

    let err = temperament::run(&questionnaire, &backend).unwrap_err();
    let err = err.downcast::<ScriptError>().unwrap();
    assert!(matches!(
        err,
        ScriptError::Exhausted {
            answered: 2,
            total: 4
        }
    ));
}

#[test]
fn scripted_backend_propagates_contract_errors() {
    let questionnaire = quick_four().unwrap();
    let backend = ScriptedBackend::new().with_intent(Intent::JumpTo(9));

    let mut session = Session::new(&questionnaire);
    let err = backend.run(&mut session).unwrap_err();
    assert!(matches!(
        err,
        ScriptError::Session(SessionError::QuestionOutOfRange { index: 9, len: 4 })
    ));
}
