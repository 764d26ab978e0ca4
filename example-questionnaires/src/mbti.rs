use temperament_types::{DefinitionError, Questionnaire};

/// The 20-question MBTI bank with descriptions for all 16 types.
///
/// Five questions per axis, cycling E/I, S/N, T/F, J/P. The first option of
/// every question is the first-listed pole (E, S, T or J).
pub const MBTI_JSON: &str = include_str!("../data/mbti.json");

/// Load the embedded MBTI questionnaire.
pub fn mbti() -> Result<Questionnaire, DefinitionError> {
    Questionnaire::from_json_str(MBTI_JSON)
}
