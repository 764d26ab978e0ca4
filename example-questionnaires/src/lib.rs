//! Ready-made questionnaires for examples and tests.

pub mod mbti;
pub mod quick;

pub use mbti::{MBTI_JSON, mbti};
pub use quick::quick_four;
