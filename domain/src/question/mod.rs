//! Question subdomain
//!
//! - [`raw::RawQuestionRecord`]: one loosely-typed record from the upstream service
//! - [`kind::QuestionKind`]: the record's `type` tag
//! - [`entities::Question`]: a normalized, displayable question
//! - [`normalize`](normalize::normalize): raw record → question

pub mod entities;
pub mod kind;
pub mod normalize;
pub mod raw;
