//! Open Trivia DB adapter
//!
//! - [`request::ApiRequest`]: builds the GET URL (`amount` plus optional filters)
//! - [`client::OpenTdbClient`]: [`QuestionSource`](trivia_application::QuestionSource) over reqwest
//! - [`envelope::ApiResponseEnvelope`]: response parsing and validation
//! - [`error::OpenTdbError`]: client construction errors

pub mod client;
pub mod envelope;
pub mod error;
pub mod request;
