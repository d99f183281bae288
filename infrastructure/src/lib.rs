//! Infrastructure layer for trivia-quiz
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod opentdb;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigLoader, FileApiConfig, FileConfig, FileOutputConfig};
pub use opentdb::{
    client::OpenTdbClient,
    envelope::{ApiResponseEnvelope, ResponseCode},
    error::OpenTdbError,
    request::ApiRequest,
};
