//! Core domain concepts shared across all subdomains.
//!
//! - [`error::DomainError`]: domain-level errors
//! - [`html::decode_entities`]: HTML entity decoding for upstream text
//! - [`string::preview`]: short single-line previews for logs

pub mod error;
pub mod html;
pub mod string;
