//! Fetch progress reporting

pub mod reporter;
