//! Interactive quiz adapters

pub mod console;
