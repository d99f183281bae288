//! Quiz subdomain: session state and final result

pub mod result;
pub mod session;
