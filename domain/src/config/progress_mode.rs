//! Progress display mode value object

use serde::{Deserialize, Serialize};

/// How fetch progress is shown on the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProgressMode {
    /// One line before and one after the request (default)
    #[default]
    Plain,
    /// Animated spinner while waiting
    Spinner,
    /// Nothing at all
    None,
}
