//! Runtime settings for fintrack
//!
//! The tool persists nothing, so settings are an in-memory value with
//! sensible defaults. They only govern how reports are rendered.

use serde::{Deserialize, Serialize};

/// User settings for report rendering
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Currency symbol prefixed to amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Whether report output uses ANSI colors
    #[serde(default = "default_use_color")]
    pub use_color: bool,
}

fn default_currency() -> String {
    "€".to_string()
}

fn default_use_color() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency_symbol: default_currency(),
            use_color: default_use_color(),
        }
    }
}

impl Settings {
    /// Settings with colors disabled, for plain-text output
    pub fn plain() -> Self {
        Self {
            use_color: false,
            ..Self::default()
        }
    }
}
