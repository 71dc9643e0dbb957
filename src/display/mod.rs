//! Display formatting for terminal output
//!
//! Provides utilities for formatting transactions and report values for
//! terminal display, including ANSI colors behind a settings switch.

pub mod report;
pub mod transaction;

pub use report::{bold, bold_cyan, cyan, green, red, yellow};
pub use transaction::{format_transaction_line, format_transaction_list};
