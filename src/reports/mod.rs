//! Reports for the ledger
//!
//! Each report is a plain struct produced by a `generate` constructor and
//! rendered for the terminal by `format_terminal`.

pub mod category_averages;
pub mod summary;

pub use category_averages::{CategoryAverageRow, CategoryAveragesReport};
pub use summary::SummaryReport;
