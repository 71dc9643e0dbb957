//! fintrack - Terminal-based personal finance ledger reporting
//!
//! This library provides the core functionality for the fintrack reporting
//! tool. It holds an in-memory ledger of income and expense transactions
//! and produces aggregate figures plus a formatted console report.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Runtime settings for report rendering
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, ids, money)
//! - `ledger`: The owned transaction container and its aggregate reads
//! - `seed`: The fixed startup data set
//! - `reports`: Summary and per-category average reports
//! - `display`: Terminal formatting helpers
//!
//! # Example
//!
//! ```rust
//! use fintrack::ledger::Ledger;
//! use fintrack::models::{Money, Transaction, TransactionKind};
//!
//! let mut ledger = Ledger::new();
//! ledger.add(Transaction::new(
//!     TransactionKind::Income,
//!     "Salary",
//!     Money::from_cents(200_000),
//!     "Monthly salary",
//! ))?;
//! assert_eq!(ledger.balance(), Money::from_cents(200_000));
//! # Ok::<(), fintrack::FintrackError>(())
//! ```

pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod seed;

pub use error::FintrackError;
