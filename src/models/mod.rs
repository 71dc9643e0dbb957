//! Core data models for fintrack
//!
//! This module contains the data structures that represent the ledger
//! domain: transactions, their kinds, ids, and monetary amounts.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::TransactionId;
pub use money::Money;
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
