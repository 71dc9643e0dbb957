//! Transaction model
//!
//! Represents a single recorded income or expense event. Transactions are
//! immutable once created; the owning ledger only ever appends.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::TransactionId;
use super::money::Money;

/// Whether a transaction adds to or draws from the balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
        }
    }
}

/// A single recorded income or expense event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Income or expense
    pub kind: TransactionKind,

    /// Free-text category label, matched exactly (case-sensitive)
    pub category: String,

    /// Amount; non-negative for every stored transaction
    pub amount: Money,

    /// Free-text description
    pub description: String,
}

impl Transaction {
    /// Create a new transaction with a fresh id
    pub fn new(
        kind: TransactionKind,
        category: impl Into<String>,
        amount: Money,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            kind,
            category: category.into(),
            amount,
            description: description.into(),
        }
    }

    /// Check if this is an income transaction
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense transaction
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }
        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} ({})",
            self.kind, self.description, self.amount, self.category
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Transaction amount must not be negative, got {}", amount)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
