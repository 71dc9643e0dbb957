//! Ledger container and aggregate computations
//!
//! The ledger owns the ordered transaction sequence. Appends go through
//! [`Ledger::add`], which validates at the ingestion boundary; every
//! aggregate below is a pure single-pass read over the sequence. Writers
//! need `&mut Ledger`, readers take `&Ledger`, so the single-writer
//! discipline is enforced by the borrow checker.

use crate::error::{FintrackError, FintrackResult};
use crate::models::{Money, Transaction};

/// An append-only, ordered collection of transactions
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from a sequence of transactions, validating each one
    pub fn from_transactions(
        transactions: impl IntoIterator<Item = Transaction>,
    ) -> FintrackResult<Self> {
        let mut ledger = Self::new();
        for transaction in transactions {
            ledger.add(transaction)?;
        }
        Ok(ledger)
    }

    /// Append a transaction
    ///
    /// Rejects negative amounts and duplicate ids; on rejection the ledger
    /// is left unchanged.
    pub fn add(&mut self, transaction: Transaction) -> FintrackResult<()> {
        transaction
            .validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        if self.transactions.iter().any(|t| t.id == transaction.id) {
            return Err(FintrackError::duplicate_transaction(
                transaction.id.to_string(),
            ));
        }

        self.transactions.push(transaction);
        Ok(())
    }

    /// All transactions in insertion order
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Iterate over transactions in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// Number of transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Check if the ledger holds no transactions
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Sum of all income amounts
    pub fn total_income(&self) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount)
            .sum()
    }

    /// Sum of all expense amounts
    pub fn total_expenses(&self) -> Money {
        self.transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount)
            .sum()
    }

    /// Total income minus total expenses; negative when spending exceeds income
    pub fn balance(&self) -> Money {
        self.total_income() - self.total_expenses()
    }

    /// Transactions whose category matches exactly, in insertion order
    pub fn by_category(&self, category: &str) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.category == category)
            .collect()
    }

    /// The expense with the strictly greatest amount
    ///
    /// The running maximum starts at zero and the comparison is strict, so
    /// a ledger whose expenses all have a zero amount reports no largest
    /// expense, the same as a ledger with no expenses at all. Ties keep the
    /// first transaction in insertion order.
    pub fn largest_expense(&self) -> Option<&Transaction> {
        let mut max_amount = Money::zero();
        let mut largest = None;
        for transaction in &self.transactions {
            if transaction.is_expense() && transaction.amount > max_amount {
                max_amount = transaction.amount;
                largest = Some(transaction);
            }
        }
        largest
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.iter()
    }
}
