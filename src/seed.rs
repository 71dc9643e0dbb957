//! Startup seed data
//!
//! The ledger contents are fixed at startup; this module builds the
//! built-in data set the report runs over.

use crate::error::FintrackResult;
use crate::ledger::Ledger;
use crate::models::{Money, Transaction, TransactionKind};

/// Build the ledger the program starts with
pub fn sample_ledger() -> FintrackResult<Ledger> {
    Ledger::from_transactions([
        Transaction::new(
            TransactionKind::Income,
            "Salary",
            Money::from_cents(200_000),
            "Monthly salary",
        ),
        Transaction::new(
            TransactionKind::Expense,
            "Rent",
            Money::from_cents(80_000),
            "August rent",
        ),
        Transaction::new(
            TransactionKind::Expense,
            "Food",
            Money::from_cents(5_000),
            "Groceries",
        ),
        Transaction::new(
            TransactionKind::Expense,
            "Food",
            Money::from_cents(3_000),
            "Dinner out",
        ),
        Transaction::new(
            TransactionKind::Income,
            "Freelance",
            Money::from_cents(35_000),
            "Website project",
        ),
        Transaction::new(
            TransactionKind::Expense,
            "Transport",
            Money::from_cents(6_250),
            "Monthly transit pass",
        ),
        Transaction::new(
            TransactionKind::Expense,
            "Entertainment",
            Money::from_cents(4_500),
            "Concert tickets",
        ),
        Transaction::new(
            TransactionKind::Expense,
            "Utilities",
            Money::from_cents(9_320),
            "Electricity and internet",
        ),
    ])
}
