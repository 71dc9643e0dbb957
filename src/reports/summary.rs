//! Financial summary report
//!
//! Totals, balance, the largest expense, and the transaction count for a
//! ledger, with terminal rendering.

use crate::config::Settings;
use crate::display::report::{bold, bold_cyan, cyan, green, red};
use crate::ledger::Ledger;
use crate::models::{Money, Transaction};

/// Summary of a ledger's aggregate figures
#[derive(Debug, Clone)]
pub struct SummaryReport {
    /// Sum of all income amounts
    pub total_income: Money,
    /// Sum of all expense amounts
    pub total_expenses: Money,
    /// Income minus expenses
    pub balance: Money,
    /// The expense with the strictly greatest amount, if any
    pub largest_expense: Option<Transaction>,
    /// Number of transactions in the ledger
    pub transaction_count: usize,
}

impl SummaryReport {
    /// Compute the summary for a ledger
    pub fn generate(ledger: &Ledger) -> Self {
        Self {
            total_income: ledger.total_income(),
            total_expenses: ledger.total_expenses(),
            balance: ledger.balance(),
            largest_expense: ledger.largest_expense().cloned(),
            transaction_count: ledger.len(),
        }
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let use_color = settings.use_color;
        let symbol = &settings.currency_symbol;
        let mut output = String::new();

        output.push_str(&bold_cyan("📊 FINANCIAL SUMMARY 📊", use_color));
        output.push_str("\n\n");

        output.push_str(&format!(
            "Total Income: {}\n",
            green(&self.total_income.format_with_symbol(symbol), use_color)
        ));
        output.push_str(&format!(
            "Total Expenses: {}\n",
            red(&self.total_expenses.format_with_symbol(symbol), use_color)
        ));

        // balance goes red once spending exceeds income
        let balance_text = self.balance.format_with_symbol(symbol);
        let colored_balance = if self.balance.is_negative() {
            red(&balance_text, use_color)
        } else {
            cyan(&balance_text, use_color)
        };
        output.push_str(&format!("Current Balance: {}\n", colored_balance));

        match &self.largest_expense {
            Some(expense) => {
                output.push_str(&format!(
                    "\nLargest Expense: {} ({})\n",
                    expense.description,
                    red(&expense.amount.format_with_symbol(symbol), use_color)
                ));
            }
            None => output.push_str("\nLargest Expense: (none)\n"),
        }

        output.push_str(&format!(
            "Total Transactions: {}\n\n",
            bold(&self.transaction_count.to_string(), use_color)
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TransactionKind;

    fn txn(kind: TransactionKind, category: &str, cents: i64) -> Transaction {
        Transaction::new(kind, category, Money::from_cents(cents), category)
    }

    fn sample_ledger() -> Ledger {
        Ledger::from_transactions([
            txn(TransactionKind::Income, "Salary", 200_000),
            txn(TransactionKind::Expense, "Food", 5_000),
            txn(TransactionKind::Expense, "Food", 3_000),
            txn(TransactionKind::Expense, "Rent", 80_000),
        ])
        .unwrap()
    }

    #[test]
    fn test_generate() {
        let report = SummaryReport::generate(&sample_ledger());
        assert_eq!(report.total_income, Money::from_cents(200_000));
        assert_eq!(report.total_expenses, Money::from_cents(88_000));
        assert_eq!(report.balance, Money::from_cents(112_000));
        assert_eq!(report.transaction_count, 4);
        assert_eq!(report.largest_expense.unwrap().category, "Rent");
    }

    #[test]
    fn test_generate_empty_ledger() {
        let report = SummaryReport::generate(&Ledger::new());
        assert_eq!(report.total_income, Money::zero());
        assert_eq!(report.total_expenses, Money::zero());
        assert_eq!(report.balance, Money::zero());
        assert!(report.largest_expense.is_none());
        assert_eq!(report.transaction_count, 0);
    }

    #[test]
    fn test_format_terminal_plain() {
        let output = SummaryReport::generate(&sample_ledger()).format_terminal(&Settings::plain());
        assert!(output.contains("FINANCIAL SUMMARY"));
        assert!(output.contains("Total Income: €2000.00"));
        assert!(output.contains("Total Expenses: €880.00"));
        assert!(output.contains("Current Balance: €1120.00"));
        assert!(output.contains("Largest Expense: Rent (€800.00)"));
        assert!(output.contains("Total Transactions: 4"));
    }

    #[test]
    fn test_format_terminal_absent_largest_expense() {
        let ledger =
            Ledger::from_transactions([txn(TransactionKind::Income, "Gift", 10_000)]).unwrap();
        let output = SummaryReport::generate(&ledger).format_terminal(&Settings::plain());
        assert!(output.contains("Largest Expense: (none)"));
    }

    #[test]
    fn test_format_terminal_negative_balance_is_red() {
        let ledger = Ledger::from_transactions([
            txn(TransactionKind::Income, "Gift", 10_000),
            txn(TransactionKind::Expense, "Rent", 80_000),
        ])
        .unwrap();
        let output = SummaryReport::generate(&ledger).format_terminal(&Settings::default());
        assert!(output.contains("Current Balance: \x1b[31m-€700.00\x1b[0m"));
    }

    #[test]
    fn test_format_terminal_positive_balance_is_cyan() {
        let output =
            SummaryReport::generate(&sample_ledger()).format_terminal(&Settings::default());
        assert!(output.contains("Current Balance: \x1b[36m€1120.00\x1b[0m"));
    }
}
