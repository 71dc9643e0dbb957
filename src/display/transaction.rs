//! Transaction display formatting
//!
//! Renders the numbered transaction listing that opens the console report.

use crate::config::Settings;
use crate::display::report::{bold, bold_cyan, green, red, yellow};
use crate::models::{Transaction, TransactionKind};

/// Format a single transaction as a numbered listing line
pub fn format_transaction_line(
    index: usize,
    transaction: &Transaction,
    settings: &Settings,
) -> String {
    let type_label = match transaction.kind {
        TransactionKind::Income => "[INCOME]",
        TransactionKind::Expense => "[EXPENSE]",
    };

    let amount = transaction
        .amount
        .format_with_symbol(&settings.currency_symbol);
    let colored_amount = match transaction.kind {
        TransactionKind::Income => green(&amount, settings.use_color),
        TransactionKind::Expense => red(&amount, settings.use_color),
    };

    let colored_category = yellow(
        &format!("({})", transaction.category),
        settings.use_color,
    );

    format!(
        "{}. {} {} - {} {}",
        index + 1,
        type_label,
        transaction.description,
        colored_amount,
        colored_category
    )
}

/// Format the full transaction listing with its header
pub fn format_transaction_list(transactions: &[Transaction], settings: &Settings) -> String {
    let mut output = String::new();

    output.push('\n');
    output.push_str(&bold_cyan(
        "💰 PERSONAL FINANCE TRACKER 💰",
        settings.use_color,
    ));
    output.push_str("\n\n");
    output.push_str(&bold("All Transactions:", settings.use_color));
    output.push_str("\n\n");

    if transactions.is_empty() {
        output.push_str("No transactions recorded.\n");
    } else {
        for (index, transaction) in transactions.iter().enumerate() {
            output.push_str(&format_transaction_line(index, transaction, settings));
            output.push('\n');
        }
    }

    output.push('\n');
    output
}
