//! Average expense per category report
//!
//! For each category with at least one expense record, the total, the
//! record count, and the average amount rounded half up at the cent. Rows
//! follow the first appearance of each category among expense records.

use std::collections::HashMap;

use crate::config::Settings;
use crate::display::report::bold_cyan;
use crate::ledger::Ledger;
use crate::models::Money;

/// Running totals for one category
#[derive(Debug, Clone, Copy, Default)]
struct CategoryAccumulator {
    sum: Money,
    count: usize,
}

/// One row of the averages report
#[derive(Debug, Clone)]
pub struct CategoryAverageRow {
    /// Category label
    pub category: String,
    /// Sum of expense amounts in the category
    pub total: Money,
    /// Number of expense records in the category
    pub count: usize,
    /// Average expense amount, rounded half up at the cent
    pub average: Money,
}

/// Per-category expense averages for a ledger
#[derive(Debug, Clone)]
pub struct CategoryAveragesReport {
    /// Rows in first-appearance order of each category among expenses
    pub rows: Vec<CategoryAverageRow>,
}

impl CategoryAveragesReport {
    /// Compute the averages in one pass over the ledger
    ///
    /// Categories without expense records do not appear, so there is never
    /// a division by zero.
    pub fn generate(ledger: &Ledger) -> Self {
        let mut order: Vec<String> = Vec::new();
        let mut accumulators: HashMap<String, CategoryAccumulator> = HashMap::new();

        for transaction in ledger.iter().filter(|t| t.is_expense()) {
            let accumulator = accumulators
                .entry(transaction.category.clone())
                .or_insert_with(|| {
                    order.push(transaction.category.clone());
                    CategoryAccumulator::default()
                });
            accumulator.sum += transaction.amount;
            accumulator.count += 1;
        }

        let rows = order
            .into_iter()
            .map(|category| {
                let accumulator = accumulators[&category];
                CategoryAverageRow {
                    average: accumulator.sum.div_round_half_up(accumulator.count as i64),
                    total: accumulator.sum,
                    count: accumulator.count,
                    category,
                }
            })
            .collect();

        Self { rows }
    }

    /// Check if no category had any expense records
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Look up the average for a category, if it has expense records
    pub fn average_for(&self, category: &str) -> Option<Money> {
        self.rows
            .iter()
            .find(|row| row.category == category)
            .map(|row| row.average)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let mut output = String::new();

        output.push_str(&bold_cyan(
            "📈 AVERAGE EXPENSE PER CATEGORY 📈",
            settings.use_color,
        ));
        output.push_str("\n\n");

        if self.is_empty() {
            output.push_str("No expense transactions recorded.\n\n");
            return output;
        }

        output.push_str(&format!(
            "{:<20} {:>12} {:>6}\n",
            "Category", "Average", "Count"
        ));
        output.push_str(&"-".repeat(40));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<20} {:>12} {:>6}\n",
                row.category,
                row.average.format_with_symbol(&settings.currency_symbol),
                row.count
            ));
        }

        output.push('\n');
        output
    }
}
