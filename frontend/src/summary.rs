use std::collections::BTreeMap;

use crate::expense::Expense;

/// Label for expenses with no category.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Totals derived from the loaded collection. Always recomputed from scratch.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Summary {
    pub total: f64,
    pub by_category: BTreeMap<String, f64>,
}

impl Summary {
    pub fn of(expenses: &[Expense]) -> Self {
        expenses.iter().fold(Self::default(), |mut summary, expense| {
            let category = expense.category.as_deref().unwrap_or(UNCATEGORIZED);
            summary.total += expense.amount;
            *summary.by_category.entry(category.to_string()).or_insert(0.0) += expense.amount;
            summary
        })
    }

    pub fn is_empty(&self) -> bool {
        self.by_category.is_empty()
    }
}
