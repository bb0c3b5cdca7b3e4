//! Expense breakdown grouped by category display name.

use std::{cmp::Ordering, collections::HashMap};

use crate::model::{Category, Transaction, TransactionKind};

/// The label expenses are attributed to when their category cannot be
/// resolved. Unresolvable transactions are never dropped from the totals.
pub const UNRESOLVED_LABEL: &str = "Unknown";

/// Fixed color palette cycled across breakdown slices in sort order
/// (index modulo palette length), legible in both light and dark themes.
pub const CHART_COLORS: [&str; 10] = [
    "#3B82F6", "#EF4444", "#10B981", "#F59E0B", "#8B5CF6", "#EC4899", "#14B8A6", "#F97316",
    "#84CC16", "#6366F1",
];

/// One category's share of total expenses.
#[derive(Debug, Clone, PartialEq)]
pub struct CategorySlice {
    /// The resolved category display name.
    pub name: String,
    /// Sum of expense amounts attributed to this category.
    pub amount: f64,
    /// This slice's share of the total, in percent. Zero for every slice
    /// when the total is zero, never NaN.
    pub percentage: f64,
    /// Display color assigned from [CHART_COLORS].
    pub color: &'static str,
}

/// Groups expense transactions by resolved category name, descending by
/// amount.
///
/// Name resolution tries the category list by id first, then the
/// display-name hint carried on the transaction, then [UNRESOLVED_LABEL].
/// Ties keep first-encounter order; colors are therefore deterministic
/// for a given input.
pub fn expense_breakdown(
    transactions: &[Transaction],
    categories: &[Category],
) -> Vec<CategorySlice> {
    let mut encounter_order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, f64> = HashMap::new();

    let expenses = transactions
        .iter()
        .filter(|transaction| transaction.kind == TransactionKind::Expense);

    for transaction in expenses {
        let name = resolve_category_name(transaction, categories);

        if !totals.contains_key(&name) {
            encounter_order.push(name.clone());
        }

        *totals.entry(name).or_insert(0.0) += transaction.amount;
    }

    let total_expenses: f64 = totals.values().sum();

    let mut sums: Vec<(String, f64)> = encounter_order
        .into_iter()
        .map(|name| {
            let amount = totals[&name];
            (name, amount)
        })
        .collect();

    // Stable sort preserves encounter order for equal amounts.
    sums.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    sums.into_iter()
        .enumerate()
        .map(|(index, (name, amount))| CategorySlice {
            name,
            amount,
            percentage: if total_expenses > 0.0 {
                amount / total_expenses * 100.0
            } else {
                0.0
            },
            color: CHART_COLORS[index % CHART_COLORS.len()],
        })
        .collect()
}

/// Resolves the display name for a transaction's category.
///
/// The transaction's own kind decides whether it is an expense; the
/// referenced category's declared kind is deliberately not consulted.
pub(crate) fn resolve_category_name(transaction: &Transaction, categories: &[Category]) -> String {
    categories
        .iter()
        .find(|category| Some(category.id) == transaction.category_id)
        .map(|category| category.name.clone())
        .or_else(|| transaction.category_name.clone())
        .unwrap_or_else(|| UNRESOLVED_LABEL.to_owned())
}
