//! Column selection and row projection for export artifacts.

use crate::{
    analytics::resolve_category_name,
    format::{format_display_date, format_signed_currency},
    model::{Category, Transaction},
};

/// The user-chosen subset of columns included in an export artifact.
///
/// Columns always appear in the fixed canonical order id, date,
/// description, type, category, amount, whichever subset is selected.
/// An empty selection produces rows with no columns; it is not rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSelection {
    /// Include the record identifier.
    pub id: bool,
    /// Include the occurrence date.
    pub date: bool,
    /// Include the free-text description.
    pub description: bool,
    /// Include the income/expense type.
    pub kind: bool,
    /// Include the resolved category name.
    pub category: bool,
    /// Include the formatted amount.
    pub amount: bool,
}

impl Default for FieldSelection {
    /// Every column selected.
    fn default() -> Self {
        Self {
            id: true,
            date: true,
            description: true,
            kind: true,
            category: true,
            amount: true,
        }
    }
}

impl FieldSelection {
    /// The header labels of the selected columns, in canonical order.
    pub fn headers(&self) -> Vec<&'static str> {
        [
            ("ID", self.id),
            ("Date", self.date),
            ("Description", self.description),
            ("Type", self.kind),
            ("Category", self.category),
            ("Amount", self.amount),
        ]
        .into_iter()
        .filter_map(|(label, selected)| selected.then_some(label))
        .collect()
    }

    /// Whether no column is selected at all.
    pub fn is_empty(&self) -> bool {
        self.headers().is_empty()
    }
}

/// Projects each record into a display row containing the selected
/// columns in canonical order.
///
/// Dates become calendar-date strings and amounts carry a currency
/// symbol with a sign derived from the transaction kind, see
/// [crate::format].
pub fn project_rows(
    records: &[Transaction],
    categories: &[Category],
    selection: &FieldSelection,
) -> Vec<Vec<String>> {
    records
        .iter()
        .map(|record| project_row(record, categories, selection))
        .collect()
}

fn project_row(
    record: &Transaction,
    categories: &[Category],
    selection: &FieldSelection,
) -> Vec<String> {
    let mut row = Vec::new();

    if selection.id {
        row.push(record.id.to_string());
    }
    if selection.date {
        row.push(format_display_date(record.date));
    }
    if selection.description {
        row.push(record.description.clone());
    }
    if selection.kind {
        row.push(record.kind.as_str().to_owned());
    }
    if selection.category {
        row.push(resolve_category_name(record, categories));
    }
    if selection.amount {
        row.push(format_signed_currency(record.amount, record.kind));
    }

    row
}
