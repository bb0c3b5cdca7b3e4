//! The simplified fallback renderer.
//!
//! Used when the primary renderer fails. Ignores the field selection and
//! emits a fixed set of columns with minimal formatting, so it has as
//! few ways to fail as possible.

use crate::{
    analytics::resolve_category_name,
    export::ExportTotals,
    format::{format_currency, format_display_date, format_signed_currency},
    model::{Category, Transaction},
};

/// Renders the filtered records as a plain tab-separated text artifact
/// with the title, generation date, and summary block the primary
/// renderers also emit.
pub(super) fn render(
    records: &[Transaction],
    categories: &[Category],
    title: &str,
    totals: &ExportTotals,
    generated_on: time::Date,
) -> String {
    let mut lines = vec![
        title.to_owned(),
        format!("Generated on: {}", format_display_date(generated_on)),
        String::new(),
        "FINANCIAL SUMMARY".to_owned(),
        format!("Total Income: {}", format_currency(totals.total_income)),
        format!("Total Expenses: {}", format_currency(totals.total_expenses)),
        format!("Net Balance: {}", format_currency(totals.net_balance)),
    ];

    if totals.total_income == 0.0 && totals.total_expenses > 0.0 {
        lines.push(
            "Note: no income transactions in this selection, the net balance reflects expenses only."
                .to_owned(),
        );
    }

    lines.push(String::new());
    lines.push("TRANSACTION DETAILS".to_owned());
    lines.push("Date\tDescription\tCategory\tType\tAmount".to_owned());

    for record in records {
        lines.push(format!(
            "{}\t{}\t{}\t{}\t{}",
            format_display_date(record.date),
            record.description,
            resolve_category_name(record, categories),
            record.kind,
            format_signed_currency(record.amount, record.kind),
        ));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::render;
    use crate::{
        export::ExportTotals,
        model::{Transaction, TransactionKind},
    };

    #[test]
    fn renders_fixed_columns_with_summary() {
        let records = vec![Transaction {
            id: 1,
            amount: 300.0,
            description: "Groceries".to_owned(),
            kind: TransactionKind::Expense,
            category_id: None,
            category_name: Some("Food".to_owned()),
            date: date!(2025 - 01 - 20),
        }];
        let totals = ExportTotals {
            total_income: 0.0,
            total_expenses: 300.0,
            net_balance: -300.0,
        };

        let text = render(
            &records,
            &[],
            "Transaction Report",
            &totals,
            date!(2025 - 03 - 01),
        );

        assert!(text.starts_with("Transaction Report"));
        assert!(text.contains("Total Expenses: $300.00"));
        assert!(text.contains("no income transactions in this selection"));
        assert!(text.contains("20/01/2025\tGroceries\tFood\tEXPENSE\t-$300.00"));
    }

    #[test]
    fn tolerates_zero_records() {
        let totals = ExportTotals {
            total_income: 0.0,
            total_expenses: 0.0,
            net_balance: 0.0,
        };

        let text = render(&[], &[], "Transaction Report", &totals, date!(2025 - 03 - 01));

        assert!(text.contains("FINANCIAL SUMMARY"));
        assert!(text.contains("TRANSACTION DETAILS"));
    }
}
