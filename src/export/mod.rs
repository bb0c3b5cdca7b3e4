//! Filtering, projection, and rendering of transaction exports.
//!
//! The pipeline is: merge salaries in as synthetic income rows, apply
//! the filter specification, compute summary totals over the *filtered*
//! set, project the selected fields, render, and write the artifact.
//!
//! Rendering is a two-tier strategy: the format's primary renderer is
//! attempted first, and if it fails the simplified renderer takes over.
//! The fallback is selected through `Result` values rather than
//! unwinding, so both branches are ordinary, testable code paths.

mod document;
mod fields;
mod filter;
mod simple;
mod spreadsheet;

use std::{
    fs,
    path::{Path, PathBuf},
};

use time::Date;

use crate::{
    Error,
    model::{Category, Salary, Transaction, TransactionKind},
};

pub use fields::{FieldSelection, project_rows};
pub use filter::{
    FilterSpec, KindFilter, SALARY_CATEGORY_ID, SALARY_CATEGORY_NAME, SALARY_ID_OFFSET,
    apply_filters, merge_salaries_as_income,
};

/// Product name stamped on artifact filenames and report footers.
const PRODUCT_NAME: &str = "FinLens";

/// Filename prefix of regular export artifacts.
const ARTIFACT_PREFIX: &str = "FinLens_Transactions";

/// Filename prefix of artifacts produced by the fallback renderer.
const FALLBACK_PREFIX: &str = "FinLens_Simple_Report";

/// The default report title when the caller does not supply one.
pub const DEFAULT_TITLE: &str = "FinLens - Transaction Report";

/// The output document shape of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Tabular CSV artifact for spreadsheet applications.
    #[default]
    Spreadsheet,
    /// Paginated plain-text report.
    Document,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Spreadsheet => "csv",
            ExportFormat::Document => "txt",
        }
    }
}

/// Income and expense totals computed over the filtered record set, shown
/// inside the exported artifact itself.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportTotals {
    /// Sum of income amounts in the filtered set (salaries included,
    /// since they are merged in as income rows before filtering).
    pub total_income: f64,
    /// Sum of expense amounts in the filtered set.
    pub total_expenses: f64,
    /// Total income minus total expenses.
    pub net_balance: f64,
}

/// Sums the filtered records by kind.
pub fn export_totals(records: &[Transaction]) -> ExportTotals {
    let total_income: f64 = records
        .iter()
        .filter(|record| record.kind == TransactionKind::Income)
        .map(|record| record.amount)
        .sum();
    let total_expenses: f64 = records
        .iter()
        .filter(|record| record.kind == TransactionKind::Expense)
        .map(|record| record.amount)
        .sum();

    ExportTotals {
        total_income,
        total_expenses,
        net_balance: total_income - total_expenses,
    }
}

/// Everything the user chose about an export: which records, which
/// columns, which output shape, and an optional report title.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExportOptions {
    /// The constraints narrowing which records are exported.
    pub filter: FilterSpec,
    /// The columns projected into the artifact.
    pub selection: FieldSelection,
    /// The output document shape.
    pub format: ExportFormat,
    /// Report title; [DEFAULT_TITLE] when absent.
    pub title: Option<String>,
}

/// What an export produced and where it went.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOutcome {
    /// The path of the written artifact.
    pub path: PathBuf,
    /// How many records passed the filters (zero is valid).
    pub row_count: usize,
    /// Whether the simplified fallback renderer produced the artifact.
    pub used_fallback: bool,
}

/// Runs the full export pipeline and writes the artifact into `out_dir`.
///
/// Salaries are merged in as synthetic income rows before filtering, so
/// the filter and the in-artifact summary both see them. A filter that
/// matches nothing still produces an artifact with the title and summary
/// block; the caller decides whether to offer that to the user.
///
/// # Errors
/// Returns [Error::RenderFailed] if both renderer tiers fail, or
/// [Error::WriteFailed] if the artifact cannot be written.
pub fn export_transactions(
    transactions: &[Transaction],
    salaries: &[Salary],
    categories: &[Category],
    options: &ExportOptions,
    out_dir: &Path,
    generated_on: Date,
) -> Result<ExportOutcome, Error> {
    let combined = merge_salaries_as_income(transactions, salaries);
    let filtered = apply_filters(&combined, &options.filter);
    let totals = export_totals(&filtered);

    if filtered.is_empty() {
        tracing::warn!("no transactions matched the export filters, exporting an empty report");
    }

    let rows = project_rows(&filtered, categories, &options.selection);
    let headers = options.selection.headers();
    let title = options.title.as_deref().unwrap_or(DEFAULT_TITLE);

    let (bytes, used_fallback) = match render_primary(
        options.format,
        &rows,
        &headers,
        title,
        &totals,
        generated_on,
    ) {
        Ok(bytes) => (bytes, false),
        Err(error) => {
            tracing::warn!(
                "primary {:?} renderer failed ({error}), using simple renderer",
                options.format
            );

            let text = simple::render(&filtered, categories, title, &totals, generated_on);
            (text.into_bytes(), true)
        }
    };

    let filename = if used_fallback {
        format!("{FALLBACK_PREFIX}_{generated_on}.txt")
    } else {
        artifact_filename(&options.filter, options.format, generated_on)
    };

    let path = out_dir.join(filename);
    fs::write(&path, bytes)?;

    tracing::info!(
        "exported {} transaction(s) to {}",
        filtered.len(),
        path.display()
    );

    Ok(ExportOutcome {
        path,
        row_count: filtered.len(),
        used_fallback,
    })
}

fn render_primary(
    format: ExportFormat,
    rows: &[Vec<String>],
    headers: &[&str],
    title: &str,
    totals: &ExportTotals,
    generated_on: Date,
) -> Result<Vec<u8>, Error> {
    match format {
        ExportFormat::Spreadsheet => spreadsheet::render(rows, headers, title, totals, generated_on),
        ExportFormat::Document => {
            document::render(rows, headers, title, totals, generated_on).map(String::into_bytes)
        }
    }
}

/// Builds the deterministic artifact filename: the product prefix plus
/// the filter's date range, or the generation date when no full range
/// was specified.
fn artifact_filename(filter: &FilterSpec, format: ExportFormat, generated_on: Date) -> String {
    let date_part = match (filter.date_from, filter.date_to) {
        (Some(from), Some(to)) => format!("{from}_to_{to}"),
        _ => generated_on.to_string(),
    };

    format!("{ARTIFACT_PREFIX}_{date_part}.{}", format.extension())
}

#[cfg(test)]
mod tests {
    use time::{Date, macros::date};

    use super::{
        ExportFormat, ExportOptions, FilterSpec, KindFilter, artifact_filename, export_totals,
        export_transactions, merge_salaries_as_income,
    };
    use crate::model::{RecordId, Salary, Transaction, TransactionKind};

    fn create_test_transaction(
        id: RecordId,
        amount: f64,
        kind: TransactionKind,
        date: Date,
    ) -> Transaction {
        Transaction {
            id,
            amount,
            description: format!("transaction {id}"),
            kind,
            category_id: None,
            category_name: None,
            date,
        }
    }

    #[test]
    fn totals_are_computed_over_the_filtered_set_only() {
        let transactions = vec![
            create_test_transaction(1, 300.0, TransactionKind::Expense, date!(2025 - 01 - 10)),
            create_test_transaction(2, 600.0, TransactionKind::Expense, date!(2025 - 01 - 11)),
        ];
        let spec = FilterSpec {
            kind: KindFilter::Expense,
            min_amount: Some(500.0),
            ..FilterSpec::default()
        };

        let filtered = super::apply_filters(&transactions, &spec);
        let totals = export_totals(&filtered);

        assert_eq!(filtered.len(), 1);
        assert_eq!(totals.total_expenses, 600.0);
        assert_eq!(totals.net_balance, -600.0);
    }

    #[test]
    fn merged_salaries_are_visible_to_totals() {
        let salaries = vec![Salary {
            id: 1,
            amount: 5000.0,
            date: date!(2025 - 02 - 01),
            description: "February".to_owned(),
        }];

        let combined = merge_salaries_as_income(&[], &salaries);
        let totals = export_totals(&combined);

        assert_eq!(totals.total_income, 5000.0);
    }

    #[test]
    fn filename_uses_the_filter_date_range_when_fully_specified() {
        let spec = FilterSpec {
            date_from: Some(date!(2025 - 01 - 01)),
            date_to: Some(date!(2025 - 03 - 31)),
            ..FilterSpec::default()
        };

        let filename = artifact_filename(&spec, ExportFormat::Spreadsheet, date!(2025 - 06 - 15));

        assert_eq!(filename, "FinLens_Transactions_2025-01-01_to_2025-03-31.csv");
    }

    #[test]
    fn filename_falls_back_to_the_generation_date() {
        let spec = FilterSpec {
            date_from: Some(date!(2025 - 01 - 01)),
            ..FilterSpec::default()
        };

        let filename = artifact_filename(&spec, ExportFormat::Document, date!(2025 - 06 - 15));

        assert_eq!(filename, "FinLens_Transactions_2025-06-15.txt");
    }

    #[test]
    fn writes_a_spreadsheet_artifact() {
        let out_dir = tempfile::tempdir().unwrap();
        let transactions = vec![create_test_transaction(
            1,
            300.0,
            TransactionKind::Expense,
            date!(2025 - 01 - 10),
        )];

        let outcome = export_transactions(
            &transactions,
            &[],
            &[],
            &ExportOptions::default(),
            out_dir.path(),
            date!(2025 - 03 - 01),
        )
        .unwrap();

        assert_eq!(outcome.row_count, 1);
        assert!(!outcome.used_fallback);
        assert_eq!(
            outcome.path,
            out_dir.path().join("FinLens_Transactions_2025-03-01.csv")
        );

        let contents = std::fs::read_to_string(&outcome.path).unwrap();
        assert!(contents.contains("FINANCIAL SUMMARY"));
        assert!(contents.contains("transaction 1"));
    }

    #[test]
    fn writes_a_document_artifact_with_salaries_merged() {
        let out_dir = tempfile::tempdir().unwrap();
        let salaries = vec![Salary {
            id: 1,
            amount: 5000.0,
            date: date!(2025 - 02 - 01),
            description: "February".to_owned(),
        }];

        let options = ExportOptions {
            format: ExportFormat::Document,
            ..ExportOptions::default()
        };

        let outcome = export_transactions(
            &[],
            &salaries,
            &[],
            &options,
            out_dir.path(),
            date!(2025 - 03 - 01),
        )
        .unwrap();

        assert_eq!(outcome.row_count, 1);

        let contents = std::fs::read_to_string(&outcome.path).unwrap();
        assert!(contents.contains("Salary: February"));
        assert!(contents.contains("Total Income:   $5,000.00"));
    }

    #[test]
    fn empty_filter_result_still_writes_an_artifact() {
        let out_dir = tempfile::tempdir().unwrap();
        let transactions = vec![create_test_transaction(
            1,
            300.0,
            TransactionKind::Expense,
            date!(2025 - 01 - 10),
        )];
        let options = ExportOptions {
            filter: FilterSpec {
                min_amount: Some(1000.0),
                ..FilterSpec::default()
            },
            ..ExportOptions::default()
        };

        let outcome = export_transactions(
            &transactions,
            &[],
            &[],
            &options,
            out_dir.path(),
            date!(2025 - 03 - 01),
        )
        .unwrap();

        assert_eq!(outcome.row_count, 0);
        assert!(outcome.path.exists());
    }
}
