//! The document renderer: a paginated, column-aligned text report.

use unicode_segmentation::UnicodeSegmentation;

use crate::{
    Error,
    export::ExportTotals,
    format::{format_currency, format_display_date},
};

/// Content lines per page. When a page fills up, the column headers are
/// repeated at the top of the next one.
const PAGE_LINES: usize = 40;

/// Separator inserted between pages (form feed on its own line).
const PAGE_BREAK: &str = "\n\u{c}\n";

/// Renders the export as a paginated text report: title and generation
/// date, the financial summary over the filtered set, then the detail
/// table split across pages with repeated column headers and a footer
/// line carrying the page number.
///
/// Zero data rows still produce the title and summary block.
///
/// # Errors
/// Returns [Error::RenderFailed] if the report cannot be assembled.
pub(super) fn render(
    rows: &[Vec<String>],
    headers: &[&str],
    title: &str,
    totals: &ExportTotals,
    generated_on: time::Date,
) -> Result<String, Error> {
    let widths: Vec<usize> = headers.iter().map(|header| column_width(header)).collect();

    let mut pages: Vec<Vec<String>> = Vec::new();
    let mut current: Vec<String> = Vec::new();

    current.push(title.to_owned());
    current.push(format!("Generated on: {}", format_display_date(generated_on)));
    current.push(String::new());
    current.push("FINANCIAL SUMMARY".to_owned());
    current.push(format!(
        "Total Income:   {}",
        format_currency(totals.total_income)
    ));
    current.push(format!(
        "Total Expenses: {}",
        format_currency(totals.total_expenses)
    ));
    current.push(format!(
        "Net Balance:    {}",
        format_currency(totals.net_balance)
    ));

    if totals.total_income == 0.0 && totals.total_expenses > 0.0 {
        current.push(
            "Note: no income transactions in this selection, the net balance reflects expenses only."
                .to_owned(),
        );
    }

    current.push(String::new());
    current.push("TRANSACTION DETAILS".to_owned());
    current.push(String::new());

    if headers.is_empty() {
        current.push("(no columns selected)".to_owned());
    } else if rows.is_empty() {
        push_table_header(&mut current, headers, &widths);
        current.push("(no matching transactions)".to_owned());
    } else {
        push_table_header(&mut current, headers, &widths);

        for row in rows {
            if current.len() >= PAGE_LINES {
                pages.push(std::mem::take(&mut current));
                push_table_header(&mut current, headers, &widths);
            }

            current.push(format_row(row, headers, &widths));
        }
    }

    pages.push(current);

    let total_pages = pages.len();
    let rendered: Vec<String> = pages
        .into_iter()
        .enumerate()
        .map(|(index, lines)| {
            let footer = format!(
                "Generated on {} | Page {} of {} | {}",
                format_display_date(generated_on),
                index + 1,
                total_pages,
                super::PRODUCT_NAME,
            );

            format!("{}\n\n{}", lines.join("\n"), footer)
        })
        .collect();

    Ok(rendered.join(PAGE_BREAK))
}

fn push_table_header(lines: &mut Vec<String>, headers: &[&str], widths: &[usize]) {
    let header_row: Vec<String> = headers
        .iter()
        .zip(widths)
        .map(|(header, &width)| pad_left_aligned(header, width))
        .collect();

    let total_width = widths.iter().sum::<usize>() + widths.len().saturating_sub(1);

    lines.push(header_row.join(" ").trim_end().to_owned());
    lines.push("-".repeat(total_width));
}

fn format_row(row: &[String], headers: &[&str], widths: &[usize]) -> String {
    let cells: Vec<String> = row
        .iter()
        .zip(headers.iter().zip(widths))
        .map(|(cell, (header, &width))| {
            // Amounts read better right-aligned under their header.
            if *header == "Amount" {
                pad_right_aligned(cell, width)
            } else {
                pad_left_aligned(cell, width)
            }
        })
        .collect();

    cells.join(" ").trim_end().to_owned()
}

/// Display width of each canonical column.
fn column_width(header: &str) -> usize {
    match header {
        "ID" => 6,
        "Date" => 12,
        "Description" => 26,
        "Type" => 9,
        "Category" => 18,
        _ => 14,
    }
}

fn pad_left_aligned(text: &str, width: usize) -> String {
    let fitted = fit(text, width);
    let padding = width.saturating_sub(fitted.graphemes(true).count());

    format!("{}{}", fitted, " ".repeat(padding))
}

fn pad_right_aligned(text: &str, width: usize) -> String {
    let fitted = fit(text, width);
    let padding = width.saturating_sub(fitted.graphemes(true).count());

    format!("{}{}", " ".repeat(padding), fitted)
}

/// Truncates `text` to `width` graphemes, marking the cut with an
/// ellipsis.
fn fit(text: &str, width: usize) -> String {
    let length = text.graphemes(true).count();

    if length <= width {
        return text.to_owned();
    }

    let truncated: String = text.graphemes(true).take(width.saturating_sub(3)).collect();

    truncated + "..."
}

#[cfg(test)]
mod tests {
    use time::macros::date;

    use super::{PAGE_LINES, fit, render};
    use crate::export::ExportTotals;

    fn sample_totals() -> ExportTotals {
        ExportTotals {
            total_income: 1000.0,
            total_expenses: 300.0,
            net_balance: 700.0,
        }
    }

    fn sample_row(index: usize) -> Vec<String> {
        vec![
            format!("{index}"),
            "20/01/2025".to_owned(),
            format!("transaction number {index}"),
            "EXPENSE".to_owned(),
            "Food".to_owned(),
            "-$10.00".to_owned(),
        ]
    }

    const HEADERS: [&str; 6] = ["ID", "Date", "Description", "Type", "Category", "Amount"];

    #[test]
    fn single_page_report_contains_all_sections() {
        let rows = vec![sample_row(1)];

        let report = render(
            &rows,
            &HEADERS,
            "Transaction Report",
            &sample_totals(),
            date!(2025 - 03 - 01),
        )
        .unwrap();

        assert!(report.starts_with("Transaction Report"));
        assert!(report.contains("FINANCIAL SUMMARY"));
        assert!(report.contains("Total Income:   $1,000.00"));
        assert!(report.contains("TRANSACTION DETAILS"));
        assert!(report.contains("transaction number 1"));
        assert!(report.contains("Page 1 of 1"));
    }

    #[test]
    fn long_reports_paginate_and_repeat_headers() {
        let rows: Vec<Vec<String>> = (0..100).map(sample_row).collect();

        let report = render(
            &rows,
            &HEADERS,
            "Transaction Report",
            &sample_totals(),
            date!(2025 - 03 - 01),
        )
        .unwrap();

        let pages: Vec<&str> = report.split('\u{c}').collect();
        assert!(pages.len() > 1, "expected 100 rows to span multiple pages");

        for (index, page) in pages.iter().enumerate() {
            assert!(
                page.contains("ID     Date"),
                "page {index} is missing the repeated column header"
            );
            assert!(page.contains(&format!("Page {} of {}", index + 1, pages.len())));
        }

        // No page overflows its line budget (the footer adds two lines).
        for page in &pages {
            assert!(page.trim_matches('\n').lines().count() <= PAGE_LINES + 2);
        }
    }

    #[test]
    fn zero_rows_still_emit_title_and_summary() {
        let report = render(
            &[],
            &HEADERS,
            "Transaction Report",
            &sample_totals(),
            date!(2025 - 03 - 01),
        )
        .unwrap();

        assert!(report.contains("FINANCIAL SUMMARY"));
        assert!(report.contains("(no matching transactions)"));
        assert!(report.contains("Page 1 of 1"));
    }

    #[test]
    fn advisory_appears_when_expenses_lack_income() {
        let totals = ExportTotals {
            total_income: 0.0,
            total_expenses: 450.0,
            net_balance: -450.0,
        };

        let report = render(
            &[],
            &HEADERS,
            "Transaction Report",
            &totals,
            date!(2025 - 03 - 01),
        )
        .unwrap();

        assert!(report.contains("no income transactions in this selection"));
    }

    #[test]
    fn fit_truncates_with_ellipsis() {
        assert_eq!(fit("short", 10), "short");
        assert_eq!(fit("a much longer description", 10), "a much ...");
        assert_eq!(fit("a much longer description", 10).len(), 10);
    }
}
