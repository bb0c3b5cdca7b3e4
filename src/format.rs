//! Currency and calendar-date display formatting shared by the CLI output
//! and the export renderers.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::model::TransactionKind;

/// The calendar-date shape used everywhere a date is shown to the user.
const DISPLAY_DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[day]/[month]/[year]");

/// Formats a number as a currency amount with thousands separators, e.g.
/// `$1,234.50`. Negative values are prefixed with `-`.
pub fn format_currency(number: f64) -> String {
    static POSITIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let positive_fmt = POSITIVE_FMT.get_or_init(|| {
        Formatter::currency("$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    static NEGATIVE_FMT: OnceLock<Formatter> = OnceLock::new();

    let negative_fmt = NEGATIVE_FMT.get_or_init(|| {
        Formatter::currency("-$")
            .unwrap()
            .precision(Precision::Decimals(2))
    });

    let mut formatted_string = if number < 0.0 {
        negative_fmt.fmt_string(number.abs())
    } else if number > 0.0 {
        positive_fmt.fmt_string(number)
    } else {
        // Zero is hardcoded as "0", so we must specify the formatted string for zero
        "$0.00".to_owned()
    };

    // numfmt omits the last trailing zero, so we must add it ourselves
    // For example, "12.30" is rendered as "12.3" so we append "0".
    if formatted_string.as_bytes()[formatted_string.len() - 3] != b'.' {
        formatted_string = format!("{formatted_string}0");
    }

    formatted_string
}

/// Formats a transaction amount with its direction made visible.
///
/// Amounts are stored as non-negative magnitudes; the sign shown here
/// comes from the transaction kind, e.g. `+$1,000.00` for income and
/// `-$300.00` for an expense.
pub fn format_signed_currency(amount: f64, kind: TransactionKind) -> String {
    let magnitude = format_currency(amount.abs());

    match kind {
        TransactionKind::Income => format!("+{magnitude}"),
        TransactionKind::Expense => format!("-{magnitude}"),
    }
}

/// Formats a calendar date for display, e.g. `20/01/2025`.
pub fn format_display_date(date: Date) -> String {
    date.format(&DISPLAY_DATE_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}
