//! Aggregation of transactions and salaries into a monthly time series.

use std::collections::HashMap;

use time::{Date, Month};

use crate::model::{Salary, Transaction, TransactionKind};

/// The maximum number of periods kept in the monthly series.
const SERIES_MONTHS: usize = 12;

/// One month of aggregated totals, ready for chart rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyEntry {
    /// The period as the first day of its month. This is the sort key.
    pub month: Date,
    /// Display label for the period, e.g. "Jan 2025".
    pub label: String,
    /// Sum of income transaction amounts plus salaries in the period.
    pub income: f64,
    /// Sum of expense transaction amounts in the period.
    pub expenses: f64,
    /// Income minus expenses for the period.
    pub net: f64,
}

/// Aggregates transactions and salaries into one entry per calendar month,
/// chronologically ascending, restricted to the most recent
/// [SERIES_MONTHS] months that have data.
///
/// Salaries always contribute to the income total, never to expenses.
/// Months without any records produce no entry (the series is not a
/// fixed forward-looking window). Empty input yields an empty series.
pub fn monthly_series(transactions: &[Transaction], salaries: &[Salary]) -> Vec<MonthlyEntry> {
    let mut totals: HashMap<Date, (f64, f64)> = HashMap::new();

    for transaction in transactions {
        let month = truncate_to_month(transaction.date);
        let (income, expenses) = totals.entry(month).or_insert((0.0, 0.0));

        match transaction.kind {
            TransactionKind::Income => *income += transaction.amount,
            TransactionKind::Expense => *expenses += transaction.amount,
        }
    }

    for salary in salaries {
        let month = truncate_to_month(salary.date);
        totals.entry(month).or_insert((0.0, 0.0)).0 += salary.amount;
    }

    // Sort on the true period date. Formatted labels must never be the
    // sort key: "Feb 2024" orders after "Jan 2025" as text.
    let mut months: Vec<Date> = totals.keys().copied().collect();
    months.sort();

    let start = months.len().saturating_sub(SERIES_MONTHS);

    months[start..]
        .iter()
        .map(|&month| {
            let (income, expenses) = totals[&month];

            MonthlyEntry {
                month,
                label: month_label(month),
                income,
                expenses,
                net: income - expenses,
            }
        })
        .collect()
}

/// Truncates a date to its period key: the first day of the month.
pub(super) fn truncate_to_month(date: Date) -> Date {
    date.replace_day(1).unwrap()
}

/// Formats a period as a three-letter month abbreviation plus year.
fn month_label(month: Date) -> String {
    let abbreviation = match month.month() {
        Month::January => "Jan",
        Month::February => "Feb",
        Month::March => "Mar",
        Month::April => "Apr",
        Month::May => "May",
        Month::June => "Jun",
        Month::July => "Jul",
        Month::August => "Aug",
        Month::September => "Sep",
        Month::October => "Oct",
        Month::November => "Nov",
        Month::December => "Dec",
    };

    format!("{} {}", abbreviation, month.year())
}

#[cfg(test)]
mod tests {
    use time::{Date, macros::date};

    use super::{MonthlyEntry, monthly_series, month_label};
    use crate::model::{Salary, Transaction, TransactionKind};

    fn create_test_transaction(amount: f64, kind: TransactionKind, date: Date) -> Transaction {
        Transaction {
            id: 0,
            amount,
            description: String::new(),
            kind,
            category_id: None,
            category_name: None,
            date,
        }
    }

    fn create_test_salary(amount: f64, date: Date) -> Salary {
        Salary {
            id: 0,
            amount,
            date,
            description: String::new(),
        }
    }

    #[test]
    fn aggregates_income_and_expenses_into_one_period() {
        let transactions = vec![
            create_test_transaction(1000.0, TransactionKind::Income, date!(2025 - 01 - 15)),
            create_test_transaction(300.0, TransactionKind::Expense, date!(2025 - 01 - 20)),
        ];

        let series = monthly_series(&transactions, &[]);

        assert_eq!(
            series,
            vec![MonthlyEntry {
                month: date!(2025 - 01 - 01),
                label: "Jan 2025".to_owned(),
                income: 1000.0,
                expenses: 300.0,
                net: 700.0,
            }]
        );
    }

    #[test]
    fn salaries_count_as_income_only() {
        let salaries = vec![create_test_salary(5000.0, date!(2025 - 02 - 01))];

        let series = monthly_series(&[], &salaries);

        assert_eq!(series.len(), 1);
        assert_eq!(series[0].label, "Feb 2025");
        assert_eq!(series[0].income, 5000.0);
        assert_eq!(series[0].expenses, 0.0);
        assert_eq!(series[0].net, 5000.0);
    }

    #[test]
    fn empty_input_yields_empty_series() {
        assert!(monthly_series(&[], &[]).is_empty());
    }

    #[test]
    fn sorts_chronologically_regardless_of_input_order() {
        let transactions = vec![
            create_test_transaction(30.0, TransactionKind::Expense, date!(2025 - 03 - 10)),
            create_test_transaction(10.0, TransactionKind::Expense, date!(2025 - 01 - 10)),
            create_test_transaction(20.0, TransactionKind::Expense, date!(2025 - 02 - 10)),
        ];

        let series = monthly_series(&transactions, &[]);

        let labels: Vec<&str> = series.iter().map(|entry| entry.label.as_str()).collect();
        assert_eq!(labels, vec!["Jan 2025", "Feb 2025", "Mar 2025"]);
    }

    #[test]
    fn sorts_by_true_date_not_display_label() {
        // "Jan 2025" sorts before "Jan 2024" as text, so a lexical sort on
        // labels would get this wrong.
        let transactions = vec![
            create_test_transaction(10.0, TransactionKind::Expense, date!(2025 - 01 - 05)),
            create_test_transaction(20.0, TransactionKind::Expense, date!(2024 - 01 - 05)),
        ];

        let series = monthly_series(&transactions, &[]);

        assert_eq!(series[0].label, "Jan 2024");
        assert_eq!(series[1].label, "Jan 2025");
    }

    #[test]
    fn keeps_only_the_most_recent_twelve_months() {
        let mut transactions = Vec::new();
        for month in 1..=12 {
            transactions.push(create_test_transaction(
                month as f64,
                TransactionKind::Expense,
                Date::from_calendar_date(2024, time::Month::try_from(month).unwrap(), 10).unwrap(),
            ));
        }
        for month in 1..=2 {
            transactions.push(create_test_transaction(
                100.0,
                TransactionKind::Expense,
                Date::from_calendar_date(2025, time::Month::try_from(month).unwrap(), 10).unwrap(),
            ));
        }

        let series = monthly_series(&transactions, &[]);

        assert_eq!(series.len(), 12);
        // The two oldest periods drop off the front.
        assert_eq!(series[0].label, "Mar 2024");
        assert_eq!(series[11].label, "Feb 2025");
    }

    #[test]
    fn repeated_calls_produce_identical_output() {
        let transactions = vec![
            create_test_transaction(50.0, TransactionKind::Income, date!(2025 - 04 - 01)),
            create_test_transaction(25.0, TransactionKind::Expense, date!(2025 - 04 - 02)),
        ];
        let salaries = vec![create_test_salary(1000.0, date!(2025 - 04 - 03))];

        let first = monthly_series(&transactions, &salaries);
        let second = monthly_series(&transactions, &salaries);

        assert_eq!(first, second);
    }

    #[test]
    fn month_label_includes_year() {
        assert_eq!(month_label(date!(2025 - 01 - 01)), "Jan 2025");
        assert_eq!(month_label(date!(2024 - 12 - 01)), "Dec 2024");
    }
}
