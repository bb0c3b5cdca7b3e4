//! Headline summary statistics across all fetched records.

use std::collections::HashSet;

use crate::{
    analytics::monthly_series,
    model::{Salary, Transaction, TransactionKind},
};

/// Totals and monthly averages for the summary cards.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStats {
    /// Income transaction amounts plus all salary amounts.
    pub total_income: f64,
    /// Sum of expense transaction amounts.
    pub total_expenses: f64,
    /// Total income minus total expenses.
    pub net_balance: f64,
    /// Total income divided by the number of months with data.
    pub monthly_avg_income: f64,
    /// Total expenses divided by the number of months with data.
    pub monthly_avg_expenses: f64,
    /// Number of distinct category references among expense transactions.
    pub expense_category_count: usize,
}

/// Computes the summary statistics over the full record set.
///
/// The averaging divisor is the entry count of the monthly series (so the
/// averages match the series view), clamped to at least 1 so an empty
/// data set yields zero averages rather than a division by zero.
pub fn summary_stats(transactions: &[Transaction], salaries: &[Salary]) -> SummaryStats {
    let transaction_income: f64 = transactions
        .iter()
        .filter(|transaction| transaction.kind == TransactionKind::Income)
        .map(|transaction| transaction.amount)
        .sum();
    let salary_income: f64 = salaries.iter().map(|salary| salary.amount).sum();
    let total_income = transaction_income + salary_income;

    let total_expenses: f64 = transactions
        .iter()
        .filter(|transaction| transaction.kind == TransactionKind::Expense)
        .map(|transaction| transaction.amount)
        .sum();

    let expense_category_count = transactions
        .iter()
        .filter(|transaction| transaction.kind == TransactionKind::Expense)
        .map(|transaction| transaction.category_id)
        .collect::<HashSet<_>>()
        .len();

    let months = monthly_series(transactions, salaries).len().max(1) as f64;

    SummaryStats {
        total_income,
        total_expenses,
        net_balance: total_income - total_expenses,
        monthly_avg_income: total_income / months,
        monthly_avg_expenses: total_expenses / months,
        expense_category_count,
    }
}

#[cfg(test)]
mod tests {
    use time::{Date, macros::date};

    use super::summary_stats;
    use crate::{
        analytics::monthly_series,
        model::{RecordId, Salary, Transaction, TransactionKind},
    };

    fn create_test_transaction(
        amount: f64,
        kind: TransactionKind,
        category_id: Option<RecordId>,
        date: Date,
    ) -> Transaction {
        Transaction {
            id: 0,
            amount,
            description: String::new(),
            kind,
            category_id,
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
    fn salaries_are_included_in_total_income() {
        let salaries = vec![create_test_salary(5000.0, date!(2025 - 02 - 01))];

        let stats = summary_stats(&[], &salaries);

        assert_eq!(stats.total_income, 5000.0);
        assert_eq!(stats.total_expenses, 0.0);
        assert_eq!(stats.net_balance, 5000.0);
    }

    #[test]
    fn totals_split_by_kind() {
        let transactions = vec![
            create_test_transaction(1000.0, TransactionKind::Income, None, date!(2025 - 01 - 15)),
            create_test_transaction(300.0, TransactionKind::Expense, Some(1), date!(2025 - 01 - 20)),
            create_test_transaction(200.0, TransactionKind::Expense, Some(2), date!(2025 - 02 - 05)),
        ];

        let stats = summary_stats(&transactions, &[]);

        assert_eq!(stats.total_income, 1000.0);
        assert_eq!(stats.total_expenses, 500.0);
        assert_eq!(stats.net_balance, 500.0);
    }

    #[test]
    fn averages_divide_by_months_with_data() {
        let transactions = vec![
            create_test_transaction(100.0, TransactionKind::Expense, Some(1), date!(2025 - 01 - 10)),
            create_test_transaction(300.0, TransactionKind::Expense, Some(1), date!(2025 - 02 - 10)),
        ];

        let stats = summary_stats(&transactions, &[]);

        assert_eq!(stats.monthly_avg_expenses, 200.0);
    }

    #[test]
    fn empty_data_yields_zero_averages_not_nan() {
        let stats = summary_stats(&[], &[]);

        assert_eq!(stats.monthly_avg_income, 0.0);
        assert_eq!(stats.monthly_avg_expenses, 0.0);
        assert_eq!(stats.expense_category_count, 0);
    }

    #[test]
    fn counts_distinct_expense_categories() {
        let transactions = vec![
            create_test_transaction(10.0, TransactionKind::Expense, Some(1), date!(2025 - 01 - 01)),
            create_test_transaction(20.0, TransactionKind::Expense, Some(1), date!(2025 - 01 - 02)),
            create_test_transaction(30.0, TransactionKind::Expense, Some(2), date!(2025 - 01 - 03)),
            create_test_transaction(40.0, TransactionKind::Income, Some(3), date!(2025 - 01 - 04)),
        ];

        let stats = summary_stats(&transactions, &[]);

        assert_eq!(stats.expense_category_count, 2);
    }

    #[test]
    fn series_income_matches_total_income() {
        let transactions = vec![
            create_test_transaction(1000.0, TransactionKind::Income, None, date!(2025 - 01 - 15)),
            create_test_transaction(250.0, TransactionKind::Income, None, date!(2025 - 03 - 15)),
            create_test_transaction(300.0, TransactionKind::Expense, Some(1), date!(2025 - 01 - 20)),
        ];
        let salaries = vec![create_test_salary(5000.0, date!(2025 - 02 - 01))];

        let stats = summary_stats(&transactions, &salaries);
        let series = monthly_series(&transactions, &salaries);

        let series_income: f64 = series.iter().map(|entry| entry.income).sum();
        assert_eq!(series_income, stats.total_income);
    }
}
