//! Filter specification and salary merging for the export pipeline.

use time::Date;

use crate::model::{RecordId, Salary, Transaction, TransactionKind};

/// Identifier offset for synthetic salary rows, keeping them in a range
/// disjoint from real transaction ids so export rows stay uniquely keyed.
pub const SALARY_ID_OFFSET: RecordId = 10_000;

/// Reserved category id attached to synthetic salary rows.
pub const SALARY_CATEGORY_ID: RecordId = 9_999;

/// Display name of the reserved salary category.
pub const SALARY_CATEGORY_NAME: &str = "Salary";

/// Restriction on which transaction kinds pass the export filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KindFilter {
    /// No restriction.
    #[default]
    All,
    /// Only income transactions.
    Income,
    /// Only expense transactions.
    Expense,
}

/// The user-chosen constraints narrowing which records are exported.
///
/// All predicates are ANDed. An absent bound (or an empty category set)
/// means no restriction on that axis, so the default value passes every
/// record through unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterSpec {
    /// Earliest occurrence date to include, inclusive.
    pub date_from: Option<Date>,
    /// Latest occurrence date to include, inclusive.
    pub date_to: Option<Date>,
    /// Restriction on the transaction kind.
    pub kind: KindFilter,
    /// Category ids to include. Empty means no restriction.
    pub category_ids: Vec<RecordId>,
    /// Smallest amount to include, inclusive.
    pub min_amount: Option<f64>,
    /// Largest amount to include, inclusive.
    pub max_amount: Option<f64>,
}

impl FilterSpec {
    /// Whether `transaction` passes every configured predicate.
    pub fn matches(&self, transaction: &Transaction) -> bool {
        let after_from = self
            .date_from
            .is_none_or(|from| transaction.date >= from);
        let before_to = self.date_to.is_none_or(|to| transaction.date <= to);

        let kind_allowed = match self.kind {
            KindFilter::All => true,
            KindFilter::Income => transaction.kind == TransactionKind::Income,
            KindFilter::Expense => transaction.kind == TransactionKind::Expense,
        };

        let category_allowed = self.category_ids.is_empty()
            || transaction
                .category_id
                .is_some_and(|id| self.category_ids.contains(&id));

        let above_min = self.min_amount.is_none_or(|min| transaction.amount >= min);
        let below_max = self.max_amount.is_none_or(|max| transaction.amount <= max);

        after_from && before_to && kind_allowed && category_allowed && above_min && below_max
    }
}

/// Selects the records that pass `spec`, preserving relative order.
///
/// Zero matches is a valid outcome, not an error; contradictory bounds
/// (`min_amount` above `max_amount`) simply match nothing.
pub fn apply_filters(records: &[Transaction], spec: &FilterSpec) -> Vec<Transaction> {
    records
        .iter()
        .filter(|record| spec.matches(record))
        .cloned()
        .collect()
}

/// Recasts salaries as synthetic income transactions and appends them
/// after the real transactions.
///
/// The concatenation order (transactions first, salaries after) is the
/// row order the export keeps when no other sort applies. Synthetic rows
/// take ids from [SALARY_ID_OFFSET] by position and carry the reserved
/// [SALARY_CATEGORY_NAME] category.
pub fn merge_salaries_as_income(
    transactions: &[Transaction],
    salaries: &[Salary],
) -> Vec<Transaction> {
    let mut combined = transactions.to_vec();

    combined.extend(salaries.iter().enumerate().map(|(index, salary)| {
        Transaction {
            id: SALARY_ID_OFFSET + index as RecordId,
            amount: salary.amount,
            description: format!("Salary: {}", salary.description),
            kind: TransactionKind::Income,
            category_id: Some(SALARY_CATEGORY_ID),
            category_name: Some(SALARY_CATEGORY_NAME.to_owned()),
            date: salary.date,
        }
    }));

    combined
}
