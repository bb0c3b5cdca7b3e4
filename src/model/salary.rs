//! The salary record, a specialized income entry.

use time::Date;

use crate::model::RecordId;

/// An income-only record without a category reference.
///
/// Salaries always contribute to income aggregates. For export they are
/// recast as synthetic income transactions under a reserved "Salary"
/// category, see [crate::export::merge_salaries_as_income].
#[derive(Debug, Clone, PartialEq)]
pub struct Salary {
    /// Identifier assigned by the remote data store.
    pub id: RecordId,
    /// Monetary amount as a non-negative magnitude.
    pub amount: f64,
    /// The calendar date the salary was received.
    pub date: Date,
    /// Free-text description.
    pub description: String,
}
