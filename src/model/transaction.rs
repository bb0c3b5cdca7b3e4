//! The transaction record and its income/expense classification.

use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use time::Date;

use crate::model::RecordId;

/// Whether a transaction brings money in or takes money out.
///
/// The direction of a transaction is carried solely by this type. The
/// amount on a [Transaction] is always a non-negative magnitude, never a
/// signed value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransactionKind {
    /// Money coming in (wages, refunds, interest).
    Income,
    /// Money going out (purchases, bills, fees).
    Expense,
}

impl TransactionKind {
    /// The canonical uppercase name used on the wire and in export output.
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionKind::Income => "INCOME",
            TransactionKind::Expense => "EXPENSE",
        }
    }
}

impl Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The string could not be recognised as either income or expense.
#[derive(Debug, thiserror::Error, PartialEq)]
#[error("\"{0}\" is not a recognised transaction type")]
pub struct UnknownKind(pub String);

impl FromStr for TransactionKind {
    type Err = UnknownKind;

    /// Parses a transaction type string case-insensitively.
    ///
    /// Upstream sources are inconsistent about casing ("income", "INCOME",
    /// "Income" all occur), so comparison happens on the uppercased value.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if text.eq_ignore_ascii_case("INCOME") {
            Ok(TransactionKind::Income)
        } else if text.eq_ignore_ascii_case("EXPENSE") {
            Ok(TransactionKind::Expense)
        } else {
            Err(UnknownKind(text.to_owned()))
        }
    }
}

/// A single dated, typed, amount-bearing financial record.
///
/// Instances are read-only inputs as far as this crate is concerned:
/// creation, editing, and deletion happen through the remote data store.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// Identifier assigned by the remote data store.
    pub id: RecordId,
    /// Monetary amount as a non-negative magnitude, currency-agnostic.
    pub amount: f64,
    /// Free-text description.
    pub description: String,
    /// Income/expense classification; the only carrier of direction.
    pub kind: TransactionKind,
    /// Reference to the category this transaction belongs to, if any.
    pub category_id: Option<RecordId>,
    /// Display-name hint for the category, resolved upstream.
    ///
    /// Used as a fallback when `category_id` does not match any category
    /// in the fetched category list.
    pub category_name: Option<String>,
    /// The calendar date the transaction occurred (not a timestamp).
    pub date: Date,
}
