//! The category record, a user-defined label partitioning transactions.

use crate::model::{RecordId, TransactionKind};

/// A user-defined label that partitions transactions.
///
/// A category's kind should match the kind of the transactions that
/// reference it, but this is not enforced here: when summarizing, the
/// transaction's own kind is always authoritative.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Identifier assigned by the remote data store.
    pub id: RecordId,
    /// The display name shown in breakdowns and export output.
    pub name: String,
    /// Which kind of transactions this category is meant for.
    pub kind: TransactionKind,
    /// Optional free-text description.
    pub description: Option<String>,
}
