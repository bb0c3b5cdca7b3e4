//! The normalized domain records shared by the analytics engine and the
//! export pipeline.
//!
//! Records arrive from the remote data store in loosely-typed shapes
//! (inconsistent field names, mixed-case type strings). The [crate::api]
//! module converts them into these strict types at a single ingestion
//! boundary, so the rest of the crate never has to second-guess its input.

mod category;
mod salary;
mod transaction;

pub use category::Category;
pub use salary::Salary;
pub use transaction::{Transaction, TransactionKind, UnknownKind};

/// Alias for the integer type used for record identifiers assigned by the
/// remote data store.
pub type RecordId = i64;
