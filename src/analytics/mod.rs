//! Transaction data aggregation for charts and summary statistics.
//!
//! Turns flat lists of transactions and salaries into the derived views
//! the presentation layer renders: a monthly income/expense time series,
//! a category-keyed expense breakdown, and headline summary statistics.
//!
//! Everything here is a pure function over already-fetched, normalized
//! records. Aggregation never fails: malformed records are repaired or
//! dropped at the ingestion boundary before they get here.

mod categories;
mod monthly;
mod summary;

pub use categories::{CHART_COLORS, CategorySlice, UNRESOLVED_LABEL, expense_breakdown};
pub(crate) use categories::resolve_category_name;
pub use monthly::{MonthlyEntry, monthly_series};
pub use summary::{SummaryStats, summary_stats};
