//! Lenient wire DTOs and their normalization into the internal model.
//!
//! The remote data store is inconsistent about field names
//! (`transactionDate` vs `date`), enum casing ("income" vs "INCOME"),
//! numeric types (salary ids arrive as JSON strings), and date precision
//! (date-only vs date-time strings). Each quirk is absorbed here, once.

use serde::{Deserialize, Deserializer};
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::model::{Category, RecordId, Salary, Transaction, TransactionKind};

const WIRE_DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// Conversion from a lenient wire shape into a strict internal record.
///
/// Returning `None` drops the record; implementations log why before
/// doing so. Dropping is reserved for records that cannot contribute to
/// any aggregate (no usable date, no recognisable type). Repairable
/// problems (bad amounts) are coerced instead.
pub(super) trait Normalize {
    /// The internal record type this wire shape normalizes into.
    type Output;

    /// Consumes the wire record and produces the internal record, or
    /// `None` if the record is unusable.
    fn normalize(self) -> Option<Self::Output>;
}

/// Normalizes a batch of wire records, dropping the unusable ones.
pub(super) fn normalize<R: Normalize>(raw: Vec<R>) -> Vec<R::Output> {
    raw.into_iter().filter_map(Normalize::normalize).collect()
}

/// A transaction as the API serves it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RawTransaction {
    id: RecordId,
    #[serde(default, deserialize_with = "lenient_amount")]
    amount: f64,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    category_id: Option<RecordId>,
    #[serde(default)]
    category_name: Option<String>,
    #[serde(default, alias = "transactionDate")]
    date: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
}

impl Normalize for RawTransaction {
    type Output = Transaction;

    fn normalize(self) -> Option<Transaction> {
        let kind = match self.kind.as_deref().map(str::parse::<TransactionKind>) {
            Some(Ok(kind)) => kind,
            Some(Err(error)) => {
                tracing::warn!("skipping transaction {}: {error}", self.id);
                return None;
            }
            None => {
                tracing::warn!("skipping transaction {}: no type field", self.id);
                return None;
            }
        };

        // `transactionDate` and `date` arrive through the same field; the
        // record's creation timestamp is the last-resort date.
        let date_text = self.date.or(self.created_at);
        let Some(date) = date_text.as_deref().and_then(parse_wire_date) else {
            tracing::warn!(
                "skipping transaction {}: unusable date {:?}",
                self.id,
                date_text
            );
            return None;
        };

        Some(Transaction {
            id: self.id,
            amount: self.amount,
            description: self.description.unwrap_or_default(),
            kind,
            category_id: self.category_id,
            category_name: self.category_name,
            date,
        })
    }
}

/// A category as the API serves it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RawCategory {
    id: RecordId,
    name: String,
    #[serde(default, rename = "type")]
    kind: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl Normalize for RawCategory {
    type Output = Category;

    fn normalize(self) -> Option<Category> {
        let kind = match self.kind.as_deref().map(str::parse::<TransactionKind>) {
            Some(Ok(kind)) => kind,
            _ => {
                tracing::warn!("skipping category {} ({}): unusable type", self.id, self.name);
                return None;
            }
        };

        Some(Category {
            id: self.id,
            name: self.name,
            kind,
            description: self.description,
        })
    }
}

/// A salary record as the API serves it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RawSalary {
    #[serde(default, deserialize_with = "lenient_id")]
    id: RecordId,
    #[serde(default, deserialize_with = "lenient_amount")]
    amount: f64,
    #[serde(default)]
    date: Option<String>,
    #[serde(default)]
    description: Option<String>,
}

impl Normalize for RawSalary {
    type Output = Salary;

    fn normalize(self) -> Option<Salary> {
        let Some(date) = self.date.as_deref().and_then(parse_wire_date) else {
            tracing::warn!("skipping salary {}: unusable date {:?}", self.id, self.date);
            return None;
        };

        Some(Salary {
            id: self.id,
            amount: self.amount,
            date,
            description: self.description.unwrap_or_default(),
        })
    }
}

/// A JSON value that should be a number but sometimes arrives as a string.
#[derive(Deserialize)]
#[serde(untagged)]
enum LenientNumber {
    Number(f64),
    Text(String),
}

/// Deserializes an amount that may be a JSON number, a numeric string,
/// or missing entirely. Anything non-numeric coerces to zero rather than
/// failing the whole fetch, and the stored value is always a magnitude.
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let number = match Option::<LenientNumber>::deserialize(deserializer)? {
        Some(LenientNumber::Number(number)) => number,
        Some(LenientNumber::Text(text)) => match text.trim().parse::<f64>() {
            Ok(number) => number,
            Err(_) => {
                tracing::warn!("could not parse amount {text:?}, treating as zero");
                0.0
            }
        },
        None => 0.0,
    };

    if number.is_finite() { Ok(number.abs()) } else { Ok(0.0) }
}

/// Deserializes a record id that may be a JSON number or a numeric string
/// (the salary endpoint serializes ids as strings).
fn lenient_id<'de, D>(deserializer: D) -> Result<RecordId, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<LenientNumber>::deserialize(deserializer)? {
        Some(LenientNumber::Number(number)) => number as RecordId,
        Some(LenientNumber::Text(text)) => match text.trim().parse::<RecordId>() {
            Ok(id) => id,
            Err(_) => {
                tracing::warn!("could not parse record id {text:?}");
                0
            }
        },
        None => 0,
    })
}

/// Parses a wire date that may be date-only ("2025-01-15") or date-time
/// ("2025-01-15T10:30:00"); only the calendar date is kept.
fn parse_wire_date(text: &str) -> Option<Date> {
    let date_part = text.split('T').next()?;
    Date::parse(date_part, &WIRE_DATE_FORMAT).ok()
}
