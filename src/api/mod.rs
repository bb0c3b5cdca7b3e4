//! HTTP client for the remote data store.
//!
//! All persistent state lives behind a REST API; this module is the only
//! place that talks to it. Responses are deserialized into lenient wire
//! DTOs ([records]) and normalized into the strict [crate::model] types
//! before they leave this module, so upstream inconsistencies (field
//! naming, mixed-case enums, date-time vs date-only strings) stay
//! contained here.

mod client;
mod records;

pub use client::ApiClient;
