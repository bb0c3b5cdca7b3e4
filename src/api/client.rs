//! The authenticated client for the remote data store.

use reqwest::{StatusCode, Url};
use serde::de::DeserializeOwned;

use crate::{
    Error,
    api::records::{RawCategory, RawSalary, RawTransaction, normalize},
    model::{Category, Salary, Transaction},
};

/// An authenticated connection to the remote data store.
///
/// Holds the bearer token explicitly instead of reading it from ambient
/// state, so authentication travels with the client value.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: Url,
    token: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client for the API at `base_url`, authenticating every
    /// request with `token`.
    ///
    /// # Errors
    /// Returns [Error::InvalidUrl] if `base_url` is not a valid URL.
    pub fn new(base_url: &str, token: &str) -> Result<Self, Error> {
        let base_url =
            Url::parse(base_url).map_err(|error| Error::InvalidUrl(error.to_string()))?;

        Ok(Self {
            base_url,
            token: token.to_owned(),
            http: reqwest::Client::new(),
        })
    }

    /// Fetches all transactions for the current user, normalized into the
    /// internal record shape.
    ///
    /// Records with an unusable date or an unrecognised type are logged
    /// and dropped here so that downstream aggregation never sees them.
    ///
    /// # Errors
    /// Returns an [Error] describing the HTTP failure if the request did
    /// not succeed.
    pub async fn fetch_transactions(&self) -> Result<Vec<Transaction>, Error> {
        let raw: Vec<RawTransaction> = self.get_json("api/transactions").await?;
        Ok(normalize(raw))
    }

    /// Fetches all categories for the current user.
    ///
    /// # Errors
    /// Returns an [Error] describing the HTTP failure if the request did
    /// not succeed.
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, Error> {
        let raw: Vec<RawCategory> = self.get_json("api/categories").await?;
        Ok(normalize(raw))
    }

    /// Fetches all salary records for the current user.
    ///
    /// # Errors
    /// Returns an [Error] describing the HTTP failure if the request did
    /// not succeed.
    pub async fn fetch_salaries(&self) -> Result<Vec<Salary>, Error> {
        let raw: Vec<RawSalary> = self.get_json("api/salaries").await?;
        Ok(normalize(raw))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let endpoint = self
            .base_url
            .join(path)
            .map_err(|error| Error::InvalidUrl(error.to_string()))?;

        tracing::debug!("GET {endpoint}");

        let response = self
            .http
            .get(endpoint)
            .bearer_auth(&self.token)
            .send()
            .await?;

        if response.status().is_success() {
            return Ok(response.json::<T>().await?);
        }

        let status = response.status();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "unknown error".to_owned());

        Err(match status {
            StatusCode::UNAUTHORIZED => Error::Unauthorized,
            StatusCode::FORBIDDEN => Error::Forbidden,
            StatusCode::NOT_FOUND => Error::NotFound,
            _ => Error::Api(body),
        })
    }
}
