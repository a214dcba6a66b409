//! HTTP client for the store's REST query API.
//!
//! Thin wrapper over the PostgREST surface Supabase exposes. Every method
//! issues exactly one request; there are no retries. Pure response decoding
//! lives in free functions for testability.

use std::time::Duration;

use reqwest::header::CONTENT_RANGE;
use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::{StoreConfig, StoreError};

/// Accept header that asks PostgREST for a single JSON object instead of an
/// array. Zero matching rows then come back as an error with `PGRST116`.
const SINGLE_OBJECT_ACCEPT: &str = "application/vnd.pgrst.object+json";

/// Filter used to clear a whole table (PostgREST refuses an unfiltered
/// delete). Matches every real row since ids are never the nil UUID.
const DELETE_ALL_FILTER: &str = "neq.00000000-0000-0000-0000-000000000000";

// =============================================================================
// CLIENT
// =============================================================================

/// Client for the hosted store's REST query API.
#[derive(Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl StoreClient {
    /// Build a client from store config.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .build()
            .map_err(|e| StoreError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.url, api_key: config.api_key })
    }

    fn request(&self, method: Method, table: &str) -> RequestBuilder {
        let url = format!("{}/rest/v1/{table}", self.base_url);
        self.http
            .request(method, url)
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
    }

    /// Fetch all rows of `table`, ordered (e.g. `created_at.desc`).
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn select_all<T: DeserializeOwned>(&self, table: &str, order: &str) -> Result<Vec<T>, StoreError> {
        let response = self
            .request(Method::GET, table)
            .query(&[("select", "*"), ("order", order)])
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        decode_body(response).await
    }

    /// Fetch a single column from every row of `table`. Each element
    /// decodes from an object with one key, so `T` is usually a one-field
    /// struct.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn select_column<T: DeserializeOwned>(&self, table: &str, column: &str) -> Result<Vec<T>, StoreError> {
        let response = self
            .request(Method::GET, table)
            .query(&[("select", column)])
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        decode_body(response).await
    }

    /// Fetch rows of `table` matching an equality filter, ordered.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn select_eq<T: DeserializeOwned>(
        &self,
        table: &str,
        column: &str,
        value: &str,
        order: &str,
    ) -> Result<Vec<T>, StoreError> {
        let filter = format!("eq.{value}");
        let response = self
            .request(Method::GET, table)
            .query(&[("select", "*"), (column, filter.as_str()), ("order", order)])
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        decode_body(response).await
    }

    /// Fetch the single row of `table` with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error whose `is_row_missing()` is true when no row matches,
    /// or an opaque error on any other failure.
    pub async fn select_by_id<T: DeserializeOwned>(&self, table: &str, id: &str) -> Result<T, StoreError> {
        let filter = format!("eq.{id}");
        let response = self
            .request(Method::GET, table)
            .query(&[("select", "*"), ("id", filter.as_str())])
            .header("Accept", SINGLE_OBJECT_ACCEPT)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        decode_body(response).await
    }

    /// Insert one row and return the stored representation.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert is rejected or the response cannot be
    /// decoded. Write errors are never masked.
    pub async fn insert<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        table: &str,
        row: &B,
    ) -> Result<T, StoreError> {
        let response = self
            .request(Method::POST, table)
            .header("Prefer", "return=representation")
            .header("Accept", SINGLE_OBJECT_ACCEPT)
            .json(row)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        decode_body(response).await
    }

    /// Bulk-insert rows without asking for a representation back.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert is rejected.
    pub async fn insert_many<B: Serialize>(&self, table: &str, rows: &[B]) -> Result<(), StoreError> {
        let response = self
            .request(Method::POST, table)
            .header("Prefer", "return=minimal")
            .json(rows)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        expect_success(response).await
    }

    /// Patch the row with the given id and return the stored representation.
    ///
    /// # Errors
    ///
    /// Returns a row-missing error when no row matches the id, or an opaque
    /// error on any other failure.
    pub async fn update<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        table: &str,
        id: &str,
        patch: &B,
    ) -> Result<T, StoreError> {
        let filter = format!("eq.{id}");
        let response = self
            .request(Method::PATCH, table)
            .query(&[("id", filter.as_str())])
            .header("Prefer", "return=representation")
            .header("Accept", SINGLE_OBJECT_ACCEPT)
            .json(patch)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        decode_body(response).await
    }

    /// Delete the row with the given id.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete is rejected.
    pub async fn delete(&self, table: &str, id: &str) -> Result<(), StoreError> {
        let filter = format!("eq.{id}");
        let response = self
            .request(Method::DELETE, table)
            .query(&[("id", filter.as_str())])
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        expect_success(response).await
    }

    /// Delete every row of `table`.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete is rejected.
    pub async fn delete_all(&self, table: &str) -> Result<(), StoreError> {
        let response = self
            .request(Method::DELETE, table)
            .query(&[("id", DELETE_ALL_FILTER)])
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        expect_success(response).await
    }

    /// Exact row count for `table`, optionally under an equality filter.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the store omits the count.
    pub async fn count(&self, table: &str, filter: Option<(&str, &str)>) -> Result<i64, StoreError> {
        let mut request = self
            .request(Method::HEAD, table)
            .query(&[("select", "*")])
            .header("Prefer", "count=exact");
        if let Some((column, value)) = filter {
            request = request.query(&[(column, format!("eq.{value}"))]);
        }

        let response = request.send().await.map_err(|e| StoreError::Request(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(StoreError::Api {
                status: status.as_u16(),
                code: String::new(),
                message: "count request rejected".to_string(),
            });
        }

        let header = response
            .headers()
            .get(CONTENT_RANGE)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| StoreError::Parse("count response missing content-range header".to_string()))?;
        parse_content_range_total(header)
    }
}

// =============================================================================
// RESPONSE DECODING
// =============================================================================

/// Shape of a PostgREST error body. Fields are optional because proxies in
/// front of the store sometimes answer with non-JSON bodies.
#[derive(serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: String,
    #[serde(default)]
    message: String,
}

async fn decode_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, StoreError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| StoreError::Request(e.to_string()))?;

    if !status.is_success() {
        return Err(api_error(status.as_u16(), &text));
    }
    serde_json::from_str(&text).map_err(|e| StoreError::Parse(e.to_string()))
}

async fn expect_success(response: reqwest::Response) -> Result<(), StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(());
    }
    let text = response
        .text()
        .await
        .map_err(|e| StoreError::Request(e.to_string()))?;
    Err(api_error(status.as_u16(), &text))
}

fn api_error(status: u16, body: &str) -> StoreError {
    let parsed = serde_json::from_str::<ApiErrorBody>(body).unwrap_or(ApiErrorBody {
        code: String::new(),
        message: body.trim().to_string(),
    });
    StoreError::Api { status, code: parsed.code, message: parsed.message }
}

/// Parse the total from a `Content-Range` value like `0-24/57` or `*/0`.
fn parse_content_range_total(header: &str) -> Result<i64, StoreError> {
    header
        .rsplit('/')
        .next()
        .and_then(|total| total.parse::<i64>().ok())
        .ok_or_else(|| StoreError::Parse(format!("unparseable content-range: {header}")))
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
