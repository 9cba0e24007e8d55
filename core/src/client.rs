//! Stateless request builder and response parser for the users endpoint.
//!
//! # Design
//! `StudentsClient` holds only the endpoint and the timeout bound. Fetching
//! is split into `build_list_users`, which produces an `HttpRequest`, and
//! `parse_list_users`, which consumes an `HttpResponse`. The round-trip in
//! between belongs to a [`crate::Transport`]; [`crate::fetch_students`] wires
//! the three together.

use std::time::Duration;

use crate::error::FetchError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::RawUser;

/// Public demo API serving the raw user records.
pub const DEFAULT_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/users";

/// Upper bound on one fetch, from dispatch to parsed body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

#[derive(Debug, Clone)]
pub struct StudentsClient {
    endpoint: String,
    timeout: Duration,
}

impl Default for StudentsClient {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl StudentsClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            endpoint: endpoint.trim_end_matches('/').to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn build_list_users(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.endpoint.clone(),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }

    /// Any 2xx status with a JSON array of users succeeds.
    pub fn parse_list_users(&self, response: HttpResponse) -> Result<Vec<RawUser>, FetchError> {
        if !(200..300).contains(&response.status) {
            return Err(FetchError::ServerError(response.status));
        }
        serde_json::from_str(&response.body).map_err(|err| {
            tracing::debug!(error = %err, "users body did not decode");
            FetchError::Unknown
        })
    }
}
