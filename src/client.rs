//! HTTP client for the care plan generation service
//!
//! Every failure is reduced to a [`ClientError`], and each error maps to a
//! single sentence that can be shown to the user.

use std::future::Future;
use std::time::Duration;

use serde_json::Value;
use thiserror::Error;

use crate::config::ApiConfig;
use crate::patient::{CarePlan, HealthStatus, PatientRecord};

pub const GENERATE_PATH: &str = "generate-care-plan";
pub const HEALTH_PATH: &str = "health";

pub const GENERATION_FAILED: &str = "Failed to generate care plan";
pub const NO_RESPONSE: &str = "No response from server. Please check if the backend is running.";
pub const UNEXPECTED: &str = "An unexpected error occurred. Please try again.";
pub const BACKEND_UNREACHABLE: &str = "Unable to connect to backend server";

/// Errors that can occur while talking to the service
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Failed to build HTTP client: {0}")]
    Build(String),

    /// The server answered with a non-success status
    #[error("API error ({code}): {message}")]
    Api { code: u16, message: String },

    /// The request never got an answer (refused, DNS, timeout)
    #[error("No response: {0}")]
    NoResponse(String),

    #[error("Unexpected response: {0}")]
    Unexpected(String),
}

impl ClientError {
    /// The one line shown in the error banner
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } => message.clone(),
            ClientError::NoResponse(_) => NO_RESPONSE.to_string(),
            ClientError::Build(_) | ClientError::Unexpected(_) => UNEXPECTED.to_string(),
        }
    }
}

/// Pull a readable message out of an error body
///
/// `{"detail": "text"}` yields the text. A validation list
/// (`{"detail": [{"msg": ...}, ...]}`) yields the first entry's `msg`.
pub fn extract_detail(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    match value.get("detail")? {
        Value::String(detail) => Some(detail.clone()),
        Value::Array(entries) => entries
            .first()?
            .get("msg")?
            .as_str()
            .map(str::to_string),
        _ => None,
    }
}

#[derive(Debug, Clone)]
pub struct CarePlanClient {
    http: reqwest::Client,
    base_url: String,
}

impl CarePlanClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ClientError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub async fn generate_care_plan(&self, record: &PatientRecord) -> Result<CarePlan, ClientError> {
        let url = self.url(GENERATE_PATH);
        log::debug!("POST {}", url);

        let response = self
            .http
            .post(&url)
            .json(record)
            .send()
            .await
            .map_err(|e| ClientError::NoResponse(e.to_string()))?;

        let status = response.status();
        log::debug!("generate-care-plan returned {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                code: status.as_u16(),
                message: extract_detail(&body).unwrap_or_else(|| GENERATION_FAILED.to_string()),
            });
        }

        response
            .json::<CarePlan>()
            .await
            .map_err(|e| ClientError::Unexpected(e.to_string()))
    }

    pub async fn health(&self) -> Result<HealthStatus, ClientError> {
        let url = self.url(HEALTH_PATH);
        log::debug!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::NoResponse(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Api {
                code: status.as_u16(),
                message: BACKEND_UNREACHABLE.to_string(),
            });
        }

        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| ClientError::Unexpected(e.to_string()))
    }
}

/// Run one client future to completion on a fresh current-thread runtime
pub fn block_on<F: Future>(future: F) -> Result<F::Output, ClientError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| ClientError::Build(e.to_string()))?;
    Ok(runtime.block_on(future))
}

#[cfg(test)]
#[path = "client/client_tests.rs"]
mod client_tests;
