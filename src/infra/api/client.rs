use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::time::Duration;

use super::traits::ReviewTransport;
use super::wire::{self, AnalyzeRequestBody};
use crate::domain::{HealthStatus, ReviewError, ReviewRequest, ReviewResult, ReviewTypeInfo};
use crate::infra::app_config::AppConfig;

const ANALYZE_PATH: &str = "/api/review/analyze";
const REVIEW_TYPES_PATH: &str = "/api/review/types";
const HEALTH_PATH: &str = "/health";

/// HTTP client for the remote analysis service.
#[derive(Clone)]
pub struct HttpReviewClient {
    client: reqwest::Client,
    base_url: String,
}

impl HttpReviewClient {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self> {
        let mut builder = reqwest::Client::builder()
            .user_agent(concat!("critique/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        Self::new(config.api_base_url(), config.request_timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetches the service's catalog of review types.
    pub async fn review_types(&self) -> Result<Vec<ReviewTypeInfo>, ReviewError> {
        let response = self
            .client
            .get(self.endpoint(REVIEW_TYPES_PATH))
            .send()
            .await
            .map_err(ReviewError::transport)?;
        let body = read_success_body(response).await?;
        wire::parse_review_types(&body)
    }
}

/// Maps a non-success response onto the error taxonomy, or returns its body.
///
/// Rate limiting wins over everything else, including a `detail` in the body.
async fn read_success_body(response: reqwest::Response) -> Result<String, ReviewError> {
    let status = response.status();
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(ReviewError::RateLimited);
    }

    let body = response.text().await.map_err(ReviewError::transport)?;
    if status.is_success() {
        return Ok(body);
    }

    match wire::error_detail(&body) {
        Some(detail) => Err(ReviewError::Remote(detail)),
        None => Err(ReviewError::transport(format!("HTTP {status}"))),
    }
}

#[async_trait]
impl ReviewTransport for HttpReviewClient {
    async fn analyze(&self, request: &ReviewRequest) -> Result<ReviewResult, ReviewError> {
        let url = self.endpoint(ANALYZE_PATH);
        log::debug!(
            "POST {} ({}, {}, {} bytes)",
            url,
            request.filename,
            request.review_type,
            request.code.len()
        );

        let outcome = async {
            let response = self
                .client
                .post(&url)
                .json(&AnalyzeRequestBody::from(request))
                .send()
                .await
                .map_err(ReviewError::transport)?;
            let body = read_success_body(response).await?;
            wire::parse_review(&body, request)
        }
        .await;

        match &outcome {
            Ok(result) => log::info!(
                "Review of {} completed with {} issues",
                request.filename,
                result.issue_count()
            ),
            Err(err) => match err.reason() {
                Some(reason) => log::warn!("Review of {} failed: {}", request.filename, reason),
                None => log::warn!("Review of {} failed: {}", request.filename, err),
            },
        }
        outcome
    }

    async fn health(&self) -> HealthStatus {
        let response = match self.client.get(self.endpoint(HEALTH_PATH)).send().await {
            Ok(response) => response,
            Err(err) => {
                log::debug!("Health probe failed: {}", err);
                return HealthStatus::offline();
            }
        };

        if !response.status().is_success() {
            log::debug!("Health probe returned {}", response.status());
            return HealthStatus::offline();
        }

        response.json::<HealthStatus>().await.unwrap_or_else(|err| {
            log::debug!("Health probe returned an unreadable body: {}", err);
            HealthStatus::offline()
        })
    }
}
