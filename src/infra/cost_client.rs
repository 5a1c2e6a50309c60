//! Reqwest-backed remote cost source.
//!
//! Owns transport details only: the GET request, the bounded timeout
//! and the mapping of transport, status and decode failures into a
//! cost-source error the aggregator can absorb.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;

use crate::errors::{AppError, AppResult};
use crate::services::CostSource;

/// Expected shape of the cost service response.
#[derive(Debug, Deserialize)]
struct TotalBody {
    total: f64,
}

/// Cost source that resolves totals from a collaborating cost service
/// over HTTP. A single attempt per lookup; failures are never retried
/// so the detail operation's latency stays bounded.
pub struct RemoteCostSource {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteCostSource {
    /// Build a source using a reqwest client with an explicit request
    /// timeout.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl CostSource for RemoteCostSource {
    async fn total_for(&self, user_id: i64) -> AppResult<f64> {
        let url = format!("{}/api/total/{}", self.base_url, user_id);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::cost_source(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::cost_source(format!(
                "cost service responded with status {}",
                status
            )));
        }

        let body: TotalBody = response
            .json()
            .await
            .map_err(|e| AppError::cost_source(format!("invalid cost service payload: {}", e)))?;

        Ok(body.total)
    }
}
