//! Audit logging - one structured record per completed operation.
//!
//! The service layer emits records through the `AuditLogger` capability;
//! delivery is this module's concern. Records are always logged locally
//! via `tracing` and, when a logs service is configured, shipped to it
//! as JSON. Shipping failure never affects the request being audited.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;

use crate::config::SERVICE_NAME;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Severity of an audit record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditLevel {
    Info,
    Error,
}

/// One structured record describing a completed operation.
#[derive(Debug, Clone, Serialize)]
pub struct AuditEntry {
    pub service: &'static str,
    pub level: AuditLevel,
    /// Human-oriented action description, e.g. "Add User"
    pub action: String,
    /// Stable outcome identifier: "OK" or an error code
    pub outcome: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    /// Unix timestamp in milliseconds
    pub time: i64,
}

impl AuditEntry {
    pub fn success(action: impl Into<String>, user_id: Option<i64>) -> Self {
        Self {
            service: SERVICE_NAME,
            level: AuditLevel::Info,
            action: action.into(),
            outcome: "OK".to_string(),
            user_id,
            time: Utc::now().timestamp_millis(),
        }
    }

    pub fn failure(action: impl Into<String>, outcome: impl Into<String>) -> Self {
        Self {
            service: SERVICE_NAME,
            level: AuditLevel::Error,
            action: action.into(),
            outcome: outcome.into(),
            user_id: None,
            time: Utc::now().timestamp_millis(),
        }
    }
}

/// Audit logger capability, injected into the service layer.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait AuditLogger: Send + Sync {
    /// Record one completed operation. Must not fail the caller.
    async fn record(&self, entry: AuditEntry);
}

/// Audit logger that logs locally and optionally ships records to a
/// remote logs service.
pub struct AuditShipper {
    client: reqwest::Client,
    endpoint: Option<String>,
}

impl AuditShipper {
    /// Build a shipper. `log_api_url` is the logs service base URL; when
    /// absent, records stay local.
    pub fn new(log_api_url: Option<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let endpoint = log_api_url.map(|base| {
            format!("{}/api/logs/add", base.trim_end_matches('/'))
        });
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl AuditLogger for AuditShipper {
    async fn record(&self, entry: AuditEntry) {
        match entry.level {
            AuditLevel::Info => tracing::info!(
                action = %entry.action,
                outcome = %entry.outcome,
                user_id = ?entry.user_id,
                "{} - {}",
                entry.action,
                entry.outcome
            ),
            AuditLevel::Error => tracing::error!(
                action = %entry.action,
                outcome = %entry.outcome,
                user_id = ?entry.user_id,
                "{} - {}",
                entry.action,
                entry.outcome
            ),
        }

        if let Some(endpoint) = &self.endpoint {
            let result = self.client.post(endpoint).json(&entry).send().await;
            match result {
                Ok(response) if !response.status().is_success() => {
                    tracing::error!("Remote log failed: status {}", response.status());
                }
                Err(e) => {
                    tracing::error!("Remote log failed: {}", e);
                }
                Ok(_) => {}
            }
        }
    }
}
