//! Cost aggregation - resolves a user's total spend with fallback.
//!
//! Totals come from a cost source: either the local ledger table or a
//! collaborating cost service over HTTP. A failing source degrades to
//! a zero total instead of failing the request; a user's profile must
//! remain viewable when the cost subsystem is down.

use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::AppResult;
use crate::infra::{AuditEntry, AuditLogger, CostRepository};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// A source of per-user cost totals.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CostSource: Send + Sync {
    /// Exact total for the user at the instant of computation
    async fn total_for(&self, user_id: i64) -> AppResult<f64>;
}

/// Cost source backed by the local ledger table.
pub struct LedgerCostSource {
    costs: Arc<dyn CostRepository>,
}

impl LedgerCostSource {
    pub fn new(costs: Arc<dyn CostRepository>) -> Self {
        Self { costs }
    }
}

#[async_trait]
impl CostSource for LedgerCostSource {
    async fn total_for(&self, user_id: i64) -> AppResult<f64> {
        let records = self.costs.find_by_user(user_id).await?;
        // Sum over an empty set is 0
        Ok(records.iter().map(|record| record.amount).sum())
    }
}

/// Resolves totals through the configured source, absorbing source
/// failures into a degraded zero total.
pub struct CostAggregator {
    source: Arc<dyn CostSource>,
    audit: Arc<dyn AuditLogger>,
}

impl CostAggregator {
    pub fn new(source: Arc<dyn CostSource>, audit: Arc<dyn AuditLogger>) -> Self {
        Self { source, audit }
    }

    /// Resolve the user's total. Source failure is non-fatal: the
    /// failure is recorded for observability and 0 is returned. The
    /// source is never retried.
    pub async fn resolve_total(&self, user_id: i64) -> f64 {
        match self.source.total_for(user_id).await {
            Ok(total) => total,
            Err(e) => {
                tracing::warn!("Cost lookup for user {} failed: {}", user_id, e);
                self.audit
                    .record(AuditEntry::failure(
                        format!("Cost Lookup ({})", user_id),
                        e.code(),
                    ))
                    .await;
                0.0
            }
        }
    }
}
