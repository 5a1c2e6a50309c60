//! Application state - Dependency injection container.
//!
//! Provides centralized access to the user service and infrastructure.

use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, LOG_SHIP_TIMEOUT_SECS};
use crate::errors::{AppError, AppResult};
use crate::infra::{
    AuditLogger, AuditShipper, CostStore, Database, RemoteCostSource, UserStore,
};
use crate::services::{CostAggregator, CostSource, LedgerCostSource, UserManager, UserService};

/// Application state containing all services (DI container).
#[derive(Clone)]
pub struct AppState {
    /// User service
    pub user_service: Arc<dyn UserService>,
    /// Database connection
    pub database: Arc<Database>,
}

impl AppState {
    /// Wire repositories, cost source, audit logger and the user
    /// service from configuration.
    ///
    /// The cost source is remote when `COST_API_URL` is configured and
    /// the local ledger otherwise.
    pub fn from_config(database: Arc<Database>, config: &Config) -> AppResult<Self> {
        let connection = database.get_connection();

        let audit: Arc<dyn AuditLogger> = Arc::new(
            AuditShipper::new(
                config.log_api_url.clone(),
                Duration::from_secs(LOG_SHIP_TIMEOUT_SECS),
            )
            .map_err(|e| AppError::internal(format!("Failed to build audit shipper: {}", e)))?,
        );

        let source: Arc<dyn CostSource> = match &config.cost_api_url {
            Some(base_url) => Arc::new(
                RemoteCostSource::new(
                    base_url,
                    Duration::from_secs(config.cost_api_timeout_secs),
                )
                .map_err(|e| {
                    AppError::internal(format!("Failed to build cost client: {}", e))
                })?,
            ),
            None => Arc::new(LedgerCostSource::new(Arc::new(CostStore::new(
                connection.clone(),
            )))),
        };

        let users = Arc::new(UserStore::new(connection));
        let aggregator = CostAggregator::new(source, audit.clone());
        let user_service = Arc::new(UserManager::new(users, aggregator, audit));

        Ok(Self {
            user_service,
            database,
        })
    }

    /// Create application state with manually injected services (tests).
    pub fn new(user_service: Arc<dyn UserService>, database: Arc<Database>) -> Self {
        Self {
            user_service,
            database,
        }
    }
}
