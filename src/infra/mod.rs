//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and repositories
//! - The remote cost service client
//! - Audit record delivery

pub mod audit;
pub mod cost_client;
pub mod db;
pub mod repositories;

pub use audit::{AuditEntry, AuditLevel, AuditLogger, AuditShipper};
pub use cost_client::RemoteCostSource;
pub use db::{Database, Migrator};
pub use repositories::{CostRepository, CostStore, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use audit::MockAuditLogger;
#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockCostRepository, MockUserRepository};
