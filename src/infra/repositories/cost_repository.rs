//! Cost ledger repository. Read-only access to the costs table.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use super::entities::cost::{self, Entity as CostEntity};
use crate::domain::CostRecord;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Cost repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CostRepository: Send + Sync {
    /// All cost records attributed to the given user
    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<CostRecord>>;
}

/// Concrete implementation of CostRepository
pub struct CostStore {
    db: Arc<DatabaseConnection>,
}

impl CostStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CostRepository for CostStore {
    async fn find_by_user(&self, user_id: i64) -> AppResult<Vec<CostRecord>> {
        let models = CostEntity::find()
            .filter(cost::Column::UserId.eq(user_id))
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(CostRecord::from).collect())
    }
}
