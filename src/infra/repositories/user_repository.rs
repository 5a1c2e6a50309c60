//! User repository implementation.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set, SqlErr};

use super::entities::user::{ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, User};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// The store contract the service layer depends on: find-by-id,
/// find-all and create. The concrete persistence technology is
/// substitutable behind this trait.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by identifier
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>>;

    /// List all users in the store's natural order
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// Persist a new user. A store-level uniqueness violation surfaces
    /// as `UserExists`, not as a raw database error.
    async fn create(&self, user: NewUser) -> AppResult<User>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_id(&self, id: i64) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(self.db.as_ref())
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn create(&self, user: NewUser) -> AppResult<User> {
        let id = user.id;
        let active_model = ActiveModel {
            id: Set(user.id),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            birthday: Set(user.birthday),
        };

        // Two concurrent registrations can both pass the existence
        // check; the primary key constraint settles the race.
        let model = active_model.insert(self.db.as_ref()).await.map_err(|err| {
            match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => AppError::UserExists(id),
                _ => AppError::from(err),
            }
        })?;

        Ok(User::from(model))
    }
}
