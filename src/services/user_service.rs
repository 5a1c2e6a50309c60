//! User service - orchestrates validation, uniqueness enforcement,
//! repository access and cost aggregation into the three supported
//! operations, and emits one audit record per completed request.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::{
    validate_birthday, validate_path_id, validate_user_id, NewUser, RegisterRequest, User,
    UserDetail,
};
use crate::errors::{AppError, AppResult};
use crate::infra::{AuditEntry, AuditLogger, UserRepository};

use super::cost_aggregator::CostAggregator;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user from raw request input
    async fn register(&self, input: RegisterRequest) -> AppResult<User>;

    /// Fetch one user plus their aggregated cost total
    async fn get_detail(&self, raw_id: &str) -> AppResult<UserDetail>;

    /// List every user in the repository's natural order
    async fn list_all(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserService.
pub struct UserManager {
    users: Arc<dyn UserRepository>,
    costs: CostAggregator,
    audit: Arc<dyn AuditLogger>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(
        users: Arc<dyn UserRepository>,
        costs: CostAggregator,
        audit: Arc<dyn AuditLogger>,
    ) -> Self {
        Self {
            users,
            costs,
            audit,
        }
    }

    /// Registration core. Ordering is observable and must hold:
    /// presence > id format > date format > uniqueness > persistence.
    async fn register_inner(&self, input: RegisterRequest) -> AppResult<User> {
        if !has_value(&input.id)
            || !has_text(&input.first_name)
            || !has_text(&input.last_name)
            || !has_value(&input.birthday)
        {
            return Err(AppError::MissingFields);
        }

        let id = validate_user_id(input.id.as_ref())?;

        // Presence already checked above
        let birthday = validate_birthday(input.birthday.as_ref().unwrap_or(&Value::Null))?;

        if self.users.find_by_id(id).await?.is_some() {
            return Err(AppError::UserExists(id));
        }

        let first_name = input.first_name.as_deref().unwrap_or_default().trim();
        let last_name = input.last_name.as_deref().unwrap_or_default().trim();

        self.users
            .create(NewUser {
                id,
                first_name: first_name.to_string(),
                last_name: last_name.to_string(),
                birthday,
            })
            .await
    }

    async fn get_detail_inner(&self, raw_id: &str) -> AppResult<UserDetail> {
        let id = validate_path_id(raw_id)?;

        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or(AppError::UserNotFound)?;

        let total = self.costs.resolve_total(id).await;

        Ok(UserDetail {
            first_name: user.first_name,
            last_name: user.last_name,
            id: user.id,
            total,
        })
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn register(&self, input: RegisterRequest) -> AppResult<User> {
        let result = self.register_inner(input).await;

        let entry = match &result {
            Ok(user) => AuditEntry::success("Add User", Some(user.id)),
            Err(e) => AuditEntry::failure("Add User", e.code()),
        };
        self.audit.record(entry).await;

        result
    }

    async fn get_detail(&self, raw_id: &str) -> AppResult<UserDetail> {
        let result = self.get_detail_inner(raw_id).await;

        let action = format!("Get User By ID ({})", raw_id);
        let entry = match &result {
            Ok(detail) => AuditEntry::success(action, Some(detail.id)),
            Err(e) => AuditEntry::failure(action, e.code()),
        };
        self.audit.record(entry).await;

        result
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        let result = self.users.find_all().await.map_err(|e| {
            tracing::error!("Error fetching users: {}", e);
            AppError::ListUnavailable
        });

        let entry = match &result {
            Ok(_) => AuditEntry::success("Get All Users", None),
            Err(e) => AuditEntry::failure("Get All Users", e.code()),
        };
        self.audit.record(entry).await;

        result
    }
}

/// A JSON field counts as present when it exists, is not null and, for
/// strings, is not blank.
fn has_value(field: &Option<Value>) -> bool {
    match field {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

fn has_text(field: &Option<String>) -> bool {
    field.as_deref().is_some_and(|s| !s.trim().is_empty())
}
