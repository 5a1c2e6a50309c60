//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::validation::format_birthday;

/// User domain entity.
///
/// The identifier is caller-supplied, unique across all users and
/// immutable once created. The birthday is stored as a UTC-midnight
/// instant and rendered in DD/MM/YYYY form at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birthday: DateTime<Utc>,
}

/// Data required to persist a new user.
///
/// Names are already trimmed and the birthday already normalized by
/// the time this struct is constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct NewUser {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub birthday: DateTime<Utc>,
}

/// User registration request.
///
/// Every field is optional at the deserialization layer so the service
/// can run its own presence check first; field-presence errors must
/// precede type and format validation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct RegisterRequest {
    /// Caller-supplied positive integer identifier
    #[schema(value_type = Option<i64>, example = 123123)]
    pub id: Option<serde_json::Value>,
    /// First name
    #[schema(example = "Test")]
    pub first_name: Option<String>,
    /// Last name
    #[schema(example = "User")]
    pub last_name: Option<String>,
    /// Birthday in DD/MM/YYYY format
    #[schema(value_type = Option<String>, example = "01/01/1990")]
    pub birthday: Option<serde_json::Value>,
}

/// User response (list and registration payloads)
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserResponse {
    /// Unique user identifier
    #[schema(example = 123123)]
    pub id: i64,
    /// First name
    #[schema(example = "Test")]
    pub first_name: String,
    /// Last name
    #[schema(example = "User")]
    pub last_name: String,
    /// Birthday in DD/MM/YYYY format
    #[schema(example = "01/01/1990")]
    pub birthday: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name,
            last_name: user.last_name,
            birthday: format_birthday(user.birthday),
        }
    }
}

/// Detail response combining the stored user with the aggregated cost
/// total resolved at request time.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserDetail {
    /// First name
    #[schema(example = "Test")]
    pub first_name: String,
    /// Last name
    #[schema(example = "User")]
    pub last_name: String,
    /// Unique user identifier
    #[schema(example = 123123)]
    pub id: i64,
    /// Sum of all cost records attributed to the user, or 0 when the
    /// cost source is unreachable
    #[schema(example = 100.0)]
    pub total: f64,
}
