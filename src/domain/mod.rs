//! Domain layer - Core business entities and validation logic.

mod cost;
mod user;
pub mod validation;

pub use cost::CostRecord;
pub use user::{NewUser, RegisterRequest, User, UserDetail, UserResponse};
pub use validation::{
    format_birthday, validate_birthday, validate_birthday_at, validate_path_id, validate_user_id,
};
