//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{RegisterRequest, UserDetail, UserResponse};

/// OpenAPI documentation for the users service
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users Service",
        version = "0.1.0",
        description = "User registry microservice with cost aggregation",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3003", description = "Local development server")
    ),
    paths(
        user_handler::list_users,
        user_handler::get_user_detail,
        user_handler::add_user,
    ),
    components(
        schemas(
            RegisterRequest,
            UserResponse,
            UserDetail,
        )
    ),
    tags(
        (name = "Users", description = "User registry operations")
    )
)]
pub struct ApiDoc;
