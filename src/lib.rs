//! Users Service - user registry microservice with cost aggregation
//!
//! Exposes three operations: list users, fetch one user with an
//! aggregated cost total, and register a new user. Totals combine
//! local records with data from a collaborating cost service,
//! degrading gracefully when that service is unreachable.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Core entities and input validation
//! - **services**: User service orchestration and cost aggregation
//! - **infra**: Infrastructure concerns (database, cost client, audit)
//! - **api**: HTTP handlers and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{User, UserDetail, UserResponse};
pub use errors::{AppError, AppResult};
