//! Application services layer - Use cases and business logic.
//!
//! Services orchestrate domain logic and infrastructure to fulfill
//! application use cases. They depend on abstractions (traits) for
//! dependency inversion.

mod cost_aggregator;
mod user_service;

pub use cost_aggregator::{CostAggregator, CostSource, LedgerCostSource};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use cost_aggregator::MockCostSource;
