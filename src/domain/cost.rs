//! Cost ledger entry, read-only from this service's perspective.

/// One cost record attributed to a user. Only the fields consumed by
/// total aggregation are carried here.
#[derive(Debug, Clone, PartialEq)]
pub struct CostRecord {
    pub user_id: i64,
    pub amount: f64,
}
