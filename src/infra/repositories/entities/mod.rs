//! SeaORM entity definitions.

pub mod cost;
pub mod user;
