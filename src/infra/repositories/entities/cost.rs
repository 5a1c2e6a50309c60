//! Cost database entity for SeaORM. Read-only from this service.

use sea_orm::entity::prelude::*;

use crate::domain::CostRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "costs")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub amount: f64,
    pub description: Option<String>,
    pub category: Option<String>,
    pub date: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for CostRecord {
    fn from(model: Model) -> Self {
        CostRecord {
            user_id: model.user_id,
            amount: model.amount,
        }
    }
}
