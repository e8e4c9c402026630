//! Meter reading (lectura) entity

use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Reading model - one meter capture per member per billing period.
/// Rows are insert-only; corrections happen through the next period's reading.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "readings")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub member_id: i32,

    pub previous_reading: i64,

    pub current_reading: i64,

    /// Derived: `max(0, current - previous)`
    pub consumption: i64,

    /// Meter appeared to run backwards; kept for manual review
    pub anomaly: bool,

    pub reading_date: DateTime<Utc>,

    /// Username of the operator who captured the reading
    pub recorded_by: String,

    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::member::Entity",
        from = "Column::MemberId",
        to = "super::member::Column::Id"
    )]
    Member,
}

impl Related<super::member::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Member.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
