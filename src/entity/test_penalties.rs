//! 测试违规处罚实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "test_penalties")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub session_id: i64,
    pub kind: String,
    pub points: f64,
    pub note: Option<String>,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::test_sessions::Entity",
        from = "Column::SessionId",
        to = "super::test_sessions::Column::Id"
    )]
    Session,
}

impl Related<super::test_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Session.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_test_penalty(self) -> crate::models::test_sessions::entities::TestPenalty {
        use crate::models::test_sessions::entities::{PenaltyKind, TestPenalty};
        use chrono::{DateTime, Utc};
        use std::str::FromStr;

        TestPenalty {
            id: self.id,
            session_id: self.session_id,
            kind: PenaltyKind::from_str(&self.kind).unwrap_or(PenaltyKind::Other),
            points: self.points,
            note: self.note,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
