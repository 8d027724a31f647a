//! 测试会话实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "test_sessions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub test_id: i64,
    pub user_id: i64,
    pub started_at: i64,
    pub deadline_at: i64,
    pub finished_at: Option<i64>,
    pub status: String,
    pub score: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::coding_tests::Entity",
        from = "Column::TestId",
        to = "super::coding_tests::Column::Id"
    )]
    CodingTest,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(has_many = "super::test_penalties::Entity")]
    Penalties,
    #[sea_orm(has_many = "super::test_submissions::Entity")]
    Submissions,
}

impl Related<super::coding_tests::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CodingTest.def()
    }
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::test_penalties::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Penalties.def()
    }
}

impl Related<super::test_submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_test_session(self) -> crate::models::test_sessions::entities::TestSession {
        use crate::models::test_sessions::entities::{SessionStatus, TestSession};
        use chrono::{DateTime, Utc};
        use std::str::FromStr;

        TestSession {
            id: self.id,
            test_id: self.test_id,
            user_id: self.user_id,
            started_at: DateTime::<Utc>::from_timestamp(self.started_at, 0).unwrap_or_default(),
            deadline_at: DateTime::<Utc>::from_timestamp(self.deadline_at, 0).unwrap_or_default(),
            finished_at: self
                .finished_at
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
            status: SessionStatus::from_str(&self.status).unwrap_or(SessionStatus::Expired),
            score: self.score,
        }
    }
}
