//! 限时测试实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "coding_tests")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub class_id: i64,
    pub title: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub window_starts_at: i64,
    pub window_ends_at: i64,
    pub penalty_points: f64,
    pub created_by: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classes::Entity",
        from = "Column::ClassId",
        to = "super::classes::Column::Id"
    )]
    Class,
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id"
    )]
    Creator,
    #[sea_orm(has_many = "super::test_problems::Entity")]
    TestProblems,
    #[sea_orm(has_many = "super::test_sessions::Entity")]
    TestSessions,
}

impl Related<super::classes::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Class.def()
    }
}

impl Related<super::test_problems::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestProblems.def()
    }
}

impl Related<super::test_sessions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TestSessions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_coding_test(self) -> crate::models::tests::entities::CodingTest {
        use crate::models::tests::entities::CodingTest;
        use chrono::{DateTime, Utc};

        CodingTest {
            id: self.id,
            class_id: self.class_id,
            title: self.title,
            description: self.description,
            duration_minutes: self.duration_minutes,
            window_starts_at: DateTime::<Utc>::from_timestamp(self.window_starts_at, 0)
                .unwrap_or_default(),
            window_ends_at: DateTime::<Utc>::from_timestamp(self.window_ends_at, 0)
                .unwrap_or_default(),
            penalty_points: self.penalty_points,
            created_by: self.created_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
