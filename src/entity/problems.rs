//! 题目实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "problems")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub platform: String,
    pub slug: String,
    pub title: String,
    pub url: Option<String>,
    pub difficulty: Option<String>,
    pub created_by: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::CreatedBy",
        to = "super::users::Column::Id"
    )]
    Creator,
    #[sea_orm(has_many = "super::assignment_problems::Entity")]
    AssignmentProblems,
    #[sea_orm(has_many = "super::submissions::Entity")]
    Submissions,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Creator.def()
    }
}

impl Related<super::assignment_problems::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssignmentProblems.def()
    }
}

impl Related<super::submissions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submissions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_problem(self) -> crate::models::problems::entities::Problem {
        use crate::models::problems::entities::{Platform, Problem};
        use chrono::{DateTime, Utc};
        use std::str::FromStr;

        Problem {
            id: self.id,
            platform: Platform::from_str(&self.platform).unwrap_or(Platform::Leetcode),
            slug: self.slug,
            title: self.title,
            url: self.url,
            difficulty: self.difficulty,
            created_by: self.created_by,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
