//! 外部提交记录实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub user_id: i64,
    pub problem_id: Option<i64>,
    pub platform: String,
    pub external_key: String,
    pub challenge_name: String,
    pub language: Option<String>,
    pub verdict: String,
    pub submitted_at: i64,
    pub synced_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::users::Entity",
        from = "Column::UserId",
        to = "super::users::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::problems::Entity",
        from = "Column::ProblemId",
        to = "super::problems::Column::Id"
    )]
    Problem,
}

impl Related<super::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::problems::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Problem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_submission(self) -> crate::models::submissions::entities::Submission {
        use crate::models::problems::entities::Platform;
        use crate::models::submissions::entities::{ExternalVerdict, Submission};
        use chrono::{DateTime, Utc};
        use std::str::FromStr;

        Submission {
            id: self.id,
            user_id: self.user_id,
            problem_id: self.problem_id,
            platform: Platform::from_str(&self.platform).unwrap_or(Platform::Leetcode),
            external_key: self.external_key,
            challenge_name: self.challenge_name,
            language: self.language,
            verdict: ExternalVerdict::from_str(&self.verdict).unwrap_or(ExternalVerdict::Unknown),
            submitted_at: DateTime::<Utc>::from_timestamp(self.submitted_at, 0).unwrap_or_default(),
            synced_at: DateTime::<Utc>::from_timestamp(self.synced_at, 0).unwrap_or_default(),
        }
    }
}
