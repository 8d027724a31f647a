//! 评测实例实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "judge_instances")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(unique)]
    pub base_url: String,
    pub auth_token: Option<String>,
    pub enabled: bool,
    pub healthy: bool,
    pub last_checked_at: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_judge_instance(self) -> crate::models::judges::entities::JudgeInstance {
        use crate::models::judges::entities::JudgeInstance;
        use chrono::{DateTime, Utc};

        JudgeInstance {
            id: self.id,
            name: self.name,
            base_url: self.base_url,
            auth_token: self.auth_token,
            enabled: self.enabled,
            healthy: self.healthy,
            last_checked_at: self
                .last_checked_at
                .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)),
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            updated_at: DateTime::<Utc>::from_timestamp(self.updated_at, 0).unwrap_or_default(),
        }
    }
}
