//! 评测实例存储操作

use super::SeaOrmStorage;
use crate::entity::judge_instances::{ActiveModel, Column, Entity as JudgeInstances};
use crate::errors::{CodeTrackError, Result};
use crate::models::judges::{
    entities::JudgeInstance,
    requests::{CreateJudgeRequest, UpdateJudgeRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 注册评测实例
    pub async fn create_judge_impl(&self, req: CreateJudgeRequest) -> Result<JudgeInstance> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            name: Set(req.name),
            base_url: Set(req.base_url.trim_end_matches('/').to_string()),
            auth_token: Set(req.auth_token),
            enabled: Set(true),
            healthy: Set(false),
            last_checked_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("注册评测实例失败: {e}")))?;

        Ok(result.into_judge_instance())
    }

    /// 通过 ID 获取评测实例
    pub async fn get_judge_by_id_impl(&self, judge_id: i64) -> Result<Option<JudgeInstance>> {
        let result = JudgeInstances::find_by_id(judge_id)
            .one(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询评测实例失败: {e}")))?;

        Ok(result.map(|m| m.into_judge_instance()))
    }

    /// 列出全部评测实例
    pub async fn list_judges_impl(&self) -> Result<Vec<JudgeInstance>> {
        let result = JudgeInstances::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询评测实例失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_judge_instance()).collect())
    }

    /// 列出启用的评测实例
    pub async fn list_enabled_judges_impl(&self) -> Result<Vec<JudgeInstance>> {
        let result = JudgeInstances::find()
            .filter(Column::Enabled.eq(true))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询评测实例失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_judge_instance()).collect())
    }

    /// 更新评测实例
    pub async fn update_judge_impl(
        &self,
        judge_id: i64,
        update: UpdateJudgeRequest,
    ) -> Result<Option<JudgeInstance>> {
        let Some(existing) = JudgeInstances::find_by_id(judge_id)
            .one(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询评测实例失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(base_url) = update.base_url {
            model.base_url = Set(base_url.trim_end_matches('/').to_string());
            // 地址变了，健康状态重新探测
            model.healthy = Set(false);
        }
        if let Some(auth_token) = update.auth_token {
            model.auth_token = Set((!auth_token.is_empty()).then_some(auth_token));
        }
        if let Some(enabled) = update.enabled {
            model.enabled = Set(enabled);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("更新评测实例失败: {e}")))?;

        Ok(Some(result.into_judge_instance()))
    }

    /// 删除评测实例
    pub async fn delete_judge_impl(&self, judge_id: i64) -> Result<bool> {
        let result = JudgeInstances::delete_by_id(judge_id)
            .exec(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("删除评测实例失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 更新健康状态
    pub async fn set_judge_health_impl(&self, judge_id: i64, healthy: bool) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();
        let result = JudgeInstances::update_many()
            .col_expr(Column::Healthy, sea_orm::sea_query::Expr::value(healthy))
            .col_expr(
                Column::LastCheckedAt,
                sea_orm::sea_query::Expr::value(Some(now)),
            )
            .filter(Column::Id.eq(judge_id))
            .exec(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("更新健康状态失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
