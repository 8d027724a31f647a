//! 题目存储操作

use super::SeaOrmStorage;
use crate::entity::problems::{ActiveModel, Column, Entity as Problems};
use crate::errors::{CodeTrackError, Result};
use crate::models::{
    PaginationInfo,
    problems::{
        entities::{Platform, Problem},
        requests::{CreateProblemRequest, ProblemListQuery, UpdateProblemRequest},
        responses::ProblemListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建题目
    pub async fn create_problem_impl(
        &self,
        created_by: i64,
        req: CreateProblemRequest,
    ) -> Result<Problem> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            platform: Set(req.platform.to_string()),
            slug: Set(req.slug),
            title: Set(req.title),
            url: Set(req.url),
            difficulty: Set(req.difficulty),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("创建题目失败: {e}")))?;

        Ok(result.into_problem())
    }

    /// 通过 ID 获取题目
    pub async fn get_problem_by_id_impl(&self, problem_id: i64) -> Result<Option<Problem>> {
        let result = Problems::find_by_id(problem_id)
            .one(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询题目失败: {e}")))?;

        Ok(result.map(|m| m.into_problem()))
    }

    /// 通过平台与 slug 获取题目
    pub async fn get_problem_by_platform_slug_impl(
        &self,
        platform: Platform,
        slug: &str,
    ) -> Result<Option<Problem>> {
        let result = Problems::find()
            .filter(Column::Platform.eq(platform.to_string()))
            .filter(Column::Slug.eq(slug))
            .one(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询题目失败: {e}")))?;

        Ok(result.map(|m| m.into_problem()))
    }

    /// 分页列出题目
    pub async fn list_problems_with_pagination_impl(
        &self,
        query: ProblemListQuery,
    ) -> Result<ProblemListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Problems::find();

        if let Some(platform) = query.platform {
            select = select.filter(Column::Platform.eq(platform.to_string()));
        }
        if let Some(ref difficulty) = query.difficulty {
            select = select.filter(Column::Difficulty.eq(difficulty));
        }
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::Slug.contains(&escaped)),
            );
        }

        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询题目总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询题目页数失败: {e}")))?;

        let items: Vec<Problem> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询题目列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_problem())
            .collect();

        Ok(ProblemListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 列出某平台全部题目
    pub async fn list_problems_by_platform_impl(&self, platform: Platform) -> Result<Vec<Problem>> {
        let result = Problems::find()
            .filter(Column::Platform.eq(platform.to_string()))
            .all(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询题目失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_problem()).collect())
    }

    /// 更新题目
    pub async fn update_problem_impl(
        &self,
        problem_id: i64,
        update: UpdateProblemRequest,
    ) -> Result<Option<Problem>> {
        let Some(existing) = Problems::find_by_id(problem_id)
            .one(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询题目失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(url) = update.url {
            model.url = Set(Some(url));
        }
        if let Some(difficulty) = update.difficulty {
            model.difficulty = Set(Some(difficulty));
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("更新题目失败: {e}")))?;

        Ok(Some(result.into_problem()))
    }

    /// 删除题目
    pub async fn delete_problem_impl(&self, problem_id: i64) -> Result<bool> {
        let result = Problems::delete_by_id(problem_id)
            .exec(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("删除题目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
