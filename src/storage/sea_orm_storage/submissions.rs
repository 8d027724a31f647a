//! 外部提交存储操作

use super::SeaOrmStorage;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::errors::{CodeTrackError, Result};
use crate::models::{
    PaginationInfo,
    problems::entities::Platform,
    submissions::{
        entities::{ExternalVerdict, Submission},
        requests::{NewSubmission, SubmissionListQuery},
        responses::SubmissionListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 批量 upsert 轮询到的提交，返回新插入条数
    ///
    /// 去重键为 (user_id, platform, external_key)；
    /// 已存在但尚未匹配题目的记录会补上 problem_id。
    pub async fn upsert_submissions_impl(&self, subs: Vec<NewSubmission>) -> Result<u32> {
        let now = chrono::Utc::now().timestamp();
        let mut inserted = 0u32;

        for sub in subs {
            let existing = Submissions::find()
                .filter(Column::UserId.eq(sub.user_id))
                .filter(Column::Platform.eq(sub.platform.to_string()))
                .filter(Column::ExternalKey.eq(&sub.external_key))
                .one(&self.db)
                .await
                .map_err(|e| CodeTrackError::database_operation(format!("查询提交失败: {e}")))?;

            match existing {
                Some(record) => {
                    // 之前没匹配上、这次匹配上了才需要写
                    if record.problem_id.is_none() && sub.problem_id.is_some() {
                        let mut model: ActiveModel = record.into();
                        model.problem_id = Set(sub.problem_id);
                        model.synced_at = Set(now);
                        model.update(&self.db).await.map_err(|e| {
                            CodeTrackError::database_operation(format!("回填提交匹配失败: {e}"))
                        })?;
                    }
                }
                None => {
                    let model = ActiveModel {
                        user_id: Set(sub.user_id),
                        problem_id: Set(sub.problem_id),
                        platform: Set(sub.platform.to_string()),
                        external_key: Set(sub.external_key),
                        challenge_name: Set(sub.challenge_name),
                        language: Set(sub.language),
                        verdict: Set(sub.verdict.to_string()),
                        submitted_at: Set(sub.submitted_at.timestamp()),
                        synced_at: Set(now),
                        ..Default::default()
                    };
                    model.insert(&self.db).await.map_err(|e| {
                        CodeTrackError::database_operation(format!("写入提交失败: {e}"))
                    })?;
                    inserted += 1;
                }
            }
        }

        Ok(inserted)
    }

    /// 分页列出提交
    pub async fn list_submissions_with_pagination_impl(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Submissions::find().filter(Column::UserId.eq(query.user_id));

        if let Some(platform) = query.platform {
            select = select.filter(Column::Platform.eq(platform.to_string()));
        }
        if let Some(problem_id) = query.problem_id {
            select = select.filter(Column::ProblemId.eq(problem_id));
        }
        if let Some(verdict) = query.verdict {
            select = select.filter(Column::Verdict.eq(verdict.to_string()));
        }

        select = select.order_by_desc(Column::SubmittedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询提交总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询提交页数失败: {e}")))?;

        let items: Vec<Submission> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询提交列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_submission())
            .collect();

        Ok(SubmissionListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 查询一组用户对一组题目的已通过提交
    pub async fn list_accepted_submissions_impl(
        &self,
        user_ids: &[i64],
        problem_ids: &[i64],
    ) -> Result<Vec<Submission>> {
        if user_ids.is_empty() || problem_ids.is_empty() {
            return Ok(vec![]);
        }

        let result = Submissions::find()
            .filter(Column::UserId.is_in(user_ids.to_vec()))
            .filter(Column::ProblemId.is_in(problem_ids.to_vec()))
            .filter(Column::Verdict.eq(ExternalVerdict::Accepted.to_string()))
            .order_by_asc(Column::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询通过提交失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 列出某平台尚未匹配到题目的提交
    pub async fn list_unmatched_submissions_impl(
        &self,
        platform: Platform,
    ) -> Result<Vec<Submission>> {
        let result = Submissions::find()
            .filter(Column::Platform.eq(platform.to_string()))
            .filter(Column::ProblemId.is_null())
            .all(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询未匹配提交失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 回填提交的题目匹配
    pub async fn bind_submission_problem_impl(
        &self,
        submission_id: i64,
        problem_id: i64,
    ) -> Result<bool> {
        let result = Submissions::update_many()
            .col_expr(
                Column::ProblemId,
                sea_orm::sea_query::Expr::value(problem_id),
            )
            .filter(Column::Id.eq(submission_id))
            .filter(Column::ProblemId.is_null())
            .exec(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("回填提交匹配失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
