//! 测试会话存储操作

use super::SeaOrmStorage;
use crate::entity::test_penalties::{
    ActiveModel as TestPenaltyActiveModel, Column as TestPenaltyColumn, Entity as TestPenalties,
};
use crate::entity::test_sessions::{ActiveModel, Column, Entity as TestSessions};
use crate::entity::test_submissions::{
    ActiveModel as TestSubmissionActiveModel, Column as TestSubmissionColumn,
    Entity as TestSubmissions,
};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{CodeTrackError, Result};
use crate::models::{
    PaginationInfo,
    test_sessions::{
        entities::{PenaltyKind, SessionStatus, TestPenalty, TestSession, TestSubmission, TestVerdict},
        requests::SessionListQuery,
        responses::{SessionListItem, SessionListResponse},
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use std::collections::HashMap;

impl SeaOrmStorage {
    /// 开始会话
    pub async fn create_session_impl(
        &self,
        test_id: i64,
        user_id: i64,
        started_at: chrono::DateTime<chrono::Utc>,
        deadline_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<TestSession> {
        let model = ActiveModel {
            test_id: Set(test_id),
            user_id: Set(user_id),
            started_at: Set(started_at.timestamp()),
            deadline_at: Set(deadline_at.timestamp()),
            finished_at: Set(None),
            status: Set(SessionStatus::Active.to_string()),
            score: Set(0.0),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("创建会话失败: {e}")))?;

        Ok(result.into_test_session())
    }

    /// 通过 ID 获取会话
    pub async fn get_session_by_id_impl(&self, session_id: i64) -> Result<Option<TestSession>> {
        let result = TestSessions::find_by_id(session_id)
            .one(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询会话失败: {e}")))?;

        Ok(result.map(|m| m.into_test_session()))
    }

    /// 获取用户在某测试的会话
    pub async fn get_session_by_test_and_user_impl(
        &self,
        test_id: i64,
        user_id: i64,
    ) -> Result<Option<TestSession>> {
        let result = TestSessions::find()
            .filter(Column::TestId.eq(test_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询会话失败: {e}")))?;

        Ok(result.map(|m| m.into_test_session()))
    }

    /// 结束会话，写入最终状态与得分
    pub async fn close_session_impl(
        &self,
        session_id: i64,
        status: SessionStatus,
        score: f64,
        finished_at: Option<chrono::DateTime<chrono::Utc>>,
    ) -> Result<bool> {
        let Some(existing) = TestSessions::find_by_id(session_id)
            .one(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询会话失败: {e}")))?
        else {
            return Ok(false);
        };

        let mut model: ActiveModel = existing.into();
        model.status = Set(status.to_string());
        model.score = Set(score);
        model.finished_at = Set(finished_at.map(|dt| dt.timestamp()));

        model
            .update(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("结束会话失败: {e}")))?;

        Ok(true)
    }

    /// 分页列出测试的全部会话（带用户信息与违规次数）
    pub async fn list_sessions_with_pagination_impl(
        &self,
        query: SessionListQuery,
    ) -> Result<SessionListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let select = TestSessions::find()
            .filter(Column::TestId.eq(query.test_id))
            .order_by_desc(Column::Score);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询会话总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询会话页数失败: {e}")))?;

        let sessions = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询会话列表失败: {e}")))?;

        // 批量取用户信息
        let user_ids: Vec<i64> = sessions.iter().map(|s| s.user_id).collect();
        let users = if user_ids.is_empty() {
            vec![]
        } else {
            Users::find()
                .filter(UserColumn::Id.is_in(user_ids))
                .all(&self.db)
                .await
                .map_err(|e| CodeTrackError::database_operation(format!("查询用户失败: {e}")))?
        };
        let user_map: HashMap<i64, _> = users.into_iter().map(|u| (u.id, u)).collect();

        // 批量统计违规次数
        let session_ids: Vec<i64> = sessions.iter().map(|s| s.id).collect();
        let penalties = if session_ids.is_empty() {
            vec![]
        } else {
            TestPenalties::find()
                .filter(TestPenaltyColumn::SessionId.is_in(session_ids))
                .all(&self.db)
                .await
                .map_err(|e| CodeTrackError::database_operation(format!("查询违规失败: {e}")))?
        };
        let mut penalty_counts: HashMap<i64, i64> = HashMap::new();
        for p in penalties {
            *penalty_counts.entry(p.session_id).or_insert(0) += 1;
        }

        let mut items = Vec::with_capacity(sessions.len());
        for session in sessions {
            let Some(user) = user_map.get(&session.user_id) else {
                continue;
            };
            let penalty_count = penalty_counts.get(&session.id).copied().unwrap_or(0);
            items.push(SessionListItem {
                username: user.username.clone(),
                profile_name: user.profile_name.clone(),
                penalty_count,
                session: session.into_test_session(),
            });
        }

        Ok(SessionListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 记录违规
    pub async fn add_penalty_impl(
        &self,
        session_id: i64,
        kind: PenaltyKind,
        points: f64,
        note: Option<String>,
    ) -> Result<TestPenalty> {
        let model = TestPenaltyActiveModel {
            session_id: Set(session_id),
            kind: Set(kind.to_string()),
            points: Set(points),
            note: Set(note),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("记录违规失败: {e}")))?;

        Ok(result.into_test_penalty())
    }

    /// 列出会话违规记录
    pub async fn list_penalties_impl(&self, session_id: i64) -> Result<Vec<TestPenalty>> {
        let result = TestPenalties::find()
            .filter(TestPenaltyColumn::SessionId.eq(session_id))
            .order_by_asc(TestPenaltyColumn::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询违规失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_test_penalty()).collect())
    }

    /// 会话违规扣分合计
    pub async fn sum_penalties_impl(&self, session_id: i64) -> Result<f64> {
        let penalties = TestPenalties::find()
            .filter(TestPenaltyColumn::SessionId.eq(session_id))
            .all(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询违规失败: {e}")))?;

        Ok(penalties.iter().map(|p| p.points).sum())
    }

    /// 记录代码提交
    pub async fn create_test_submission_impl(
        &self,
        session_id: i64,
        test_problem_id: i64,
        language_id: i32,
        source_code: &str,
    ) -> Result<TestSubmission> {
        let model = TestSubmissionActiveModel {
            session_id: Set(session_id),
            test_problem_id: Set(test_problem_id),
            language_id: Set(language_id),
            source_code: Set(source_code.to_string()),
            judge_token: Set(None),
            verdict: Set(TestVerdict::Pending.to_string()),
            score: Set(0.0),
            submitted_at: Set(chrono::Utc::now().timestamp()),
            judged_at: Set(None),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("记录代码提交失败: {e}")))?;

        Ok(result.into_test_submission(true))
    }

    /// 列出会话的代码提交
    pub async fn list_session_submissions_impl(
        &self,
        session_id: i64,
        with_source: bool,
    ) -> Result<Vec<TestSubmission>> {
        let result = TestSubmissions::find()
            .filter(TestSubmissionColumn::SessionId.eq(session_id))
            .order_by_asc(TestSubmissionColumn::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询代码提交失败: {e}")))?;

        Ok(result
            .into_iter()
            .map(|m| m.into_test_submission(with_source))
            .collect())
    }

    /// 提交已派发给评测机，记录 token
    pub async fn mark_submission_dispatched_impl(
        &self,
        submission_id: i64,
        token: &str,
    ) -> Result<bool> {
        let Some(existing) = TestSubmissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询代码提交失败: {e}")))?
        else {
            return Ok(false);
        };

        let mut model: TestSubmissionActiveModel = existing.into();
        model.judge_token = Set(Some(token.to_string()));
        model.verdict = Set(TestVerdict::Queued.to_string());

        model
            .update(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("更新代码提交失败: {e}")))?;

        Ok(true)
    }

    /// 列出等待评测结果的提交 (id, token, test_problem_id)
    pub async fn list_queued_submissions_impl(&self) -> Result<Vec<(i64, String, i64)>> {
        let result = TestSubmissions::find()
            .filter(TestSubmissionColumn::Verdict.eq(TestVerdict::Queued.to_string()))
            .filter(TestSubmissionColumn::JudgeToken.is_not_null())
            .order_by_asc(TestSubmissionColumn::SubmittedAt)
            .all(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询待评测提交失败: {e}")))?;

        Ok(result
            .into_iter()
            .filter_map(|m| {
                m.judge_token
                    .clone()
                    .map(|t| (m.id, t, m.test_problem_id))
            })
            .collect())
    }

    /// 写入评测结果
    pub async fn record_submission_verdict_impl(
        &self,
        submission_id: i64,
        verdict: TestVerdict,
        exec_time_ms: Option<i32>,
        memory_kb: Option<i32>,
        score: f64,
    ) -> Result<bool> {
        let Some(existing) = TestSubmissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询代码提交失败: {e}")))?
        else {
            return Ok(false);
        };

        let mut model: TestSubmissionActiveModel = existing.into();
        model.verdict = Set(verdict.to_string());
        model.exec_time_ms = Set(exec_time_ms);
        model.memory_kb = Set(memory_kb);
        model.score = Set(score);
        model.judged_at = Set(Some(chrono::Utc::now().timestamp()));

        model
            .update(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("写入评测结果失败: {e}")))?;

        Ok(true)
    }

    /// 会话内每道题的最高得分
    pub async fn best_scores_by_problem_impl(
        &self,
        session_id: i64,
    ) -> Result<HashMap<i64, f64>> {
        let submissions = TestSubmissions::find()
            .filter(TestSubmissionColumn::SessionId.eq(session_id))
            .all(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询代码提交失败: {e}")))?;

        let mut best: HashMap<i64, f64> = HashMap::new();
        for sub in submissions {
            let entry = best.entry(sub.test_problem_id).or_insert(0.0);
            if sub.score > *entry {
                *entry = sub.score;
            }
        }

        Ok(best)
    }
}
