//! 限时测试存储操作

use super::SeaOrmStorage;
use crate::entity::coding_tests::{ActiveModel, Column, Entity as CodingTests};
use crate::entity::test_problems::{
    ActiveModel as TestProblemActiveModel, Column as TestProblemColumn, Entity as TestProblems,
};
use crate::errors::{CodeTrackError, Result};
use crate::models::{
    PaginationInfo,
    tests::{
        entities::{CodingTest, TestProblem},
        requests::{CreateTestProblemRequest, CreateTestRequest, TestListQuery, UpdateTestRequest},
        responses::TestListResponse,
    },
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建限时测试
    pub async fn create_test_impl(
        &self,
        created_by: i64,
        req: CreateTestRequest,
    ) -> Result<CodingTest> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            class_id: Set(req.class_id),
            title: Set(req.title),
            description: Set(req.description),
            duration_minutes: Set(req.duration_minutes),
            window_starts_at: Set(req.window_starts_at.timestamp()),
            window_ends_at: Set(req.window_ends_at.timestamp()),
            penalty_points: Set(req.penalty_points.unwrap_or(0.0)),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("创建测试失败: {e}")))?;

        Ok(result.into_coding_test())
    }

    /// 通过 ID 获取测试
    pub async fn get_test_by_id_impl(&self, test_id: i64) -> Result<Option<CodingTest>> {
        let result = CodingTests::find_by_id(test_id)
            .one(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询测试失败: {e}")))?;

        Ok(result.map(|m| m.into_coding_test()))
    }

    /// 分页列出测试
    pub async fn list_tests_with_pagination_impl(
        &self,
        query: TestListQuery,
    ) -> Result<TestListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = CodingTests::find();

        if let Some(class_id) = query.class_id {
            select = select.filter(Column::ClassId.eq(class_id));
        }
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Title.contains(&escaped));
        }

        select = select.order_by_desc(Column::WindowStartsAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询测试总数失败: {e}")))?;
        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询测试页数失败: {e}")))?;

        let items: Vec<CodingTest> = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询测试列表失败: {e}")))?
            .into_iter()
            .map(|m| m.into_coding_test())
            .collect();

        Ok(TestListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新测试
    pub async fn update_test_impl(
        &self,
        test_id: i64,
        update: UpdateTestRequest,
    ) -> Result<Option<CodingTest>> {
        let Some(existing) = CodingTests::find_by_id(test_id)
            .one(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询测试失败: {e}")))?
        else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(duration) = update.duration_minutes {
            model.duration_minutes = Set(duration);
        }
        if let Some(starts) = update.window_starts_at {
            model.window_starts_at = Set(starts.timestamp());
        }
        if let Some(ends) = update.window_ends_at {
            model.window_ends_at = Set(ends.timestamp());
        }
        if let Some(penalty) = update.penalty_points {
            model.penalty_points = Set(penalty);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("更新测试失败: {e}")))?;

        Ok(Some(result.into_coding_test()))
    }

    /// 删除测试
    pub async fn delete_test_impl(&self, test_id: i64) -> Result<bool> {
        let result = CodingTests::delete_by_id(test_id)
            .exec(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("删除测试失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 添加测试题目
    pub async fn create_test_problem_impl(
        &self,
        test_id: i64,
        req: CreateTestProblemRequest,
    ) -> Result<TestProblem> {
        let model = TestProblemActiveModel {
            test_id: Set(test_id),
            ordinal: Set(req.ordinal),
            title: Set(req.title),
            statement: Set(req.statement),
            stdin: Set(req.stdin),
            expected_output: Set(req.expected_output),
            max_score: Set(req.max_score.unwrap_or(100.0)),
            time_limit_ms: Set(req.time_limit_ms.unwrap_or(2000)),
            memory_limit_kb: Set(req.memory_limit_kb.unwrap_or(262_144)),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("添加测试题目失败: {e}")))?;

        Ok(result.into_test_problem())
    }

    /// 获取测试题目
    pub async fn get_test_problem_by_id_impl(
        &self,
        test_problem_id: i64,
    ) -> Result<Option<TestProblem>> {
        let result = TestProblems::find_by_id(test_problem_id)
            .one(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询测试题目失败: {e}")))?;

        Ok(result.map(|m| m.into_test_problem()))
    }

    /// 列出测试题目
    pub async fn list_test_problems_impl(&self, test_id: i64) -> Result<Vec<TestProblem>> {
        let result = TestProblems::find()
            .filter(TestProblemColumn::TestId.eq(test_id))
            .order_by_asc(TestProblemColumn::Ordinal)
            .all(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("查询测试题目失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_test_problem()).collect())
    }

    /// 删除测试题目
    pub async fn delete_test_problem_impl(&self, test_problem_id: i64) -> Result<bool> {
        let result = TestProblems::delete_by_id(test_problem_id)
            .exec(&self.db)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("删除测试题目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
