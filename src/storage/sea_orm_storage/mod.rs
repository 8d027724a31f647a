//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assignments;
mod class_users;
mod classes;
mod coding_tests;
mod judge_instances;
mod problems;
mod submissions;
mod test_sessions;
mod users;

use crate::config::AppConfig;
use crate::errors::{CodeTrackError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| CodeTrackError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CodeTrackError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| CodeTrackError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| CodeTrackError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(CodeTrackError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    assignments::{
        entities::Assignment,
        requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
        responses::{AssignmentListResponse, AssignmentProblemItem},
    },
    class_users::{
        entities::{ClassUser, ClassUserRole},
        requests::{ClassUserQuery, UpdateClassUserRequest},
        responses::ClassUserListResponse,
    },
    classes::{
        entities::Class,
        requests::{ClassListQuery, CreateClassRequest, UpdateClassRequest},
        responses::ClassListResponse,
    },
    judges::{
        entities::JudgeInstance,
        requests::{CreateJudgeRequest, UpdateJudgeRequest},
    },
    problems::{
        entities::{Platform, Problem},
        requests::{CreateProblemRequest, ProblemListQuery, UpdateProblemRequest},
        responses::ProblemListResponse,
    },
    submissions::{
        entities::Submission,
        requests::{NewSubmission, SubmissionListQuery},
        responses::SubmissionListResponse,
    },
    test_sessions::{
        entities::{PenaltyKind, SessionStatus, TestPenalty, TestSession, TestSubmission, TestVerdict},
        requests::SessionListQuery,
        responses::SessionListResponse,
    },
    tests::{
        entities::{CodingTest, TestProblem},
        requests::{CreateTestProblemRequest, CreateTestRequest, TestListQuery, UpdateTestRequest},
        responses::TestListResponse,
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateProfileRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn update_profile(&self, id: i64, update: UpdateProfileRequest) -> Result<Option<User>> {
        self.update_profile_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    async fn list_syncable_users(&self) -> Result<Vec<User>> {
        self.list_syncable_users_impl().await
    }

    async fn update_last_synced_at(&self, id: i64) -> Result<bool> {
        self.update_last_synced_at_impl(id).await
    }

    // 班级模块
    async fn create_class(&self, class: CreateClassRequest, invite_code: &str) -> Result<Class> {
        self.create_class_impl(class, invite_code).await
    }

    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>> {
        self.get_class_by_id_impl(class_id).await
    }

    async fn get_class_by_code(&self, invite_code: &str) -> Result<Option<Class>> {
        self.get_class_by_code_impl(invite_code).await
    }

    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        self.list_classes_with_pagination_impl(query).await
    }

    async fn list_user_classes_with_pagination(
        &self,
        user_id: i64,
        query: ClassListQuery,
    ) -> Result<ClassListResponse> {
        self.list_user_classes_with_pagination_impl(user_id, query)
            .await
    }

    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
        new_invite_code: Option<String>,
    ) -> Result<Option<Class>> {
        self.update_class_impl(class_id, update, new_invite_code)
            .await
    }

    async fn delete_class(&self, class_id: i64) -> Result<bool> {
        self.delete_class_impl(class_id).await
    }

    // 班级成员模块
    async fn join_class(
        &self,
        user_id: i64,
        class_id: i64,
        role: ClassUserRole,
    ) -> Result<ClassUser> {
        self.join_class_impl(user_id, class_id, role).await
    }

    async fn leave_class(&self, user_id: i64, class_id: i64) -> Result<bool> {
        self.leave_class_impl(user_id, class_id).await
    }

    async fn update_class_user(
        &self,
        class_id: i64,
        class_user_id: i64,
        update_data: UpdateClassUserRequest,
    ) -> Result<Option<ClassUser>> {
        self.update_class_user_impl(class_id, class_user_id, update_data)
            .await
    }

    async fn list_class_users_with_pagination(
        &self,
        class_id: i64,
        query: ClassUserQuery,
    ) -> Result<ClassUserListResponse> {
        self.list_class_users_with_pagination_impl(class_id, query)
            .await
    }

    async fn get_class_user_by_user_id_and_class_id(
        &self,
        user_id: i64,
        class_id: i64,
    ) -> Result<Option<ClassUser>> {
        self.get_class_user_by_user_id_and_class_id_impl(user_id, class_id)
            .await
    }

    async fn list_class_members(&self, class_id: i64) -> Result<Vec<User>> {
        self.list_class_members_impl(class_id).await
    }

    // 题目模块
    async fn create_problem(&self, created_by: i64, req: CreateProblemRequest) -> Result<Problem> {
        self.create_problem_impl(created_by, req).await
    }

    async fn get_problem_by_id(&self, problem_id: i64) -> Result<Option<Problem>> {
        self.get_problem_by_id_impl(problem_id).await
    }

    async fn get_problem_by_platform_slug(
        &self,
        platform: Platform,
        slug: &str,
    ) -> Result<Option<Problem>> {
        self.get_problem_by_platform_slug_impl(platform, slug).await
    }

    async fn list_problems_with_pagination(
        &self,
        query: ProblemListQuery,
    ) -> Result<ProblemListResponse> {
        self.list_problems_with_pagination_impl(query).await
    }

    async fn list_problems_by_platform(&self, platform: Platform) -> Result<Vec<Problem>> {
        self.list_problems_by_platform_impl(platform).await
    }

    async fn update_problem(
        &self,
        problem_id: i64,
        update: UpdateProblemRequest,
    ) -> Result<Option<Problem>> {
        self.update_problem_impl(problem_id, update).await
    }

    async fn delete_problem(&self, problem_id: i64) -> Result<bool> {
        self.delete_problem_impl(problem_id).await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(created_by, req).await
    }

    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(assignment_id).await
    }

    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        self.list_assignments_with_pagination_impl(query).await
    }

    async fn update_assignment(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(assignment_id, update).await
    }

    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool> {
        self.delete_assignment_impl(assignment_id).await
    }

    async fn attach_problem_to_assignment(
        &self,
        assignment_id: i64,
        problem_id: i64,
        points: f64,
    ) -> Result<bool> {
        self.attach_problem_to_assignment_impl(assignment_id, problem_id, points)
            .await
    }

    async fn detach_problem_from_assignment(
        &self,
        assignment_id: i64,
        problem_id: i64,
    ) -> Result<bool> {
        self.detach_problem_from_assignment_impl(assignment_id, problem_id)
            .await
    }

    async fn list_assignment_problems(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<AssignmentProblemItem>> {
        self.list_assignment_problems_impl(assignment_id).await
    }

    // 外部提交模块
    async fn upsert_submissions(&self, subs: Vec<NewSubmission>) -> Result<u32> {
        self.upsert_submissions_impl(subs).await
    }

    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse> {
        self.list_submissions_with_pagination_impl(query).await
    }

    async fn list_accepted_submissions(
        &self,
        user_ids: &[i64],
        problem_ids: &[i64],
    ) -> Result<Vec<Submission>> {
        self.list_accepted_submissions_impl(user_ids, problem_ids)
            .await
    }

    async fn list_unmatched_submissions(&self, platform: Platform) -> Result<Vec<Submission>> {
        self.list_unmatched_submissions_impl(platform).await
    }

    async fn bind_submission_problem(&self, submission_id: i64, problem_id: i64) -> Result<bool> {
        self.bind_submission_problem_impl(submission_id, problem_id)
            .await
    }

    // 限时测试模块
    async fn create_test(&self, created_by: i64, req: CreateTestRequest) -> Result<CodingTest> {
        self.create_test_impl(created_by, req).await
    }

    async fn get_test_by_id(&self, test_id: i64) -> Result<Option<CodingTest>> {
        self.get_test_by_id_impl(test_id).await
    }

    async fn list_tests_with_pagination(&self, query: TestListQuery) -> Result<TestListResponse> {
        self.list_tests_with_pagination_impl(query).await
    }

    async fn update_test(
        &self,
        test_id: i64,
        update: UpdateTestRequest,
    ) -> Result<Option<CodingTest>> {
        self.update_test_impl(test_id, update).await
    }

    async fn delete_test(&self, test_id: i64) -> Result<bool> {
        self.delete_test_impl(test_id).await
    }

    async fn create_test_problem(
        &self,
        test_id: i64,
        req: CreateTestProblemRequest,
    ) -> Result<TestProblem> {
        self.create_test_problem_impl(test_id, req).await
    }

    async fn get_test_problem_by_id(&self, test_problem_id: i64) -> Result<Option<TestProblem>> {
        self.get_test_problem_by_id_impl(test_problem_id).await
    }

    async fn list_test_problems(&self, test_id: i64) -> Result<Vec<TestProblem>> {
        self.list_test_problems_impl(test_id).await
    }

    async fn delete_test_problem(&self, test_problem_id: i64) -> Result<bool> {
        self.delete_test_problem_impl(test_problem_id).await
    }

    // 测试会话模块
    async fn create_session(
        &self,
        test_id: i64,
        user_id: i64,
        started_at: chrono::DateTime<chrono::Utc>,
        deadline_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<TestSession> {
        self.create_session_impl(test_id, user_id, started_at, deadline_at)
            .await
    }

    async fn get_session_by_id(&self, session_id: i64) -> Result<Option<TestSession>> {
        self.get_session_by_id_impl(session_id).await
    }

    async fn get_session_by_test_and_user(
        &self,
        test_id: i64,
        user_id: i64,
    ) -> Result<Option<TestSession>> {
        self.get_session_by_test_and_user_impl(test_id, user_id)
            .await
    }

    async fn close_session(
        &self,
        session_id: i64,
        status: SessionStatus,
        score: f64,
        finished_at: Option<chrono::DateTime<chrono::Utc>>,
    ) -> Result<bool> {
        self.close_session_impl(session_id, status, score, finished_at)
            .await
    }

    async fn list_sessions_with_pagination(
        &self,
        query: SessionListQuery,
    ) -> Result<SessionListResponse> {
        self.list_sessions_with_pagination_impl(query).await
    }

    async fn add_penalty(
        &self,
        session_id: i64,
        kind: PenaltyKind,
        points: f64,
        note: Option<String>,
    ) -> Result<TestPenalty> {
        self.add_penalty_impl(session_id, kind, points, note).await
    }

    async fn list_penalties(&self, session_id: i64) -> Result<Vec<TestPenalty>> {
        self.list_penalties_impl(session_id).await
    }

    async fn sum_penalties(&self, session_id: i64) -> Result<f64> {
        self.sum_penalties_impl(session_id).await
    }

    async fn create_test_submission(
        &self,
        session_id: i64,
        test_problem_id: i64,
        language_id: i32,
        source_code: &str,
    ) -> Result<TestSubmission> {
        self.create_test_submission_impl(session_id, test_problem_id, language_id, source_code)
            .await
    }

    async fn list_session_submissions(
        &self,
        session_id: i64,
        with_source: bool,
    ) -> Result<Vec<TestSubmission>> {
        self.list_session_submissions_impl(session_id, with_source)
            .await
    }

    async fn mark_submission_dispatched(&self, submission_id: i64, token: &str) -> Result<bool> {
        self.mark_submission_dispatched_impl(submission_id, token)
            .await
    }

    async fn list_queued_submissions(&self) -> Result<Vec<(i64, String, i64)>> {
        self.list_queued_submissions_impl().await
    }

    async fn record_submission_verdict(
        &self,
        submission_id: i64,
        verdict: TestVerdict,
        exec_time_ms: Option<i32>,
        memory_kb: Option<i32>,
        score: f64,
    ) -> Result<bool> {
        self.record_submission_verdict_impl(submission_id, verdict, exec_time_ms, memory_kb, score)
            .await
    }

    async fn best_scores_by_problem(
        &self,
        session_id: i64,
    ) -> Result<std::collections::HashMap<i64, f64>> {
        self.best_scores_by_problem_impl(session_id).await
    }

    // 评测实例模块
    async fn create_judge(&self, req: CreateJudgeRequest) -> Result<JudgeInstance> {
        self.create_judge_impl(req).await
    }

    async fn get_judge_by_id(&self, judge_id: i64) -> Result<Option<JudgeInstance>> {
        self.get_judge_by_id_impl(judge_id).await
    }

    async fn list_judges(&self) -> Result<Vec<JudgeInstance>> {
        self.list_judges_impl().await
    }

    async fn list_enabled_judges(&self) -> Result<Vec<JudgeInstance>> {
        self.list_enabled_judges_impl().await
    }

    async fn update_judge(
        &self,
        judge_id: i64,
        update: UpdateJudgeRequest,
    ) -> Result<Option<JudgeInstance>> {
        self.update_judge_impl(judge_id, update).await
    }

    async fn delete_judge(&self, judge_id: i64) -> Result<bool> {
        self.delete_judge_impl(judge_id).await
    }

    async fn set_judge_health(&self, judge_id: i64, healthy: bool) -> Result<bool> {
        self.set_judge_health_impl(judge_id, healthy).await
    }
}
