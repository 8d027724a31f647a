use std::sync::Arc;

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

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 更新个人资料（含平台账号绑定；换绑会重置 last_synced_at）
    async fn update_profile(&self, id: i64, update: UpdateProfileRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 统计用户总数（用于初始管理员种子）
    async fn count_users(&self) -> Result<u64>;
    // 列出绑定了外部平台账号的活跃用户（同步器轮询对象）
    async fn list_syncable_users(&self) -> Result<Vec<User>>;
    // 更新用户最后同步时间
    async fn update_last_synced_at(&self, id: i64) -> Result<bool>;

    /// 班级管理方法
    // 创建班级
    async fn create_class(&self, class: CreateClassRequest, invite_code: &str) -> Result<Class>;
    // 通过ID获取班级信息
    async fn get_class_by_id(&self, class_id: i64) -> Result<Option<Class>>;
    // 通过邀请码获取班级信息
    async fn get_class_by_code(&self, invite_code: &str) -> Result<Option<Class>>;
    // 列出班级
    async fn list_classes_with_pagination(
        &self,
        query: ClassListQuery,
    ) -> Result<ClassListResponse>;
    // 列出用户所在的班级
    async fn list_user_classes_with_pagination(
        &self,
        user_id: i64,
        query: ClassListQuery,
    ) -> Result<ClassListResponse>;
    // 更新班级信息
    async fn update_class(
        &self,
        class_id: i64,
        update: UpdateClassRequest,
        new_invite_code: Option<String>,
    ) -> Result<Option<Class>>;
    // 删除班级
    async fn delete_class(&self, class_id: i64) -> Result<bool>;

    /// 班级成员管理方法
    // 加入班级
    async fn join_class(
        &self,
        user_id: i64,
        class_id: i64,
        role: ClassUserRole,
    ) -> Result<ClassUser>;
    // 离开/移出班级
    async fn leave_class(&self, user_id: i64, class_id: i64) -> Result<bool>;
    // 更新班级成员信息
    async fn update_class_user(
        &self,
        class_id: i64,
        class_user_id: i64,
        update_data: UpdateClassUserRequest,
    ) -> Result<Option<ClassUser>>;
    // 列出班级成员
    async fn list_class_users_with_pagination(
        &self,
        class_id: i64,
        query: ClassUserQuery,
    ) -> Result<ClassUserListResponse>;
    // 获取用户在班级中的信息
    async fn get_class_user_by_user_id_and_class_id(
        &self,
        user_id: i64,
        class_id: i64,
    ) -> Result<Option<ClassUser>>;
    // 列出班级全部成员（不分页，用于作业完成度矩阵）
    async fn list_class_members(&self, class_id: i64) -> Result<Vec<User>>;

    /// 题目管理方法
    // 创建题目
    async fn create_problem(&self, created_by: i64, req: CreateProblemRequest) -> Result<Problem>;
    // 通过ID获取题目
    async fn get_problem_by_id(&self, problem_id: i64) -> Result<Option<Problem>>;
    // 通过平台与 slug 获取题目
    async fn get_problem_by_platform_slug(
        &self,
        platform: Platform,
        slug: &str,
    ) -> Result<Option<Problem>>;
    // 列出题目
    async fn list_problems_with_pagination(
        &self,
        query: ProblemListQuery,
    ) -> Result<ProblemListResponse>;
    // 列出某平台全部题目（同步器匹配用）
    async fn list_problems_by_platform(&self, platform: Platform) -> Result<Vec<Problem>>;
    // 更新题目
    async fn update_problem(
        &self,
        problem_id: i64,
        update: UpdateProblemRequest,
    ) -> Result<Option<Problem>>;
    // 删除题目
    async fn delete_problem(&self, problem_id: i64) -> Result<bool>;

    /// 作业管理方法
    // 创建作业
    async fn create_assignment(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    // 通过ID获取作业
    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>>;
    // 列出作业
    async fn list_assignments_with_pagination(
        &self,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse>;
    // 更新作业
    async fn update_assignment(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    // 删除作业
    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool>;
    // 向作业题单挂接题目
    async fn attach_problem_to_assignment(
        &self,
        assignment_id: i64,
        problem_id: i64,
        points: f64,
    ) -> Result<bool>;
    // 从作业题单移除题目
    async fn detach_problem_from_assignment(
        &self,
        assignment_id: i64,
        problem_id: i64,
    ) -> Result<bool>;
    // 列出作业题单（题目 + 分值）
    async fn list_assignment_problems(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<AssignmentProblemItem>>;

    /// 外部提交对账方法
    // 批量 upsert 轮询到的提交，按 (user, platform, external_key) 去重，返回新插入条数
    async fn upsert_submissions(&self, subs: Vec<NewSubmission>) -> Result<u32>;
    // 列出提交
    async fn list_submissions_with_pagination(
        &self,
        query: SubmissionListQuery,
    ) -> Result<SubmissionListResponse>;
    // 查询一组用户对一组题目的已通过提交（作业完成度矩阵）
    async fn list_accepted_submissions(
        &self,
        user_ids: &[i64],
        problem_ids: &[i64],
    ) -> Result<Vec<Submission>>;
    // 列出某平台尚未匹配到题目的提交（新题目入库后的补匹配）
    async fn list_unmatched_submissions(&self, platform: Platform) -> Result<Vec<Submission>>;
    // 回填提交的题目匹配
    async fn bind_submission_problem(&self, submission_id: i64, problem_id: i64) -> Result<bool>;

    /// 限时测试管理方法
    // 创建测试
    async fn create_test(&self, created_by: i64, req: CreateTestRequest) -> Result<CodingTest>;
    // 通过ID获取测试
    async fn get_test_by_id(&self, test_id: i64) -> Result<Option<CodingTest>>;
    // 列出测试
    async fn list_tests_with_pagination(&self, query: TestListQuery) -> Result<TestListResponse>;
    // 更新测试
    async fn update_test(
        &self,
        test_id: i64,
        update: UpdateTestRequest,
    ) -> Result<Option<CodingTest>>;
    // 删除测试
    async fn delete_test(&self, test_id: i64) -> Result<bool>;
    // 添加测试题目
    async fn create_test_problem(
        &self,
        test_id: i64,
        req: CreateTestProblemRequest,
    ) -> Result<TestProblem>;
    // 获取测试题目
    async fn get_test_problem_by_id(&self, test_problem_id: i64) -> Result<Option<TestProblem>>;
    // 列出测试题目
    async fn list_test_problems(&self, test_id: i64) -> Result<Vec<TestProblem>>;
    // 删除测试题目
    async fn delete_test_problem(&self, test_problem_id: i64) -> Result<bool>;

    /// 测试会话方法
    // 开始会话
    async fn create_session(
        &self,
        test_id: i64,
        user_id: i64,
        started_at: chrono::DateTime<chrono::Utc>,
        deadline_at: chrono::DateTime<chrono::Utc>,
    ) -> Result<TestSession>;
    // 通过ID获取会话
    async fn get_session_by_id(&self, session_id: i64) -> Result<Option<TestSession>>;
    // 获取用户在某测试的会话
    async fn get_session_by_test_and_user(
        &self,
        test_id: i64,
        user_id: i64,
    ) -> Result<Option<TestSession>>;
    // 结束会话（交卷或过期），写入最终状态与得分
    async fn close_session(
        &self,
        session_id: i64,
        status: SessionStatus,
        score: f64,
        finished_at: Option<chrono::DateTime<chrono::Utc>>,
    ) -> Result<bool>;
    // 列出测试的全部会话（教师视角）
    async fn list_sessions_with_pagination(
        &self,
        query: SessionListQuery,
    ) -> Result<SessionListResponse>;
    // 记录违规
    async fn add_penalty(
        &self,
        session_id: i64,
        kind: PenaltyKind,
        points: f64,
        note: Option<String>,
    ) -> Result<TestPenalty>;
    // 列出会话违规记录
    async fn list_penalties(&self, session_id: i64) -> Result<Vec<TestPenalty>>;
    // 会话违规扣分合计
    async fn sum_penalties(&self, session_id: i64) -> Result<f64>;
    // 记录代码提交
    async fn create_test_submission(
        &self,
        session_id: i64,
        test_problem_id: i64,
        language_id: i32,
        source_code: &str,
    ) -> Result<TestSubmission>;
    // 列出会话的代码提交
    async fn list_session_submissions(
        &self,
        session_id: i64,
        with_source: bool,
    ) -> Result<Vec<TestSubmission>>;
    // 提交已派发给评测机，记录 token
    async fn mark_submission_dispatched(&self, submission_id: i64, token: &str) -> Result<bool>;
    // 列出等待评测结果的提交 (id, token, test_problem_id)
    async fn list_queued_submissions(&self) -> Result<Vec<(i64, String, i64)>>;
    // 写入评测结果
    async fn record_submission_verdict(
        &self,
        submission_id: i64,
        verdict: TestVerdict,
        exec_time_ms: Option<i32>,
        memory_kb: Option<i32>,
        score: f64,
    ) -> Result<bool>;
    // 会话内每道题的最高得分
    async fn best_scores_by_problem(
        &self,
        session_id: i64,
    ) -> Result<std::collections::HashMap<i64, f64>>;

    /// 评测实例管理方法
    // 注册评测实例
    async fn create_judge(&self, req: CreateJudgeRequest) -> Result<JudgeInstance>;
    // 通过ID获取评测实例
    async fn get_judge_by_id(&self, judge_id: i64) -> Result<Option<JudgeInstance>>;
    // 列出全部评测实例
    async fn list_judges(&self) -> Result<Vec<JudgeInstance>>;
    // 列出启用的评测实例
    async fn list_enabled_judges(&self) -> Result<Vec<JudgeInstance>>;
    // 更新评测实例
    async fn update_judge(
        &self,
        judge_id: i64,
        update: UpdateJudgeRequest,
    ) -> Result<Option<JudgeInstance>>;
    // 删除评测实例
    async fn delete_judge(&self, judge_id: i64) -> Result<bool>;
    // 更新健康状态
    async fn set_judge_health(&self, judge_id: i64, healthy: bool) -> Result<bool>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
