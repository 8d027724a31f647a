use crate::models::common::PaginationQuery;
use crate::models::problems::entities::Platform;
use crate::models::submissions::entities::ExternalVerdict;
use serde::Deserialize;
use ts_rs::TS;

/// 提交列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    /// 教师/管理员可指定其他用户
    pub user_id: Option<i64>,
    pub platform: Option<Platform>,
    pub problem_id: Option<i64>,
    pub verdict: Option<ExternalVerdict>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct SubmissionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub user_id: i64,
    pub platform: Option<Platform>,
    pub problem_id: Option<i64>,
    pub verdict: Option<ExternalVerdict>,
}

// 轮询器 upsert 用的新提交记录
#[derive(Debug, Clone)]
pub struct NewSubmission {
    pub user_id: i64,
    pub problem_id: Option<i64>,
    pub platform: Platform,
    pub external_key: String,
    pub challenge_name: String,
    pub language: Option<String>,
    pub verdict: ExternalVerdict,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
}
