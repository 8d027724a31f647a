use super::entities::PenaltyKind;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

/// 提交代码请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test_session.ts")]
pub struct SubmitCodeRequest {
    pub test_problem_id: i64,
    /// 评测机语言 ID（Judge0 语言表）
    pub language_id: i32,
    pub source_code: String,
}

/// 上报违规请求（由监考前端调用）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test_session.ts")]
pub struct ReportPenaltyRequest {
    pub kind: PenaltyKind,
    pub note: Option<String>,
}

/// 会话列表查询参数（教师视角）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test_session.ts")]
pub struct SessionListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct SessionListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub test_id: i64,
}
