use super::entities::{TestPenalty, TestSession, TestSubmission};
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 会话详情（含提交与违规记录）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test_session.ts")]
pub struct SessionDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub session: TestSession,
    pub submissions: Vec<TestSubmission>,
    pub penalties: Vec<TestPenalty>,
}

// 会话列表条目（教师视角）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test_session.ts")]
pub struct SessionListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub session: TestSession,
    pub username: String,
    pub profile_name: Option<String>,
    pub penalty_count: i64,
}

// 会话列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test_session.ts")]
pub struct SessionListResponse {
    pub items: Vec<SessionListItem>,
    pub pagination: PaginationInfo,
}
