use super::entities::Submission;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 提交列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListResponse {
    pub items: Vec<Submission>,
    pub pagination: PaginationInfo,
}

// 手动触发同步的结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SyncResultResponse {
    pub fetched: u32,
    pub matched: u32,
    pub inserted: u32,
    pub synced_at: chrono::DateTime<chrono::Utc>,
}
