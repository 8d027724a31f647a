use super::entities::JudgeInstance;
use serde::Serialize;
use ts_rs::TS;

// 评测实例列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/judge.ts")]
pub struct JudgeListResponse {
    pub items: Vec<JudgeInstance>,
}

// 健康检查结果
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/judge.ts")]
pub struct JudgeCheckResponse {
    pub healthy: bool,
    pub checked_at: chrono::DateTime<chrono::Utc>,
}
