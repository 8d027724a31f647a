use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 评测实例（Judge0 兼容服务）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/judge.ts")]
pub struct JudgeInstance {
    pub id: i64,
    pub name: String,
    pub base_url: String,
    #[serde(skip_serializing, default)] // 不序列化到JSON响应中
    #[ts(skip)]
    pub auth_token: Option<String>,
    pub enabled: bool,
    pub healthy: bool,
    pub last_checked_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
