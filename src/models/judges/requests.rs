use serde::Deserialize;
use ts_rs::TS;

/// 注册评测实例请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/judge.ts")]
pub struct CreateJudgeRequest {
    pub name: String,
    pub base_url: String,
    pub auth_token: Option<String>,
}

/// 更新评测实例请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/judge.ts")]
pub struct UpdateJudgeRequest {
    pub name: Option<String>,
    pub base_url: Option<String>,
    pub auth_token: Option<String>,
    pub enabled: Option<bool>,
}
