use super::entities::Platform;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

/// 创建题目请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/problem.ts")]
pub struct CreateProblemRequest {
    pub platform: Platform,
    pub slug: String,
    pub title: String,
    pub url: Option<String>,
    pub difficulty: Option<String>,
}

/// 更新题目请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/problem.ts")]
pub struct UpdateProblemRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub difficulty: Option<String>,
}

/// 题目列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/problem.ts")]
pub struct ProblemListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub platform: Option<Platform>,
    pub difficulty: Option<String>,
    pub search: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct ProblemListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub platform: Option<Platform>,
    pub difficulty: Option<String>,
    pub search: Option<String>,
}
