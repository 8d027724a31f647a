use crate::models::common::PaginationQuery;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

/// 创建限时测试请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct CreateTestRequest {
    pub class_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub duration_minutes: i32,
    pub window_starts_at: DateTime<Utc>,
    pub window_ends_at: DateTime<Utc>,
    pub penalty_points: Option<f64>,
}

/// 更新限时测试请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct UpdateTestRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub duration_minutes: Option<i32>,
    pub window_starts_at: Option<DateTime<Utc>>,
    pub window_ends_at: Option<DateTime<Utc>>,
    pub penalty_points: Option<f64>,
}

/// 添加/更新测试题目请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct CreateTestProblemRequest {
    pub ordinal: i32,
    pub title: String,
    pub statement: String,
    pub stdin: String,
    pub expected_output: String,
    pub max_score: Option<f64>,
    pub time_limit_ms: Option<i32>,
    pub memory_limit_kb: Option<i32>,
}

/// 测试列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct TestListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub class_id: Option<i64>,
    pub search: Option<String>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct TestListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub class_id: Option<i64>,
    pub search: Option<String>,
}
