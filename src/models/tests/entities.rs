use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 限时测试
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct CodingTest {
    pub id: i64,
    pub class_id: i64,
    pub title: String,
    pub description: Option<String>,
    // 单人答题时长（分钟）
    pub duration_minutes: i32,
    // 开放窗口：只有窗口内可以开始会话
    pub window_starts_at: chrono::DateTime<chrono::Utc>,
    pub window_ends_at: chrono::DateTime<chrono::Utc>,
    // 每次违规扣分
    pub penalty_points: f64,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl CodingTest {
    /// 当前时刻是否在开放窗口内
    pub fn window_contains(&self, at: chrono::DateTime<chrono::Utc>) -> bool {
        at >= self.window_starts_at && at < self.window_ends_at
    }
}

// 测试题目（自带评测数据，交由评测机执行）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct TestProblem {
    pub id: i64,
    pub test_id: i64,
    pub ordinal: i32,
    pub title: String,
    pub statement: String,
    pub stdin: String,
    // 学生视角的响应会抹掉该字段
    pub expected_output: String,
    pub max_score: f64,
    pub time_limit_ms: i32,
    pub memory_limit_kb: i32,
}
