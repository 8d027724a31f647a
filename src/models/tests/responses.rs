use super::entities::{CodingTest, TestProblem};
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 测试列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct TestListResponse {
    pub items: Vec<CodingTest>,
    pub pagination: PaginationInfo,
}

// 学生视角的测试题目（不含期望输出）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct TestProblemView {
    pub id: i64,
    pub ordinal: i32,
    pub title: String,
    pub statement: String,
    pub stdin: String,
    pub max_score: f64,
    pub time_limit_ms: i32,
    pub memory_limit_kb: i32,
}

impl From<TestProblem> for TestProblemView {
    fn from(p: TestProblem) -> Self {
        Self {
            id: p.id,
            ordinal: p.ordinal,
            title: p.title,
            statement: p.statement,
            stdin: p.stdin,
            max_score: p.max_score,
            time_limit_ms: p.time_limit_ms,
            memory_limit_kb: p.memory_limit_kb,
        }
    }
}

// 测试详情（教师视角含完整题目，学生视角仅题面）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct TestDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub test: CodingTest,
    pub problems: Vec<TestProblemView>,
}

// 教师视角测试详情（含评测数据）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test.ts")]
pub struct TestDetailFull {
    #[serde(flatten)]
    #[ts(flatten)]
    pub test: CodingTest,
    pub problems: Vec<TestProblem>,
}
