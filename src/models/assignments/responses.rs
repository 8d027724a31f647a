use super::entities::Assignment;
use crate::models::common::PaginationInfo;
use crate::models::problems::entities::Problem;
use serde::Serialize;
use ts_rs::TS;

// 作业创建者信息
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentCreator {
    pub id: i64,
    pub username: String,
    pub profile_name: Option<String>,
}

// 作业详情（含题单与创建者）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentDetail {
    #[serde(flatten)]
    #[ts(flatten)]
    pub assignment: Assignment,
    pub problems: Vec<AssignmentProblemItem>,
    pub creator: Option<AssignmentCreator>,
}

// 题单条目（题目信息 + 分值）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentProblemItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub problem: Problem,
    pub points: f64,
}

// 作业列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentListResponse {
    pub items: Vec<Assignment>,
    pub pagination: PaginationInfo,
}

// 单个学生对单道题的完成情况
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct ProblemProgress {
    pub problem_id: i64,
    pub solved: bool,
    pub solved_at: Option<chrono::DateTime<chrono::Utc>>,
    // 截止时间之后才完成
    pub late: bool,
}

// 单个学生的作业完成情况
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct StudentProgress {
    pub user_id: i64,
    pub username: String,
    pub profile_name: Option<String>,
    pub solved: i64,
    pub total: i64,
    pub problems: Vec<ProblemProgress>,
}

// 作业完成情况响应（教师视角矩阵）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentProgressResponse {
    pub assignment_id: i64,
    pub students: Vec<StudentProgress>,
}
