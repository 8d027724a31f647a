use super::entities::Problem;
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 题目列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/problem.ts")]
pub struct ProblemListResponse {
    pub items: Vec<Problem>,
    pub pagination: PaginationInfo,
}
