use super::entities::ClassUserRole;
use crate::models::common::PaginationQuery;
use serde::Deserialize;
use ts_rs::TS;

/// 班级成员列表查询参数（HTTP 请求）
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class_user.ts")]
pub struct ClassUserListParams {
    #[serde(flatten)]
    #[ts(flatten)]
    pub pagination: PaginationQuery,
    pub role: Option<ClassUserRole>,
    pub search: Option<String>,
}

/// 更新班级成员请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class_user.ts")]
pub struct UpdateClassUserRequest {
    pub role: Option<ClassUserRole>,
}

// 用于存储层的内部查询参数
#[derive(Debug, Clone)]
pub struct ClassUserQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub role: Option<ClassUserRole>,
    pub search: Option<String>,
}
