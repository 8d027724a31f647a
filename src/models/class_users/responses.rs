use super::entities::{ClassUser, ClassUserRole};
use crate::models::common::PaginationInfo;
use serde::Serialize;
use ts_rs::TS;

// 带用户信息的班级成员条目
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class_user.ts")]
pub struct ClassUserItem {
    pub id: i64,
    pub user_id: i64,
    pub username: String,
    pub profile_name: Option<String>,
    pub avatar_url: Option<String>,
    pub role: ClassUserRole,
    pub joined_at: chrono::DateTime<chrono::Utc>,
}

// 班级成员列表响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class_user.ts")]
pub struct ClassUserListResponse {
    pub items: Vec<ClassUserItem>,
    pub pagination: PaginationInfo,
}

// 加入班级响应
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/class_user.ts")]
pub struct JoinClassResponse {
    pub class_user: ClassUser,
    pub class_name: String,
}
