pub mod common;

pub mod assignments;
pub mod auth;
pub mod class_users;
pub mod classes;
pub mod judges;
pub mod problems;
pub mod submissions;
pub mod system;
pub mod test_sessions;
pub mod tests;
pub mod users;

pub use common::error_code::ErrorCode;
pub use common::pagination::{PaginatedResponse, PaginationInfo, PaginationQuery};
pub use common::response::ApiResponse;

// 程序启动时间，用于 /system/status 的运行时长统计
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}
