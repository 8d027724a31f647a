use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TestService;
use crate::models::tests::requests::CreateTestRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::classes::require_class_teacher;

pub async fn create_test(
    service: &TestService,
    request: &HttpRequest,
    created_by: i64,
    req: CreateTestRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "测试标题不能为空",
        )));
    }
    if req.duration_minutes <= 0 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "答题时长必须大于 0",
        )));
    }
    if req.window_ends_at <= req.window_starts_at {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "窗口结束时间必须晚于开始时间",
        )));
    }
    if req.penalty_points.is_some_and(|p| p < 0.0) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "违规扣分不能为负数",
        )));
    }

    if let Err(resp) = require_class_teacher(&storage, request, req.class_id).await {
        return Ok(resp);
    }

    match storage.create_test(created_by, req).await {
        Ok(test) => {
            info!(
                "Coding test {} created in class {} by {}",
                test.title, test.class_id, created_by
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(test, "测试创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建测试失败: {e}"),
            )),
        ),
    }
}
