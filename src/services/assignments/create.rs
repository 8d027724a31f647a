use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::classes::require_class_teacher;

pub async fn create_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    created_by: i64,
    req: CreateAssignmentRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "作业标题不能为空",
        )));
    }

    // 只有班级教师/管理员可以布置作业
    if let Err(resp) = require_class_teacher(&storage, request, req.class_id).await {
        return Ok(resp);
    }

    match storage.create_assignment(created_by, req).await {
        Ok(assignment) => {
            info!(
                "Assignment {} created in class {} by {}",
                assignment.title, assignment.class_id, created_by
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(assignment, "作业创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建作业失败: {e}"),
            )),
        ),
    }
}
