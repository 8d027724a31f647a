use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassUserService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::classes::require_class_teacher;

pub async fn remove_class_user(
    service: &ClassUserService,
    request: &HttpRequest,
    class_id: i64,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = require_class_teacher(&storage, request, class_id).await {
        return Ok(resp);
    }

    match storage.leave_class(user_id, class_id).await {
        Ok(true) => {
            info!("User {} removed from class {}", user_id, class_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("成员已移出班级")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotClassMember,
            "班级成员不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("移出班级成员失败: {e}"),
            )),
        ),
    }
}
