use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassUserService;
use crate::models::class_users::requests::UpdateClassUserRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::classes::require_class_teacher;

pub async fn update_class_user(
    service: &ClassUserService,
    request: &HttpRequest,
    class_id: i64,
    class_user_id: i64,
    req: UpdateClassUserRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = require_class_teacher(&storage, request, class_id).await {
        return Ok(resp);
    }

    match storage
        .update_class_user(class_id, class_user_id, req)
        .await
    {
        Ok(Some(class_user)) => {
            info!(
                "Class user {} in class {} updated",
                class_user_id, class_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(class_user, "成员已更新")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::NotClassMember,
            "班级成员不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新班级成员失败: {e}"),
            )),
        ),
    }
}
