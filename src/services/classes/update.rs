use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ClassService, require_class_teacher};
use crate::models::classes::requests::UpdateClassRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::random_code::generate_invite_code;

pub async fn update_class(
    service: &ClassService,
    request: &HttpRequest,
    class_id: i64,
    req: UpdateClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = require_class_teacher(&storage, request, class_id).await {
        return Ok(resp);
    }

    let new_invite_code = req
        .regenerate_invite_code
        .unwrap_or(false)
        .then(|| generate_invite_code(8));

    match storage.update_class(class_id, req, new_invite_code).await {
        Ok(Some(class)) => {
            info!("Class {} updated", class.class_name);
            Ok(HttpResponse::Ok().json(ApiResponse::success(class, "班级已更新")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "班级不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新班级失败: {e}"),
            )),
        ),
    }
}
