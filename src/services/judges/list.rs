use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::JudgeService;
use crate::models::judges::responses::JudgeListResponse;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_judges(
    service: &JudgeService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_judges().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            JudgeListResponse { items },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询评测实例失败: {e}"),
            )),
        ),
    }
}
