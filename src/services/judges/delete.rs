use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::JudgeService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_judge(
    service: &JudgeService,
    request: &HttpRequest,
    judge_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_judge(judge_id).await {
        Ok(true) => {
            info!("Judge instance {} deleted", judge_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("评测实例已删除")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::JudgeNotFound,
            "评测实例不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除评测实例失败: {e}"),
            )),
        ),
    }
}
