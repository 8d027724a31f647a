use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::JudgeService;
use crate::models::judges::requests::UpdateJudgeRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_judge(
    service: &JudgeService,
    request: &HttpRequest,
    judge_id: i64,
    req: UpdateJudgeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref base_url) = req.base_url
        && !base_url.starts_with("http://")
        && !base_url.starts_with("https://")
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "base_url 必须是 http:// 或 https:// 地址",
        )));
    }

    match storage.update_judge(judge_id, req).await {
        Ok(Some(judge)) => {
            info!("Judge instance {} updated", judge.name);
            Ok(HttpResponse::Ok().json(ApiResponse::success(judge, "评测实例已更新")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::JudgeNotFound,
            "评测实例不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新评测实例失败: {e}"),
            )),
        ),
    }
}
