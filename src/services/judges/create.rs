use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::JudgeService;
use crate::models::judges::requests::CreateJudgeRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_judge(
    service: &JudgeService,
    request: &HttpRequest,
    req: CreateJudgeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if req.name.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "实例名称不能为空",
        )));
    }
    if !req.base_url.starts_with("http://") && !req.base_url.starts_with("https://") {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "base_url 必须是 http:// 或 https:// 地址",
        )));
    }

    match storage.create_judge(req).await {
        Ok(judge) => {
            info!("Judge instance {} registered at {}", judge.name, judge.base_url);
            Ok(HttpResponse::Created().json(ApiResponse::success(judge, "评测实例已注册")))
        }
        Err(e) => {
            let msg = e.to_string();
            if msg.to_lowercase().contains("unique") {
                Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "同名或同地址的评测实例已存在",
                )))
            } else {
                Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("注册评测实例失败: {msg}"),
                    )),
                )
            }
        }
    }
}
