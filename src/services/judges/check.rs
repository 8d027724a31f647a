use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::JudgeService;
use crate::integrations::judge::JudgeClient;
use crate::models::judges::responses::JudgeCheckResponse;
use crate::models::{ApiResponse, ErrorCode};

/// 立即探测一次实例健康状态
pub async fn check_judge(
    service: &JudgeService,
    request: &HttpRequest,
    judge_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let instance = match storage.get_judge_by_id(judge_id).await {
        Ok(Some(instance)) => instance,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::JudgeNotFound,
                "评测实例不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询评测实例失败: {e}"),
                )),
            );
        }
    };

    let client = match JudgeClient::new() {
        Ok(client) => client,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("初始化评测客户端失败: {e}"),
                )),
            );
        }
    };

    let healthy = client.probe(&instance).await;
    let _ = storage.set_judge_health(judge_id, healthy).await;

    info!("Judge instance {} probed: healthy={}", instance.name, healthy);

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        JudgeCheckResponse {
            healthy,
            checked_at: chrono::Utc::now(),
        },
        "探测完成",
    )))
}
