use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubmissionService;
use crate::config::AppConfig;
use crate::middlewares::RequireJWT;
use crate::models::submissions::responses::SyncResultResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::runtime::workers::submission_sync::SubmissionSyncer;

/// 手动触发当前用户的提交同步
///
/// 路由层挂了 RateLimit::manual_sync()，这里不再重复限流。
pub async fn sync_now(
    service: &SubmissionService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let config = AppConfig::get();

    if !config.sync.enabled {
        return Ok(
            HttpResponse::ServiceUnavailable().json(ApiResponse::error_empty(
                ErrorCode::SyncDisabled,
                "提交同步已被管理员关闭",
            )),
        );
    }

    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    if !user.handles.any() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "请先在个人资料中绑定 HackerRank 或 LeetCode 账号",
        )));
    }

    let syncer = match SubmissionSyncer::new(storage) {
        Ok(syncer) => syncer,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("初始化同步器失败: {e}"),
                )),
            );
        }
    };

    match syncer.sync_user(&user).await {
        Ok(outcome) => {
            info!(
                "Manual sync for {}: fetched={}, matched={}, inserted={}",
                user.username, outcome.fetched, outcome.matched, outcome.inserted
            );
            let response = SyncResultResponse {
                fetched: outcome.fetched,
                matched: outcome.matched,
                inserted: outcome.inserted,
                synced_at: chrono::Utc::now(),
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(response, "同步完成")))
        }
        Err(e) => Ok(HttpResponse::BadGateway().json(ApiResponse::error_empty(
            ErrorCode::InternalServerError,
            format!("同步失败: {e}"),
        ))),
    }
}
