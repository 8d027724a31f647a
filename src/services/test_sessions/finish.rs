use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{TestSessionService, settle_session};
use crate::middlewares::RequireJWT;
use crate::models::test_sessions::entities::SessionStatus;
use crate::models::{ApiResponse, ErrorCode};

/// 交卷
///
/// 得分 = 各题最高分之和 - 违规扣分合计，下限 0。
/// 已过截止时刻的会话结算为 expired。
pub async fn finish_session(
    service: &TestSessionService,
    request: &HttpRequest,
    session_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    let session = match storage.get_session_by_id(session_id).await {
        Ok(Some(session)) => session,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SessionNotFound,
                "会话不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询会话失败: {e}"),
                )),
            );
        }
    };

    if session.user_id != user_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只能结束自己的会话",
        )));
    }

    if session.status != SessionStatus::Active {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SessionFinished,
            "会话已结束",
        )));
    }

    let status = if session.is_past_deadline(chrono::Utc::now()) {
        SessionStatus::Expired
    } else {
        SessionStatus::Submitted
    };

    match settle_session(&storage, &session, status).await {
        Ok(score) => {
            info!(
                "Session {} settled as {} with score {}",
                session_id, status, score
            );
            match storage.get_session_by_id(session_id).await {
                Ok(Some(session)) => {
                    Ok(HttpResponse::Ok().json(ApiResponse::success(session, "已交卷")))
                }
                _ => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("已交卷"))),
            }
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("结算会话失败: {e}"),
            )),
        ),
    }
}
