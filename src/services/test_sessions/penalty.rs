use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TestSessionService;
use crate::middlewares::RequireJWT;
use crate::models::test_sessions::entities::SessionStatus;
use crate::models::test_sessions::requests::ReportPenaltyRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 上报违规（由监考前端调用）
///
/// 每条违规按测试配置的 penalty_points 扣分，交卷结算时统一抵扣。
pub async fn report_penalty(
    service: &TestSessionService,
    request: &HttpRequest,
    session_id: i64,
    req: ReportPenaltyRequest,
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
            "只能上报自己会话的违规",
        )));
    }

    if session.status != SessionStatus::Active {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SessionFinished,
            "会话已结束",
        )));
    }

    let points = match storage.get_test_by_id(session.test_id).await {
        Ok(Some(test)) => test.penalty_points,
        _ => 0.0,
    };

    match storage
        .add_penalty(session_id, req.kind, points, req.note)
        .await
    {
        Ok(penalty) => {
            info!(
                "Penalty {} recorded for session {} ({} points)",
                penalty.kind, session_id, penalty.points
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(penalty, "违规已记录")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("记录违规失败: {e}"),
            )),
        ),
    }
}
