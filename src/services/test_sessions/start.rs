use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::TestSessionService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::classes::require_class_member;

/// 开始答题会话
///
/// 只能在测试窗口内开始；每人每场一个会话；
/// 答题截止时刻 = started_at + duration，且不超过窗口结束。
pub async fn start_session(
    service: &TestSessionService,
    request: &HttpRequest,
    test_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    let test = match storage.get_test_by_id(test_id).await {
        Ok(Some(test)) => test,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TestNotFound,
                "测试不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询测试失败: {e}"),
                )),
            );
        }
    };

    if let Err(resp) = require_class_member(&storage, request, test.class_id).await {
        return Ok(resp);
    }

    let now = chrono::Utc::now();
    if !test.window_contains(now) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::TestWindowClosed,
            "测试窗口未开放",
        )));
    }

    // 每人每场只有一个会话
    match storage.get_session_by_test_and_user(test_id, user_id).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::SessionAlreadyStarted,
                "您已开始过该测试",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询会话失败: {e}"),
                )),
            );
        }
    }

    let deadline =
        (now + chrono::Duration::minutes(test.duration_minutes as i64)).min(test.window_ends_at);

    match storage.create_session(test_id, user_id, now, deadline).await {
        Ok(session) => {
            info!("User {} started test {} session", user_id, test_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(session, "会话已开始")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("开始会话失败: {e}"),
            )),
        ),
    }
}
