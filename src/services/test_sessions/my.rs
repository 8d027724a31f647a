use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TestSessionService;
use crate::middlewares::RequireJWT;
use crate::models::test_sessions::responses::SessionDetail;
use crate::models::{ApiResponse, ErrorCode};

/// 查询自己在某测试的会话（含提交与违规记录）
pub async fn my_session(
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

    match storage.get_session_by_test_and_user(test_id, user_id).await {
        Ok(Some(session)) => {
            let submissions = storage
                .list_session_submissions(session.id, false)
                .await
                .unwrap_or_default();
            let penalties = storage.list_penalties(session.id).await.unwrap_or_default();

            let detail = SessionDetail {
                session,
                submissions,
                penalties,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "查询成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SessionNotFound,
            "您尚未开始该测试",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询会话失败: {e}"),
            )),
        ),
    }
}
