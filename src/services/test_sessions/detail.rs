use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TestSessionService;
use crate::middlewares::RequireJWT;
use crate::models::test_sessions::responses::SessionDetail;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 会话详情：本人或班级教师/管理员可见
pub async fn session_detail(
    service: &TestSessionService,
    request: &HttpRequest,
    session_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
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

    // 权限：本人、班级教师、管理员
    let is_owner = session.user_id == current_user.id;
    let mut is_teacher = current_user.role == UserRole::Admin;
    if !is_owner && !is_teacher {
        if let Ok(Some(test)) = storage.get_test_by_id(session.test_id).await
            && let Ok(Some(class)) = storage.get_class_by_id(test.class_id).await
        {
            is_teacher = class.teacher_id == current_user.id;
        }
        if !is_teacher {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::Forbidden,
                "无权查看该会话",
            )));
        }
    }

    // 教师可以看到提交的源代码，学生只看结果
    let submissions = storage
        .list_session_submissions(session.id, is_teacher)
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
