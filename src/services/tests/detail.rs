use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TestService;
use crate::middlewares::RequireJWT;
use crate::models::tests::responses::{TestDetail, TestDetailFull, TestProblemView};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::classes::require_class_member;

pub async fn get_test(
    service: &TestService,
    request: &HttpRequest,
    test_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    match storage.get_test_by_id(test_id).await {
        Ok(Some(test)) => {
            if let Err(resp) = require_class_member(&storage, request, test.class_id).await {
                return Ok(resp);
            }

            let problems = storage.list_test_problems(test_id).await.unwrap_or_default();

            // 教师/管理员看完整评测数据；学生只看题面，
            // 且只有存在进行中的会话时才能看到题目
            let is_teacher = current_user.role == UserRole::Admin
                || storage
                    .get_class_by_id(test.class_id)
                    .await
                    .ok()
                    .flatten()
                    .is_some_and(|c| c.teacher_id == current_user.id);

            if is_teacher {
                let detail = TestDetailFull { test, problems };
                return Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "查询成功")));
            }

            let session = storage
                .get_session_by_test_and_user(test_id, current_user.id)
                .await
                .ok()
                .flatten();

            let problems = if session.is_some() {
                problems.into_iter().map(TestProblemView::from).collect()
            } else {
                // 未开始答题时不暴露题目内容
                vec![]
            };

            let detail = TestDetail { test, problems };
            Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "查询成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TestNotFound,
            "测试不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询测试失败: {e}"),
            )),
        ),
    }
}
