use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TestSessionService;
use crate::models::test_sessions::requests::{SessionListParams, SessionListQuery};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::tests::load_test_for_teacher;

/// 列出测试的全部会话（教师视角）
pub async fn list_sessions(
    service: &TestSessionService,
    request: &HttpRequest,
    test_id: i64,
    params: SessionListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = load_test_for_teacher(&storage, request, test_id).await {
        return Ok(resp);
    }

    let query = SessionListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        test_id,
    };

    match storage.list_sessions_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询会话列表失败: {e}"),
            )),
        ),
    }
}
