use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{TestService, load_test_for_teacher};
use crate::models::tests::requests::UpdateTestRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_test(
    service: &TestService,
    request: &HttpRequest,
    test_id: i64,
    req: UpdateTestRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = load_test_for_teacher(&storage, request, test_id).await {
        return Ok(resp);
    }

    if req.duration_minutes.is_some_and(|d| d <= 0) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "答题时长必须大于 0",
        )));
    }

    match storage.update_test(test_id, req).await {
        Ok(Some(test)) => {
            info!("Coding test {} updated", test.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(test, "测试已更新")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TestNotFound,
            "测试不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新测试失败: {e}"),
            )),
        ),
    }
}
