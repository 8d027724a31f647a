use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{TestService, load_test_for_teacher};
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_test(
    service: &TestService,
    request: &HttpRequest,
    test_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = load_test_for_teacher(&storage, request, test_id).await {
        return Ok(resp);
    }

    match storage.delete_test(test_id).await {
        Ok(true) => {
            info!("Coding test {} deleted", test_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("测试已删除")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TestNotFound,
            "测试不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除测试失败: {e}"),
            )),
        ),
    }
}
