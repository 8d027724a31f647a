use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ProblemService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_problem(
    service: &ProblemService,
    request: &HttpRequest,
    problem_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_problem(problem_id).await {
        Ok(true) => {
            info!("Problem {} deleted", problem_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("题目已删除")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ProblemNotFound,
            "题目不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除题目失败: {e}"),
            )),
        ),
    }
}
