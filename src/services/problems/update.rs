use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ProblemService;
use crate::models::problems::requests::UpdateProblemRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn update_problem(
    service: &ProblemService,
    request: &HttpRequest,
    problem_id: i64,
    req: UpdateProblemRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.update_problem(problem_id, req).await {
        Ok(Some(problem)) => {
            info!("Problem {} updated", problem.id);
            Ok(HttpResponse::Ok().json(ApiResponse::success(problem, "题目已更新")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ProblemNotFound,
            "题目不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新题目失败: {e}"),
            )),
        ),
    }
}
