use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProblemService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_problem(
    service: &ProblemService,
    request: &HttpRequest,
    problem_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_problem_by_id(problem_id).await {
        Ok(Some(problem)) => Ok(HttpResponse::Ok().json(ApiResponse::success(problem, "查询成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ProblemNotFound,
            "题目不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询题目失败: {e}"),
            )),
        ),
    }
}
