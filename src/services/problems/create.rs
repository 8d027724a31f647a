use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ProblemService;
use crate::models::problems::requests::CreateProblemRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_problem(
    service: &ProblemService,
    request: &HttpRequest,
    created_by: i64,
    mut req: CreateProblemRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    req.slug = req.slug.trim().to_string();
    if req.slug.is_empty() || req.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "slug 与标题不能为空",
        )));
    }

    // 同平台同 slug 去重
    match storage
        .get_problem_by_platform_slug(req.platform, &req.slug)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::ProblemAlreadyExists,
                "该平台下已存在相同 slug 的题目",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建题目失败: {e}"),
                )),
            );
        }
    }

    match storage.create_problem(created_by, req).await {
        Ok(problem) => {
            info!(
                "Problem {}/{} created by {}",
                problem.platform, problem.slug, created_by
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(problem, "题目创建成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建题目失败: {e}"),
            )),
        ),
    }
}
