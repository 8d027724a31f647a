use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ProblemService;
use crate::models::problems::requests::{ProblemListParams, ProblemListQuery};
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_problems(
    service: &ProblemService,
    request: &HttpRequest,
    params: ProblemListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let query = ProblemListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        platform: params.platform,
        difficulty: params.difficulty,
        search: params.search,
    };

    match storage.list_problems_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询题目列表失败: {e}"),
            )),
        ),
    }
}
