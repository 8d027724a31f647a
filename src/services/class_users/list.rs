use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassUserService;
use crate::models::class_users::requests::{ClassUserListParams, ClassUserQuery};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::classes::require_class_member;

pub async fn list_class_users(
    service: &ClassUserService,
    request: &HttpRequest,
    class_id: i64,
    params: ClassUserListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = require_class_member(&storage, request, class_id).await {
        return Ok(resp);
    }

    let query = ClassUserQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        role: params.role,
        search: params.search,
    };

    match storage
        .list_class_users_with_pagination(class_id, query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询班级成员失败: {e}"),
            )),
        ),
    }
}
