use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassService;
use crate::middlewares::RequireJWT;
use crate::models::classes::requests::{ClassListParams, ClassListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_classes(
    service: &ClassService,
    request: &HttpRequest,
    params: ClassListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    let query = ClassListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        teacher_id: params.teacher_id,
        search: params.search,
    };

    // 角色决定可见范围：管理员看全部，教师看自己的，学生看加入的
    let result = match user.role {
        UserRole::Admin => storage.list_classes_with_pagination(query).await,
        UserRole::Teacher => {
            let query = ClassListQuery {
                teacher_id: Some(user.id),
                ..query
            };
            storage.list_classes_with_pagination(query).await
        }
        UserRole::Student => {
            storage
                .list_user_classes_with_pagination(user.id, query)
                .await
        }
    };

    match result {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询班级列表失败: {e}"),
            )),
        ),
    }
}
