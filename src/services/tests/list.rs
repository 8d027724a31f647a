use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::TestService;
use crate::middlewares::RequireJWT;
use crate::models::tests::requests::{TestListParams, TestListQuery};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::classes::require_class_member;

pub async fn list_tests(
    service: &TestService,
    request: &HttpRequest,
    params: TestListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 指定了班级时校验成员资格；学生不允许跨班级浏览
    match params.class_id {
        Some(class_id) => {
            if let Err(resp) = require_class_member(&storage, request, class_id).await {
                return Ok(resp);
            }
        }
        None => {
            if RequireJWT::extract_user_role(request) == Some(UserRole::Student) {
                return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                    ErrorCode::BadRequest,
                    "请指定 class_id",
                )));
            }
        }
    }

    let query = TestListQuery {
        page: Some(params.pagination.page),
        size: Some(params.pagination.size),
        class_id: params.class_id,
        search: params.search,
    };

    match storage.list_tests_with_pagination(query).await {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(response, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询测试列表失败: {e}"),
            )),
        ),
    }
}
