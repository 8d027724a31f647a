use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AssignmentService;
use crate::models::assignments::responses::{AssignmentCreator, AssignmentDetail};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::classes::require_class_member;

pub async fn get_assignment(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => {
            // 班级成员才能看
            if let Err(resp) = require_class_member(&storage, request, assignment.class_id).await {
                return Ok(resp);
            }

            // 题单
            let problems = storage
                .list_assignment_problems(assignment_id)
                .await
                .unwrap_or_default();

            // 创建者信息
            let creator = match storage.get_user_by_id(assignment.created_by).await {
                Ok(Some(user)) => Some(AssignmentCreator {
                    id: user.id,
                    username: user.username,
                    profile_name: Some(user.profile.profile_name),
                }),
                _ => None,
            };

            let detail = AssignmentDetail {
                assignment,
                problems,
                creator,
            };
            Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "查询成功")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "作业不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询作业失败: {e}"),
            )),
        ),
    }
}
