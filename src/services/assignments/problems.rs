use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::AssignmentService;
use crate::models::assignments::requests::AttachProblemRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::classes::require_class_teacher;

/// 向作业题单挂接题目
pub async fn attach_problem(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
    req: AttachProblemRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(assignment) = (match storage.get_assignment_by_id(assignment_id).await {
        Ok(assignment) => assignment,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业失败: {e}"),
                )),
            );
        }
    }) else {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "作业不存在",
        )));
    };

    if let Err(resp) = require_class_teacher(&storage, request, assignment.class_id).await {
        return Ok(resp);
    }

    // 题目必须已在题库
    match storage.get_problem_by_id(req.problem_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ProblemNotFound,
                "题目不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询题目失败: {e}"),
                )),
            );
        }
    }

    match storage
        .attach_problem_to_assignment(assignment_id, req.problem_id, req.points.unwrap_or(100.0))
        .await
    {
        Ok(_) => {
            info!(
                "Problem {} attached to assignment {}",
                req.problem_id, assignment_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("题目已挂接")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("挂接题目失败: {e}"),
            )),
        ),
    }
}

/// 从作业题单移除题目
pub async fn detach_problem(
    service: &AssignmentService,
    request: &HttpRequest,
    assignment_id: i64,
    problem_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(assignment) = (match storage.get_assignment_by_id(assignment_id).await {
        Ok(assignment) => assignment,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业失败: {e}"),
                )),
            );
        }
    }) else {
        return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AssignmentNotFound,
            "作业不存在",
        )));
    };

    if let Err(resp) = require_class_teacher(&storage, request, assignment.class_id).await {
        return Ok(resp);
    }

    match storage
        .detach_problem_from_assignment(assignment_id, problem_id)
        .await
    {
        Ok(true) => {
            info!(
                "Problem {} detached from assignment {}",
                problem_id, assignment_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("题目已移除")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ProblemNotFound,
            "题单中没有该题目",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("移除题目失败: {e}"),
            )),
        ),
    }
}
