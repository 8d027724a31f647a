use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{TestService, load_test_for_teacher};
use crate::models::tests::requests::CreateTestProblemRequest;
use crate::models::{ApiResponse, ErrorCode};

/// 向测试添加题目
pub async fn add_problem(
    service: &TestService,
    request: &HttpRequest,
    test_id: i64,
    req: CreateTestProblemRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let test = match load_test_for_teacher(&storage, request, test_id).await {
        Ok(test) => test,
        Err(resp) => return Ok(resp),
    };

    // 窗口开启后不允许再改题目
    if test.window_contains(chrono::Utc::now()) || chrono::Utc::now() >= test.window_ends_at {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "测试窗口已开启，不能再修改题目",
        )));
    }

    if req.title.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "题目标题不能为空",
        )));
    }

    match storage.create_test_problem(test_id, req).await {
        Ok(problem) => {
            info!("Test problem {} added to test {}", problem.id, test_id);
            Ok(HttpResponse::Created().json(ApiResponse::success(problem, "题目已添加")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("添加题目失败: {e}"),
            )),
        ),
    }
}

/// 从测试移除题目
pub async fn remove_problem(
    service: &TestService,
    request: &HttpRequest,
    test_id: i64,
    test_problem_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = load_test_for_teacher(&storage, request, test_id).await {
        return Ok(resp);
    }

    // 题目必须属于该测试
    match storage.get_test_problem_by_id(test_problem_id).await {
        Ok(Some(problem)) if problem.test_id == test_id => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TestProblemNotFound,
                "测试题目不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询测试题目失败: {e}"),
                )),
            );
        }
    }

    match storage.delete_test_problem(test_problem_id).await {
        Ok(true) => {
            info!(
                "Test problem {} removed from test {}",
                test_problem_id, test_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("题目已移除")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::TestProblemNotFound,
            "测试题目不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("移除题目失败: {e}"),
            )),
        ),
    }
}
