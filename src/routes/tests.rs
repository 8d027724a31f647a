use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit, RequireJWT, RequireRole};
use crate::models::test_sessions::requests::{
    ReportPenaltyRequest, SessionListParams, SubmitCodeRequest,
};
use crate::models::tests::requests::{
    CreateTestProblemRequest, CreateTestRequest, TestListParams, UpdateTestRequest,
};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{TestService, TestSessionService};
use crate::utils::{SafeIDI64, SafeSessionIdI64};

// 懒加载的全局服务实例
static TEST_SERVICE: Lazy<TestService> = Lazy::new(TestService::new_lazy);
static SESSION_SERVICE: Lazy<TestSessionService> = Lazy::new(TestSessionService::new_lazy);

// 列出测试
pub async fn list_tests(
    req: HttpRequest,
    query: web::Query<TestListParams>,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE.list_tests(&req, query.into_inner()).await
}

// 创建测试
pub async fn create_test(
    req: HttpRequest,
    body: web::Json<CreateTestRequest>,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(&req) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "无法获取用户信息",
            )));
        }
    };

    TEST_SERVICE
        .create_test(&req, user_id, body.into_inner())
        .await
}

// 获取测试详情
pub async fn get_test(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    TEST_SERVICE.get_test(&req, path.0).await
}

// 更新测试
pub async fn update_test(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateTestRequest>,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE
        .update_test(&req, path.0, body.into_inner())
        .await
}

// 删除测试
pub async fn delete_test(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    TEST_SERVICE.delete_test(&req, path.0).await
}

// 添加测试题目
pub async fn add_test_problem(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<CreateTestProblemRequest>,
) -> ActixResult<HttpResponse> {
    TEST_SERVICE
        .add_problem(&req, path.0, body.into_inner())
        .await
}

// 移除测试题目
pub async fn remove_test_problem(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (test_id, test_problem_id) = path.into_inner();
    TEST_SERVICE
        .remove_problem(&req, test_id, test_problem_id)
        .await
}

// 开始答题会话
pub async fn start_session(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    SESSION_SERVICE.start_session(&req, path.0).await
}

// 查询自己的会话
pub async fn my_session(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    SESSION_SERVICE.my_session(&req, path.0).await
}

// 列出测试全部会话（教师视角）
pub async fn list_sessions(
    req: HttpRequest,
    path: SafeIDI64,
    query: web::Query<SessionListParams>,
) -> ActixResult<HttpResponse> {
    SESSION_SERVICE
        .list_sessions(&req, path.0, query.into_inner())
        .await
}

// 会话详情
pub async fn session_detail(
    req: HttpRequest,
    path: SafeSessionIdI64,
) -> ActixResult<HttpResponse> {
    SESSION_SERVICE.session_detail(&req, path.0).await
}

// 会话内提交代码
pub async fn submit_code(
    req: HttpRequest,
    path: SafeSessionIdI64,
    body: web::Json<SubmitCodeRequest>,
) -> ActixResult<HttpResponse> {
    SESSION_SERVICE
        .submit_code(&req, path.0, body.into_inner())
        .await
}

// 交卷
pub async fn finish_session(
    req: HttpRequest,
    path: SafeSessionIdI64,
) -> ActixResult<HttpResponse> {
    SESSION_SERVICE.finish_session(&req, path.0).await
}

// 上报违规
pub async fn report_penalty(
    req: HttpRequest,
    path: SafeSessionIdI64,
    body: web::Json<ReportPenaltyRequest>,
) -> ActixResult<HttpResponse> {
    SESSION_SERVICE
        .report_penalty(&req, path.0, body.into_inner())
        .await
}

// 配置路由
pub fn configure_tests_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/tests")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_tests))
                    // 创建测试 - 仅教师和管理员
                    .route(
                        web::post()
                            .to(create_test)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_test))
                    .route(
                        web::put()
                            .to(update_test)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_test)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{id}/problems").route(
                    web::post()
                        .to(add_test_problem)
                        .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/{id}/problems/{problem_id}").route(
                    web::delete()
                        .to(remove_test_problem)
                        .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                ),
            )
            .service(
                web::resource("/{id}/sessions")
                    // 开始会话 - 学生；列表 - 仅教师和管理员
                    .route(web::post().to(start_session))
                    .route(
                        web::get()
                            .to(list_sessions)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(web::resource("/{id}/sessions/my").route(web::get().to(my_session))),
    );

    cfg.service(
        web::scope("/api/v1/sessions")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("/{session_id}").route(web::get().to(session_detail)))
            // 代码提交 - 限流
            .service(
                web::resource("/{session_id}/submissions")
                    .route(web::post().to(submit_code))
                    .wrap(RateLimit::code_submit()),
            )
            .service(web::resource("/{session_id}/finish").route(web::post().to(finish_session)))
            .service(
                web::resource("/{session_id}/penalties").route(web::post().to(report_penalty)),
            ),
    );
}
