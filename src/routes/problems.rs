use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireJWT, RequireRole};
use crate::models::problems::requests::{
    CreateProblemRequest, ProblemListParams, UpdateProblemRequest,
};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::ProblemService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ProblemService 实例
static PROBLEM_SERVICE: Lazy<ProblemService> = Lazy::new(ProblemService::new_lazy);

// 列出题目
pub async fn list_problems(
    req: HttpRequest,
    query: web::Query<ProblemListParams>,
) -> ActixResult<HttpResponse> {
    PROBLEM_SERVICE.list_problems(&req, query.into_inner()).await
}

// 创建题目
pub async fn create_problem(
    req: HttpRequest,
    body: web::Json<CreateProblemRequest>,
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

    PROBLEM_SERVICE
        .create_problem(&req, user_id, body.into_inner())
        .await
}

// 获取题目详情
pub async fn get_problem(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    PROBLEM_SERVICE.get_problem(&req, path.0).await
}

// 更新题目
pub async fn update_problem(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateProblemRequest>,
) -> ActixResult<HttpResponse> {
    PROBLEM_SERVICE
        .update_problem(&req, path.0, body.into_inner())
        .await
}

// 删除题目
pub async fn delete_problem(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    PROBLEM_SERVICE.delete_problem(&req, path.0).await
}

// 配置路由
pub fn configure_problems_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/problems")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 列出题目 - 所有登录用户可访问
                    .route(web::get().to(list_problems))
                    // 创建题目 - 仅教师和管理员
                    .route(
                        web::post()
                            .to(create_problem)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_problem))
                    .route(
                        web::put()
                            .to(update_problem)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_problem)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
