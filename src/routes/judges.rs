use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireRole};
use crate::models::judges::requests::{CreateJudgeRequest, UpdateJudgeRequest};
use crate::models::users::entities::UserRole;
use crate::services::JudgeService;
use crate::utils::SafeIDI64;

// 懒加载的全局 JudgeService 实例
static JUDGE_SERVICE: Lazy<JudgeService> = Lazy::new(JudgeService::new_lazy);

// 列出评测实例
pub async fn list_judges(req: HttpRequest) -> ActixResult<HttpResponse> {
    JUDGE_SERVICE.list_judges(&req).await
}

// 注册评测实例
pub async fn create_judge(
    req: HttpRequest,
    body: web::Json<CreateJudgeRequest>,
) -> ActixResult<HttpResponse> {
    JUDGE_SERVICE.create_judge(&req, body.into_inner()).await
}

// 更新评测实例
pub async fn update_judge(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateJudgeRequest>,
) -> ActixResult<HttpResponse> {
    JUDGE_SERVICE
        .update_judge(&req, path.0, body.into_inner())
        .await
}

// 删除评测实例
pub async fn delete_judge(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    JUDGE_SERVICE.delete_judge(&req, path.0).await
}

// 立即健康探测
pub async fn check_judge(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    JUDGE_SERVICE.check_judge(&req, path.0).await
}

// 配置路由（评测实例管理仅管理员可用）
pub fn configure_judges_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/judges")
            .wrap(RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_judges))
                    .route(web::post().to(create_judge)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::put().to(update_judge))
                    .route(web::delete().to(delete_judge)),
            )
            .service(web::resource("/{id}/check").route(web::post().to(check_judge))),
    );
}
