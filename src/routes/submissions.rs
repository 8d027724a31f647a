use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit};
use crate::models::submissions::requests::SubmissionListParams;
use crate::services::SubmissionService;

// 懒加载的全局 SubmissionService 实例
static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

// 列出对账后的外部提交
pub async fn list_submissions(
    req: HttpRequest,
    query: web::Query<SubmissionListParams>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_submissions(&req, query.into_inner())
        .await
}

// 手动触发当前用户同步
pub async fn sync_now(req: HttpRequest) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE.sync_now(&req).await
}

// 配置路由
pub fn configure_submissions_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/submissions")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("").route(web::get().to(list_submissions)))
            // 手动同步 - 严格限流（出站请求昂贵）
            .service(
                web::resource("/sync")
                    .route(web::post().to(sync_now))
                    .wrap(RateLimit::manual_sync()),
            ),
    );
}
