use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RateLimit, RequireRole};
use crate::models::classes::requests::{
    ClassListParams, CreateClassRequest, JoinClassRequest, UpdateClassRequest,
};
use crate::models::users::entities::UserRole;
use crate::services::ClassService;
use crate::utils::SafeIDI64;

// 懒加载的全局 ClassService 实例
static CLASS_SERVICE: Lazy<ClassService> = Lazy::new(ClassService::new_lazy);

// 列出班级（角色决定可见范围）
pub async fn list_classes(
    req: HttpRequest,
    query: web::Query<ClassListParams>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.list_classes(&req, query.into_inner()).await
}

// 创建班级
pub async fn create_class(
    req: HttpRequest,
    body: web::Json<CreateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.create_class(&req, body.into_inner()).await
}

// 获取班级详情
pub async fn get_class(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.get_class(&req, path.0).await
}

// 更新班级
pub async fn update_class(
    req: HttpRequest,
    path: SafeIDI64,
    body: web::Json<UpdateClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE
        .update_class(&req, path.0, body.into_inner())
        .await
}

// 删除班级
pub async fn delete_class(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.delete_class(&req, path.0).await
}

// 通过邀请码加入班级
pub async fn join_class(
    req: HttpRequest,
    body: web::Json<JoinClassRequest>,
) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.join_class(&req, body.into_inner()).await
}

// 退出班级
pub async fn leave_class(req: HttpRequest, path: SafeIDI64) -> ActixResult<HttpResponse> {
    CLASS_SERVICE.leave_class(&req, path.0).await
}

// 配置路由
pub fn configure_classes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_classes))
                    // 创建班级 - 仅教师和管理员
                    .route(
                        web::post()
                            .to(create_class)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            // 邀请码加入 - 限流防枚举
            .service(
                web::resource("/join")
                    .route(web::post().to(join_class))
                    .wrap(RateLimit::invite_code()),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_class))
                    // 更新/删除 - 业务层校验是否本班教师
                    .route(
                        web::put()
                            .to(update_class)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_class)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            )
            .service(web::resource("/{id}/leave").route(web::post().to(leave_class))),
    );
}
