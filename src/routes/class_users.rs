use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireRole};
use crate::models::class_users::requests::{ClassUserListParams, UpdateClassUserRequest};
use crate::models::users::entities::UserRole;
use crate::services::ClassUserService;

// 懒加载的全局 ClassUserService 实例
static CLASS_USER_SERVICE: Lazy<ClassUserService> = Lazy::new(ClassUserService::new_lazy);

// 列出班级成员
pub async fn list_class_users(
    req: HttpRequest,
    path: web::Path<i64>,
    query: web::Query<ClassUserListParams>,
) -> ActixResult<HttpResponse> {
    CLASS_USER_SERVICE
        .list_class_users(&req, path.into_inner(), query.into_inner())
        .await
}

// 更新班级成员（班内角色）
pub async fn update_class_user(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
    body: web::Json<UpdateClassUserRequest>,
) -> ActixResult<HttpResponse> {
    let (class_id, class_user_id) = path.into_inner();
    CLASS_USER_SERVICE
        .update_class_user(&req, class_id, class_user_id, body.into_inner())
        .await
}

// 移出班级成员
pub async fn remove_class_user(
    req: HttpRequest,
    path: web::Path<(i64, i64)>,
) -> ActixResult<HttpResponse> {
    let (class_id, user_id) = path.into_inner();
    CLASS_USER_SERVICE
        .remove_class_user(&req, class_id, user_id)
        .await
}

// 配置路由
pub fn configure_class_users_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classes/{class_id}/users")
            .wrap(middlewares::RequireJWT)
            // 成员列表 - 班级成员可见（业务层校验）
            .service(web::resource("").route(web::get().to(list_class_users)))
            .service(
                web::resource("/{member_id}")
                    // 更新/移出 - 仅教师和管理员（业务层再校验本班教师）
                    .route(
                        web::put()
                            .to(update_class_user)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(remove_class_user)
                            .wrap(RequireRole::new_any(UserRole::teacher_roles())),
                    ),
            ),
    );
}
