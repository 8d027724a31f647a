use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassService;
use crate::middlewares::RequireJWT;
use crate::models::class_users::entities::ClassUserRole;
use crate::models::class_users::responses::JoinClassResponse;
use crate::models::classes::requests::JoinClassRequest;
use crate::models::{ApiResponse, ErrorCode};

pub async fn join_class(
    service: &ClassService,
    request: &HttpRequest,
    req: JoinClassRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    // 邀请码查班级
    let class = match storage.get_class_by_code(req.invite_code.trim()).await {
        Ok(Some(class)) => class,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::InviteCodeInvalid,
                "邀请码无效",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询班级失败: {e}"),
                )),
            );
        }
    };

    // 教师不用加入自己的班级
    if class.teacher_id == user_id {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::AlreadyClassMember,
            "您是该班级的教师",
        )));
    }

    // 重复加入检查
    match storage
        .get_class_user_by_user_id_and_class_id(user_id, class.id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadyClassMember,
                "您已是该班级成员",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("验证班级成员资格失败: {e}"),
                )),
            );
        }
    }

    match storage
        .join_class(user_id, class.id, ClassUserRole::Student)
        .await
    {
        Ok(class_user) => {
            info!("User {} joined class {}", user_id, class.class_name);
            let response = JoinClassResponse {
                class_user,
                class_name: class.class_name,
            };
            Ok(HttpResponse::Created().json(ApiResponse::success(response, "加入班级成功")))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("加入班级失败: {e}"),
            )),
        ),
    }
}
