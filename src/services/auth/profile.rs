use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::models::auth::UserInfoResponse;
use crate::models::users::requests::UpdateProfileRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_platform_handle;

use super::AuthService;

/// 获取当前登录用户信息
pub async fn handle_get_user(
    _service: &AuthService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    match RequireJWT::extract_user_claims(request) {
        Some(user) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            UserInfoResponse { user },
            "查询成功",
        ))),
        None => Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        ))),
    }
}

/// 更新个人资料（含平台账号绑定）
pub async fn handle_update_profile(
    service: &AuthService,
    request: &HttpRequest,
    update: UpdateProfileRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    // 平台账号格式校验（空字符串表示解绑，跳过校验）
    for handle in [&update.hackerrank_handle, &update.leetcode_handle]
        .into_iter()
        .flatten()
    {
        if !handle.is_empty()
            && let Err(msg) = validate_platform_handle(handle)
        {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
        }
    }

    match storage.update_profile(user_id, update).await {
        Ok(Some(user)) => {
            tracing::info!("User {} updated profile", user.username);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                UserInfoResponse { user },
                "资料已更新",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "用户不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新资料失败: {e}"),
            )),
        ),
    }
}
