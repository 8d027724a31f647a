pub mod create;
pub mod delete;
pub mod get;
pub mod join;
pub mod leave;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classes::requests::{
    ClassListParams, CreateClassRequest, JoinClassRequest, UpdateClassRequest,
};
use crate::storage::Storage;

pub struct ClassService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn create_class(
        &self,
        request: &HttpRequest,
        class_data: CreateClassRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_class(self, request, class_data).await
    }

    pub async fn list_classes(
        &self,
        request: &HttpRequest,
        params: ClassListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_classes(self, request, params).await
    }

    pub async fn get_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_class(self, request, class_id).await
    }

    pub async fn update_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
        req: UpdateClassRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_class(self, request, class_id, req).await
    }

    pub async fn delete_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_class(self, request, class_id).await
    }

    pub async fn join_class(
        &self,
        request: &HttpRequest,
        req: JoinClassRequest,
    ) -> ActixResult<HttpResponse> {
        join::join_class(self, request, req).await
    }

    pub async fn leave_class(
        &self,
        request: &HttpRequest,
        class_id: i64,
    ) -> ActixResult<HttpResponse> {
        leave::leave_class(self, request, class_id).await
    }
}

// 班级内权限判定的公共辅助：教师本人、管理员放行
pub(crate) async fn require_class_teacher(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    class_id: i64,
) -> Result<(), HttpResponse> {
    use crate::middlewares::RequireJWT;
    use crate::models::users::entities::UserRole;
    use crate::models::{ApiResponse, ErrorCode};

    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Err(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    if user.role == UserRole::Admin {
        return Ok(());
    }

    match storage.get_class_by_id(class_id).await {
        Ok(Some(class)) => {
            if class.teacher_id == user.id {
                Ok(())
            } else {
                Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                    ErrorCode::ClassPermissionDenied,
                    "只有该班级的教师可以执行此操作",
                )))
            }
        }
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassNotFound,
            "班级不存在",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询班级失败: {e}"),
            )),
        ),
    }
}

// 班级成员资格检查：成员、教师本人、管理员放行
pub(crate) async fn require_class_member(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    class_id: i64,
) -> Result<(), HttpResponse> {
    use crate::middlewares::RequireJWT;
    use crate::models::users::entities::UserRole;
    use crate::models::{ApiResponse, ErrorCode};

    let Some(user) = RequireJWT::extract_user_claims(request) else {
        return Err(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    if user.role == UserRole::Admin {
        return Ok(());
    }

    // 教师本人
    if let Ok(Some(class)) = storage.get_class_by_id(class_id).await
        && class.teacher_id == user.id
    {
        return Ok(());
    }

    match storage
        .get_class_user_by_user_id_and_class_id(user.id, class_id)
        .await
    {
        Ok(Some(_)) => Ok(()),
        Ok(None) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::NotClassMember,
            "您不是该班级成员",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("验证班级成员资格失败: {e}"),
            )),
        ),
    }
}
