pub mod list;
pub mod remove;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::class_users::requests::{ClassUserListParams, UpdateClassUserRequest};
use crate::storage::Storage;

pub struct ClassUserService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassUserService {
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

    pub async fn list_class_users(
        &self,
        request: &HttpRequest,
        class_id: i64,
        params: ClassUserListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_class_users(self, request, class_id, params).await
    }

    pub async fn update_class_user(
        &self,
        request: &HttpRequest,
        class_id: i64,
        class_user_id: i64,
        req: UpdateClassUserRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_class_user(self, request, class_id, class_user_id, req).await
    }

    pub async fn remove_class_user(
        &self,
        request: &HttpRequest,
        class_id: i64,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        remove::remove_class_user(self, request, class_id, user_id).await
    }
}
