pub mod check;
pub mod create;
pub mod delete;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::judges::requests::{CreateJudgeRequest, UpdateJudgeRequest};
use crate::storage::Storage;

pub struct JudgeService {
    storage: Option<Arc<dyn Storage>>,
}

impl JudgeService {
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

    pub async fn create_judge(
        &self,
        request: &HttpRequest,
        req: CreateJudgeRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_judge(self, request, req).await
    }

    pub async fn list_judges(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_judges(self, request).await
    }

    pub async fn update_judge(
        &self,
        request: &HttpRequest,
        judge_id: i64,
        req: UpdateJudgeRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_judge(self, request, judge_id, req).await
    }

    pub async fn delete_judge(
        &self,
        request: &HttpRequest,
        judge_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_judge(self, request, judge_id).await
    }

    pub async fn check_judge(
        &self,
        request: &HttpRequest,
        judge_id: i64,
    ) -> ActixResult<HttpResponse> {
        check::check_judge(self, request, judge_id).await
    }
}
