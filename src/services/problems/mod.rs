pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::problems::requests::{
    CreateProblemRequest, ProblemListParams, UpdateProblemRequest,
};
use crate::storage::Storage;

pub struct ProblemService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProblemService {
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

    pub async fn create_problem(
        &self,
        request: &HttpRequest,
        created_by: i64,
        req: CreateProblemRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_problem(self, request, created_by, req).await
    }

    pub async fn list_problems(
        &self,
        request: &HttpRequest,
        params: ProblemListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_problems(self, request, params).await
    }

    pub async fn get_problem(
        &self,
        request: &HttpRequest,
        problem_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_problem(self, request, problem_id).await
    }

    pub async fn update_problem(
        &self,
        request: &HttpRequest,
        problem_id: i64,
        req: UpdateProblemRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_problem(self, request, problem_id, req).await
    }

    pub async fn delete_problem(
        &self,
        request: &HttpRequest,
        problem_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_problem(self, request, problem_id).await
    }
}
