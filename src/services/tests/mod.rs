pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod problems;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::tests::requests::{
    CreateTestProblemRequest, CreateTestRequest, TestListParams, UpdateTestRequest,
};
use crate::storage::Storage;

pub struct TestService {
    storage: Option<Arc<dyn Storage>>,
}

impl TestService {
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

    pub async fn create_test(
        &self,
        request: &HttpRequest,
        created_by: i64,
        req: CreateTestRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_test(self, request, created_by, req).await
    }

    pub async fn list_tests(
        &self,
        request: &HttpRequest,
        params: TestListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_tests(self, request, params).await
    }

    pub async fn get_test(&self, request: &HttpRequest, test_id: i64) -> ActixResult<HttpResponse> {
        detail::get_test(self, request, test_id).await
    }

    pub async fn update_test(
        &self,
        request: &HttpRequest,
        test_id: i64,
        req: UpdateTestRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_test(self, request, test_id, req).await
    }

    pub async fn delete_test(
        &self,
        request: &HttpRequest,
        test_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_test(self, request, test_id).await
    }

    pub async fn add_problem(
        &self,
        request: &HttpRequest,
        test_id: i64,
        req: CreateTestProblemRequest,
    ) -> ActixResult<HttpResponse> {
        problems::add_problem(self, request, test_id, req).await
    }

    pub async fn remove_problem(
        &self,
        request: &HttpRequest,
        test_id: i64,
        test_problem_id: i64,
    ) -> ActixResult<HttpResponse> {
        problems::remove_problem(self, request, test_id, test_problem_id).await
    }
}

// 取测试并校验班级教师权限的公共辅助
pub(crate) async fn load_test_for_teacher(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    test_id: i64,
) -> Result<crate::models::tests::entities::CodingTest, HttpResponse> {
    use crate::models::{ApiResponse, ErrorCode};
    use crate::services::classes::require_class_teacher;

    let test = match storage.get_test_by_id(test_id).await {
        Ok(Some(test)) => test,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TestNotFound,
                "测试不存在",
            )));
        }
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询测试失败: {e}"),
                )),
            );
        }
    };

    require_class_teacher(storage, request, test.class_id).await?;
    Ok(test)
}
