pub mod detail;
pub mod finish;
pub mod list;
pub mod my;
pub mod penalty;
pub mod start;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::errors::Result;
use crate::models::test_sessions::entities::{SessionStatus, TestSession};
use crate::models::test_sessions::requests::{
    ReportPenaltyRequest, SessionListParams, SubmitCodeRequest,
};
use crate::storage::Storage;

pub struct TestSessionService {
    storage: Option<Arc<dyn Storage>>,
}

impl TestSessionService {
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

    pub async fn start_session(
        &self,
        request: &HttpRequest,
        test_id: i64,
    ) -> ActixResult<HttpResponse> {
        start::start_session(self, request, test_id).await
    }

    pub async fn my_session(
        &self,
        request: &HttpRequest,
        test_id: i64,
    ) -> ActixResult<HttpResponse> {
        my::my_session(self, request, test_id).await
    }

    pub async fn list_sessions(
        &self,
        request: &HttpRequest,
        test_id: i64,
        params: SessionListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_sessions(self, request, test_id, params).await
    }

    pub async fn session_detail(
        &self,
        request: &HttpRequest,
        session_id: i64,
    ) -> ActixResult<HttpResponse> {
        detail::session_detail(self, request, session_id).await
    }

    pub async fn submit_code(
        &self,
        request: &HttpRequest,
        session_id: i64,
        req: SubmitCodeRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit_code(self, request, session_id, req).await
    }

    pub async fn finish_session(
        &self,
        request: &HttpRequest,
        session_id: i64,
    ) -> ActixResult<HttpResponse> {
        finish::finish_session(self, request, session_id).await
    }

    pub async fn report_penalty(
        &self,
        request: &HttpRequest,
        session_id: i64,
        req: ReportPenaltyRequest,
    ) -> ActixResult<HttpResponse> {
        penalty::report_penalty(self, request, session_id, req).await
    }
}

/// 计算会话最终得分：各题最高分之和减去违规扣分，下限为 0
pub(crate) fn final_score(raw_score: f64, penalty_total: f64) -> f64 {
    (raw_score - penalty_total).max(0.0)
}

/// 结算会话并写库
pub(crate) async fn settle_session(
    storage: &Arc<dyn Storage>,
    session: &TestSession,
    status: SessionStatus,
) -> Result<f64> {
    let best = storage.best_scores_by_problem(session.id).await?;
    let raw: f64 = best.values().sum();
    let penalty_total = storage.sum_penalties(session.id).await?;
    let score = final_score(raw, penalty_total);

    storage
        .close_session(session.id, status, score, Some(chrono::Utc::now()))
        .await?;

    Ok(score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_final_score_subtracts_penalties() {
        assert_eq!(final_score(180.0, 30.0), 150.0);
    }

    #[test]
    fn test_final_score_floors_at_zero() {
        assert_eq!(final_score(20.0, 50.0), 0.0);
        assert_eq!(final_score(0.0, 0.0), 0.0);
    }
}
