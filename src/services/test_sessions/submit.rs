use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::{TestSessionService, settle_session};
use crate::integrations::judge::{JudgeClient, JudgeSubmissionRequest, pick_instance};
use crate::middlewares::RequireJWT;
use crate::models::test_sessions::entities::{SessionStatus, TestVerdict};
use crate::models::test_sessions::requests::SubmitCodeRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::runtime::workers::judge_poll::make_dispatch_token;

/// 在会话内提交代码，派发给评测机
///
/// 派发是异步的（wait=false），判定结果由后台轮询器写回；
/// 接口立刻返回 queued 状态的提交记录。
pub async fn submit_code(
    service: &TestSessionService,
    request: &HttpRequest,
    session_id: i64,
    req: SubmitCodeRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
            ErrorCode::Unauthorized,
            "未登录",
        )));
    };

    let session = match storage.get_session_by_id(session_id).await {
        Ok(Some(session)) => session,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SessionNotFound,
                "会话不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询会话失败: {e}"),
                )),
            );
        }
    };

    if session.user_id != user_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "只能在自己的会话中提交",
        )));
    }

    if session.status != SessionStatus::Active {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SessionFinished,
            "会话已结束",
        )));
    }

    // 超时会话惰性结算为 expired，迟到的提交被拒绝
    let now = chrono::Utc::now();
    if session.is_past_deadline(now) {
        if let Err(e) = settle_session(&storage, &session, SessionStatus::Expired).await {
            warn!("Failed to settle expired session {}: {}", session.id, e);
        }
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SessionExpired,
            "答题时间已到，会话已结算",
        )));
    }

    if req.source_code.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "代码不能为空",
        )));
    }

    // 题目必须属于该测试
    let problem = match storage.get_test_problem_by_id(req.test_problem_id).await {
        Ok(Some(problem)) if problem.test_id == session.test_id => problem,
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::TestProblemNotFound,
                "测试题目不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询测试题目失败: {e}"),
                )),
            );
        }
    };

    // 先落库，再派发
    let submission = match storage
        .create_test_submission(session_id, problem.id, req.language_id, &req.source_code)
        .await
    {
        Ok(submission) => submission,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("记录提交失败: {e}"),
                )),
            );
        }
    };

    // 选一个评测实例派发
    let instances = storage.list_enabled_judges().await.unwrap_or_default();
    let Some(instance) = pick_instance(&instances) else {
        let _ = storage
            .record_submission_verdict(submission.id, TestVerdict::JudgeError, None, None, 0.0)
            .await;
        return Ok(
            HttpResponse::ServiceUnavailable().json(ApiResponse::error_empty(
                ErrorCode::JudgeUnavailable,
                "当前没有可用的评测实例",
            )),
        );
    };

    let client = match JudgeClient::new() {
        Ok(client) => client,
        Err(e) => {
            let _ = storage
                .record_submission_verdict(submission.id, TestVerdict::JudgeError, None, None, 0.0)
                .await;
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("初始化评测客户端失败: {e}"),
                )),
            );
        }
    };

    let judge_req = JudgeSubmissionRequest {
        source_code: req.source_code,
        language_id: req.language_id,
        stdin: problem.stdin,
        expected_output: problem.expected_output,
        cpu_time_limit: problem.time_limit_ms as f64 / 1000.0,
        memory_limit: problem.memory_limit_kb,
    };

    match client.submit(instance, &judge_req).await {
        Ok(token) => {
            let dispatch_token = make_dispatch_token(instance.id, &token);
            if let Err(e) = storage
                .mark_submission_dispatched(submission.id, &dispatch_token)
                .await
            {
                warn!("Failed to mark submission dispatched: {}", e);
            }
            info!(
                "Submission {} dispatched to judge {} (token {})",
                submission.id, instance.name, token
            );

            // 返回时带上 queued 状态
            let mut submission = submission;
            submission.verdict = TestVerdict::Queued;
            Ok(HttpResponse::Accepted().json(ApiResponse::success(submission, "提交已派发评测")))
        }
        Err(e) => {
            warn!(
                "Dispatch failed for submission {} on judge {}: {}",
                submission.id, instance.name, e
            );
            let _ = storage
                .record_submission_verdict(submission.id, TestVerdict::JudgeError, None, None, 0.0)
                .await;
            Ok(HttpResponse::BadGateway().json(ApiResponse::error_empty(
                ErrorCode::JudgeUnavailable,
                format!("评测派发失败: {e}"),
            )))
        }
    }
}
