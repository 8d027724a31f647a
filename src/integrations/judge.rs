//! Judge0 兼容评测服务客户端
//!
//! 提交：`POST {base}/submissions?base64_encoded=false&wait=false` -> `{token}`；
//! 查询：`GET {base}/submissions/{token}` -> 状态、耗时、内存。
//! 注册了 auth_token 的实例通过 `X-Auth-Token` 头鉴权。
//! 始终走异步模式（wait=false），结果由后台轮询器取回，
//! 同步等待会把 actix worker 钉死好几秒。

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::config::AppConfig;
use crate::errors::{CodeTrackError, Result};
use crate::models::judges::entities::JudgeInstance;
use crate::models::test_sessions::entities::TestVerdict;

const AUTH_HEADER: &str = "X-Auth-Token";

/// 提交请求体（Judge0 submission）
#[derive(Debug, Serialize)]
pub struct JudgeSubmissionRequest {
    pub source_code: String,
    pub language_id: i32,
    pub stdin: String,
    pub expected_output: String,
    /// 秒
    pub cpu_time_limit: f64,
    /// KB
    pub memory_limit: i32,
}

#[derive(Debug, Deserialize)]
pub struct JudgeToken {
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JudgeStatus {
    pub id: i32,
    #[serde(default)]
    pub description: Option<String>,
}

/// 查询结果（Judge0 submission detail）
#[derive(Debug, Deserialize)]
pub struct JudgeResult {
    pub status: JudgeStatus,
    /// 秒，字符串形式（如 "0.023"）
    #[serde(default)]
    pub time: Option<String>,
    /// KB
    #[serde(default)]
    pub memory: Option<i32>,
}

impl JudgeResult {
    /// 耗时换算为毫秒
    pub fn exec_time_ms(&self) -> Option<i32> {
        self.time
            .as_deref()
            .and_then(|t| t.parse::<f64>().ok())
            .map(|secs| (secs * 1000.0).round() as i32)
    }
}

/// Judge0 状态 ID 到判定结果的映射
///
/// 1 In Queue / 2 Processing / 3 Accepted / 4 Wrong Answer /
/// 5 Time Limit Exceeded / 6 Compilation Error / 7-12 各类 Runtime Error /
/// 13 Internal Error / 14 Exec Format Error。
pub fn map_status_id(id: i32) -> TestVerdict {
    match id {
        1 | 2 => TestVerdict::Queued,
        3 => TestVerdict::Accepted,
        4 => TestVerdict::WrongAnswer,
        5 => TestVerdict::TimeLimit,
        6 => TestVerdict::CompileError,
        7..=12 => TestVerdict::RuntimeError,
        _ => TestVerdict::JudgeError,
    }
}

/// 在启用且健康的实例中轮转选择
///
/// 游标是进程级的，多 worker 下也只是近似轮转，足够用。
static ROUND_ROBIN_CURSOR: AtomicUsize = AtomicUsize::new(0);

pub fn pick_instance(instances: &[JudgeInstance]) -> Option<&JudgeInstance> {
    let healthy: Vec<&JudgeInstance> = instances
        .iter()
        .filter(|j| j.enabled && j.healthy)
        .collect();

    if healthy.is_empty() {
        // 全部不健康时退而求其次，在启用实例里轮转
        let enabled: Vec<&JudgeInstance> = instances.iter().filter(|j| j.enabled).collect();
        if enabled.is_empty() {
            return None;
        }
        let idx = ROUND_ROBIN_CURSOR.fetch_add(1, Ordering::Relaxed) % enabled.len();
        return Some(enabled[idx]);
    }

    let idx = ROUND_ROBIN_CURSOR.fetch_add(1, Ordering::Relaxed) % healthy.len();
    Some(healthy[idx])
}

pub struct JudgeClient {
    http: reqwest::Client,
}

impl JudgeClient {
    pub fn new() -> Result<Self> {
        let config = AppConfig::get();
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.judge.request_timeout))
            .user_agent(concat!("codetrack/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CodeTrackError::judge_unavailable(format!("构建 HTTP 客户端失败: {e}")))?;

        Ok(Self { http })
    }

    /// 派发提交，返回查询 token
    pub async fn submit(
        &self,
        instance: &JudgeInstance,
        req: &JudgeSubmissionRequest,
    ) -> Result<String> {
        let url = format!(
            "{}/submissions?base64_encoded=false&wait=false",
            instance.base_url
        );

        let mut request = self.http.post(&url).json(req);
        if let Some(token) = &instance.auth_token {
            request = request.header(AUTH_HEADER, token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CodeTrackError::judge_unavailable(format!("评测实例不可达: {e}")))?;

        if !response.status().is_success() {
            return Err(CodeTrackError::judge_protocol(format!(
                "评测实例 {} 返回 {}",
                instance.name,
                response.status()
            )));
        }

        let token: JudgeToken = response
            .json()
            .await
            .map_err(|e| CodeTrackError::judge_protocol(format!("token 解析失败: {e}")))?;

        Ok(token.token)
    }

    /// 查询提交结果
    pub async fn fetch_result(&self, instance: &JudgeInstance, token: &str) -> Result<JudgeResult> {
        let url = format!(
            "{}/submissions/{}?fields=status,time,memory",
            instance.base_url, token
        );

        let mut request = self.http.get(&url);
        if let Some(auth) = &instance.auth_token {
            request = request.header(AUTH_HEADER, auth);
        }

        let response = request
            .send()
            .await
            .map_err(|e| CodeTrackError::judge_unavailable(format!("评测实例不可达: {e}")))?;

        if !response.status().is_success() {
            return Err(CodeTrackError::judge_protocol(format!(
                "评测实例 {} 返回 {}",
                instance.name,
                response.status()
            )));
        }

        response
            .json()
            .await
            .map_err(|e| CodeTrackError::judge_protocol(format!("评测结果解析失败: {e}")))
    }

    /// 健康探测：`GET {base}/about`
    pub async fn probe(&self, instance: &JudgeInstance) -> bool {
        let url = format!("{}/about", instance.base_url);

        let mut request = self.http.get(&url);
        if let Some(auth) = &instance.auth_token {
            request = request.header(AUTH_HEADER, auth);
        }

        match request.send().await {
            Ok(response) => response.status().is_success(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(id: i64, enabled: bool, healthy: bool) -> JudgeInstance {
        JudgeInstance {
            id,
            name: format!("judge-{id}"),
            base_url: format!("http://judge-{id}:2358"),
            auth_token: None,
            enabled,
            healthy,
            last_checked_at: None,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(map_status_id(1), TestVerdict::Queued);
        assert_eq!(map_status_id(2), TestVerdict::Queued);
        assert_eq!(map_status_id(3), TestVerdict::Accepted);
        assert_eq!(map_status_id(4), TestVerdict::WrongAnswer);
        assert_eq!(map_status_id(5), TestVerdict::TimeLimit);
        assert_eq!(map_status_id(6), TestVerdict::CompileError);
        assert_eq!(map_status_id(7), TestVerdict::RuntimeError);
        assert_eq!(map_status_id(11), TestVerdict::RuntimeError);
        assert_eq!(map_status_id(13), TestVerdict::JudgeError);
        assert_eq!(map_status_id(14), TestVerdict::JudgeError);
        assert_eq!(map_status_id(99), TestVerdict::JudgeError);
    }

    #[test]
    fn test_pick_prefers_healthy() {
        let instances = vec![
            instance(1, true, false),
            instance(2, true, true),
            instance(3, false, true),
        ];
        // 唯一健康且启用的是 2，无论轮转到哪都应选中它
        for _ in 0..4 {
            assert_eq!(pick_instance(&instances).map(|j| j.id), Some(2));
        }
    }

    #[test]
    fn test_pick_falls_back_to_enabled() {
        let instances = vec![instance(1, true, false), instance(2, false, false)];
        assert_eq!(pick_instance(&instances).map(|j| j.id), Some(1));
    }

    #[test]
    fn test_pick_none_when_all_disabled() {
        let instances = vec![instance(1, false, true)];
        assert!(pick_instance(&instances).is_none());
    }

    #[test]
    fn test_round_robin_rotates() {
        let instances = vec![instance(1, true, true), instance(2, true, true)];
        // 游标是进程级共享的，多取几次保证两个实例都被轮到
        let mut seen = std::collections::HashSet::new();
        for _ in 0..64 {
            seen.insert(pick_instance(&instances).map(|j| j.id).unwrap());
            if seen.len() == 2 {
                break;
            }
        }
        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_exec_time_ms_conversion() {
        let result: JudgeResult = serde_json::from_str(
            r#"{"status": {"id": 3, "description": "Accepted"}, "time": "0.023", "memory": 3456}"#,
        )
        .unwrap();
        assert_eq!(result.exec_time_ms(), Some(23));
        assert_eq!(result.memory, Some(3456));
        assert_eq!(map_status_id(result.status.id), TestVerdict::Accepted);
    }

    #[test]
    fn test_result_without_time() {
        let result: JudgeResult =
            serde_json::from_str(r#"{"status": {"id": 6}}"#).unwrap();
        assert_eq!(result.exec_time_ms(), None);
        assert_eq!(map_status_id(result.status.id), TestVerdict::CompileError);
    }
}
