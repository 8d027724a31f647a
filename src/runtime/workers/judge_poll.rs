//! 评测结果回收
//!
//! 提交派发时把 `{instance_id}:{token}` 写进 judge_token，
//! 这里按 token 找回签发实例并查询结果。

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::integrations::judge::{JudgeClient, map_status_id};
use crate::models::judges::entities::JudgeInstance;
use crate::models::test_sessions::entities::TestVerdict;
use crate::storage::Storage;

/// 组装派发 token：实例 ID + 评测机返回的 token
pub fn make_dispatch_token(instance_id: i64, token: &str) -> String {
    format!("{instance_id}:{token}")
}

/// 拆解派发 token
pub fn parse_dispatch_token(raw: &str) -> Option<(i64, &str)> {
    let (id, token) = raw.split_once(':')?;
    let id = id.parse::<i64>().ok()?;
    (!token.is_empty()).then_some((id, token))
}

/// 回收一轮评测结果
async fn poll_once(storage: &Arc<dyn Storage>, client: &JudgeClient) {
    let queued = match storage.list_queued_submissions().await {
        Ok(queued) => queued,
        Err(e) => {
            warn!("Failed to load queued submissions: {}", e);
            return;
        }
    };

    if queued.is_empty() {
        return;
    }

    let instances = match storage.list_judges().await {
        Ok(instances) => instances,
        Err(e) => {
            warn!("Failed to load judge instances: {}", e);
            return;
        }
    };
    let instance_map: HashMap<i64, &JudgeInstance> =
        instances.iter().map(|j| (j.id, j)).collect();

    debug!("Polling {} queued submission(s)", queued.len());

    for (submission_id, raw_token, test_problem_id) in queued {
        let Some((instance_id, token)) = parse_dispatch_token(&raw_token) else {
            warn!(
                "Submission {} has malformed judge token, marking as judge error",
                submission_id
            );
            let _ = storage
                .record_submission_verdict(submission_id, TestVerdict::JudgeError, None, None, 0.0)
                .await;
            continue;
        };

        let Some(instance) = instance_map.get(&instance_id) else {
            warn!(
                "Judge instance {} for submission {} no longer exists",
                instance_id, submission_id
            );
            let _ = storage
                .record_submission_verdict(submission_id, TestVerdict::JudgeError, None, None, 0.0)
                .await;
            continue;
        };

        let result = match client.fetch_result(instance, token).await {
            Ok(result) => result,
            Err(e) => {
                // 实例暂时不可达，留给下一轮
                debug!("Fetch result failed for submission {}: {}", submission_id, e);
                continue;
            }
        };

        let verdict = map_status_id(result.status.id);
        if !verdict.is_final() {
            continue;
        }

        // 通过得满分，否则 0 分
        let score = if verdict == TestVerdict::Accepted {
            match storage.get_test_problem_by_id(test_problem_id).await {
                Ok(Some(problem)) => problem.max_score,
                _ => 0.0,
            }
        } else {
            0.0
        };

        if let Err(e) = storage
            .record_submission_verdict(
                submission_id,
                verdict,
                result.exec_time_ms(),
                result.memory,
                score,
            )
            .await
        {
            warn!("Failed to record verdict for {}: {}", submission_id, e);
        } else {
            info!(
                "Submission {} judged: {} (score {})",
                submission_id, verdict, score
            );
        }
    }
}

/// 评测结果轮询循环入口
pub async fn run(storage: Arc<dyn Storage>) {
    let config = AppConfig::get();

    let client = match JudgeClient::new() {
        Ok(client) => client,
        Err(e) => {
            warn!("Failed to build judge client, verdict polling disabled: {}", e);
            return;
        }
    };

    let mut interval = tokio::time::interval(Duration::from_secs(config.judge.poll_interval_secs));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    info!(
        "Judge verdict polling loop started (interval: {}s)",
        config.judge.poll_interval_secs
    );

    loop {
        interval.tick().await;
        poll_once(&storage, &client).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_token_roundtrip() {
        let raw = make_dispatch_token(7, "d85cd024-1548-4165-96c7-7bc88673f194");
        assert_eq!(
            parse_dispatch_token(&raw),
            Some((7, "d85cd024-1548-4165-96c7-7bc88673f194"))
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert_eq!(parse_dispatch_token("no-separator"), None);
        assert_eq!(parse_dispatch_token("abc:token"), None);
        assert_eq!(parse_dispatch_token("7:"), None);
    }
}
