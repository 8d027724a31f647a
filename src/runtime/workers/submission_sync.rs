//! 外部平台提交轮询与对账
//!
//! 顺序处理：一轮内一次只同步一个用户，相邻用户之间固定休眠，
//! 避免触发外部平台限速。单个用户失败只记日志，继续下一个。

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::errors::Result;
use crate::integrations::hackerrank::HackerrankClient;
use crate::integrations::leetcode::LeetcodeClient;
use crate::integrations::matcher::find_matching_problem;
use crate::models::problems::entities::Platform;
use crate::models::submissions::entities::ExternalVerdict;
use crate::models::submissions::requests::NewSubmission;
use crate::models::users::entities::User;
use crate::storage::Storage;

/// 单个用户一次同步的结果
#[derive(Debug, Clone, Copy, Default)]
pub struct SyncOutcome {
    pub fetched: u32,
    pub matched: u32,
    pub inserted: u32,
}

pub struct SubmissionSyncer {
    storage: Arc<dyn Storage>,
    hackerrank: HackerrankClient,
    leetcode: LeetcodeClient,
}

impl SubmissionSyncer {
    pub fn new(storage: Arc<dyn Storage>) -> Result<Self> {
        Ok(Self {
            storage,
            hackerrank: HackerrankClient::new()?,
            leetcode: LeetcodeClient::new()?,
        })
    }

    /// 同步一轮：顺序处理所有绑定了平台账号的用户
    pub async fn sync_round(&self) {
        let config = AppConfig::get();

        let users = match self.storage.list_syncable_users().await {
            Ok(users) => users,
            Err(e) => {
                warn!("Failed to load syncable users: {}", e);
                return;
            }
        };

        if users.is_empty() {
            debug!("No users with platform handles, skipping sync round");
            return;
        }

        info!("Starting submission sync round for {} user(s)", users.len());

        let mut total = SyncOutcome::default();
        for user in &users {
            match self.sync_user(user).await {
                Ok(outcome) => {
                    total.fetched += outcome.fetched;
                    total.matched += outcome.matched;
                    total.inserted += outcome.inserted;
                }
                Err(e) => {
                    warn!("Sync failed for user {}: {}", user.username, e);
                }
            }

            // 用户之间固定休眠，尊重外部平台限速
            tokio::time::sleep(Duration::from_millis(config.sync.user_delay_ms)).await;
        }

        // 新题目入库后补匹配历史上没对上的提交
        self.rebind_unmatched().await;

        info!(
            "Sync round done: fetched={}, matched={}, inserted={}",
            total.fetched, total.matched, total.inserted
        );
    }

    /// 同步单个用户的两个平台
    pub async fn sync_user(&self, user: &User) -> Result<SyncOutcome> {
        let config = AppConfig::get();
        let limit = config.sync.fetch_limit;
        let mut outcome = SyncOutcome::default();
        let mut new_submissions = Vec::new();

        if let Some(handle) = &user.handles.hackerrank {
            let problems = self
                .storage
                .list_problems_by_platform(Platform::Hackerrank)
                .await?;
            let challenges = self
                .hackerrank
                .fetch_recent_challenges(handle, limit)
                .await?;
            outcome.fetched += challenges.len() as u32;

            for challenge in challenges {
                let matched = find_matching_problem(
                    &problems,
                    challenge.ch_slug.as_deref(),
                    &challenge.name,
                );
                if matched.is_some() {
                    outcome.matched += 1;
                }
                new_submissions.push(NewSubmission {
                    user_id: user.id,
                    problem_id: matched.map(|p| p.id),
                    platform: Platform::Hackerrank,
                    external_key: challenge.external_key(),
                    challenge_name: challenge.name.clone(),
                    language: None,
                    verdict: ExternalVerdict::Accepted,
                    submitted_at: challenge.submitted_at(),
                });
            }
        }

        if let Some(handle) = &user.handles.leetcode {
            let problems = self
                .storage
                .list_problems_by_platform(Platform::Leetcode)
                .await?;
            let submissions = self.leetcode.fetch_recent_accepted(handle, limit).await?;
            outcome.fetched += submissions.len() as u32;

            for submission in submissions {
                let matched = find_matching_problem(
                    &problems,
                    Some(&submission.title_slug),
                    &submission.title,
                );
                if matched.is_some() {
                    outcome.matched += 1;
                }
                new_submissions.push(NewSubmission {
                    user_id: user.id,
                    problem_id: matched.map(|p| p.id),
                    platform: Platform::Leetcode,
                    external_key: submission.id.clone(),
                    challenge_name: submission.title.clone(),
                    language: submission.lang.clone(),
                    verdict: ExternalVerdict::Accepted,
                    submitted_at: submission.submitted_at(),
                });
            }
        }

        outcome.inserted = self.storage.upsert_submissions(new_submissions).await?;
        self.storage.update_last_synced_at(user.id).await?;

        debug!(
            "Synced user {}: fetched={}, matched={}, inserted={}",
            user.username, outcome.fetched, outcome.matched, outcome.inserted
        );

        Ok(outcome)
    }

    /// 补匹配：把之前没对上题目的提交再对一遍题库
    async fn rebind_unmatched(&self) {
        for platform in [Platform::Hackerrank, Platform::Leetcode] {
            let problems = match self.storage.list_problems_by_platform(platform).await {
                Ok(problems) if !problems.is_empty() => problems,
                Ok(_) => continue,
                Err(e) => {
                    warn!("Failed to load problems for rebind: {}", e);
                    continue;
                }
            };

            let unmatched = match self.storage.list_unmatched_submissions(platform).await {
                Ok(subs) => subs,
                Err(e) => {
                    warn!("Failed to load unmatched submissions: {}", e);
                    continue;
                }
            };

            for submission in unmatched {
                if let Some(problem) =
                    find_matching_problem(&problems, None, &submission.challenge_name)
                    && let Err(e) = self
                        .storage
                        .bind_submission_problem(submission.id, problem.id)
                        .await
                {
                    warn!("Failed to rebind submission {}: {}", submission.id, e);
                }
            }
        }
    }
}

/// 同步循环入口
pub async fn run(storage: Arc<dyn Storage>) {
    let config = AppConfig::get();

    let syncer = match SubmissionSyncer::new(storage) {
        Ok(syncer) => syncer,
        Err(e) => {
            warn!("Failed to build submission syncer, sync disabled: {}", e);
            return;
        }
    };

    let mut interval = tokio::time::interval(Duration::from_secs(config.sync.interval_secs));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    info!(
        "Submission sync loop started (interval: {}s, user delay: {}ms)",
        config.sync.interval_secs, config.sync.user_delay_ms
    );

    loop {
        interval.tick().await;
        syncer.sync_round().await;
    }
}
