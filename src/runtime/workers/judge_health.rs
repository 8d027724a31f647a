//! 评测实例健康检查
//!
//! 周期性探测每个启用实例的 `/about`，更新 healthy 标记；
//! 派发时只在健康实例中轮转。

use std::sync::Arc;
use std::time::Duration;

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::integrations::judge::JudgeClient;
use crate::storage::Storage;

async fn check_all(storage: &Arc<dyn Storage>, client: &JudgeClient) {
    let instances = match storage.list_enabled_judges().await {
        Ok(instances) => instances,
        Err(e) => {
            warn!("Failed to load judge instances: {}", e);
            return;
        }
    };

    for instance in instances {
        let healthy = client.probe(&instance).await;

        if healthy != instance.healthy {
            info!(
                "Judge instance {} health changed: {} -> {}",
                instance.name, instance.healthy, healthy
            );
        }

        if let Err(e) = storage.set_judge_health(instance.id, healthy).await {
            warn!("Failed to update health for {}: {}", instance.name, e);
        }
    }
}

/// 健康检查循环入口
pub async fn run(storage: Arc<dyn Storage>) {
    let config = AppConfig::get();

    let client = match JudgeClient::new() {
        Ok(client) => client,
        Err(e) => {
            warn!("Failed to build judge client, health checks disabled: {}", e);
            return;
        }
    };

    let mut interval =
        tokio::time::interval(Duration::from_secs(config.judge.health_interval_secs));
    interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Delay);

    info!(
        "Judge health check loop started (interval: {}s)",
        config.judge.health_interval_secs
    );

    loop {
        interval.tick().await;
        check_all(&storage, &client).await;
    }
}
