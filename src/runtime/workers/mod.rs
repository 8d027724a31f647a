//! 后台任务
//!
//! 与 HTTP 服务并行运行的三个循环：
//! - `submission_sync`: 外部平台提交轮询与对账
//! - `judge_poll`: 评测结果回收
//! - `judge_health`: 评测实例健康检查
//!
//! 任务随主进程退出，循环内部的失败只记日志不终止循环。

pub mod judge_health;
pub mod judge_poll;
pub mod submission_sync;

use crate::config::AppConfig;
use crate::storage::Storage;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::warn;

/// 启动全部后台任务
pub fn spawn_all(storage: Arc<dyn Storage>) -> Vec<JoinHandle<()>> {
    let config = AppConfig::get();
    let mut handles = Vec::new();

    if config.sync.enabled {
        let sync_storage = storage.clone();
        handles.push(tokio::spawn(async move {
            submission_sync::run(sync_storage).await;
        }));
    } else {
        warn!("Submission sync is disabled by configuration");
    }

    let poll_storage = storage.clone();
    handles.push(tokio::spawn(async move {
        judge_poll::run(poll_storage).await;
    }));

    let health_storage = storage;
    handles.push(tokio::spawn(async move {
        judge_health::run(health_storage).await;
    }));

    handles
}
