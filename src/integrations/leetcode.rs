//! LeetCode 最近通过提交轮询
//!
//! 走公开 GraphQL 接口 `POST {base}/graphql`，
//! 查询 `recentAcSubmissionList(username, limit)`，
//! 返回的都是已通过（Accepted）的提交。

use serde::Deserialize;
use serde_json::json;

use crate::config::AppConfig;
use crate::errors::{CodeTrackError, Result};

const RECENT_AC_QUERY: &str = r#"
query recentAcSubmissions($username: String!, $limit: Int!) {
  recentAcSubmissionList(username: $username, limit: $limit) {
    id
    title
    titleSlug
    timestamp
    lang
  }
}
"#;

#[derive(Debug, Clone, Deserialize)]
pub struct RecentAcSubmission {
    pub id: String,
    pub title: String,
    #[serde(rename = "titleSlug")]
    pub title_slug: String,
    /// Unix 时间戳（秒），接口返回字符串
    pub timestamp: String,
    #[serde(default)]
    pub lang: Option<String>,
}

impl RecentAcSubmission {
    pub fn submitted_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.timestamp
            .parse::<i64>()
            .ok()
            .and_then(|ts| chrono::DateTime::from_timestamp(ts, 0))
            .unwrap_or_else(chrono::Utc::now)
    }
}

#[derive(Debug, Deserialize)]
struct GraphqlData {
    #[serde(rename = "recentAcSubmissionList", default)]
    recent_ac_submission_list: Option<Vec<RecentAcSubmission>>,
}

#[derive(Debug, Deserialize)]
struct GraphqlResponse {
    data: Option<GraphqlData>,
}

pub struct LeetcodeClient {
    http: reqwest::Client,
    base_url: String,
}

impl LeetcodeClient {
    pub fn new() -> Result<Self> {
        let config = AppConfig::get();
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.sync.request_timeout))
            .user_agent(concat!("codetrack/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CodeTrackError::platform_fetch(format!("构建 HTTP 客户端失败: {e}")))?;

        Ok(Self {
            http,
            base_url: config.sync.leetcode_base.trim_end_matches('/').to_string(),
        })
    }

    /// 拉取某账号最近通过的提交
    pub async fn fetch_recent_accepted(
        &self,
        username: &str,
        limit: u32,
    ) -> Result<Vec<RecentAcSubmission>> {
        let url = format!("{}/graphql", self.base_url);
        let payload = json!({
            "query": RECENT_AC_QUERY,
            "variables": { "username": username, "limit": limit },
        });

        let response = self.http.post(&url).json(&payload).send().await?;

        if !response.status().is_success() {
            return Err(CodeTrackError::platform_fetch(format!(
                "LeetCode 返回 {} for {username}",
                response.status()
            )));
        }

        let body = response.text().await?;
        parse_recent_accepted(&body)
    }
}

/// 解析 GraphQL 响应体
pub fn parse_recent_accepted(body: &str) -> Result<Vec<RecentAcSubmission>> {
    let parsed: GraphqlResponse = serde_json::from_str(body)
        .map_err(|e| CodeTrackError::platform_fetch(format!("LeetCode 响应解析失败: {e}")))?;

    Ok(parsed
        .data
        .and_then(|d| d.recent_ac_submission_list)
        .unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "data": {
            "recentAcSubmissionList": [
                {
                    "id": "1412563889",
                    "title": "Two Sum",
                    "titleSlug": "two-sum",
                    "timestamp": "1751234567",
                    "lang": "rust"
                },
                {
                    "id": "1412563888",
                    "title": "Add Two Numbers",
                    "titleSlug": "add-two-numbers",
                    "timestamp": "1751230000"
                }
            ]
        }
    }"#;

    #[test]
    fn test_parse_recent_accepted() {
        let subs = parse_recent_accepted(SAMPLE).unwrap();
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].title_slug, "two-sum");
        assert_eq!(subs[0].lang.as_deref(), Some("rust"));
        assert!(subs[1].lang.is_none());
    }

    #[test]
    fn test_parse_null_data() {
        // 用户不存在时接口返回 data: null
        let subs = parse_recent_accepted(r#"{"data": null}"#).unwrap();
        assert!(subs.is_empty());
    }

    #[test]
    fn test_parse_missing_list() {
        let subs = parse_recent_accepted(r#"{"data": {}}"#).unwrap();
        assert!(subs.is_empty());
    }

    #[test]
    fn test_parse_garbage_is_error() {
        assert!(parse_recent_accepted("Service Unavailable").is_err());
    }

    #[test]
    fn test_submitted_at_from_unix_timestamp() {
        let subs = parse_recent_accepted(SAMPLE).unwrap();
        assert_eq!(subs[0].submitted_at().timestamp(), 1_751_234_567);
    }
}
