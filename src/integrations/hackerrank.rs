//! HackerRank 最近通过题目轮询
//!
//! 接口：`GET {base}/rest/hackers/{handle}/recent_challenges?limit=N`
//! 返回 `{"models": [{"ch_slug": ..., "name": ..., "url": ..., "created_at": ...}]}`。
//! 该接口只列出已解出的题目，没有判定状态字段。

use serde::Deserialize;

use crate::config::AppConfig;
use crate::errors::{CodeTrackError, Result};

#[derive(Debug, Clone, Deserialize)]
pub struct RecentChallenge {
    #[serde(default)]
    pub ch_slug: Option<String>,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    /// ISO 8601 时间串，如 "2025-11-03T14:21:00Z"
    pub created_at: String,
}

impl RecentChallenge {
    /// 解析提交时间；解析失败回退为当前时间
    pub fn submitted_at(&self) -> chrono::DateTime<chrono::Utc> {
        chrono::DateTime::parse_from_rfc3339(&self.created_at)
            .map(|dt| dt.with_timezone(&chrono::Utc))
            .unwrap_or_else(|_| chrono::Utc::now())
    }

    /// 去重键：slug（缺失时用题名）+ 时间戳
    pub fn external_key(&self) -> String {
        let ident = self.ch_slug.as_deref().unwrap_or(&self.name);
        format!("{}@{}", ident, self.created_at)
    }
}

#[derive(Debug, Deserialize)]
struct RecentChallengesResponse {
    #[serde(default)]
    models: Vec<RecentChallenge>,
}

pub struct HackerrankClient {
    http: reqwest::Client,
    base_url: String,
}

impl HackerrankClient {
    pub fn new() -> Result<Self> {
        let config = AppConfig::get();
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.sync.request_timeout))
            .user_agent(concat!("codetrack/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CodeTrackError::platform_fetch(format!("构建 HTTP 客户端失败: {e}")))?;

        Ok(Self {
            http,
            base_url: config.sync.hackerrank_base.trim_end_matches('/').to_string(),
        })
    }

    /// 拉取某账号最近解出的题目
    pub async fn fetch_recent_challenges(
        &self,
        handle: &str,
        limit: u32,
    ) -> Result<Vec<RecentChallenge>> {
        let url = format!(
            "{}/rest/hackers/{}/recent_challenges?limit={}",
            self.base_url, handle, limit
        );

        let response = self.http.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(CodeTrackError::platform_fetch(format!(
                "HackerRank 返回 {} for {handle}",
                response.status()
            )));
        }

        let body = response.text().await?;
        parse_recent_challenges(&body)
    }
}

/// 解析 recent_challenges 响应体
pub fn parse_recent_challenges(body: &str) -> Result<Vec<RecentChallenge>> {
    let parsed: RecentChallengesResponse = serde_json::from_str(body)
        .map_err(|e| CodeTrackError::platform_fetch(format!("HackerRank 响应解析失败: {e}")))?;
    Ok(parsed.models)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "models": [
            {
                "ch_slug": "sock-merchant",
                "name": "Sock Merchant",
                "url": "/challenges/sock-merchant",
                "created_at": "2025-11-03T14:21:00Z"
            },
            {
                "name": "Counting Valleys",
                "created_at": "2025-11-02T09:00:00Z"
            }
        ]
    }"#;

    #[test]
    fn test_parse_recent_challenges() {
        let challenges = parse_recent_challenges(SAMPLE).unwrap();
        assert_eq!(challenges.len(), 2);
        assert_eq!(challenges[0].ch_slug.as_deref(), Some("sock-merchant"));
        assert_eq!(challenges[1].name, "Counting Valleys");
        assert!(challenges[1].ch_slug.is_none());
    }

    #[test]
    fn test_parse_empty_models() {
        let challenges = parse_recent_challenges(r#"{"models": []}"#).unwrap();
        assert!(challenges.is_empty());
    }

    #[test]
    fn test_parse_missing_models_field() {
        let challenges = parse_recent_challenges("{}").unwrap();
        assert!(challenges.is_empty());
    }

    #[test]
    fn test_parse_garbage_is_error() {
        assert!(parse_recent_challenges("<html>rate limited</html>").is_err());
    }

    #[test]
    fn test_external_key_prefers_slug() {
        let challenges = parse_recent_challenges(SAMPLE).unwrap();
        assert_eq!(
            challenges[0].external_key(),
            "sock-merchant@2025-11-03T14:21:00Z"
        );
        assert_eq!(
            challenges[1].external_key(),
            "Counting Valleys@2025-11-02T09:00:00Z"
        );
    }

    #[test]
    fn test_submitted_at_parses_rfc3339() {
        let challenges = parse_recent_challenges(SAMPLE).unwrap();
        assert_eq!(
            challenges[0].submitted_at().timestamp(),
            chrono::DateTime::parse_from_rfc3339("2025-11-03T14:21:00Z")
                .unwrap()
                .timestamp()
        );
    }
}
