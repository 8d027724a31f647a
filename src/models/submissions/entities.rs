use crate::models::problems::entities::Platform;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 外部提交判定结果
//
// recent 接口只返回已通过的提交，所以目前对账写入的都是 Accepted；
// Unknown 留给未来接入带判定状态的提交源。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum ExternalVerdict {
    Accepted,
    Unknown,
}

impl std::fmt::Display for ExternalVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExternalVerdict::Accepted => write!(f, "accepted"),
            ExternalVerdict::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::str::FromStr for ExternalVerdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accepted" => Ok(ExternalVerdict::Accepted),
            "unknown" => Ok(ExternalVerdict::Unknown),
            _ => Err(format!("Invalid verdict: {s}")),
        }
    }
}

impl<'de> Deserialize<'de> for ExternalVerdict {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// 对账后的外部提交记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: i64,
    pub user_id: i64,
    // 匹配到的题目；未匹配上时为 None，等待下一轮对账
    pub problem_id: Option<i64>,
    pub platform: Platform,
    // 平台侧去重键（LeetCode 提交 ID / HackerRank slug+时间戳）
    pub external_key: String,
    // 抓取到的原始题名
    pub challenge_name: String,
    pub language: Option<String>,
    pub verdict: ExternalVerdict,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub synced_at: chrono::DateTime<chrono::Utc>,
}
