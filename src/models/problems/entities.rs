use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 外部练习平台
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/problem.ts")]
pub enum Platform {
    Hackerrank,
    Leetcode,
}

impl Platform {
    pub const HACKERRANK: &'static str = "hackerrank";
    pub const LEETCODE: &'static str = "leetcode";
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Platform::Hackerrank => write!(f, "{}", Platform::HACKERRANK),
            Platform::Leetcode => write!(f, "{}", Platform::LEETCODE),
        }
    }
}

impl std::str::FromStr for Platform {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            Platform::HACKERRANK => Ok(Platform::Hackerrank),
            Platform::LEETCODE => Ok(Platform::Leetcode),
            _ => Err(format!("Invalid platform: {s}")),
        }
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的平台: '{s}'. 支持的平台: hackerrank, leetcode"
            ))
        })
    }
}

// 题目实体（外部平台题目池）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/problem.ts")]
pub struct Problem {
    pub id: i64,
    pub platform: Platform,
    // 平台侧题目标识（如 leetcode 的 titleSlug）
    pub slug: String,
    pub title: String,
    pub url: Option<String>,
    pub difficulty: Option<String>,
    pub created_by: i64,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
