use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 会话状态
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/test_session.ts")]
pub enum SessionStatus {
    Active,    // 进行中
    Submitted, // 已交卷
    Expired,   // 超时作废
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionStatus::Active => write!(f, "active"),
            SessionStatus::Submitted => write!(f, "submitted"),
            SessionStatus::Expired => write!(f, "expired"),
        }
    }
}

impl std::str::FromStr for SessionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(SessionStatus::Active),
            "submitted" => Ok(SessionStatus::Submitted),
            "expired" => Ok(SessionStatus::Expired),
            _ => Err(format!("Invalid session status: {s}")),
        }
    }
}

impl<'de> Deserialize<'de> for SessionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// 违规类型
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/test_session.ts")]
pub enum PenaltyKind {
    TabSwitch,      // 切出标签页
    FullscreenExit, // 退出全屏
    Paste,          // 粘贴外部内容
    Other,
}

impl std::fmt::Display for PenaltyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PenaltyKind::TabSwitch => write!(f, "tab_switch"),
            PenaltyKind::FullscreenExit => write!(f, "fullscreen_exit"),
            PenaltyKind::Paste => write!(f, "paste"),
            PenaltyKind::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for PenaltyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "tab_switch" => Ok(PenaltyKind::TabSwitch),
            "fullscreen_exit" => Ok(PenaltyKind::FullscreenExit),
            "paste" => Ok(PenaltyKind::Paste),
            "other" => Ok(PenaltyKind::Other),
            _ => Err(format!("Invalid penalty kind: {s}")),
        }
    }
}

impl<'de> Deserialize<'de> for PenaltyKind {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// 评测判定结果
#[derive(Debug, Clone, Copy, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/test_session.ts")]
pub enum TestVerdict {
    Pending,      // 尚未派发给评测机
    Queued,       // 已派发，等待结果
    Accepted,
    WrongAnswer,
    TimeLimit,
    MemoryLimit,
    RuntimeError,
    CompileError,
    JudgeError,
}

impl TestVerdict {
    /// 是否已有最终结果
    pub fn is_final(&self) -> bool {
        !matches!(self, TestVerdict::Pending | TestVerdict::Queued)
    }
}

impl std::fmt::Display for TestVerdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TestVerdict::Pending => "pending",
            TestVerdict::Queued => "queued",
            TestVerdict::Accepted => "accepted",
            TestVerdict::WrongAnswer => "wrong_answer",
            TestVerdict::TimeLimit => "time_limit",
            TestVerdict::MemoryLimit => "memory_limit",
            TestVerdict::RuntimeError => "runtime_error",
            TestVerdict::CompileError => "compile_error",
            TestVerdict::JudgeError => "judge_error",
        };
        write!(f, "{s}")
    }
}

impl std::str::FromStr for TestVerdict {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TestVerdict::Pending),
            "queued" => Ok(TestVerdict::Queued),
            "accepted" => Ok(TestVerdict::Accepted),
            "wrong_answer" => Ok(TestVerdict::WrongAnswer),
            "time_limit" => Ok(TestVerdict::TimeLimit),
            "memory_limit" => Ok(TestVerdict::MemoryLimit),
            "runtime_error" => Ok(TestVerdict::RuntimeError),
            "compile_error" => Ok(TestVerdict::CompileError),
            "judge_error" => Ok(TestVerdict::JudgeError),
            _ => Err(format!("Invalid test verdict: {s}")),
        }
    }
}

impl<'de> Deserialize<'de> for TestVerdict {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// 测试会话
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test_session.ts")]
pub struct TestSession {
    pub id: i64,
    pub test_id: i64,
    pub user_id: i64,
    pub started_at: chrono::DateTime<chrono::Utc>,
    // started_at + duration，且不超过测试窗口结束时间
    pub deadline_at: chrono::DateTime<chrono::Utc>,
    pub finished_at: Option<chrono::DateTime<chrono::Utc>>,
    pub status: SessionStatus,
    pub score: f64,
}

impl TestSession {
    /// 会话是否已过答题截止时刻
    pub fn is_past_deadline(&self, at: chrono::DateTime<chrono::Utc>) -> bool {
        at >= self.deadline_at
    }
}

// 违规记录
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test_session.ts")]
pub struct TestPenalty {
    pub id: i64,
    pub session_id: i64,
    pub kind: PenaltyKind,
    pub points: f64,
    pub note: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 测试代码提交
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/test_session.ts")]
pub struct TestSubmission {
    pub id: i64,
    pub session_id: i64,
    pub test_problem_id: i64,
    pub language_id: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_code: Option<String>,
    pub verdict: TestVerdict,
    pub exec_time_ms: Option<i32>,
    pub memory_kb: Option<i32>,
    pub score: f64,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub judged_at: Option<chrono::DateTime<chrono::Utc>>,
}
