//! 出站集成
//!
//! - `judge`: Judge0 兼容评测服务客户端
//! - `hackerrank`: HackerRank 最近通过题目轮询
//! - `leetcode`: LeetCode 最近通过提交轮询（GraphQL）
//! - `matcher`: 抓取题名与题库 slug 的启发式匹配

pub mod hackerrank;
pub mod judge;
pub mod leetcode;
pub mod matcher;
