//! 抓取题名与题库的启发式匹配
//!
//! 外部平台返回的题名格式不统一：有的给 slug（"two-sum"），
//! 有的给展示名（"Two Sum"），偶尔还带编号前缀（"1. Two Sum"）。
//! 归一化后做等值比较：小写 + 去掉所有非字母数字字符。
//! 只认完全相等，不做子串匹配，宁可漏配等下一轮补，也不错配。

use crate::models::problems::entities::Problem;

/// 归一化：小写并去掉所有非字母数字字符
pub fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// 判断一个抓取条目是否匹配某道题
///
/// `scraped_slug` 是平台给的标识（可能为空），`scraped_name` 是展示名。
/// 两者任一归一化后与题目的 slug 或标题相等即视为匹配。
pub fn matches_problem(problem: &Problem, scraped_slug: Option<&str>, scraped_name: &str) -> bool {
    let problem_slug = normalize(&problem.slug);
    let problem_title = normalize(&problem.title);

    let candidates = [
        scraped_slug.map(normalize),
        Some(normalize(scraped_name)),
        Some(normalize(strip_ordinal_prefix(scraped_name))),
    ];

    candidates.into_iter().flatten().any(|candidate| {
        !candidate.is_empty() && (candidate == problem_slug || candidate == problem_title)
    })
}

/// 在题库中查找匹配的题目
pub fn find_matching_problem<'a>(
    problems: &'a [Problem],
    scraped_slug: Option<&str>,
    scraped_name: &str,
) -> Option<&'a Problem> {
    problems
        .iter()
        .find(|p| matches_problem(p, scraped_slug, scraped_name))
}

/// 去掉 LeetCode 风格的编号前缀（"1. Two Sum" -> "Two Sum"）
fn strip_ordinal_prefix(name: &str) -> &str {
    let trimmed = name.trim_start();
    let Some(dot) = trimmed.find('.') else {
        return name;
    };
    let (head, tail) = trimmed.split_at(dot);
    if !head.is_empty() && head.chars().all(|c| c.is_ascii_digit()) {
        tail[1..].trim_start()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::problems::entities::Platform;

    fn problem(slug: &str, title: &str) -> Problem {
        Problem {
            id: 1,
            platform: Platform::Leetcode,
            slug: slug.to_string(),
            title: title.to_string(),
            url: None,
            difficulty: None,
            created_by: 1,
            created_at: chrono::Utc::now(),
            updated_at: chrono::Utc::now(),
        }
    }

    #[test]
    fn test_normalize() {
        assert_eq!(normalize("Two Sum"), "twosum");
        assert_eq!(normalize("two-sum"), "twosum");
        assert_eq!(normalize("Sock Merchant!"), "sockmerchant");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_matches_by_slug() {
        let p = problem("two-sum", "Two Sum");
        assert!(matches_problem(&p, Some("two-sum"), "whatever"));
    }

    #[test]
    fn test_matches_by_display_name() {
        let p = problem("sock-merchant", "Sock Merchant");
        assert!(matches_problem(&p, None, "Sock Merchant"));
    }

    #[test]
    fn test_matches_with_ordinal_prefix() {
        let p = problem("two-sum", "Two Sum");
        assert!(matches_problem(&p, None, "1. Two Sum"));
    }

    #[test]
    fn test_no_substring_match() {
        // "Two Sum II" 不应匹配 "Two Sum"
        let p = problem("two-sum", "Two Sum");
        assert!(!matches_problem(&p, Some("two-sum-ii"), "Two Sum II"));
    }

    #[test]
    fn test_empty_never_matches() {
        let p = problem("two-sum", "Two Sum");
        assert!(!matches_problem(&p, Some(""), ""));
    }

    #[test]
    fn test_find_matching_problem() {
        let problems = vec![
            problem("two-sum", "Two Sum"),
            problem("add-two-numbers", "Add Two Numbers"),
        ];
        let found = find_matching_problem(&problems, Some("add-two-numbers"), "Add Two Numbers");
        assert_eq!(found.map(|p| p.slug.as_str()), Some("add-two-numbers"));
        assert!(find_matching_problem(&problems, None, "Median of Two Sorted Arrays").is_none());
    }
}
