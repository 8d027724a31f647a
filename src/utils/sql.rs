/// 转义 LIKE 模式中的通配符，避免用户输入的 % 和 _ 参与匹配
pub fn escape_like_pattern(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escapes_wildcards() {
        assert_eq!(escape_like_pattern("100%"), "100\\%");
        assert_eq!(escape_like_pattern("two_sum"), "two\\_sum");
        assert_eq!(escape_like_pattern("back\\slash"), "back\\\\slash");
    }

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape_like_pattern("binary tree"), "binary tree");
    }
}
