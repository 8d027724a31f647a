//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码和类型名称。

use std::fmt;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_codetrack_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum CodeTrackError {
            $($variant(String),)*
        }

        impl CodeTrackError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(CodeTrackError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(CodeTrackError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(CodeTrackError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl CodeTrackError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        CodeTrackError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_codetrack_errors! {
    CacheConnection("E001", "Cache Connection Error"),
    CachePluginNotFound("E002", "Cache Plugin Not Found"),
    DatabaseConfig("E003", "Database Configuration Error"),
    DatabaseConnection("E004", "Database Connection Error"),
    DatabaseOperation("E005", "Database Operation Error"),
    Validation("E006", "Validation Error"),
    NotFound("E007", "Resource Not Found"),
    Serialization("E008", "Serialization Error"),
    StoragePluginNotFound("E009", "Storage Plugin Not Found"),
    DateParse("E010", "Date Parse Error"),
    Authentication("E011", "Authentication Error"),
    Authorization("E012", "Authorization Error"),
    JudgeUnavailable("E013", "Judge Unavailable Error"),
    JudgeProtocol("E014", "Judge Protocol Error"),
    PlatformFetch("E015", "Platform Fetch Error"),
}

impl CodeTrackError {
    /// 格式化为彩色输出（用于开发环境）
    #[cfg(debug_assertions)]
    pub fn format_colored(&self) -> String {
        format!(
            "\x1b[1;31m[ERROR]\x1b[0m \x1b[33m{}\x1b[0m \x1b[31m{}\x1b[0m\n  {}",
            self.code(),
            self.error_type(),
            self.message()
        )
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for CodeTrackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CodeTrackError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for CodeTrackError {
    fn from(err: sea_orm::DbErr) -> Self {
        CodeTrackError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for CodeTrackError {
    fn from(err: serde_json::Error) -> Self {
        CodeTrackError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for CodeTrackError {
    fn from(err: chrono::ParseError) -> Self {
        CodeTrackError::DateParse(err.to_string())
    }
}

impl From<reqwest::Error> for CodeTrackError {
    fn from(err: reqwest::Error) -> Self {
        CodeTrackError::PlatformFetch(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CodeTrackError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(CodeTrackError::cache_connection("test").code(), "E001");
        assert_eq!(CodeTrackError::database_config("test").code(), "E003");
        assert_eq!(CodeTrackError::validation("test").code(), "E006");
        assert_eq!(CodeTrackError::judge_unavailable("test").code(), "E013");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            CodeTrackError::cache_connection("test").error_type(),
            "Cache Connection Error"
        );
        assert_eq!(
            CodeTrackError::platform_fetch("test").error_type(),
            "Platform Fetch Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = CodeTrackError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = CodeTrackError::judge_protocol("missing token");
        let formatted = err.format_simple();
        assert!(formatted.contains("Judge Protocol Error"));
        assert!(formatted.contains("missing token"));
    }
}
