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
macro_rules! define_pickupsystem_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum PickupSystemError {
            $($variant(String),)*
        }

        impl PickupSystemError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(PickupSystemError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(PickupSystemError::$variant(_) => $type_name,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(PickupSystemError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl PickupSystemError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        PickupSystemError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_pickupsystem_errors! {
    StorageOperation("E001", "Storage Operation Error"),
    FileOperation("E002", "File Operation Error"),
    Validation("E003", "Validation Error"),
    NotFound("E004", "Resource Not Found"),
    Serialization("E005", "Serialization Error"),
}

impl PickupSystemError {
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

impl fmt::Display for PickupSystemError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for PickupSystemError {}

// 为常见的错误类型实现 From trait
impl From<std::io::Error> for PickupSystemError {
    fn from(err: std::io::Error) -> Self {
        PickupSystemError::FileOperation(err.to_string())
    }
}

impl From<serde_json::Error> for PickupSystemError {
    fn from(err: serde_json::Error) -> Self {
        PickupSystemError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, PickupSystemError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(PickupSystemError::storage_operation("test").code(), "E001");
        assert_eq!(PickupSystemError::validation("test").code(), "E003");
        assert_eq!(PickupSystemError::not_found("test").code(), "E004");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            PickupSystemError::storage_operation("test").error_type(),
            "Storage Operation Error"
        );
        assert_eq!(
            PickupSystemError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_error_message() {
        let err = PickupSystemError::validation("Invalid input");
        assert_eq!(err.message(), "Invalid input");
    }

    #[test]
    fn test_format_simple() {
        let err = PickupSystemError::not_found("No such code");
        let formatted = err.format_simple();
        assert!(formatted.contains("Resource Not Found"));
        assert!(formatted.contains("No such code"));
    }
}
