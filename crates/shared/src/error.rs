//! 统一错误处理模块
//!
//! 定义内容服务共享的基础设施错误类型，使用 thiserror 提供良好的错误信息。
//! 内容生成与查询本身不会失败，这里只覆盖配置、I/O 和序列化等外围错误。

use thiserror::Error;

/// 系统错误类型
#[derive(Debug, Error)]
pub enum ContentError {
    // ==================== 配置错误 ====================
    #[error("配置加载失败: {0}")]
    Config(#[from] config::ConfigError),

    // ==================== I/O 错误 ====================
    #[error("I/O 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("序列化失败: {0}")]
    Serialization(#[from] serde_json::Error),

    // ==================== 验证错误 ====================
    #[error("无效的参数: {field} - {message}")]
    InvalidArgument { field: String, message: String },
}

/// 错误结果类型别名
pub type Result<T> = std::result::Result<T, ContentError>;

impl ContentError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::InvalidArgument { .. } => "INVALID_ARGUMENT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code() {
        let err = ContentError::InvalidArgument {
            field: "latency_scale".to_string(),
            message: "不能为负数".to_string(),
        };
        assert_eq!(err.code(), "INVALID_ARGUMENT");
        assert_eq!(err.to_string(), "无效的参数: latency_scale - 不能为负数");
    }

    #[test]
    fn test_from_serde_error() {
        let parse_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ContentError = parse_err.into();
        assert_eq!(err.code(), "SERIALIZATION_ERROR");
    }
}
