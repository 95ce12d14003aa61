//! 表单提交错误
//!
//! 内容生成与查询都是全函数，只有表单提交会失败。

use thiserror::Error;

/// 表单提交校验错误
///
/// 错误信息直接展示给用户
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SubmissionError {
    #[error("Invalid email address")]
    InvalidEmail,

    #[error("Message is too short")]
    MessageTooShort,
}

impl SubmissionError {
    /// 获取错误码
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::MessageTooShort => "MESSAGE_TOO_SHORT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_and_codes() {
        assert_eq!(SubmissionError::InvalidEmail.to_string(), "Invalid email address");
        assert_eq!(SubmissionError::InvalidEmail.code(), "INVALID_EMAIL");
        assert_eq!(SubmissionError::MessageTooShort.to_string(), "Message is too short");
        assert_eq!(SubmissionError::MessageTooShort.code(), "MESSAGE_TOO_SHORT");
    }
}
