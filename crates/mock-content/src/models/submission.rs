//! 表单提交模型
//!
//! 联系表单与订阅请求是唯一会做输入校验的操作。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::SubmissionError;

/// 留言最短字符数
pub const MIN_MESSAGE_LENGTH: usize = 10;

/// 联系表单
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub phone: Option<String>,
}

impl ContactForm {
    /// 校验表单
    ///
    /// 先校验邮箱，再校验留言长度
    pub fn validate(&self) -> Result<(), SubmissionError> {
        validate_email(&self.email)?;
        if self.message.chars().count() < MIN_MESSAGE_LENGTH {
            return Err(SubmissionError::MessageTooShort);
        }
        Ok(())
    }
}

/// 邮箱只要求包含 `@`
pub fn validate_email(email: &str) -> Result<(), SubmissionError> {
    if email.contains('@') {
        Ok(())
    } else {
        Err(SubmissionError::InvalidEmail)
    }
}

/// 联系表单提交回执
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub success: bool,
    pub message: String,
    pub id: String,
}

/// 已受理的联系表单
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub id: String,
    pub form: ContactForm,
    pub received_at: DateTime<Utc>,
}

/// 订阅回执
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsletterReceipt {
    pub success: bool,
    pub message: String,
}

/// 订阅记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsletterSubscription {
    pub email: String,
    pub subscribed_at: DateTime<Utc>,
}
