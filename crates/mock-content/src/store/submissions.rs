//! 表单提交存储
//!
//! 使用 DashMap 保存已受理的联系表单和订阅邮箱，支持并发写入。

use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::Arc;

use crate::models::{ContactForm, ContactSubmission, NewsletterSubscription};

/// 表单提交存储
///
/// 联系表单按回执 ID 保存，订阅按小写邮箱保存。克隆共享同一份数据。
#[derive(Debug, Clone, Default)]
pub struct SubmissionStore {
    contacts: Arc<DashMap<String, ContactSubmission>>,
    subscribers: Arc<DashMap<String, NewsletterSubscription>>,
}

impl SubmissionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 保存已通过校验的联系表单
    pub fn record_contact(&self, id: &str, form: ContactForm) -> ContactSubmission {
        let submission = ContactSubmission {
            id: id.to_string(),
            form,
            received_at: Utc::now(),
        };
        self.contacts.insert(id.to_string(), submission.clone());
        submission
    }

    pub fn contact(&self, id: &str) -> Option<ContactSubmission> {
        self.contacts.get(id).map(|entry| entry.value().clone())
    }

    pub fn contact_count(&self) -> usize {
        self.contacts.len()
    }

    /// 订阅邮箱
    ///
    /// 重复订阅保留首次订阅记录，返回 `false`
    pub fn subscribe(&self, email: &str) -> bool {
        match self.subscribers.entry(email.trim().to_lowercase()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                let email = entry.key().clone();
                entry.insert(NewsletterSubscription {
                    email,
                    subscribed_at: Utc::now(),
                });
                true
            }
        }
    }

    pub fn is_subscribed(&self, email: &str) -> bool {
        self.subscribers.contains_key(&email.trim().to_lowercase())
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
