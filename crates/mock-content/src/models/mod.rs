//! 模拟内容数据模型
//!
//! 包含博客文章、团队成员、图库、客户评价、服务、FAQ、客户等内容结构，
//! 以及每种内容的字段覆盖（override）结构。

use chrono::{DateTime, Utc};

/// 将覆盖结构中出现的字段写入目标记录
///
/// 每个字段都是 `Option`，`Some` 表示覆盖生成值。
macro_rules! apply_overrides {
    ($overrides:expr, $target:expr; $($field:ident),+ $(,)?) => {
        $(
            if let Some(value) = $overrides.$field {
                $target.$field = value;
            }
        )+
    };
}

pub mod blog;
pub mod client;
pub mod company;
pub mod demo;
pub mod faq;
pub mod gallery;
pub mod service;
pub mod submission;
pub mod team;
pub mod testimonial;

pub use blog::{BlogPost, BlogPostOverrides, PostAuthor};
pub use client::{Client, ClientOverrides};
pub use company::{
    Address, BusinessHours, ClosedMarker, CompanyStats, ContactInfo, DayHours, SocialMedia,
};
pub use demo::{DemoAuthor, DemoPost, DemoPostOverrides};
pub use faq::{Faq, FaqOverrides};
pub use gallery::{GalleryItem, GalleryItemOverrides};
pub use service::{BillingPeriod, Service, ServiceOverrides, ServicePrice};
pub use submission::{
    ContactForm, ContactReceipt, ContactSubmission, NewsletterReceipt, NewsletterSubscription,
};
pub use team::{TeamMember, TeamMemberOverrides};
pub use testimonial::{Testimonial, TestimonialAuthor, TestimonialOverrides};

/// 内容记录
///
/// 查询引擎通过该 trait 访问各类内容的公共属性（分类、标签、时间戳等），
/// 使过滤、排序、推荐逻辑可以跨内容类型复用。
pub trait ContentRecord: Clone + Send + Sync + 'static {
    /// 内容类型名称，用于日志和指标标签
    const KIND: &'static str;

    /// 记录唯一 ID
    fn id(&self) -> &str;

    /// 业务主键，默认与 ID 相同（博客文章使用 slug）
    fn key(&self) -> &str {
        self.id()
    }

    /// 标题，搜索时标题命中的记录排在前面
    fn title(&self) -> Option<&str> {
        None
    }

    /// 分类（团队成员为部门）
    fn category(&self) -> Option<&str> {
        None
    }

    /// 是否为精选内容
    fn is_featured(&self) -> bool {
        false
    }

    /// 创建/发布时间
    fn timestamp(&self) -> Option<DateTime<Utc>> {
        None
    }

    fn tags(&self) -> &[String] {
        &[]
    }

    /// 参与全文搜索的字段
    fn search_fields(&self) -> Vec<&str> {
        Vec::new()
    }
}
